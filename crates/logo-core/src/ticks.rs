// File: crates/logo-core/src/ticks.rs
// Summary: Level-of-detail choice and tick/label placement for column and height axes.

use crate::types::{COMPACT_SPARSE_LABEL_ZOOM, DETAIL_MIN_COLUMN_PX, DETAIL_SPARSE_LABEL_ZOOM};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lod {
    /// Glyph stacks, per-column labels.
    Detailed,
    /// Colored bars, sparse labels.
    Compact,
}

impl Lod {
    pub fn for_column_width(column_width_px: f32) -> Self {
        if column_width_px > DETAIL_MIN_COLUMN_PX { Lod::Detailed } else { Lod::Compact }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAlign {
    Center,
    /// Label ends at the column's right edge.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickLabel {
    pub column: usize,
    pub align: LabelAlign,
}

/// Distance between labelled columns.
pub fn label_step(lod: Lod, zoom: f32) -> usize {
    match lod {
        Lod::Detailed if zoom < DETAIL_SPARSE_LABEL_ZOOM => 5,
        Lod::Detailed => 1,
        Lod::Compact if zoom < COMPACT_SPARSE_LABEL_ZOOM => 20,
        Lod::Compact => 10,
    }
}

/// Ticks for columns `first..=last`; labelled columns are multiples of the step.
pub fn column_ticks(first: usize, last: usize, lod: Lod, zoom: f32) -> Vec<TickLabel> {
    let step = label_step(lod, zoom);
    let align = if lod == Lod::Detailed && step > 1 { LabelAlign::Right } else { LabelAlign::Center };
    (first..=last)
        .filter(|c| step == 1 || c % step == 0)
        .map(|column| TickLabel { column, align })
        .collect()
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Height axis ticks from 0 to `max_height`, roughly one per unit (at least 2, at most 11).
pub fn height_ticks(max_height: f64) -> Vec<f64> {
    let steps = (max_height.ceil() as usize + 1).clamp(2, 11);
    linspace(0.0, max_height, steps)
}
