// File: crates/logo-core/src/column.rs
// Summary: Pure per-column geometry: stacked segments above the baseline and indicator bands below it.

use skia_safe as skia;

use crate::data::{Column, LogoData};
use crate::palette::{insert_length_band, insert_prob_band, occupancy_band};
use crate::types::{TileLayout, NOISE_FLOOR};

/// One stacked residue; `y_top` grows downward like every other pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub symbol: char,
    pub value: f64,
    pub y_top: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorKind {
    Occupancy,
    InsertProb,
    InsertLength,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorBar {
    pub kind: IndicatorKind,
    pub row: u32,
    pub value: f64,
    pub color: skia::Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnLayout {
    pub column: usize,
    /// Flagged columns get a neutral block instead of `segments`.
    pub masked: bool,
    /// Bottom to top.
    pub segments: Vec<Segment>,
    pub indicators: Vec<IndicatorBar>,
}

/// Stack `column` from `baseline` upward, smallest first so the tallest ends on top.
/// Entries at or under the noise floor are dropped; the total never exceeds `plot_height`.
pub fn stack_segments(column: &Column, max_height: f64, plot_height: f32, baseline: f32) -> Vec<Segment> {
    let mut entries: Vec<(char, f64)> = column
        .entries
        .iter()
        .copied()
        .filter(|&(_, v)| v > NOISE_FLOOR)
        .collect();
    entries.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut segments = Vec::with_capacity(entries.len());
    let mut used = 0.0f32;
    for (symbol, value) in entries {
        let remaining = plot_height - used;
        if remaining <= 0.0 {
            break;
        }
        let height = ((plot_height as f64 * (value / max_height)) as f32).min(remaining);
        if height <= 0.0 {
            continue;
        }
        let y_top = baseline - used - height;
        segments.push(Segment { symbol, value, y_top, height });
        used += height;
    }
    segments
}

/// Occupancy band, then insert probability and length bands when enabled.
pub fn indicator_bars(data: &LogoData, col: usize, show_inserts: bool) -> Vec<IndicatorBar> {
    let mut bars = Vec::with_capacity(3);
    if let Some(v) = data.delete_prob(col) {
        bars.push(IndicatorBar { kind: IndicatorKind::Occupancy, row: 0, value: v, color: occupancy_band(v) });
    }
    if show_inserts {
        if let (Some(p), Some(l)) = (data.insert_prob(col), data.insert_length(col)) {
            bars.push(IndicatorBar { kind: IndicatorKind::InsertProb, row: 1, value: p, color: insert_prob_band(p) });
            bars.push(IndicatorBar { kind: IndicatorKind::InsertLength, row: 2, value: l, color: insert_length_band(l) });
        }
    }
    bars
}

pub fn layout_column(
    data: &LogoData,
    col: usize,
    max_height: f64,
    layout: &TileLayout,
    show_inserts: bool,
) -> Option<ColumnLayout> {
    let column = data.column(col)?;
    let masked = data.is_masked(col);
    let segments = if masked {
        Vec::new()
    } else {
        stack_segments(column, max_height, layout.plot_height, layout.baseline())
    };
    Some(ColumnLayout {
        column: col,
        masked,
        segments,
        indicators: indicator_bars(data, col, show_inserts),
    })
}
