// File: crates/logo-core/src/tiles.rs
// Summary: Partition of the visible column range into bounded-width tiles and the lazy-render window.

use crate::geometry::PxSpan;
use crate::types::TILE_MAX_WIDTH;
use crate::viewport::ViewportState;

/// One drawable surface covering a contiguous column range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderTile {
    pub index: usize,
    /// 1-indexed, inclusive.
    pub column_range_start: usize,
    /// 1-indexed, inclusive.
    pub column_range_end: usize,
    /// Left edge on the logical surface.
    pub pixel_offset: f32,
    pub width_px: f32,
    pub rendered: bool,
}

impl RenderTile {
    pub fn span(&self) -> PxSpan { PxSpan::from_start_width(self.pixel_offset, self.width_px) }

    pub fn contains_column(&self, col: usize) -> bool {
        (self.column_range_start..=self.column_range_end).contains(&col)
    }

    pub fn column_count(&self) -> usize { self.column_range_end - self.column_range_start + 1 }
}

/// Whole columns that fit in one tile without exceeding `TILE_MAX_WIDTH`.
/// A degenerate (zero, negative, or NaN) width yields one column per tile.
pub fn columns_per_tile(column_width_px: f32) -> usize {
    if column_width_px.is_nan() || column_width_px <= 0.0 {
        return 1;
    }
    ((TILE_MAX_WIDTH / column_width_px).floor() as usize).max(1)
}

/// Split `[start_column, end_column]` into tiles; only the last may be narrower.
pub fn compute_tiles(viewport: &ViewportState) -> Vec<RenderTile> {
    let w = viewport.zoomed_column_width_px;
    let per_tile = columns_per_tile(w);
    let mut tiles = Vec::with_capacity(viewport.column_span().div_ceil(per_tile));
    let mut start = viewport.start_column;
    while start <= viewport.end_column {
        let end = start.saturating_add(per_tile - 1).min(viewport.end_column);
        tiles.push(RenderTile {
            index: tiles.len(),
            column_range_start: start,
            column_range_end: end,
            pixel_offset: (start - viewport.start_column) as f32 * w,
            width_px: (end - start + 1) as f32 * w,
            rendered: false,
        });
        start = end + 1;
    }
    tiles
}

/// Pixels around `target_scroll_px` whose tiles get drawn: half a tile to the left,
/// one and a half to the right.
pub fn render_window(target_scroll_px: f32, tile_width_px: f32) -> PxSpan {
    PxSpan::new(target_scroll_px - tile_width_px / 2.0, target_scroll_px + tile_width_px * 1.5)
}
