// File: crates/logo-core/src/types.rs
// Summary: Shared constants (tile width, zoom bounds, noise floor) and the vertical tile layout.

/// Widest drawable surface a single tile may have, in logical pixels.
pub const TILE_MAX_WIDTH: f32 = 5000.0;
/// Column width at zoom 1.0, in pixels.
pub const BASE_COLUMN_WIDTH: f32 = 34.0;
/// Lower zoom bound.
pub const ZOOM_MIN: f32 = 0.1;
/// Upper zoom bound.
pub const ZOOM_MAX: f32 = 1.0;
/// Increment used while fitting a small logo to its viewport.
pub const ZOOM_STEP: f32 = 0.1;
/// Reduced zoom preset used by double-click toggling.
pub const ZOOM_PRESET_REDUCED: f32 = 0.3;
/// Zoomed column widths strictly above this use the detailed (glyph) path.
pub const DETAIL_MIN_COLUMN_PX: f32 = 12.0;
/// Column entries at or below this magnitude are never drawn.
pub const NOISE_FLOOR: f64 = 0.01;
/// Below this zoom the detailed path labels every 5th column only.
pub const DETAIL_SPARSE_LABEL_ZOOM: f32 = 0.7;
/// Below this zoom the compact path labels every 20th column instead of every 10th.
pub const COMPACT_SPARSE_LABEL_ZOOM: f32 = 0.2;

/// Vertical layout of a tile, top to bottom: plot, indicator rows, tick/label strip.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileLayout {
    pub top_padding: f32,
    pub plot_height: f32,
    pub indicator_height: f32,
    pub indicator_gap: f32,
    pub label_strip: f32,
    /// 1 (occupancy only) or 3 (occupancy, insert probability, insert length).
    pub indicator_rows: u32,
}

impl TileLayout {
    pub const fn new(plot_height: f32, indicator_rows: u32) -> Self {
        Self {
            top_padding: 10.0,
            plot_height,
            indicator_height: 10.0,
            indicator_gap: 2.0,
            label_strip: 18.0,
            indicator_rows,
        }
    }

    /// Y of the plot baseline (bottom of every stack).
    pub fn baseline(&self) -> f32 { self.top_padding + self.plot_height }

    /// Top edge of indicator row `row` (0 = occupancy).
    pub fn indicator_top(&self, row: u32) -> f32 {
        self.baseline() + self.indicator_gap + row as f32 * (self.indicator_height + self.indicator_gap)
    }

    /// Top edge of the tick/label strip.
    pub fn label_top(&self) -> f32 { self.indicator_top(self.indicator_rows) }

    /// Total tile height in pixels.
    pub fn height(&self) -> f32 { self.label_top() + self.label_strip }
}

impl Default for TileLayout {
    fn default() -> Self {
        Self::new(300.0, 1)
    }
}
