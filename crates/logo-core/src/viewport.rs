// File: crates/logo-core/src/viewport.rs
// Summary: Zoom level, visible column range, scroll offset, and pixel <-> column math.
// Notes:
// - Logical pixel 0 is the left edge of `start_column`; a column covers
//   `((c - start) * w, (c - start + 1) * w]` with `w` the zoomed column width.
// - Scroll offsets are the logical pixel shown at the container's left edge.

use crate::geometry::{clamp, PxSpan};
use crate::types::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub zoom: f32,
    /// 1-indexed, inclusive.
    pub start_column: usize,
    /// 1-indexed, inclusive.
    pub end_column: usize,
    pub zoom_enabled: bool,
    pub total_width_px: f32,
    pub zoomed_column_width_px: f32,
}

impl ViewportState {
    pub fn column_span(&self) -> usize { self.end_column - self.start_column + 1 }
}

/// Keep `column` under container pixel `offset_px` across a zoom change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomAnchor {
    pub column: usize,
    pub offset_px: f32,
}

/// Scroll request handed to the host; `animate` only affects presentation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCommand {
    pub offset_px: f32,
    pub animate: bool,
}

#[derive(Clone, Debug)]
pub struct ViewportManager {
    state: ViewportState,
    base_column_width: f32,
    column_count: usize,
    viewport_width_px: f32,
    scroll_offset_px: f32,
}

impl ViewportManager {
    /// Full column range at zoom 1.0.
    pub fn new(column_count: usize, base_column_width: f32, viewport_width_px: f32) -> Self {
        let column_count = column_count.max(1);
        let mut vm = Self {
            state: ViewportState {
                zoom: ZOOM_MAX,
                start_column: 1,
                end_column: column_count,
                zoom_enabled: true,
                total_width_px: 0.0,
                zoomed_column_width_px: 0.0,
            },
            base_column_width: base_column_width.max(f32::EPSILON),
            column_count,
            viewport_width_px: viewport_width_px.max(0.0),
            scroll_offset_px: 0.0,
        };
        vm.recompute();
        vm
    }

    pub fn state(&self) -> &ViewportState { &self.state }
    pub fn zoom(&self) -> f32 { self.state.zoom }
    pub fn zoom_enabled(&self) -> bool { self.state.zoom_enabled }
    pub fn column_width(&self) -> f32 { self.state.zoomed_column_width_px }
    pub fn total_width(&self) -> f32 { self.state.total_width_px }
    pub fn column_count(&self) -> usize { self.column_count }
    pub fn viewport_width(&self) -> f32 { self.viewport_width_px }
    pub fn scroll_offset(&self) -> f32 { self.scroll_offset_px }

    fn recompute(&mut self) {
        let w = self.base_column_width * self.state.zoom;
        self.state.zoomed_column_width_px = w;
        self.state.total_width_px = w * self.state.column_span() as f32;
        self.scroll_offset_px = clamp(self.scroll_offset_px, 0.0, self.max_scroll());
    }

    fn width_at(&self, zoom: f32) -> f32 {
        self.base_column_width * zoom * self.state.column_span() as f32
    }

    /// Restrict drawing to `[start, end]`, clamped into `[1, column_count]`.
    /// An inverted range collapses `start` down to `end`.
    pub fn set_range(&mut self, start: usize, end: usize) {
        let end = clamp(end, 1, self.column_count);
        let start = clamp(start, 1, self.column_count).min(end);
        self.state.start_column = start;
        self.state.end_column = end;
        self.recompute();
    }

    /// Pick the zoom for a freshly laid out logo.
    ///
    /// A logo that fits at zoom 1.0 is pinned there. Otherwise zoom climbs from
    /// `start_zoom` in steps of 0.1 while the logo is narrower than the viewport;
    /// once that loop has run, zooming is disabled.
    pub fn fit_to_viewport(&mut self, viewport_width_px: f32, start_zoom: f32) {
        self.viewport_width_px = viewport_width_px.max(0.0);
        if self.width_at(ZOOM_MAX) <= self.viewport_width_px {
            self.state.zoom = ZOOM_MAX;
            self.state.zoom_enabled = false;
        } else {
            let mut zoom = clamp(start_zoom, ZOOM_MIN, ZOOM_MAX);
            if self.width_at(zoom) < self.viewport_width_px {
                while self.width_at(zoom) < self.viewport_width_px && zoom < ZOOM_MAX {
                    zoom = step_zoom(zoom);
                }
                self.state.zoom_enabled = false;
            } else {
                self.state.zoom_enabled = true;
            }
            self.state.zoom = zoom;
        }
        self.recompute();
        log::info!(
            "fit {} columns into {:.0}px: zoom={:.2} enabled={}",
            self.state.column_span(), self.viewport_width_px, self.state.zoom, self.state.zoom_enabled
        );
    }

    /// Clamp and apply a zoom level. With an anchor the anchored column stays under
    /// the same container pixel; without one the centered column stays centered.
    pub fn set_zoom(&mut self, new_zoom: f32, anchor: Option<ZoomAnchor>) -> f32 {
        let center = self.current_center_column();
        self.state.zoom = clamp(new_zoom, ZOOM_MIN, ZOOM_MAX);
        self.recompute();
        match anchor {
            Some(a) => {
                let target = self.pixel_from_column(a.column) - a.offset_px;
                self.set_scroll_offset(target);
            }
            None => {
                self.scroll_to_column(center, false);
            }
        }
        self.state.zoom
    }

    /// 1-indexed column under logical pixel `x`, clamped to the visible range.
    pub fn column_from_pixel(&self, x: f32) -> usize {
        let w = self.state.zoomed_column_width_px;
        let steps = (x / w).ceil() as i64;
        let col = self.state.start_column as i64 - 1 + steps;
        clamp(col, self.state.start_column as i64, self.state.end_column as i64) as usize
    }

    /// Logical pixel at the center of `col`.
    pub fn pixel_from_column(&self, col: usize) -> f32 {
        let w = self.state.zoomed_column_width_px;
        (col as f32 - self.state.start_column as f32) * w + w / 2.0
    }

    pub fn column_left(&self, col: usize) -> f32 {
        (col as f32 - self.state.start_column as f32) * self.state.zoomed_column_width_px
    }

    pub fn current_center_column(&self) -> usize {
        let shown = self.viewport_width_px.min(self.state.total_width_px);
        self.column_from_pixel(self.scroll_offset_px + shown / 2.0)
    }

    pub fn max_scroll(&self) -> f32 {
        (self.state.total_width_px - self.viewport_width_px).max(0.0)
    }

    pub fn set_scroll_offset(&mut self, px: f32) {
        self.scroll_offset_px = clamp(px, 0.0, self.max_scroll());
    }

    /// Scroll offset that centers `col` in the viewport, clamped to the scrollable range.
    pub fn offset_for_column(&self, col: usize) -> f32 {
        let col = clamp(col, self.state.start_column, self.state.end_column);
        let target = self.pixel_from_column(col) - self.viewport_width_px / 2.0;
        clamp(target, 0.0, self.max_scroll())
    }

    pub fn scroll_to_column(&mut self, col: usize, animate: bool) -> ScrollCommand {
        let offset_px = self.offset_for_column(col);
        self.scroll_offset_px = offset_px;
        ScrollCommand { offset_px, animate }
    }

    /// Logical pixels currently inside the container.
    pub fn visible_span(&self) -> PxSpan {
        PxSpan::from_start_width(self.scroll_offset_px, self.viewport_width_px)
    }

    /// Adopt a new container width; the scroll offset is re-clamped.
    pub fn resize(&mut self, viewport_width_px: f32) {
        self.viewport_width_px = viewport_width_px.max(0.0);
        self.recompute();
    }
}

/// One fit step up from `zoom`, rounded to 1e-4 so repeated steps do not drift.
fn step_zoom(zoom: f32) -> f32 {
    (((zoom + ZOOM_STEP) * 1e4).round() / 1e4).min(ZOOM_MAX)
}
