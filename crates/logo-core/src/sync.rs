// File: crates/logo-core/src/sync.rs
// Summary: Host-driven scroll lockstep between two logo instances with a feedback guard.

use crate::engine::LogoEngine;
use crate::error::Result;
use crate::viewport::ScrollCommand;

/// Forwards one engine's centered column to a peer engine.
///
/// The host calls `forward` from its scroll handler. A target already within
/// `tolerance_px` of the wanted offset is left alone, so the peer's own scroll
/// event does not bounce the first instance back.
pub struct PairedViewport {
    column_map: Option<Box<dyn Fn(usize) -> Option<usize>>>,
    tolerance_px: f32,
}

impl PairedViewport {
    pub fn new() -> Self {
        Self { column_map: None, tolerance_px: 0.5 }
    }

    /// Translate source columns into target columns; `None` skips the sync.
    pub fn with_column_map(mut self, map: impl Fn(usize) -> Option<usize> + 'static) -> Self {
        self.column_map = Some(Box::new(map));
        self
    }

    pub fn with_tolerance(mut self, tolerance_px: f32) -> Self {
        self.tolerance_px = tolerance_px.max(0.0);
        self
    }

    fn target_column(&self, source_column: usize) -> Option<usize> {
        match &self.column_map {
            Some(map) => map(source_column),
            None => Some(source_column),
        }
    }

    /// Center `target` on the column `source` is centered on.
    /// Returns the issued scroll, or `None` when nothing had to move.
    pub fn forward(&self, source: &LogoEngine, target: &mut LogoEngine) -> Result<Option<ScrollCommand>> {
        let Some(column) = self.target_column(source.current_center_column()) else {
            return Ok(None);
        };
        let wanted = target.viewport().offset_for_column(column);
        if (wanted - target.viewport().scroll_offset()).abs() <= self.tolerance_px {
            return Ok(None);
        }
        log::debug!("syncing peer logo to column {column}");
        target.scroll_to_column(column, false).map(Some)
    }
}

impl Default for PairedViewport {
    fn default() -> Self { Self::new() }
}
