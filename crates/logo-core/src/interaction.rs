// File: crates/logo-core/src/interaction.rs
// Summary: Pointer events, host callbacks, and the clicked/hovered column state machine.

use crate::data::ColumnSnapshot;
use crate::render::Highlight;
use crate::types::{ZOOM_MAX, ZOOM_PRESET_REDUCED};

/// Pointer input in container pixels (scroll offset not yet applied).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Click { x: f32 },
    Move { x: f32 },
    DoubleClick { x: f32 },
    Leave,
}

/// Host-side receiver of column events. Both hooks default to no-ops.
pub trait LogoObserver {
    fn on_column_click(&mut self, _column: usize, _snapshot: &ColumnSnapshot) {}
    fn on_column_hover(&mut self, _column: usize) {}
}

/// Closure-backed observer for hosts that do not want a dedicated type.
#[derive(Default)]
pub struct Callbacks {
    pub on_column_click: Option<Box<dyn FnMut(usize, &ColumnSnapshot)>>,
    pub on_column_hover: Option<Box<dyn FnMut(usize)>>,
}

impl LogoObserver for Callbacks {
    fn on_column_click(&mut self, column: usize, snapshot: &ColumnSnapshot) {
        if let Some(cb) = self.on_column_click.as_mut() { cb(column, snapshot); }
    }
    fn on_column_hover(&mut self, column: usize) {
        if let Some(cb) = self.on_column_hover.as_mut() { cb(column); }
    }
}

/// Result of a click: the column now clicked and the one it replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    pub column: usize,
    pub previous: Option<usize>,
    pub changed: bool,
}

/// Clicked and hovered highlights are tracked independently.
#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionController {
    clicked: Option<usize>,
    hovered: Option<usize>,
}

impl InteractionController {
    pub fn new() -> Self { Self::default() }

    pub fn clicked(&self) -> Option<usize> { self.clicked }
    pub fn hovered(&self) -> Option<usize> { self.hovered }

    pub fn highlight(&self) -> Highlight {
        Highlight { clicked: self.clicked, hovered: self.hovered }
    }

    pub fn click(&mut self, column: usize) -> ClickOutcome {
        let previous = self.clicked;
        let changed = previous != Some(column);
        if changed {
            self.clicked = Some(column);
        }
        ClickOutcome { column, previous, changed }
    }

    /// Returns the previously hovered column when the hover moved.
    pub fn hover(&mut self, column: usize) -> Option<Option<usize>> {
        if self.hovered == Some(column) {
            return None;
        }
        Some(std::mem::replace(&mut self.hovered, Some(column)))
    }

    /// Clear the hover highlight; returns the column that lost it.
    pub fn leave(&mut self) -> Option<usize> {
        self.hovered.take()
    }

    pub fn reset(&mut self) {
        self.clicked = None;
        self.hovered = None;
    }

    /// Double-click flips between full zoom and the reduced preset.
    pub fn toggled_zoom(current: f32) -> f32 {
        if current < ZOOM_MAX { ZOOM_MAX } else { ZOOM_PRESET_REDUCED }
    }
}
