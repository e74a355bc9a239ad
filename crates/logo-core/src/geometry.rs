// File: crates/logo-core/src/geometry.rs
// Summary: Lightweight horizontal pixel spans and clamping helpers.

/// Half-open horizontal pixel span `[start, end)` on the logical drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PxSpan {
    pub start: f32,
    pub end: f32,
}

impl PxSpan {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }
    pub fn from_start_width(start: f32, width: f32) -> Self {
        Self { start, end: start + width }
    }
    pub fn intersects(&self, other: &PxSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
