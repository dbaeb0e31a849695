#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A pointer position in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
///
/// All four values share one coordinate space (typically pixels relative to
/// the target's offset parent). Width and height are never negative in values
/// produced by the engine, but may be while a computation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The all-zero rectangle, used when no target element is bound.
    pub const ZERO: Self = Self { top: 0.0, left: 0.0, width: 0.0, height: 0.0 };

    #[must_use]
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    /// X coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Signed per-field difference `self - base`.
    #[must_use]
    pub fn difference(&self, base: &Rect) -> Rect {
        Rect {
            top: self.top - base.top,
            left: self.left - base.left,
            width: self.width - base.width,
            height: self.height - base.height,
        }
    }
}
