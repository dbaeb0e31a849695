//! Pointer input and the resize notification payload.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::geom::{Point, Rect};

/// A raw pointer event as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerEvent {
    /// Horizontal position in client (viewport) pixels.
    pub client_x: f64,
    /// Vertical position in client (viewport) pixels.
    pub client_y: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}

/// Payload delivered with every start, progress, and end notification.
///
/// `difference` is always `current - original`, field by field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeEvent {
    pub current: Rect,
    pub original: Rect,
    pub difference: Rect,
    /// The pointer event that produced this payload.
    pub original_event: PointerEvent,
    pub direction: Direction,
}

impl ResizeEvent {
    #[must_use]
    pub fn new(current: Rect, original: Rect, original_event: PointerEvent, direction: Direction) -> Self {
        Self { current, original, difference: current.difference(&original), original_event, direction }
    }
}

/// Payload delivered when a gesture is cancelled instead of completed.
///
/// Carries no pointer position: a cancel is not tied to any pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeCancel {
    /// The rectangle captured when the gesture began; hosts restore to this.
    pub original: Rect,
    /// The last rectangle handed to the host (the start rectangle if the
    /// pointer never moved).
    pub last: Rect,
    pub direction: Direction,
}
