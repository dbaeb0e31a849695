//! Resize geometry: maps a pointer drag onto a new target rectangle.
//!
//! DESIGN
//! ======
//! One pass per pointer event, always computed from the gesture's original
//! rectangle and pointer-down origin (never accumulated from the previous
//! move), so the result is a pure function of its inputs:
//!
//! 1. raw pointer delta
//! 2. direction projection ([`Direction::rules`])
//! 3. proportional adjustment (larger side shrinks to the smaller)
//! 4. degenerate-size fold, then clamp negative sizes to zero
//! 5. bounds clamp, top/height pair first, then left/width, no iteration
//!
//! The stage order is load-bearing: proportional, fold, and bounds do not
//! commute, and overlapping cases (proportional + bounded + near-zero) are
//! defined by this order alone.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEGENERATE_SIZE_PX;
use crate::direction::Direction;
use crate::event::{PointerEvent, ResizeEvent};
use crate::geom::{Point, Rect};

/// Optional limits applied on top of the direction projection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Constraints {
    /// Force width and height equal by shrinking the larger side.
    pub proportional: bool,
    /// Outer limits for the result.
    ///
    /// `top`/`left` are the minimum edge coordinates; `width`/`height` are read
    /// as the maximum right/bottom edge coordinates, not as extents.
    pub bounds: Option<Rect>,
}

/// Compute the target rectangle for a pointer at `pointer`, given a gesture
/// that started at `origin` over `original`.
#[must_use]
pub fn compute_rect(direction: Direction, original: &Rect, origin: Point, pointer: Point, constraints: &Constraints) -> Rect {
    let dx = pointer.x - origin.x;
    let dy = pointer.y - origin.y;

    let rules = direction.rules();
    let delta_width = rules.width.apply(dx);
    let delta_height = rules.height.apply(dy);
    let mut delta_top = rules.top.apply(dy);
    let mut delta_left = rules.left.apply(dx);

    let mut width = original.width + delta_width;
    let mut height = original.height + delta_height;

    // Ties go to height: equal sides take the else branch.
    if constraints.proportional {
        if width > height {
            width = height;
        } else {
            height = width;
        }
    }

    // Past the anchor: stop the moving edge at the opposite edge.
    if height <= DEGENERATE_SIZE_PX && !rules.top.is_locked() {
        delta_top += height;
    }
    if width <= DEGENERATE_SIZE_PX && !rules.left.is_locked() {
        delta_left += width;
    }
    if height <= 0.0 {
        height = 0.0;
    }
    if width <= 0.0 {
        width = 0.0;
    }

    let mut top = original.top + delta_top;
    let mut left = original.left + delta_left;

    if let Some(bounds) = constraints.bounds {
        if top < bounds.top {
            height = original.height + original.top - bounds.top;
            top = bounds.top;
        }
        if top + height > bounds.height {
            height = bounds.height - top;
        }
        if left < bounds.left {
            width = original.width + original.left - bounds.left;
            left = bounds.left;
        }
        if left + width > bounds.width {
            width = bounds.width - left;
        }
    }

    Rect { top, left, width, height }
}

/// Whether `rect` lies inside `bounds`, edges inclusive.
///
/// `bounds` follows [`Constraints::bounds`]: `width`/`height` are the right and
/// bottom edge coordinates.
#[must_use]
pub fn within_bounds(rect: &Rect, bounds: &Rect) -> bool {
    rect.top >= bounds.top && rect.left >= bounds.left && rect.bottom() <= bounds.height && rect.right() <= bounds.width
}

/// Compute the full notification payload for `pointer`.
#[must_use]
pub fn resize_event(
    direction: Direction,
    original: &Rect,
    origin: &PointerEvent,
    pointer: &PointerEvent,
    constraints: &Constraints,
) -> ResizeEvent {
    let current = compute_rect(direction, original, origin.position(), pointer.position(), constraints);
    ResizeEvent::new(current, *original, *pointer, direction)
}
