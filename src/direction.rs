//! Resize directions and the per-direction projection table.
//!
//! A [`Direction`] names the handle that started the drag. Its [`EdgeRules`]
//! say how the raw pointer delta feeds each of the four working deltas: kept as
//! is, negated (dragging toward the interior shrinks the element), or locked to
//! zero because the handle does not control that edge.

#[cfg(test)]
#[path = "direction_test.rs"]
mod direction_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResizeError;

/// Which edge or corner handle initiated the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// How one working delta responds to pointer movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRule {
    /// Follows the pointer delta unchanged.
    Free,
    /// Follows the negated pointer delta.
    Invert,
    /// Held at zero.
    Lock,
}

impl EdgeRule {
    /// Project a raw pointer delta through this rule.
    #[must_use]
    pub fn apply(self, delta: f64) -> f64 {
        match self {
            Self::Free => delta,
            Self::Invert => -delta,
            Self::Lock => 0.0,
        }
    }

    #[must_use]
    pub fn is_locked(self) -> bool {
        self == Self::Lock
    }
}

/// Projection record for one direction: the rule for each working delta.
///
/// `width` and `left` are fed by the horizontal pointer delta, `height` and
/// `top` by the vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRules {
    pub width: EdgeRule,
    pub height: EdgeRule,
    pub top: EdgeRule,
    pub left: EdgeRule,
}

const fn rules(width: EdgeRule, height: EdgeRule, top: EdgeRule, left: EdgeRule) -> EdgeRules {
    EdgeRules { width, height, top, left }
}

use EdgeRule::{Free, Invert, Lock};

//                                      width   height  top   left
const TOP: EdgeRules = rules(Lock, Invert, Free, Lock);
const TOP_RIGHT: EdgeRules = rules(Free, Invert, Free, Lock);
const RIGHT: EdgeRules = rules(Free, Lock, Lock, Lock);
const BOTTOM_RIGHT: EdgeRules = rules(Free, Free, Lock, Lock);
const BOTTOM: EdgeRules = rules(Lock, Free, Lock, Lock);
const BOTTOM_LEFT: EdgeRules = rules(Invert, Free, Lock, Free);
const LEFT: EdgeRules = rules(Invert, Lock, Lock, Free);
const TOP_LEFT: EdgeRules = rules(Invert, Invert, Free, Free);

impl Direction {
    /// Every direction, clockwise from the top edge.
    pub const ALL: [Direction; 8] = [
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
        Self::TopLeft,
    ];

    /// The projection record for this handle.
    #[must_use]
    pub fn rules(self) -> EdgeRules {
        match self {
            Self::Top => TOP,
            Self::TopRight => TOP_RIGHT,
            Self::Right => RIGHT,
            Self::BottomRight => BOTTOM_RIGHT,
            Self::Bottom => BOTTOM,
            Self::BottomLeft => BOTTOM_LEFT,
            Self::Left => LEFT,
            Self::TopLeft => TOP_LEFT,
        }
    }

    /// Canonical upper snake case name, e.g. `"TOP_LEFT"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Bottom => "BOTTOM",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::TopLeft => "TOP_LEFT",
            Self::TopRight => "TOP_RIGHT",
            Self::BottomLeft => "BOTTOM_LEFT",
            Self::BottomRight => "BOTTOM_RIGHT",
        }
    }

    /// CSS cursor shown over a handle of this direction.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Top => "n-resize",
            Self::TopRight => "ne-resize",
            Self::Right => "e-resize",
            Self::BottomRight => "se-resize",
            Self::Bottom => "s-resize",
            Self::BottomLeft => "sw-resize",
            Self::Left => "w-resize",
            Self::TopLeft => "nw-resize",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ResizeError;

    /// Accepts `TOP_LEFT`, `top-left`, `top_left` and compass forms (`nw`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "TOP" | "N" => Ok(Self::Top),
            "BOTTOM" | "S" => Ok(Self::Bottom),
            "LEFT" | "W" => Ok(Self::Left),
            "RIGHT" | "E" => Ok(Self::Right),
            "TOP_LEFT" | "NW" => Ok(Self::TopLeft),
            "TOP_RIGHT" | "NE" => Ok(Self::TopRight),
            "BOTTOM_LEFT" | "SW" => Ok(Self::BottomLeft),
            "BOTTOM_RIGHT" | "SE" => Ok(Self::BottomRight),
            _ => Err(ResizeError::UnknownDirection(raw.to_owned())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = ResizeError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}
