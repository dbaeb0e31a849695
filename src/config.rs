//! Resize behavior configuration.
//!
//! Hosts usually declare these as element attributes, so the JSON form uses the
//! attribute names: `direction`, `proportionalResize`, `bounds`, `applyClass`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_APPLY_CLASS;
use crate::direction::Direction;
use crate::engine::Constraints;
use crate::error::ResizeError;
use crate::geom::Rect;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeConfig {
    /// Handle this behavior is attached to. Required.
    pub direction: Direction,
    /// Shrink the larger side to match the smaller one.
    #[serde(default)]
    pub proportional_resize: bool,
    /// Outer limits for the resized element; see [`Constraints::bounds`].
    #[serde(default)]
    pub bounds: Option<Rect>,
    /// CSS class applied to the handle while dragging.
    #[serde(default = "default_apply_class")]
    pub apply_class: String,
}

fn default_apply_class() -> String {
    DEFAULT_APPLY_CLASS.to_owned()
}

impl ResizeConfig {
    /// Unbounded, non-proportional config for `direction`.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self { direction, proportional_resize: false, bounds: None, apply_class: default_apply_class() }
    }

    #[must_use]
    pub fn with_proportional(mut self, proportional: bool) -> Self {
        self.proportional_resize = proportional;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn with_apply_class(mut self, class: impl Into<String>) -> Self {
        self.apply_class = class.into();
        self
    }

    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::Config`] for malformed JSON, a missing direction,
    /// or an unknown direction name, and [`ResizeError::InvalidBounds`] when
    /// validation fails.
    pub fn from_json(raw: &str) -> Result<Self, ResizeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject bounds whose right/bottom limit lies before their left/top limit.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::InvalidBounds`].
    pub fn validate(&self) -> Result<(), ResizeError> {
        if let Some(b) = self.bounds {
            if b.width < b.left || b.height < b.top {
                return Err(ResizeError::InvalidBounds { top: b.top, left: b.left, right: b.width, bottom: b.height });
            }
        }
        Ok(())
    }

    /// The geometry limits this config imposes.
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        Constraints { proportional: self.proportional_resize, bounds: self.bounds }
    }
}
