//! Error type shared by configuration parsing and the gesture controller.
//!
//! The geometry engine itself is infallible; everything here is either a
//! configuration mistake caught up front or a controller call made out of
//! sequence.

/// Errors returned by [`crate::config`] and [`crate::gesture`].
#[derive(Debug, thiserror::Error)]
pub enum ResizeError {
    /// A pointer move or pointer up arrived before any gesture was started.
    #[error("no resize gesture has been started")]
    NotResizing,
    /// `begin` was called while another gesture is still active.
    #[error("a resize gesture is already in progress")]
    AlreadyResizing,
    /// A direction string did not name one of the eight handles.
    #[error("unknown resize direction: {0:?}")]
    UnknownDirection(String),
    /// Bounds whose right/bottom limit lies before their left/top limit.
    #[error("invalid bounds: right/bottom limit ({right}, {bottom}) precedes left/top ({left}, {top})")]
    InvalidBounds { top: f64, left: f64, right: f64, bottom: f64 },
    /// The configuration payload could not be decoded.
    #[error("failed to parse resize config: {0}")]
    Config(#[from] serde_json::Error),
}
