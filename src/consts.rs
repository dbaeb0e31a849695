//! Shared constants for the resize crate.

// ── Geometry ────────────────────────────────────────────────────

/// A computed side at or below this length folds its overshoot back into the
/// moving edge's offset, so the edge stops at the anchor instead of crossing it.
pub const DEGENERATE_SIZE_PX: f64 = 1.0;

// ── Host integration ────────────────────────────────────────────

/// CSS class applied to the handle element while a gesture is active.
pub const DEFAULT_APPLY_CLASS: &str = "resizes";
