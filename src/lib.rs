//! Pointer-driven element resizing.
//!
//! Attach a [`gesture::Resizer`] to one resize handle (an edge or corner of an
//! element). On pointer-down it snapshots the target element's rectangle; every
//! later pointer event is turned into a new rectangle by the pure geometry in
//! [`engine`], and handed back to the host as [`gesture::Action`]s carrying
//! [`event::ResizeEvent`] payloads (current, original, and signed difference).
//!
//! The host owns everything platform-specific: reading element offsets,
//! subscribing to pointer events, toggling CSS classes. With the `web` feature
//! the `dom` module does this for a browser DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Pure resize geometry and [`engine::Constraints`] |
//! | [`direction`] | The eight handle directions and their projection table |
//! | [`gesture`] | Gesture controller and host [`gesture::Action`]s |
//! | [`event`] | Pointer input and notification payloads |
//! | [`config`] | [`config::ResizeConfig`] and JSON parsing |
//! | [`geom`] | [`geom::Rect`] and [`geom::Point`] |
//! | [`error`] | [`error::ResizeError`] |
//! | [`consts`] | Shared constants |
//! | `dom` | Browser DOM adapter (`web` feature) |

pub mod config;
pub mod consts;
pub mod direction;
#[cfg(feature = "web")]
pub mod dom;
pub mod engine;
pub mod error;
pub mod event;
pub mod geom;
pub mod gesture;

pub use config::ResizeConfig;
pub use direction::Direction;
pub use error::ResizeError;
pub use event::{PointerEvent, ResizeCancel, ResizeEvent};
pub use geom::{Point, Rect};
pub use gesture::{Action, Resizer, TargetRect};
