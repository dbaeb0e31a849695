//! Gesture controller: sequences one resize from pointer-down to pointer-up.
//!
//! [`Resizer`] records the pointer-down position and the target's rectangle,
//! then turns every later pointer event into [`Action`]s for the host to carry
//! out: notifications (`Start`, `Progress`, `End`, `Cancelled`) and the
//! housekeeping around them (document listeners, gesture CSS class). All
//! geometry is delegated to [`crate::engine`].
//!
//! Every `CaptureListeners` is followed by exactly one `ReleaseListeners`,
//! whether the gesture ends with a pointer-up or an external cancel. Setup
//! actions always precede the first notification of a gesture, and teardown
//! actions precede the last, so hosts may re-enter the controller from any
//! notification.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::config::ResizeConfig;
use crate::engine;
use crate::error::ResizeError;
use crate::event::{PointerEvent, ResizeCancel, ResizeEvent};
use crate::geom::Rect;

/// Work for the host, in the order it should be performed.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Suppress the platform's default handling of the pointer-down.
    PreventDefault,
    /// Start listening for document-level pointer move/up events.
    CaptureListeners,
    /// Stop listening for document-level pointer move/up events.
    ReleaseListeners,
    /// Add this CSS class to the handle element.
    AddClass(String),
    /// Remove this CSS class from the handle element.
    RemoveClass(String),
    /// The gesture started; payload is computed at zero delta.
    Start(ResizeEvent),
    /// The pointer moved (also sent once more right before `End`).
    Progress(ResizeEvent),
    /// The gesture completed with a pointer-up.
    End(ResizeEvent),
    /// The gesture was aborted without a pointer-up.
    Cancelled(ResizeCancel),
}

impl Action {
    /// The resize payload carried by a start/progress/end action.
    #[must_use]
    pub fn event(&self) -> Option<&ResizeEvent> {
        match self {
            Self::Start(evt) | Self::Progress(evt) | Self::End(evt) => Some(evt),
            _ => None,
        }
    }
}

/// Supplies the target element's rectangle at the start of a gesture.
///
/// `None` means no target is bound; the gesture then runs against
/// [`Rect::ZERO`].
pub trait TargetRect {
    fn target_rect(&self) -> Option<Rect>;
}

impl TargetRect for Rect {
    fn target_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl TargetRect for Option<Rect> {
    fn target_rect(&self) -> Option<Rect> {
        *self
    }
}

/// Controller state between pointer events.
#[derive(Debug, Clone, Default)]
pub enum GestureState {
    /// No gesture has been started yet.
    #[default]
    Idle,
    /// A gesture is in progress.
    Resizing {
        /// The pointer-down event.
        origin: PointerEvent,
        /// Target rectangle captured at pointer-down.
        original: Rect,
        /// Most recent payload handed to the host.
        last: ResizeEvent,
    },
    /// The last gesture was torn down; late events are ignored.
    Released,
}

/// Drives one resize gesture at a time for a single handle.
#[derive(Debug, Clone)]
pub struct Resizer {
    config: ResizeConfig,
    state: GestureState,
}

impl Resizer {
    /// Create an idle controller.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::InvalidBounds`] if the config fails validation.
    pub fn new(config: ResizeConfig) -> Result<Self, ResizeError> {
        config.validate()?;
        Ok(Self { config, state: GestureState::Idle })
    }

    #[must_use]
    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Replace the configuration between gestures.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::AlreadyResizing`] while a gesture is active, since
    /// direction and limits are fixed for a gesture's lifetime, and
    /// [`ResizeError::InvalidBounds`] if the new config fails validation.
    pub fn set_config(&mut self, config: ResizeConfig) -> Result<(), ResizeError> {
        if self.is_resizing() {
            return Err(ResizeError::AlreadyResizing);
        }
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self.state, GestureState::Resizing { .. })
    }

    /// The payload most recently handed to the host by the active gesture.
    #[must_use]
    pub fn last_event(&self) -> Option<&ResizeEvent> {
        match &self.state {
            GestureState::Resizing { last, .. } => Some(last),
            _ => None,
        }
    }

    /// Start a gesture at `pointer`, snapshotting the target's rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::AlreadyResizing`] if a gesture is active.
    pub fn begin(&mut self, pointer: PointerEvent, target: &impl TargetRect) -> Result<Vec<Action>, ResizeError> {
        if self.is_resizing() {
            tracing::debug!(direction = %self.config.direction, "resize begin rejected: gesture active");
            return Err(ResizeError::AlreadyResizing);
        }

        let original = target.target_rect().unwrap_or(Rect::ZERO);
        if let Some(bounds) = self.config.bounds {
            if !engine::within_bounds(&original, &bounds) {
                tracing::warn!(?original, ?bounds, "resize target starts outside its bounds");
            }
        }
        let start = self.compute(&original, &pointer, &pointer);
        self.state = GestureState::Resizing { origin: pointer, original, last: start };

        tracing::debug!(
            direction = %self.config.direction,
            x = pointer.client_x,
            y = pointer.client_y,
            width = original.width,
            height = original.height,
            "resize started"
        );

        // Setup lands before `Start` so a host callback that cancels sees a
        // fully captured gesture to tear down.
        Ok(vec![
            Action::PreventDefault,
            Action::CaptureListeners,
            Action::AddClass(self.config.apply_class.clone()),
            Action::Start(start),
        ])
    }

    /// Recompute the rectangle for a pointer move.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::NotResizing`] if no gesture was ever started.
    pub fn on_pointer_move(&mut self, pointer: PointerEvent) -> Result<Vec<Action>, ResizeError> {
        let evt = match &self.state {
            GestureState::Idle => return Err(ResizeError::NotResizing),
            GestureState::Released => {
                tracing::trace!("pointer move after release ignored");
                return Ok(Vec::new());
            }
            GestureState::Resizing { origin, original, .. } => self.compute(original, origin, &pointer),
        };
        if let GestureState::Resizing { last, .. } = &mut self.state {
            *last = evt;
        }

        tracing::trace!(width = evt.current.width, height = evt.current.height, "resize progress");
        Ok(vec![Action::Progress(evt)])
    }

    /// Finish the gesture at `pointer`: a final progress, teardown, then end.
    ///
    /// Calling `end` again after teardown is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::NotResizing`] if no gesture was ever started.
    pub fn end(&mut self, pointer: PointerEvent) -> Result<Vec<Action>, ResizeError> {
        let evt = match &self.state {
            GestureState::Idle => return Err(ResizeError::NotResizing),
            GestureState::Released => {
                tracing::debug!("resize end after release ignored");
                return Ok(Vec::new());
            }
            GestureState::Resizing { origin, original, .. } => self.compute(original, origin, &pointer),
        };

        let mut actions = vec![Action::Progress(evt)];
        actions.extend(self.release());
        actions.push(Action::End(evt));

        tracing::debug!(
            direction = %evt.direction,
            width = evt.current.width,
            height = evt.current.height,
            "resize ended"
        );
        Ok(actions)
    }

    /// Abort the active gesture without a pointer position.
    ///
    /// Runs the same teardown as [`Resizer::end`] and reports `Cancelled`
    /// instead of `End`. A no-op when no gesture is active.
    pub fn cancel(&mut self) -> Vec<Action> {
        let GestureState::Resizing { original, last, .. } = &self.state else {
            return Vec::new();
        };
        let cancel = ResizeCancel { original: *original, last: last.current, direction: self.config.direction };

        let mut actions = self.release();
        actions.push(Action::Cancelled(cancel));

        tracing::debug!(direction = %cancel.direction, "resize cancelled");
        actions
    }

    fn release(&mut self) -> Vec<Action> {
        self.state = GestureState::Released;
        vec![Action::ReleaseListeners, Action::RemoveClass(self.config.apply_class.clone())]
    }

    fn compute(&self, original: &Rect, origin: &PointerEvent, pointer: &PointerEvent) -> ResizeEvent {
        engine::resize_event(self.config.direction, original, origin, pointer, &self.config.constraints())
    }
}
