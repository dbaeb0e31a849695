//! Browser DOM adapter.
//!
//! [`ResizeHandle`] binds a [`Resizer`] to a handle element: it listens for
//! `mousedown` on the handle, reads the target's offset rectangle, subscribes
//! to document `mousemove`/`mouseup` only while a gesture is active, toggles
//! the gesture CSS class, and forwards payloads to JavaScript callbacks as
//! plain objects.
//!
//! The three listener closures live as long as the handle, so removing a
//! document listener from inside its own callback never frees the closure
//! that is running.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::ResizeConfig;
use crate::error::ResizeError;
use crate::event::PointerEvent;
use crate::geom::Rect;
use crate::gesture::{Action, Resizer, TargetRect};

/// Reads `offsetTop`/`offsetLeft`/`offsetWidth`/`offsetHeight` of the target.
struct OffsetRect<'a>(Option<&'a HtmlElement>);

impl TargetRect for OffsetRect<'_> {
    fn target_rect(&self) -> Option<Rect> {
        self.0.map(|el| {
            Rect::new(
                f64::from(el.offset_top()),
                f64::from(el.offset_left()),
                f64::from(el.offset_width()),
                f64::from(el.offset_height()),
            )
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Default)]
struct Callbacks {
    start: Option<Function>,
    progress: Option<Function>,
    end: Option<Function>,
    cancel: Option<Function>,
}

/// JS handles needed to carry out actions, cloned out of the shared state so
/// callbacks may re-enter the handle (e.g. call `cancel()`).
#[derive(Clone)]
struct Host {
    document: Document,
    handle: HtmlElement,
    on_down: Function,
    on_move: Function,
    on_up: Function,
    callbacks: Callbacks,
}

struct Inner {
    resizer: Resizer,
    target: Option<HtmlElement>,
    host: Host,
    _listeners: [Closure<dyn FnMut(MouseEvent)>; 3],
}

/// A resize behavior attached to one handle element.
#[wasm_bindgen]
pub struct ResizeHandle {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl ResizeHandle {
    /// Attach to `handle`, resizing `target` per the JSON `config`.
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid, there is no document, or the
    /// `mousedown` listener cannot be registered.
    #[wasm_bindgen(constructor)]
    pub fn new(
        handle: HtmlElement,
        target: Option<HtmlElement>,
        config: &str,
        on_start: Option<Function>,
        on_progress: Option<Function>,
        on_end: Option<Function>,
        on_cancel: Option<Function>,
    ) -> Result<ResizeHandle, JsValue> {
        let resizer = Resizer::new(ResizeConfig::from_json(config).map_err(to_js)?).map_err(to_js)?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("resize handle requires a document"))?;
        let callbacks = Callbacks { start: on_start, progress: on_progress, end: on_end, cancel: on_cancel };

        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<Inner>>| {
            let on_down = listener(weak.clone(), Phase::Down);
            let on_move = listener(weak.clone(), Phase::Move);
            let on_up = listener(weak.clone(), Phase::Up);
            let host = Host {
                document,
                handle,
                on_down: on_down.as_ref().unchecked_ref::<Function>().clone(),
                on_move: on_move.as_ref().unchecked_ref::<Function>().clone(),
                on_up: on_up.as_ref().unchecked_ref::<Function>().clone(),
                callbacks,
            };
            RefCell::new(Inner { resizer, target, host, _listeners: [on_down, on_move, on_up] })
        });

        {
            let state = inner.borrow();
            state.host.handle.add_event_listener_with_callback("mousedown", &state.host.on_down)?;
            apply_cursor(&state.host.handle, &state.resizer);
        }
        Ok(ResizeHandle { inner })
    }

    /// Abort the active gesture, if any. Fires the cancel callback, never end.
    pub fn cancel(&self) {
        dispatch(&self.inner, Phase::Cancel, None);
    }

    #[wasm_bindgen(js_name = isResizing)]
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.inner.try_borrow().is_ok_and(|state| state.resizer.is_resizing())
    }

    /// Replace the config between gestures.
    ///
    /// # Errors
    ///
    /// Fails on invalid JSON, while a gesture is active, or while the handle
    /// is busy dispatching an event.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, config: &str) -> Result<(), JsValue> {
        let config = ResizeConfig::from_json(config).map_err(to_js)?;
        let Ok(mut state) = self.inner.try_borrow_mut() else {
            tracing::warn!("resize handle busy; config not replaced");
            return Err(JsValue::from_str("resize handle busy"));
        };
        state.resizer.set_config(config).map_err(to_js)?;
        apply_cursor(&state.host.handle, &state.resizer);
        Ok(())
    }
}

impl Drop for ResizeHandle {
    fn drop(&mut self) {
        dispatch(&self.inner, Phase::Cancel, None);
        if let Ok(state) = self.inner.try_borrow() {
            if let Err(err) = state.host.handle.remove_event_listener_with_callback("mousedown", &state.host.on_down) {
                tracing::warn!(?err, "failed to detach resize handle");
            }
        }
    }
}

fn listener(weak: Weak<RefCell<Inner>>, phase: Phase) -> Closure<dyn FnMut(MouseEvent)> {
    Closure::wrap(Box::new(move |evt: MouseEvent| {
        // Only the primary button starts a gesture.
        if matches!(phase, Phase::Down) && evt.button() != 0 {
            return;
        }
        if let Some(inner) = weak.upgrade() {
            dispatch(&inner, phase, Some(&evt));
        }
    }) as Box<dyn FnMut(MouseEvent)>)
}

fn dispatch(inner: &Rc<RefCell<Inner>>, phase: Phase, evt: Option<&MouseEvent>) {
    let pointer = evt.map_or_else(PointerEvent::default, |e| {
        PointerEvent::new(f64::from(e.client_x()), f64::from(e.client_y()))
    });

    let (actions, host) = {
        let Ok(mut guard) = inner.try_borrow_mut() else {
            tracing::warn!(?phase, "resize handle busy; event dropped");
            return;
        };
        let state = &mut *guard;
        let result = match phase {
            Phase::Down => state.resizer.begin(pointer, &OffsetRect(state.target.as_ref())),
            Phase::Move => state.resizer.on_pointer_move(pointer),
            Phase::Up => state.resizer.end(pointer),
            Phase::Cancel => Ok(state.resizer.cancel()),
        };
        match result {
            Ok(actions) => (actions, state.host.clone()),
            Err(err) => {
                tracing::warn!(?phase, error = %err, "resize event rejected");
                return;
            }
        }
    };

    for action in &actions {
        perform(&host, action, evt);
    }
}

fn perform(host: &Host, action: &Action, evt: Option<&MouseEvent>) {
    let outcome = match action {
        Action::PreventDefault => {
            if let Some(evt) = evt {
                evt.prevent_default();
            }
            Ok(())
        }
        Action::CaptureListeners => host
            .document
            .add_event_listener_with_callback("mousemove", &host.on_move)
            .and_then(|()| host.document.add_event_listener_with_callback("mouseup", &host.on_up)),
        Action::ReleaseListeners => host
            .document
            .remove_event_listener_with_callback("mousemove", &host.on_move)
            .and_then(|()| host.document.remove_event_listener_with_callback("mouseup", &host.on_up)),
        Action::AddClass(class) => host.handle.class_list().add_1(class),
        Action::RemoveClass(class) => host.handle.class_list().remove_1(class),
        Action::Start(payload) => notify(host.callbacks.start.as_ref(), payload),
        Action::Progress(payload) => notify(host.callbacks.progress.as_ref(), payload),
        Action::End(payload) => notify(host.callbacks.end.as_ref(), payload),
        Action::Cancelled(payload) => notify(host.callbacks.cancel.as_ref(), payload),
    };
    if let Err(err) = outcome {
        tracing::warn!(?action, ?err, "resize host action failed");
    }
}

fn notify(callback: Option<&Function>, payload: &impl Serialize) -> Result<(), JsValue> {
    let Some(callback) = callback else {
        return Ok(());
    };
    let json = serde_json::to_string(payload).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let value = js_sys::JSON::parse(&json)?;
    callback.call1(&JsValue::NULL, &value).map(|_| ())
}

fn apply_cursor(handle: &HtmlElement, resizer: &Resizer) {
    if let Err(err) = handle.style().set_property("cursor", resizer.config().direction.cursor()) {
        tracing::warn!(?err, "failed to set resize cursor");
    }
}

fn to_js(err: ResizeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
