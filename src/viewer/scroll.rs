//! Scroll and wheel listener wiring for `GridView`.
//!
//! The main pane owns the only real scrollbars; the frozen pane's wheel
//! events are translated into adjustments of the main pane's `scrollTop`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, HtmlDivElement, WheelEvent};

use super::GridView;
use crate::store::GridState;
use crate::window;

fn scroll_top_f64(element: &HtmlDivElement) -> f64 {
    Reflect::get(element.as_ref(), &JsValue::from_str("scrollTop"))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(f64::from(element.scroll_top()))
}

fn scroll_left_f64(element: &HtmlDivElement) -> f64 {
    Reflect::get(element.as_ref(), &JsValue::from_str("scrollLeft"))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(f64::from(element.scroll_left()))
}

/// Legacy `wheelDelta` is not part of the typed event surface.
fn legacy_wheel_delta(event: &WheelEvent) -> Option<f64> {
    Reflect::get(event.as_ref(), &JsValue::from_str("wheelDelta"))
        .ok()
        .and_then(|value| value.as_f64())
}

/// `deltaY` read dynamically so an engine without it falls through to the
/// legacy convention instead of reporting 0.
fn delta_y_opt(event: &WheelEvent) -> Option<f64> {
    Reflect::get(event.as_ref(), &JsValue::from_str("deltaY"))
        .ok()
        .and_then(|value| value.as_f64())
}

fn delta_x_opt(event: &WheelEvent) -> Option<f64> {
    Reflect::get(event.as_ref(), &JsValue::from_str("deltaX"))
        .ok()
        .and_then(|value| value.as_f64())
}

impl GridView {
    /// Attach the scroll listener to the main pane and, when a frozen pane
    /// container exists, the wheel listener to it. `initialize` always
    /// detaches first, keeping re-attachment idempotent across re-renders.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn attach_listeners(&mut self) {
        let state: Rc<RefCell<GridState>> = Rc::clone(&self.state);
        let container = self.scroll_container.clone();
        let scroll_closure = Closure::wrap(Box::new(move |_event: Event| {
            let top = scroll_top_f64(&container) as f32;
            let left = scroll_left_f64(&container) as f32;
            state.borrow_mut().update_scroll(top, left);
        }) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        options.set_capture(true);
        let _ = self
            .scroll_container
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                scroll_closure.as_ref().unchecked_ref(),
                &options,
            );
        self.scroll_closure = Some(scroll_closure);

        if let Some(frozen) = self.frozen_container.clone() {
            let scroll_container = self.scroll_container.clone();
            let wheel_closure = Closure::wrap(Box::new(move |event: WheelEvent| {
                event.prevent_default();
                let (_dx, dy) = window::wheel_delta(
                    f64::from(event.detail()),
                    delta_x_opt(&event),
                    delta_y_opt(&event),
                    legacy_wheel_delta(&event),
                );
                // Adjust the main pane, not the frozen pane; the resulting
                // scroll event flows back through the listener above.
                let top = scroll_top_f64(&scroll_container) + f64::from(dy);
                scroll_container.set_scroll_top(top as i32);
            }) as Box<dyn FnMut(WheelEvent)>);

            let _ = frozen.add_event_listener_with_callback(
                "wheel",
                wheel_closure.as_ref().unchecked_ref(),
            );
            self.wheel_closure = Some(wheel_closure);
        }
    }

    /// Remove both listeners. A no-op when nothing was ever attached.
    pub(crate) fn detach_listeners(&mut self) {
        if let Some(closure) = self.scroll_closure.take() {
            let _ = self
                .scroll_container
                .remove_event_listener_with_callback_and_bool(
                    "scroll",
                    closure.as_ref().unchecked_ref(),
                    true,
                );
        }
        if let (Some(closure), Some(frozen)) = (self.wheel_closure.take(), &self.frozen_container) {
            let _ = frozen
                .remove_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        }
    }

    /// Push the store's scroll position into the container, used to restore
    /// an externally supplied offset when initialization completes.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn apply_scroll_to_container(&self) {
        let (top, left) = {
            let state = self.state.borrow();
            (state.scroll_top(), state.scroll_left())
        };
        self.scroll_container.set_scroll_top(top as i32);
        self.scroll_container.set_scroll_left(left as i32);
    }
}
