//! Main `GridView` struct - the wasm boundary around the state engine.
//!
//! This module provides the WASM-exported `GridView` struct that handles:
//! - Applying host-supplied properties to the store
//! - Serializing state + projection snapshots back to JavaScript
//! - Scroll/wheel listener lifecycle on the two pane containers
//! - Dispatching user-interaction events to registered JS callbacks
//!
//! The presentation layer owns the DOM markup; `GridView` only tells it what
//! slice of rows to paint and at which offsets.

#[cfg(target_arch = "wasm32")]
mod scroll;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{Event, HtmlDivElement, WheelEvent};

#[cfg(target_arch = "wasm32")]
use crate::store::{GridEvent, GridState, Props};
#[cfg(target_arch = "wasm32")]
use crate::types::RowId;

/// JS callbacks for user-driven changes. Only user interaction fires these;
/// properties pushed in through `set_props` never echo back out.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct Callbacks {
    on_change_columns: Option<Function>,
    on_change_selection: Option<Function>,
    on_change_sort: Option<Function>,
    on_change_page: Option<Function>,
}

/// The grid view exported to JavaScript. One instance exclusively owns one
/// grid's state; it must not be shared across grid widgets.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct GridView {
    state: Rc<RefCell<GridState>>,
    callbacks: Callbacks,
    scroll_container: HtmlDivElement,
    frozen_container: Option<HtmlDivElement>,
    scroll_closure: Option<Closure<dyn FnMut(Event)>>,
    wheel_closure: Option<Closure<dyn FnMut(WheelEvent)>>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Create a view bound to the main scroll container and, when a frozen
    /// pane exists, its non-scrollable container.
    #[wasm_bindgen(constructor)]
    pub fn new(
        scroll_container: HtmlDivElement,
        frozen_container: Option<HtmlDivElement>,
    ) -> GridView {
        console_error_panic_hook::set_once();

        GridView {
            state: Rc::new(RefCell::new(GridState::new())),
            callbacks: Callbacks::default(),
            scroll_container,
            frozen_container,
            scroll_closure: None,
            wheel_closure: None,
        }
    }

    /// Apply a partial property object; only fields present on the object
    /// are touched, each validated/clamped independently.
    ///
    /// # Errors
    /// Returns an error for malformed props or duplicate column keys.
    pub fn set_props(&mut self, props: JsValue) -> Result<(), JsValue> {
        let props: Props = serde_wasm_bindgen::from_value(props)
            .map_err(|e| JsValue::from_str(&format!("Invalid props: {e}")))?;
        self.state.borrow_mut().apply_props(props)?;
        Ok(())
    }

    /// Remove pagination entirely; the footer disappears and the body
    /// height is recomputed.
    pub fn clear_page(&mut self) {
        self.state.borrow_mut().set_page(None);
    }

    /// Complete mount: marks the store initialized, attaches scroll/wheel
    /// listeners (detaching first, so re-initialization never duplicates
    /// handlers) and pushes any externally supplied initial scroll position
    /// into the container.
    pub fn initialize(&mut self) {
        self.state.borrow_mut().set_initialized();
        self.detach_listeners();
        self.attach_listeners();
        self.apply_scroll_to_container();
    }

    /// Tear down DOM listeners. Safe to call repeatedly or before
    /// `initialize`.
    pub fn destroy(&mut self) {
        self.detach_listeners();
    }

    /// Serialize the store plus the derived window projection.
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be serialized.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.state.borrow().snapshot())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    // ------------------------------------------------------------------
    // User interactions forwarded from the presentation layer
    // ------------------------------------------------------------------

    /// Interactive column resize from a header drag.
    pub fn resize_column(&mut self, index: usize, width: f32) {
        self.state.borrow_mut().resize_column(index, width);
        self.dispatch_events();
    }

    /// Header select-all checkbox click.
    pub fn toggle_select_all(&mut self) {
        self.state.borrow_mut().toggle_select_all();
        self.dispatch_events();
    }

    /// Row selector checkbox click.
    pub fn set_row_selected(&mut self, id: RowId, selected: bool) {
        self.state.borrow_mut().set_row_selected(id, selected);
        self.dispatch_events();
    }

    /// Header label click on a sortable column.
    pub fn toggle_sort(&mut self, key: &str) {
        self.state.borrow_mut().toggle_sort(key);
        self.dispatch_events();
    }

    /// Footer page-button click.
    pub fn select_page(&mut self, page_no: usize) {
        self.state.borrow_mut().select_page(page_no);
        self.dispatch_events();
    }

    // ------------------------------------------------------------------
    // Callback registration
    // ------------------------------------------------------------------

    /// `(index, width, columns)` after an interactive resize.
    pub fn set_on_change_columns(&mut self, callback: Option<Function>) {
        self.callbacks.on_change_columns = callback;
    }

    /// `(selectedIds, selectedAll)` after a selection change.
    pub fn set_on_change_selection(&mut self, callback: Option<Function>) {
        self.callbacks.on_change_selection = callback;
    }

    /// `(sortParams)` after a sort cycle.
    pub fn set_on_change_sort(&mut self, callback: Option<Function>) {
        self.callbacks.on_change_sort = callback;
    }

    /// `(currentPage, pageSize)` after footer navigation.
    pub fn set_on_change_page(&mut self, callback: Option<Function>) {
        self.callbacks.on_change_page = callback;
    }
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    /// Drain the store's outbox and route each event to its JS callback.
    /// Serialization failures are logged and skipped rather than aborting
    /// the remaining events.
    fn dispatch_events(&mut self) {
        let events = self.state.borrow_mut().take_events();
        for event in events {
            let result = match &event {
                GridEvent::ColumnsChanged {
                    index,
                    width,
                    columns,
                } => Self::invoke3(
                    self.callbacks.on_change_columns.as_ref(),
                    &JsValue::from_f64(*index as f64),
                    &JsValue::from_f64(f64::from(*width)),
                    columns,
                ),
                GridEvent::SelectionChanged {
                    selected_ids,
                    selected_all,
                } => Self::invoke2(
                    self.callbacks.on_change_selection.as_ref(),
                    selected_ids,
                    selected_all,
                ),
                GridEvent::SortChanged { sort_params } => {
                    Self::invoke1(self.callbacks.on_change_sort.as_ref(), sort_params)
                }
                GridEvent::PageChanged {
                    current_page,
                    page_size,
                } => self.callbacks.on_change_page.as_ref().map_or(Ok(()), |f| {
                    f.call2(
                        &JsValue::NULL,
                        &JsValue::from_f64(*current_page as f64),
                        &JsValue::from_f64(*page_size as f64),
                    )
                    .map(|_| ())
                    .map_err(|_| "callback threw".to_string())
                }),
            };
            if let Err(msg) = result {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "gridview: dropped change event: {msg}"
                )));
            }
        }
    }

    fn invoke1<A: serde::Serialize>(
        callback: Option<&Function>,
        a: &A,
    ) -> Result<(), String> {
        let Some(callback) = callback else {
            return Ok(());
        };
        let a = serde_wasm_bindgen::to_value(a).map_err(|e| e.to_string())?;
        callback
            .call1(&JsValue::NULL, &a)
            .map(|_| ())
            .map_err(|_| "callback threw".to_string())
    }

    fn invoke2<A: serde::Serialize, B: serde::Serialize>(
        callback: Option<&Function>,
        a: &A,
        b: &B,
    ) -> Result<(), String> {
        let Some(callback) = callback else {
            return Ok(());
        };
        let a = serde_wasm_bindgen::to_value(a).map_err(|e| e.to_string())?;
        let b = serde_wasm_bindgen::to_value(b).map_err(|e| e.to_string())?;
        callback
            .call2(&JsValue::NULL, &a, &b)
            .map(|_| ())
            .map_err(|_| "callback threw".to_string())
    }

    fn invoke3<C: serde::Serialize>(
        callback: Option<&Function>,
        a: &JsValue,
        b: &JsValue,
        c: &C,
    ) -> Result<(), String> {
        let Some(callback) = callback else {
            return Ok(());
        };
        let c = serde_wasm_bindgen::to_value(c).map_err(|e| e.to_string())?;
        callback
            .call3(&JsValue::NULL, a, b, &c)
            .map(|_| ())
            .map_err(|_| "callback threw".to_string())
    }
}
