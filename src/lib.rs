//! gridview - virtualized datagrid state engine for the web
//!
//! Keeps large tabular datasets scrollable without materializing every row:
//! - Windowed row rendering driven by scroll position
//! - Frozen leading columns kept in lock-step with the main pane
//! - Tri-state row selection, multi-column sort, pagination footer model
//! - Loading/spinning overlay flags
//!
//! The core state engine compiles natively and is fully testable off the
//! browser; DOM scroll/wheel wiring lives behind `target_arch = "wasm32"`.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const grid = new GridView(scrollContainer, frozenContainer);
//! grid.set_props({ width: 800, height: 500, columns, data });
//! grid.initialize();
//! render(grid.snapshot());
//! ```

pub mod columns;
pub mod error;
pub mod geometry;
pub mod selection;
pub mod store;
pub mod types;
pub mod window;

pub mod viewer;

use wasm_bindgen::prelude::*;

pub use store::{GridEvent, GridState, Props};
pub use types::*;
pub use window::Projection;

#[cfg(target_arch = "wasm32")]
pub use viewer::GridView;

/// Parse a JSON column definition list, enforcing unique column keys, and
/// return it as a `JsValue` ready to pass to `GridView.set_props`.
///
/// # Errors
/// Returns an error if the JSON is malformed or a column key repeats.
#[wasm_bindgen]
pub fn parse_columns(json: &str) -> Result<JsValue, JsValue> {
    let cols = columns::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&cols)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
