//! Structured error types for gridview.
//!
//! The core setters are infallible (bad numeric input is clamped, never
//! rejected); errors only arise at the JS/JSON boundary.

/// All errors that can occur at the gridview API boundary.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Invalid column definitions supplied by the host application.
    #[error("Invalid columns: {0}")]
    Column(String),

    /// JSON (de)serialization failure.
    #[error("Serialization: {0}")]
    Serde(#[from] serde_json::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
