use serde::{Deserialize, Serialize};

/// Horizontal cell alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A column descriptor. Order within the column sequence defines both display
/// order and the freeze-boundary semantics.
///
/// Cell markup is presentation glue owned by the host application and
/// deliberately not part of the descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique key, also used to look up cell values on each row item.
    pub key: String,
    /// Header label.
    pub label: String,
    /// Pixel width; unset columns contribute 0 to the frozen-pane width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// When set, header clicks never cycle sort for this column.
    #[serde(default)]
    pub sort_disable: bool,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width: None,
            align: None,
            sort_disable: false,
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn without_sort(mut self) -> Self {
        self.sort_disable = true;
        self
    }
}
