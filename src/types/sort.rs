use serde::{Deserialize, Serialize};

/// Sort direction for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    Asc,
    Desc,
}

impl OrderBy {
    /// Next state in the asc -> desc -> removed cycle, `None` meaning the
    /// param is dropped entirely.
    #[must_use]
    pub fn cycled(self) -> Option<Self> {
        match self {
            Self::Asc => Some(Self::Desc),
            Self::Desc => None,
        }
    }
}

/// One entry of a multi-column sort. Position in the sort param sequence is
/// the sort priority.
///
/// Sorting is advisory: the engine never reorders `data` itself, it only
/// reports the requested params back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortParam {
    pub key: String,
    pub order_by: OrderBy,
}

impl SortParam {
    pub fn new(key: impl Into<String>, order_by: OrderBy) -> Self {
        Self {
            key: key.into(),
            order_by,
        }
    }
}
