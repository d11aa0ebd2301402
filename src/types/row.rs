use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity of a data row, used for selection membership.
pub type RowId = i64;

/// One loaded row: an identity plus a mapping of column key to cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataItem {
    pub id: RowId,
    #[serde(default)]
    pub values: Map<String, Value>,
}

impl DataItem {
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            values: Map::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Cell value for a column key, if the row carries one.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}
