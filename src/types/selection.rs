use std::collections::HashSet;
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::RowId;

/// Tri-state "select all" indicator derived from the currently loaded rows.
///
/// Serialized as `true` / `false` / `"indeterminate"`, the wire convention
/// header checkboxes expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectedAll {
    All,
    #[default]
    None,
    Indeterminate,
}

impl SelectedAll {
    #[must_use]
    pub fn is_all(self) -> bool {
        self == Self::All
    }

    #[must_use]
    pub fn is_indeterminate(self) -> bool {
        self == Self::Indeterminate
    }
}

impl Serialize for SelectedAll {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_bool(true),
            Self::None => serializer.serialize_bool(false),
            Self::Indeterminate => serializer.serialize_str("indeterminate"),
        }
    }
}

struct SelectedAllVisitor;

impl Visitor<'_> for SelectedAllVisitor {
    type Value = SelectedAll;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean or the string \"indeterminate\"")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<SelectedAll, E> {
        Ok(if v { SelectedAll::All } else { SelectedAll::None })
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<SelectedAll, E> {
        if v == "indeterminate" {
            Ok(SelectedAll::Indeterminate)
        } else {
            Err(de::Error::invalid_value(de::Unexpected::Str(v), &self))
        }
    }
}

impl<'de> Deserialize<'de> for SelectedAll {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SelectedAllVisitor)
    }
}

/// Row selection feature config. Presence of this on the store enables the
/// row-selector column and its frozen-pane width allowance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSelection {
    #[serde(default)]
    pub selected_ids: HashSet<RowId>,
}

impl RowSelection {
    #[must_use]
    pub fn new(selected_ids: HashSet<RowId>) -> Self {
        Self { selected_ids }
    }
}
