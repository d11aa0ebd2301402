//! Column layout management: width lookup, interactive resize and the
//! freeze-boundary slice.
//!
//! Column sequences received from the caller are treated as immutable
//! snapshots; resize produces a fresh sequence instead of mutating in place.

use std::collections::HashSet;

use crate::error::{GridError, Result};
use crate::types::Column;

/// Effective pixel width of a column; unset widths count as 0.
#[must_use]
pub fn width_of(column: &Column) -> f32 {
    column.width.unwrap_or(0.0)
}

/// The frozen prefix of the column sequence.
///
/// A freeze boundary past the end of the sequence degrades to "freeze all
/// columns" rather than erroring.
#[must_use]
pub fn frozen_slice(columns: &[Column], frozen_column_index: usize) -> &[Column] {
    let end = frozen_column_index.min(columns.len());
    columns.get(..end).unwrap_or(columns)
}

/// Replace the width of the column at `index`, leaving every other column
/// untouched and order preserved. An out-of-range index returns the input
/// unchanged.
#[must_use]
pub fn resize(columns: &[Column], index: usize, new_width: f32) -> Vec<Column> {
    columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            if i == index {
                let mut resized = col.clone();
                resized.width = Some(new_width);
                resized
            } else {
                col.clone()
            }
        })
        .collect()
}

/// Check the caller-supplied column sequence for duplicate keys.
///
/// # Errors
/// Returns `GridError::Column` naming the first repeated key.
pub fn validate(columns: &[Column]) -> Result<()> {
    let mut seen = HashSet::with_capacity(columns.len());
    for col in columns {
        if !seen.insert(col.key.as_str()) {
            return Err(GridError::Column(format!(
                "duplicate column key: {}",
                col.key
            )));
        }
    }
    Ok(())
}

/// Parse and validate a JSON column definition list.
///
/// # Errors
/// Returns an error if the JSON is malformed or a column key repeats.
pub fn from_json(json: &str) -> Result<Vec<Column>> {
    let columns: Vec<Column> = serde_json::from_str(json)?;
    validate(&columns)?;
    Ok(columns)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]
mod tests {
    use super::*;

    fn three_columns() -> Vec<Column> {
        vec![
            Column::new("a", "A").with_width(100.0),
            Column::new("b", "B").with_width(150.0),
            Column::new("c", "C").with_width(200.0),
        ]
    }

    #[test]
    fn test_resize_only_touches_target() {
        let cols = three_columns();
        let resized = resize(&cols, 1, 250.0);

        assert_eq!(resized.len(), cols.len());
        assert_eq!(resized[0], cols[0]);
        assert_eq!(resized[1].width, Some(250.0));
        assert_eq!(resized[2], cols[2]);
    }

    #[test]
    fn test_resize_out_of_range_is_noop() {
        let cols = three_columns();
        assert_eq!(resize(&cols, 7, 250.0), cols);
    }

    #[test]
    fn test_frozen_slice_clamps_past_end() {
        let cols = three_columns();
        assert_eq!(frozen_slice(&cols, 2).len(), 2);
        assert_eq!(frozen_slice(&cols, 10).len(), 3);
        assert!(frozen_slice(&cols, 0).is_empty());
    }

    #[test]
    fn test_validate_rejects_duplicate_keys() {
        let mut cols = three_columns();
        cols.push(Column::new("b", "B again"));
        assert!(validate(&cols).is_err());
        assert!(validate(&three_columns()).is_ok());
    }
}
