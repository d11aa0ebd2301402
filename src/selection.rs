//! Tri-state selection over the currently loaded rows.
//!
//! The indicator is recomputed wholesale from `data` and the selected-id set
//! on every change, never maintained incrementally, so a page or data swap
//! can never leave a stale indeterminate flag behind.

use std::collections::HashSet;

use crate::types::{DataItem, RowId, SelectedAll};

/// Derive the select-all indicator from the loaded rows and the selected-id
/// set. Empty data counts as nothing selected.
#[must_use]
pub fn selected_all(data: &[DataItem], selected_ids: &HashSet<RowId>) -> SelectedAll {
    if data.is_empty() {
        return SelectedAll::None;
    }
    let selected = data
        .iter()
        .filter(|item| selected_ids.contains(&item.id))
        .count();
    if selected == 0 {
        SelectedAll::None
    } else if selected == data.len() {
        SelectedAll::All
    } else {
        SelectedAll::Indeterminate
    }
}

/// The id set after toggling the header select-all control: a full selection
/// clears, anything else selects every currently loaded row.
#[must_use]
pub fn toggle(current: SelectedAll, data: &[DataItem]) -> HashSet<RowId> {
    match current {
        SelectedAll::All => HashSet::new(),
        SelectedAll::None | SelectedAll::Indeterminate => {
            data.iter().map(|item| item.id).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: RowId) -> Vec<DataItem> {
        (0..n).map(DataItem::new).collect()
    }

    #[test]
    fn test_selected_all_tri_state() {
        let data = rows(5);

        let none = HashSet::new();
        assert_eq!(selected_all(&data, &none), SelectedAll::None);

        let some: HashSet<RowId> = [0, 1, 2].into_iter().collect();
        assert_eq!(selected_all(&data, &some), SelectedAll::Indeterminate);

        let all: HashSet<RowId> = (0..5).collect();
        assert_eq!(selected_all(&data, &all), SelectedAll::All);
    }

    #[test]
    fn test_selected_all_ignores_unloaded_ids() {
        let data = rows(3);
        let stale: HashSet<RowId> = [100, 101].into_iter().collect();
        assert_eq!(selected_all(&data, &stale), SelectedAll::None);
    }

    #[test]
    fn test_toggle_from_partial_selects_all() {
        let data = rows(4);
        let toggled = toggle(SelectedAll::Indeterminate, &data);
        assert_eq!(toggled.len(), 4);

        let toggled = toggle(SelectedAll::None, &data);
        assert_eq!(toggled.len(), 4);
    }

    #[test]
    fn test_toggle_from_all_clears() {
        let data = rows(4);
        assert!(toggle(SelectedAll::All, &data).is_empty());
    }
}
