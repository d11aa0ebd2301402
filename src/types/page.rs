use serde::{Deserialize, Serialize};

/// Number of page buttons the footer shows when the caller does not say.
pub const DEFAULT_DISPLAY_PAGINATION_LENGTH: usize = 5;

fn default_display_pagination_length() -> usize {
    DEFAULT_DISPLAY_PAGINATION_LENGTH
}

/// Pagination state. Presence on the store toggles footer visibility and
/// the footer's share of the content body height.
///
/// Paging is advisory: page changes are forwarded to the caller, which
/// fetches and re-supplies the rows for the new page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Zero-based current page.
    #[serde(default)]
    pub current_page: usize,
    #[serde(default)]
    pub page_size: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub total_elements: usize,
    /// Page-fetch in flight; drawn by the footer, not the body overlay.
    #[serde(default)]
    pub loading: bool,
    #[serde(default = "default_display_pagination_length")]
    pub display_pagination_length: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            current_page: 0,
            page_size: 0,
            total_pages: 0,
            total_elements: 0,
            loading: false,
            display_pagination_length: DEFAULT_DISPLAY_PAGINATION_LENGTH,
        }
    }
}

impl Page {
    /// The window of page numbers the footer renders, centered on the current
    /// page and clamped at both ends.
    #[must_use]
    pub fn pagination_range(&self) -> Vec<usize> {
        pagination_range(
            self.current_page,
            self.total_pages,
            self.display_pagination_length,
        )
    }
}

/// Compute the visible page-number window for a footer of `display_length`
/// buttons. Pages are zero-based; an empty result means no footer buttons.
#[must_use]
pub fn pagination_range(
    current_page: usize,
    total_pages: usize,
    display_length: usize,
) -> Vec<usize> {
    if total_pages == 0 || display_length == 0 {
        return Vec::new();
    }
    let window = display_length.min(total_pages);
    let half = window / 2;
    let start = current_page
        .saturating_sub(half)
        .min(total_pages - window);
    (start..start + window).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_range_centers_on_current() {
        assert_eq!(pagination_range(5, 20, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_pagination_range_clamps_at_edges() {
        assert_eq!(pagination_range(0, 20, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(pagination_range(19, 20, 5), vec![15, 16, 17, 18, 19]);
    }

    #[test]
    fn test_pagination_range_short_page_count() {
        assert_eq!(pagination_range(1, 3, 5), vec![0, 1, 2]);
        assert_eq!(pagination_range(0, 0, 5), Vec::<usize>::new());
    }
}
