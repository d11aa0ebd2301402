//! Pure pixel geometry for the grid chrome.
//!
//! Everything here is a deterministic function of its inputs; the store calls
//! into this module whenever a dependency of a derived field changes.

use crate::columns;
use crate::types::Column;

/// Fixed border width of the outer grid container in pixels.
pub const CONTAINER_BORDER_WIDTH: f32 = 1.0;

/// Minimum outer viewport width enforced on every external update.
pub const MIN_WIDTH: f32 = 100.0;

/// Minimum outer viewport height enforced on every external update.
pub const MIN_HEIGHT: f32 = 100.0;

/// Minimum header height enforced on every external update.
pub const MIN_HEADER_HEIGHT: f32 = 22.0;

/// Default header height in pixels.
pub const DEFAULT_HEADER_HEIGHT: f32 = 30.0;

/// Default footer height in pixels (only rendered when paging is enabled).
pub const DEFAULT_FOOTER_HEIGHT: f32 = 30.0;

/// Default row content height in pixels.
pub const DEFAULT_ITEM_HEIGHT: f32 = 15.0;

/// Default vertical row padding in pixels (applied above and below).
pub const DEFAULT_ITEM_PADDING: f32 = 7.0;

/// The selection checkbox never grows past this size.
const ROW_SELECTOR_MAX_CHECKBOX: f32 = 15.0;

/// Horizontal allowance around the selection checkbox (7px each side).
const ROW_SELECTOR_PADDING: f32 = 14.0;

/// Pixel width reserved for the row-selector column.
#[must_use]
pub fn row_selector_width(item_height: f32) -> f32 {
    item_height.min(ROW_SELECTOR_MAX_CHECKBOX) + ROW_SELECTOR_PADDING
}

/// Pixel width of the frozen pane: the row-selector allowance (when row
/// selection is enabled) plus the widths of all frozen columns.
///
/// A `frozen_column_index` past the end of `columns` freezes every column.
#[must_use]
pub fn frozen_columns_width(
    row_selection_enabled: bool,
    item_height: f32,
    frozen_column_index: usize,
    cols: &[Column],
) -> f32 {
    let mut width = 0.0;
    if row_selection_enabled {
        width += row_selector_width(item_height);
    }
    if frozen_column_index > 0 {
        width += columns::frozen_slice(cols, frozen_column_index)
            .iter()
            .map(columns::width_of)
            .sum::<f32>();
    }
    width
}

/// Effective vertical footprint of one data row: content height, padding on
/// both sides, and one reserved border pixel.
#[must_use]
pub fn tr_height(item_height: f32, item_padding: f32) -> f32 {
    item_height + item_padding * 2.0 + 1.0
}

/// Height of the scrollable body region: outer height minus header, footer
/// (when paging is active) and both container borders.
///
/// Clamped to zero when the chrome exceeds the outer height.
#[must_use]
pub fn content_body_height(
    height: f32,
    header_height: f32,
    footer_height: f32,
    has_page: bool,
    container_border_width: f32,
) -> f32 {
    let footer = if has_page { footer_height } else { 0.0 };
    (height - header_height - footer - container_border_width * 2.0).max(0.0)
}

/// Number of rows needed to fill the body without virtualization gaps.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn display_item_count(content_body_height: f32, item_height: f32, item_padding: f32) -> usize {
    let row_height = item_height + item_padding * 2.0;
    if row_height <= 0.0 || content_body_height <= 0.0 {
        return 0;
    }
    (content_body_height / row_height).ceil() as usize
}
