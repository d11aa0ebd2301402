//! Scroll-to-window synchronization.
//!
//! Maps the continuous scroll position of the main pane to a discrete visible
//! row slice, and projects the frozen pane's purely visual offsets. The
//! projection is derived on read from the store, so a scroll update and its
//! window can never be observed apart.

use serde::Serialize;

use crate::store::GridState;

/// Per-frame offsets and the visible row slice, derived from store state.
///
/// The frozen pane has no scrollbar of its own: vertically it mirrors the
/// main pane through `frozen_margin_top`, horizontally it never moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Top offset of the rendered slice, snapped to the row grid so only
    /// whole rows are ever partially clipped at the viewport edge.
    pub padding_top: f32,
    /// Negative top margin applied to the frozen pane's content.
    pub frozen_margin_top: f32,
    /// Negative left margin applied to header and body of the main pane.
    pub header_margin_left: f32,
    /// Fixed left padding of the main pane, equal to the frozen-pane width.
    pub header_padding_left: f32,
    /// Index of the first row in the visible slice.
    pub start_index: usize,
    /// Number of rows the presentation layer should materialize.
    pub visible_count: usize,
    /// Full scroll height of the dataset (the scroll spacer size).
    pub total_content_height: f32,
    /// Whether a frozen pane is logically active at all.
    pub frozen_active: bool,
}

impl Projection {
    /// Derive the projection for the store's current scroll position.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn of(state: &GridState) -> Self {
        let tr_height = state.tr_height();
        let scroll_top = state.scroll_top().max(0.0);
        let data_len = state.data().len();
        let frozen_width = state.frozen_columns_width();

        let (padding_top, frozen_margin_top, start_index) = if tr_height > 0.0 {
            let row = (scroll_top / tr_height).floor();
            (
                row * tr_height,
                -(scroll_top % tr_height),
                (row as usize).min(data_len),
            )
        } else {
            (0.0, 0.0, 0)
        };

        let visible_count = state
            .display_item_count()
            .min(data_len.saturating_sub(start_index));

        Self {
            padding_top,
            frozen_margin_top,
            header_margin_left: -state.scroll_left(),
            header_padding_left: frozen_width,
            start_index,
            visible_count,
            total_content_height: sum_rows(data_len, tr_height),
            frozen_active: frozen_width > 0.0,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn sum_rows(data_len: usize, tr_height: f32) -> f32 {
    data_len as f32 * tr_height
}

/// Resolve a wheel event into `(delta_x, delta_y)` pixels for the main pane.
///
/// Reads the most specific delta available: a non-zero legacy `detail` is
/// scaled by 10; otherwise `deltaY`/`deltaX`; otherwise the inverted
/// `wheelDelta` convention. The frozen pane forwards its wheel motion here
/// because it is not independently scrollable.
#[must_use]
pub fn wheel_delta(
    detail: f64,
    delta_x: Option<f64>,
    delta_y: Option<f64>,
    legacy_wheel_delta: Option<f64>,
) -> (f32, f32) {
    if detail.abs() > f64::EPSILON {
        return (0.0, narrowed(detail * 10.0));
    }
    if let Some(dy) = delta_y {
        return (narrowed(delta_x.unwrap_or(0.0)), narrowed(dy));
    }
    if let Some(wd) = legacy_wheel_delta {
        return (0.0, narrowed(-wd));
    }
    (0.0, 0.0)
}

#[allow(clippy::cast_possible_truncation)]
fn narrowed(v: f64) -> f32 {
    v as f32
}
