//! The grid state store.
//!
//! One `GridState` is exclusively owned by one grid widget and is the single
//! source of truth for layout, data and interaction state. External property
//! changes funnel through setters that clamp input and recompute derived
//! fields in the same call, so a reader can never observe a field without its
//! dependents (`tr_height`, `content_body_height`, `display_item_count`,
//! `frozen_columns_width`, `selected_all`) already updated.
//!
//! User-driven operations additionally push a [`GridEvent`] into an outbox
//! drained via [`GridState::take_events`]; externally pushed setters never
//! emit events, which is what prevents feedback loops between the host
//! application and the engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Column, DataItem, OrderBy, Page, RowId, RowSelection, SelectedAll, SortParam};
use crate::window::Projection;
use crate::{columns, geometry, selection};

/// Output events raised by user-driven operations, carrying post-change
/// snapshots (never deltas the caller must merge).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum GridEvent {
    /// A column was interactively resized.
    ColumnsChanged {
        index: usize,
        width: f32,
        columns: Vec<Column>,
    },
    /// Row selection changed through the selector column or header checkbox.
    SelectionChanged {
        selected_ids: Vec<RowId>,
        selected_all: SelectedAll,
    },
    /// A header click cycled the sort params.
    SortChanged { sort_params: Vec<SortParam> },
    /// The footer navigated to another page.
    PageChanged {
        current_page: usize,
        page_size: usize,
    },
}

/// Externally supplied properties; every field is independently optional and
/// only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Props {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub header_height: Option<f32>,
    pub footer_height: Option<f32>,
    pub item_height: Option<f32>,
    pub item_padding: Option<f32>,
    pub frozen_column_index: Option<usize>,
    pub columns: Option<Vec<Column>>,
    pub data: Option<Vec<DataItem>>,
    pub row_selection: Option<RowSelection>,
    pub sort_params: Option<Vec<SortParam>>,
    pub page: Option<Page>,
    pub loading: Option<bool>,
    pub spinning: Option<bool>,
    pub scroll_top: Option<f32>,
    pub scroll_left: Option<f32>,
}

/// Serializable view of the store for the presentation layer: every field it
/// needs to paint header, visible body slice, footer and overlays.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub header_height: f32,
    pub footer_height: f32,
    pub item_height: f32,
    pub item_padding: f32,
    pub container_border_width: f32,
    pub tr_height: f32,
    pub content_body_height: f32,
    pub display_item_count: usize,
    pub scroll_top: f32,
    pub scroll_left: f32,
    pub columns: Vec<Column>,
    pub frozen_column_index: usize,
    pub frozen_columns_width: f32,
    pub visible_rows: Vec<DataItem>,
    pub row_selection_enabled: bool,
    pub selected_ids: Vec<RowId>,
    pub selected_all: SelectedAll,
    pub sort_params: Vec<SortParam>,
    pub page: Option<Page>,
    pub loading: bool,
    pub spinning: bool,
    pub initialized: bool,
    pub projection: Projection,
}

/// Single authoritative mutable state for one grid instance.
#[derive(Debug, Clone)]
pub struct GridState {
    width: f32,
    height: f32,
    header_height: f32,
    footer_height: f32,
    item_height: f32,
    item_padding: f32,
    container_border_width: f32,

    // Derived geometry, recomputed by the setters that dirty it.
    tr_height: f32,
    content_body_height: f32,
    display_item_count: usize,
    frozen_columns_width: f32,

    scroll_top: f32,
    scroll_left: f32,

    columns: Vec<Column>,
    frozen_column_index: usize,
    data: Vec<DataItem>,

    row_selection: Option<RowSelection>,
    selected_all: SelectedAll,

    sort_params: Vec<SortParam>,
    page: Option<Page>,

    loading: bool,
    spinning: bool,
    initialized: bool,

    events: Vec<GridEvent>,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

impl GridState {
    /// Create a store with default geometry and no data.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self {
            width: 600.0,
            height: 400.0,
            header_height: geometry::DEFAULT_HEADER_HEIGHT,
            footer_height: geometry::DEFAULT_FOOTER_HEIGHT,
            item_height: geometry::DEFAULT_ITEM_HEIGHT,
            item_padding: geometry::DEFAULT_ITEM_PADDING,
            container_border_width: geometry::CONTAINER_BORDER_WIDTH,
            tr_height: 0.0,
            content_body_height: 0.0,
            display_item_count: 0,
            frozen_columns_width: 0.0,
            scroll_top: 0.0,
            scroll_left: 0.0,
            columns: Vec::new(),
            frozen_column_index: 0,
            data: Vec::new(),
            row_selection: None,
            selected_all: SelectedAll::None,
            sort_params: Vec::new(),
            page: None,
            loading: false,
            spinning: false,
            initialized: false,
            events: Vec::new(),
        };
        state.recompute_geometry();
        state.recompute_frozen_width();
        state
    }

    // ------------------------------------------------------------------
    // Readers
    // ------------------------------------------------------------------

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[must_use]
    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    #[must_use]
    pub fn footer_height(&self) -> f32 {
        self.footer_height
    }

    #[must_use]
    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    #[must_use]
    pub fn item_padding(&self) -> f32 {
        self.item_padding
    }

    #[must_use]
    pub fn container_border_width(&self) -> f32 {
        self.container_border_width
    }

    #[must_use]
    pub fn tr_height(&self) -> f32 {
        self.tr_height
    }

    #[must_use]
    pub fn content_body_height(&self) -> f32 {
        self.content_body_height
    }

    #[must_use]
    pub fn display_item_count(&self) -> usize {
        self.display_item_count
    }

    #[must_use]
    pub fn frozen_columns_width(&self) -> f32 {
        self.frozen_columns_width
    }

    #[must_use]
    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    #[must_use]
    pub fn scroll_left(&self) -> f32 {
        self.scroll_left
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn frozen_column_index(&self) -> usize {
        self.frozen_column_index
    }

    #[must_use]
    pub fn data(&self) -> &[DataItem] {
        &self.data
    }

    #[must_use]
    pub fn row_selection(&self) -> Option<&RowSelection> {
        self.row_selection.as_ref()
    }

    #[must_use]
    pub fn row_selection_enabled(&self) -> bool {
        self.row_selection.is_some()
    }

    /// O(1) selection membership check used per visible row.
    #[must_use]
    pub fn is_selected(&self, id: RowId) -> bool {
        self.row_selection
            .as_ref()
            .is_some_and(|rs| rs.selected_ids.contains(&id))
    }

    #[must_use]
    pub fn selected_all(&self) -> SelectedAll {
        self.selected_all
    }

    #[must_use]
    pub fn sort_params(&self) -> &[SortParam] {
        &self.sort_params
    }

    #[must_use]
    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn spinning(&self) -> bool {
        self.spinning
    }

    #[must_use]
    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// The row slice the presentation layer should materialize right now.
    #[must_use]
    pub fn visible_rows(&self) -> &[DataItem] {
        let projection = Projection::of(self);
        let end = projection.start_index + projection.visible_count;
        self.data.get(projection.start_index..end).unwrap_or(&[])
    }

    /// Serializable view of the full store plus the derived projection.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            header_height: self.header_height,
            footer_height: self.footer_height,
            item_height: self.item_height,
            item_padding: self.item_padding,
            container_border_width: self.container_border_width,
            tr_height: self.tr_height,
            content_body_height: self.content_body_height,
            display_item_count: self.display_item_count,
            scroll_top: self.scroll_top,
            scroll_left: self.scroll_left,
            columns: self.columns.clone(),
            frozen_column_index: self.frozen_column_index,
            frozen_columns_width: self.frozen_columns_width,
            visible_rows: self.visible_rows().to_vec(),
            row_selection_enabled: self.row_selection.is_some(),
            selected_ids: self.sorted_selected_ids(),
            selected_all: self.selected_all,
            sort_params: self.sort_params.clone(),
            page: self.page.clone(),
            loading: self.loading,
            spinning: self.spinning,
            initialized: self.initialized,
            projection: Projection::of(self),
        }
    }

    // ------------------------------------------------------------------
    // Externally pushed property setters (never emit events)
    // ------------------------------------------------------------------

    /// Apply a partial property update; only present fields are touched.
    ///
    /// # Errors
    /// Returns `GridError::Column` when the supplied columns repeat a key;
    /// no field is applied in that case.
    pub fn apply_props(&mut self, props: Props) -> Result<()> {
        if let Some(cols) = &props.columns {
            columns::validate(cols)?;
        }

        if let Some(v) = props.width {
            self.set_width(v);
        }
        if let Some(v) = props.height {
            self.set_height(v);
        }
        if let Some(v) = props.header_height {
            self.set_header_height(v);
        }
        if let Some(v) = props.footer_height {
            self.set_footer_height(v);
        }
        if let Some(v) = props.item_height {
            self.set_item_height(v);
        }
        if let Some(v) = props.item_padding {
            self.set_item_padding(v);
        }
        if let Some(cols) = props.columns {
            self.set_columns(cols);
        }
        if let Some(v) = props.frozen_column_index {
            self.set_frozen_column_index(v);
        }
        if let Some(rows) = props.data {
            self.set_data(rows);
        }
        if let Some(rs) = props.row_selection {
            self.set_row_selection(Some(rs));
        }
        if let Some(params) = props.sort_params {
            self.set_sort_params(params);
        }
        if let Some(page) = props.page {
            self.set_page(Some(page));
        }
        if let Some(v) = props.loading {
            self.set_loading(v);
        }
        if let Some(v) = props.spinning {
            self.set_spinning(v);
        }
        if props.scroll_top.is_some() || props.scroll_left.is_some() {
            self.set_scroll(
                props.scroll_top.unwrap_or(self.scroll_top),
                props.scroll_left.unwrap_or(self.scroll_left),
            );
        }
        Ok(())
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width.max(geometry::MIN_WIDTH);
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height.max(geometry::MIN_HEIGHT);
        self.recompute_geometry();
    }

    pub fn set_header_height(&mut self, header_height: f32) {
        self.header_height = header_height.max(geometry::MIN_HEADER_HEIGHT);
        self.recompute_geometry();
    }

    pub fn set_footer_height(&mut self, footer_height: f32) {
        self.footer_height = footer_height;
        self.recompute_geometry();
    }

    pub fn set_item_height(&mut self, item_height: f32) {
        self.item_height = item_height;
        self.recompute_geometry();
        // Row-selector sizing tracks the item height
        self.recompute_frozen_width();
    }

    pub fn set_item_padding(&mut self, item_padding: f32) {
        self.item_padding = item_padding;
        self.recompute_geometry();
        self.recompute_frozen_width();
    }

    /// Recomputes the frozen-pane width before storing the index so the two
    /// fields are never observed inconsistent.
    pub fn set_frozen_column_index(&mut self, index: usize) {
        self.frozen_columns_width = geometry::frozen_columns_width(
            self.row_selection.is_some(),
            self.item_height,
            index,
            &self.columns,
        );
        self.frozen_column_index = index;
    }

    pub fn set_columns(&mut self, cols: Vec<Column>) {
        self.columns = cols;
        self.recompute_frozen_width();
    }

    pub fn set_data(&mut self, rows: Vec<DataItem>) {
        self.data = rows;
        // Which ids are "loaded" just changed; the tri-state must follow.
        self.recompute_selection();
    }

    pub fn set_row_selection(&mut self, row_selection: Option<RowSelection>) {
        self.row_selection = row_selection;
        self.recompute_selection();
        self.recompute_frozen_width();
    }

    /// Replace the selected-id set. Ignored while row selection is disabled.
    pub fn set_selected_ids(&mut self, ids: HashSet<RowId>) {
        if let Some(rs) = self.row_selection.as_mut() {
            rs.selected_ids = ids;
            self.recompute_selection();
        }
    }

    pub fn set_sort_params(&mut self, params: Vec<SortParam>) {
        self.sort_params = params;
    }

    /// Presence of a page toggles the footer and with it the body height.
    pub fn set_page(&mut self, page: Option<Page>) {
        self.page = page;
        self.recompute_geometry();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_spinning(&mut self, spinning: bool) {
        self.spinning = spinning;
    }

    /// Atomic update of both scroll axes; they are never set independently
    /// so no frame can observe one axis stale during a synchronized event.
    pub fn set_scroll(&mut self, top: f32, left: f32) {
        self.scroll_top = top.max(0.0);
        self.scroll_left = left.max(0.0);
    }

    /// One-shot initialization flag; gates scroll-listener attachment.
    pub fn set_initialized(&mut self) {
        self.initialized = true;
    }

    // ------------------------------------------------------------------
    // User-driven operations (emit events with post-change snapshots)
    // ------------------------------------------------------------------

    /// Drain the event outbox.
    pub fn take_events(&mut self) -> Vec<GridEvent> {
        std::mem::take(&mut self.events)
    }

    /// Interactive column resize. Emits `ColumnsChanged` with the full
    /// updated sequence; a no-op resize (same width, bad index) emits
    /// nothing.
    pub fn resize_column(&mut self, index: usize, new_width: f32) {
        let Some(current) = self.columns.get(index) else {
            return;
        };
        if (columns::width_of(current) - new_width).abs() <= f32::EPSILON {
            return;
        }
        self.columns = columns::resize(&self.columns, index, new_width);
        if index < self.frozen_column_index {
            self.recompute_frozen_width();
        }
        self.events.push(GridEvent::ColumnsChanged {
            index,
            width: new_width,
            columns: self.columns.clone(),
        });
    }

    /// Header select-all toggle: a full selection clears, anything else
    /// selects every currently loaded row.
    pub fn toggle_select_all(&mut self) {
        if self.row_selection.is_none() {
            return;
        }
        let ids = selection::toggle(self.selected_all, &self.data);
        if let Some(rs) = self.row_selection.as_mut() {
            rs.selected_ids = ids;
        }
        self.recompute_selection();
        self.emit_selection_changed();
    }

    /// Per-row selector click. Emits only when membership actually changes.
    pub fn set_row_selected(&mut self, id: RowId, selected: bool) {
        let Some(rs) = self.row_selection.as_mut() else {
            return;
        };
        let changed = if selected {
            rs.selected_ids.insert(id)
        } else {
            rs.selected_ids.remove(&id)
        };
        if changed {
            self.recompute_selection();
            self.emit_selection_changed();
        }
    }

    /// Header click on a sortable column: cycle asc -> desc -> removed,
    /// keeping multi-column priority in insertion order.
    pub fn toggle_sort(&mut self, key: &str) {
        let sortable = self
            .columns
            .iter()
            .find(|c| c.key == key)
            .is_some_and(|c| !c.sort_disable);
        if !sortable {
            return;
        }
        if let Some(pos) = self.sort_params.iter().position(|p| p.key == key) {
            let next = self.sort_params.get(pos).and_then(|p| p.order_by.cycled());
            match next {
                Some(order_by) => {
                    if let Some(param) = self.sort_params.get_mut(pos) {
                        param.order_by = order_by;
                    }
                }
                None => {
                    self.sort_params.remove(pos);
                }
            }
        } else {
            self.sort_params.push(SortParam::new(key, OrderBy::Asc));
        }
        self.events.push(GridEvent::SortChanged {
            sort_params: self.sort_params.clone(),
        });
    }

    /// Footer page navigation, clamped to the known page range. The engine
    /// only forwards the request; fetching the page is the caller's job.
    pub fn select_page(&mut self, page_no: usize) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        let clamped = if page.total_pages == 0 {
            0
        } else {
            page_no.min(page.total_pages - 1)
        };
        if clamped == page.current_page {
            return;
        }
        page.current_page = clamped;
        let (current_page, page_size) = (page.current_page, page.page_size);
        self.events.push(GridEvent::PageChanged {
            current_page,
            page_size,
        });
    }

    /// User scroll from the main pane. Atomic like `set_scroll`; emits no
    /// event because scroll state is engine-owned.
    pub fn update_scroll(&mut self, top: f32, left: f32) {
        self.set_scroll(top, left);
    }

    /// Wheel motion forwarded from the frozen pane, applied to the main
    /// pane's offsets and clamped to the scrollable content bounds.
    #[allow(clippy::cast_precision_loss)]
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32) {
        let total_height = self.data.len() as f32 * self.tr_height;
        let max_top = (total_height - self.content_body_height).max(0.0);
        let top = (self.scroll_top + delta_y).clamp(0.0, max_top);
        let left = (self.scroll_left + delta_x).max(0.0);
        self.set_scroll(top, left);
    }

    // ------------------------------------------------------------------
    // Named recomputation rules
    // ------------------------------------------------------------------

    fn recompute_geometry(&mut self) {
        self.tr_height = geometry::tr_height(self.item_height, self.item_padding);
        self.content_body_height = geometry::content_body_height(
            self.height,
            self.header_height,
            self.footer_height,
            self.page.is_some(),
            self.container_border_width,
        );
        self.display_item_count = geometry::display_item_count(
            self.content_body_height,
            self.item_height,
            self.item_padding,
        );
    }

    fn recompute_frozen_width(&mut self) {
        self.frozen_columns_width = geometry::frozen_columns_width(
            self.row_selection.is_some(),
            self.item_height,
            self.frozen_column_index,
            &self.columns,
        );
    }

    fn recompute_selection(&mut self) {
        self.selected_all = match self.row_selection.as_ref() {
            Some(rs) => selection::selected_all(&self.data, &rs.selected_ids),
            None => SelectedAll::None,
        };
    }

    fn sorted_selected_ids(&self) -> Vec<RowId> {
        let mut ids: Vec<RowId> = self
            .row_selection
            .as_ref()
            .map(|rs| rs.selected_ids.iter().copied().collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }

    fn emit_selection_changed(&mut self) {
        let event = GridEvent::SelectionChanged {
            selected_ids: self.sorted_selected_ids(),
            selected_all: self.selected_all,
        };
        self.events.push(event);
    }
}
