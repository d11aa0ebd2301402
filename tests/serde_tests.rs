//! Wire-format tests for the JavaScript boundary.
//!
//! Everything crossing into or out of the engine is camelCase JSON; these
//! tests pin the field names and conventions the host application codes
//! against.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::{
    Align, Column, DataItem, GridState, OrderBy, Props, RowSelection, SortParam,
};
use serde_json::json;

// ============================================================================
// INBOUND: PROPS
// ============================================================================

#[test]
fn test_props_parse_camel_case_partial_object() {
    let props: Props = serde_json::from_value(json!({
        "headerHeight": 40,
        "frozenColumnIndex": 2,
        "scrollTop": 58.5
    }))
    .unwrap();

    assert_eq!(props.header_height, Some(40.0));
    assert_eq!(props.frozen_column_index, Some(2));
    assert_eq!(props.scroll_top, Some(58.5));
    assert!(props.width.is_none());
    assert!(props.columns.is_none());
}

#[test]
fn test_props_parse_nested_feature_objects() {
    let props: Props = serde_json::from_value(json!({
        "rowSelection": { "selectedIds": [3, 7] },
        "sortParams": [{ "key": "name", "orderBy": "desc" }],
        "page": { "currentPage": 1, "pageSize": 50, "totalPages": 4 }
    }))
    .unwrap();

    let rs = props.row_selection.unwrap();
    assert!(rs.selected_ids.contains(&3) && rs.selected_ids.contains(&7));

    assert_eq!(
        props.sort_params.unwrap(),
        vec![SortParam::new("name", OrderBy::Desc)]
    );

    let page = props.page.unwrap();
    assert_eq!((page.current_page, page.page_size, page.total_pages), (1, 50, 4));
    assert_eq!(page.display_pagination_length, 5, "Absent footer length defaults");
}

#[test]
fn test_column_parse_defaults_and_alignment() {
    let col: Column = serde_json::from_value(json!({
        "key": "amount",
        "label": "Amount",
        "width": 90,
        "align": "right"
    }))
    .unwrap();

    assert_eq!(col.align, Some(Align::Right));
    assert!(!col.sort_disable, "sortDisable defaults off");

    let bare: Column = serde_json::from_value(json!({ "key": "k", "label": "K" })).unwrap();
    assert_eq!(bare.width, None);
}

#[test]
fn test_data_item_carries_arbitrary_cell_values() {
    let item: DataItem = serde_json::from_value(json!({
        "id": 42,
        "values": { "name": "ada", "age": 36, "active": true }
    }))
    .unwrap();

    assert_eq!(item.id, 42);
    assert_eq!(item.value("name"), Some(&json!("ada")));
    assert_eq!(item.value("age"), Some(&json!(36)));
    assert_eq!(item.value("missing"), None);
}

// ============================================================================
// OUTBOUND: SNAPSHOT AND EVENTS
// ============================================================================

#[test]
fn test_snapshot_uses_camel_case_keys() {
    let mut state = GridState::new();
    state.set_columns(vec![Column::new("name", "Name").with_width(120.0)]);
    state.set_data((0..3).map(DataItem::new).collect());
    state.set_row_selection(Some(RowSelection::default()));

    let value = serde_json::to_value(state.snapshot()).unwrap();

    for key in [
        "trHeight",
        "contentBodyHeight",
        "displayItemCount",
        "frozenColumnsWidth",
        "visibleRows",
        "selectedAll",
        "rowSelectionEnabled",
        "projection",
    ] {
        assert!(value.get(key).is_some(), "snapshot missing {key}");
    }
    assert_eq!(value["selectedAll"], json!(false));
    assert_eq!(value["projection"]["paddingTop"], json!(0.0));
    assert_eq!(value["visibleRows"].as_array().unwrap().len(), 3);
}

#[test]
fn test_selection_event_serializes_tri_state_convention() {
    let mut state = GridState::new();
    state.set_data((0..2).map(DataItem::new).collect());
    state.set_row_selection(Some(RowSelection::default()));

    state.set_row_selected(0, true);
    let events = state.take_events();
    let value = serde_json::to_value(&events[0]).unwrap();

    assert_eq!(value["type"], json!("selectionChanged"));
    assert_eq!(value["selectedIds"], json!([0]));
    assert_eq!(value["selectedAll"], json!("indeterminate"));

    state.set_row_selected(1, true);
    let events = state.take_events();
    let value = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(value["selectedAll"], json!(true), "Full selection is plain true");
}

#[test]
fn test_sort_event_serializes_order_lowercase() {
    let mut state = GridState::new();
    state.set_columns(vec![Column::new("name", "Name")]);
    state.toggle_sort("name");

    let events = state.take_events();
    let value = serde_json::to_value(&events[0]).unwrap();

    assert_eq!(value["type"], json!("sortChanged"));
    assert_eq!(value["sortParams"], json!([{ "key": "name", "orderBy": "asc" }]));
}

#[test]
fn test_column_event_carries_camel_case_columns() {
    let mut state = GridState::new();
    state.set_columns(vec![
        Column::new("name", "Name").with_width(100.0).without_sort(),
    ]);
    state.resize_column(0, 140.0);

    let events = state.take_events();
    let value = serde_json::to_value(&events[0]).unwrap();

    assert_eq!(value["type"], json!("columnsChanged"));
    assert_eq!(value["columns"][0]["sortDisable"], json!(true));
    assert_eq!(value["columns"][0]["width"], json!(140.0));
    assert!(
        value["columns"][0].get("align").is_none(),
        "Unset optionals stay off the wire"
    );
}
