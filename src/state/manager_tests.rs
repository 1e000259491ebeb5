//! Tests for the layout manager.

use super::*;
use crate::source::MemorySource;

fn mounted() -> LayoutManager<MemorySource> {
    LayoutManager::mount(MemorySource::sample(), TableOptions::default()).expect("mount")
}

fn mounted_with(config: LayoutConfig) -> LayoutManager<MemorySource> {
    LayoutManager::mount(
        MemorySource::sample().with_config(config),
        TableOptions::default(),
    )
    .expect("mount")
}

fn id(raw: &str) -> RowId {
    RowId::new(raw).unwrap()
}

fn page_ids<S: TableSource>(manager: &LayoutManager<S>) -> Vec<&str> {
    manager.page_rows().into_iter().map(|r| r.id.as_str()).collect()
}

fn order_strs<S: TableSource>(manager: &LayoutManager<S>) -> Vec<&'static str> {
    manager
        .columns()
        .order()
        .into_iter()
        .map(ColumnId::as_str)
        .collect()
}

// ===== Mount =====

#[test]
fn mount_sorts_by_amount_ascending() {
    let manager = mounted();
    assert_eq!(
        page_ids(&manager),
        vec!["row4", "row9", "row2", "row7", "row8", "row5", "row1"]
    );
    assert_eq!(manager.total_pages(), 2);
    assert_eq!(manager.pagination().page(), 1);
}

#[test]
fn mount_does_not_save() {
    let manager = mounted();
    assert!(manager.source().saves().is_empty());
}

#[test]
fn zero_page_size_is_rejected_at_mount() {
    let options = TableOptions {
        page_size: 0,
        ..TableOptions::default()
    };
    let result = LayoutManager::mount(MemorySource::sample(), options);
    assert!(matches!(result, Err(SourceError::InvalidOptions(_))));
}

#[test]
fn empty_table_has_one_empty_page() {
    let mut manager =
        LayoutManager::mount(MemorySource::new(Vec::new()), TableOptions::default()).unwrap();
    assert_eq!(manager.total_pages(), 1);
    assert!(manager.page_rows().is_empty());
    assert!(!manager.next_page());
    assert!(!manager.previous_page());
    assert!(!manager.is_page_fully_selected());
}

// ===== Sorting =====

#[test]
fn header_click_flips_direction() {
    let mut manager = mounted();
    assert!(manager.sort_by(ColumnId::Amount));
    assert_eq!(manager.sort().direction, SortDirection::Desc);
    assert_eq!(page_ids(&manager)[0], "row3");

    assert!(manager.sort_by(ColumnId::Vendor));
    assert_eq!(manager.sort(), SortConfig::new(ColumnId::Vendor, SortDirection::Asc));
    assert_eq!(page_ids(&manager)[0], "row1", "Alpha Corp first");
}

#[test]
fn non_sortable_columns_ignore_clicks() {
    let mut manager = mounted();
    assert!(!manager.sort_by(ColumnId::Select));
    assert!(!manager.sort_by(ColumnId::PoPiNumber));
    assert_eq!(manager.sort(), SortConfig::new(ColumnId::Amount, SortDirection::Asc));
}

#[test]
fn sorting_keeps_current_page() {
    let mut manager = mounted();
    manager.next_page();
    manager.sort_by(ColumnId::Vendor);
    assert_eq!(manager.pagination().page(), 2);
}

#[test]
fn sorting_does_not_save() {
    let mut manager = mounted();
    manager.sort_by(ColumnId::Status);
    assert!(manager.source().saves().is_empty());
}

#[test]
fn set_sort_ignores_non_sortable_key() {
    let mut manager = mounted();
    let before = page_ids(&manager).join(",");

    assert!(!manager.set_sort(SortConfig::new(ColumnId::PoPiNumber, SortDirection::Desc)));
    assert!(!manager.set_sort(SortConfig::new(ColumnId::Select, SortDirection::Asc)));

    assert_eq!(manager.sort(), SortConfig::new(ColumnId::Amount, SortDirection::Asc));
    assert_eq!(page_ids(&manager).join(","), before);
}

#[test]
fn set_sort_accepts_unsorted() {
    let mut manager = mounted();
    assert!(manager.set_sort(SortConfig::unsorted()));
    assert_eq!(
        page_ids(&manager),
        vec!["row1", "row2", "row3", "row4", "row5", "row6", "row7"]
    );
}

#[test]
fn mount_with_non_sortable_key_falls_back_to_default_sort() {
    let options = TableOptions {
        sort: SortConfig::new(ColumnId::PoPiNumber, SortDirection::Desc),
        ..TableOptions::default()
    };
    let manager = LayoutManager::mount(MemorySource::sample(), options).unwrap();

    assert_eq!(manager.sort(), SortConfig::new(ColumnId::Amount, SortDirection::Asc));
    assert_eq!(
        page_ids(&manager),
        vec!["row4", "row9", "row2", "row7", "row8", "row5", "row1"]
    );
}

#[test]
fn mount_falls_back_to_unsorted_when_amount_is_not_sortable() {
    let columns = default_columns()
        .into_iter()
        .map(|mut c| {
            c.sortable = false;
            c
        })
        .collect();
    let options = TableOptions {
        columns,
        sort: SortConfig::new(ColumnId::Vendor, SortDirection::Asc),
        ..TableOptions::default()
    };
    let manager = LayoutManager::mount(MemorySource::sample(), options).unwrap();

    assert_eq!(manager.sort(), SortConfig::unsorted());
    assert_eq!(page_ids(&manager)[0], "row1");
}

// ===== Pagination =====

#[test]
fn second_page_holds_remaining_rows() {
    let mut manager = mounted();
    assert!(manager.next_page());
    assert_eq!(page_ids(&manager), vec!["row6", "row3"]);
    assert!(!manager.next_page(), "already on last page");
}

#[test]
fn page_size_change_returns_to_first_page() {
    let mut manager = mounted();
    manager.last_page();
    manager.set_page_size(10).unwrap();
    assert_eq!(manager.pagination().page(), 1);
    assert_eq!(manager.total_pages(), 1);
    assert_eq!(manager.page_rows().len(), 9);
}

#[test]
fn zero_page_size_change_is_rejected() {
    let mut manager = mounted();
    assert_eq!(manager.set_page_size(0), Err(InvalidPageSize(0)));
    assert_eq!(manager.pagination().page_size(), 7);
}

#[test]
fn go_to_page_clamps() {
    let mut manager = mounted();
    manager.go_to_page(40);
    assert_eq!(manager.pagination().page(), 2);
    manager.go_to_page(0);
    assert_eq!(manager.pagination().page(), 1);
}

#[test]
fn shrinking_rows_clamps_page() {
    let mut manager = mounted();
    manager.last_page();
    let rows: Vec<Row> = manager.rows()[..3].to_vec();
    manager.replace_rows(rows);
    assert_eq!(manager.pagination().page(), 1);
    assert_eq!(manager.page_rows().len(), 3);
}

// ===== Selection =====

#[test]
fn toggle_row_persists_full_snapshot() {
    let mut manager = mounted();
    assert!(manager.toggle_row(&id("row2")));

    let saved = manager.source().last_save().expect("saved");
    assert_eq!(saved.selected_rows, Some(vec!["row2".to_string()]));
    assert_eq!(saved.column_widths.len(), 7);
    assert_eq!(saved.column_order.len(), 7);
}

#[test]
fn toggle_unknown_row_is_ignored() {
    let mut manager = mounted();
    assert!(!manager.toggle_row(&id("row99")));
    assert!(manager.selection().is_empty());
    assert!(manager.source().saves().is_empty());
}

#[test]
fn select_page_then_toggle_again_clears_only_that_page() {
    let mut manager = mounted();
    manager.next_page();
    manager.toggle_row(&id("row3"));
    manager.first_page();

    manager.toggle_page_selection();
    assert!(manager.is_page_fully_selected());
    assert_eq!(manager.selection().len(), 8);

    manager.toggle_page_selection();
    assert!(!manager.is_page_fully_selected());
    assert_eq!(manager.selected_rows().len(), 1, "row3 on page 2 stays selected");
}

#[test]
fn partially_selected_page_selects_all() {
    let mut manager = mounted();
    manager.toggle_row(&id("row4"));
    manager.toggle_page_selection();
    assert_eq!(manager.selection().len(), 7);
}

#[test]
fn clear_selection_covers_every_page() {
    let mut manager = mounted();
    manager.toggle_row(&id("row1"));
    manager.toggle_row(&id("row3"));
    manager.clear_selection();
    assert!(manager.selection().is_empty());
    assert_eq!(
        manager.source().last_save().unwrap().selected_rows,
        Some(Vec::new())
    );
}

#[test]
fn selection_survives_sorting_and_paging() {
    let mut manager = mounted();
    manager.toggle_row(&id("row6"));
    manager.sort_by(ColumnId::Vendor);
    manager.next_page();
    assert!(manager.selection().contains(&id("row6")));
}

#[test]
fn selected_rows_follow_source_order() {
    let mut manager = mounted();
    manager.toggle_row(&id("row9"));
    manager.toggle_row(&id("row1"));
    let ids: Vec<&str> = manager.selected_rows().into_iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["row1", "row9"]);
}

// ===== Column reorder =====

#[test]
fn reorder_persists_new_order() {
    let mut manager = mounted();
    manager.reorder_columns(2, 0).unwrap();
    assert_eq!(&order_strs(&manager)[..3], ["selectActions", "amount", "vendor"]);

    let saved = manager.source().last_save().unwrap();
    assert_eq!(saved.column_order[1], "amount");
}

#[test]
fn rejected_reorder_does_not_save() {
    let mut manager = mounted();
    assert_eq!(
        manager.reorder_columns(0, 10),
        Err(ReorderRejection::OutOfRange)
    );
    assert!(manager.source().saves().is_empty());
}

// ===== Column resize =====

#[test]
fn resize_gesture_applies_each_move_and_saves_once() {
    let mut manager = mounted();
    {
        let mut gesture = manager.begin_resize(ColumnId::Vendor).unwrap();
        assert_eq!(gesture.manager().resizing(), Some(ColumnId::Vendor));
        assert_eq!(gesture.pointer_move(10), 160);
        assert_eq!(gesture.pointer_move(15), 175);
        assert!(gesture.manager().source().saves().is_empty(), "no save mid-drag");
        gesture.release();
    }
    assert_eq!(manager.resizing(), None);
    assert_eq!(manager.source().saves().len(), 1);
    assert_eq!(
        manager.source().last_save().unwrap().column_widths.get("vendor"),
        Some(&175.0)
    );
}

#[test]
fn resize_floors_at_minimum() {
    let mut manager = mounted();
    let mut gesture = manager.begin_resize(ColumnId::Amount).unwrap();
    assert_eq!(gesture.pointer_move(-500), 50);
    gesture.release();
    assert_eq!(manager.columns().get(ColumnId::Amount).unwrap().width, 50);
}

#[test]
fn dropped_gesture_clears_marker_without_saving() {
    let mut manager = mounted();
    {
        let mut gesture = manager.begin_resize(ColumnId::Status).unwrap();
        gesture.pointer_move(20);
    }
    assert_eq!(manager.resizing(), None);
    assert!(manager.source().saves().is_empty());
    assert_eq!(manager.columns().get(ColumnId::Status).unwrap().width, 200);
}

#[test]
fn pinned_column_cannot_be_resized() {
    let mut manager = mounted();
    assert!(matches!(
        manager.begin_resize(ColumnId::Select),
        Err(ResizeError::NotResizable(ColumnId::Select))
    ));
    assert_eq!(manager.resizing(), None);
}

#[test]
fn column_missing_from_layout_cannot_be_resized() {
    let options = TableOptions {
        columns: default_columns()
            .into_iter()
            .filter(|c| c.id != ColumnId::CreatedDate)
            .collect(),
        ..TableOptions::default()
    };
    let mut manager = LayoutManager::mount(MemorySource::sample(), options).unwrap();
    assert!(matches!(
        manager.begin_resize(ColumnId::CreatedDate),
        Err(ResizeError::UnknownColumn(ColumnId::CreatedDate))
    ));
}

// ===== Layout load =====

#[test]
fn load_applies_widths_order_and_selection() {
    let mut config = LayoutConfig::default();
    config.column_widths.insert("vendor".into(), 220.0);
    config.column_order = vec!["amount".into(), "vendor".into()];
    config.selected_rows = Some(vec!["row2".into(), "row5".into()]);

    let mut manager = mounted_with(config);
    assert_eq!(
        manager.load_layout(),
        LoadOutcome::Applied {
            widths: 1,
            reordered: true,
            selection_replaced: true,
        }
    );
    assert_eq!(manager.columns().get(ColumnId::Vendor).unwrap().width, 220);
    assert_eq!(&order_strs(&manager)[..3], ["selectActions", "amount", "vendor"]);
    assert_eq!(manager.selection().len(), 2);
    assert!(manager.source().saves().is_empty(), "loading does not save");
}

#[test]
fn load_drops_unknown_selected_ids() {
    let config = LayoutConfig {
        selected_rows: Some(vec!["row1".into(), "ghost".into(), "".into()]),
        ..LayoutConfig::default()
    };
    let mut manager = mounted_with(config);
    manager.load_layout();
    let selected: Vec<&str> = manager.selection().iter().map(RowId::as_str).collect();
    assert_eq!(selected, vec!["row1"]);
}

#[test]
fn load_without_selection_keeps_current_selection() {
    let mut manager = mounted();
    manager.toggle_row(&id("row7"));
    manager.load_layout();
    assert!(manager.selection().contains(&id("row7")));
}

#[test]
fn load_is_one_shot() {
    let mut manager = mounted();
    assert!(matches!(manager.load_layout(), LoadOutcome::Applied { .. }));
    assert_eq!(manager.load_layout(), LoadOutcome::AlreadyLoaded);
    assert_eq!(manager.source().config_fetches(), 1);
}

#[test]
fn failed_fetch_keeps_defaults() {
    let mut manager = LayoutManager::mount(
        MemorySource::sample().failing_config_fetch(),
        TableOptions::default(),
    )
    .unwrap();
    assert_eq!(manager.load_layout(), LoadOutcome::Failed);
    assert_eq!(manager.columns().get(ColumnId::Vendor).unwrap().width, 150);
    assert_eq!(manager.load_layout(), LoadOutcome::AlreadyLoaded);
}

// ===== Persistence failures =====

#[test]
fn failed_save_keeps_in_memory_state() {
    let mut manager = LayoutManager::mount(
        MemorySource::sample().failing_saves(),
        TableOptions::default(),
    )
    .unwrap();
    manager.toggle_row(&id("row1"));
    manager.reorder_columns(0, 1).unwrap();

    assert!(manager.selection().contains(&id("row1")));
    assert_eq!(order_strs(&manager)[1], "status");
    assert!(manager.source().saves().is_empty());
}

#[test]
fn snapshot_reflects_current_state() {
    let mut manager = mounted();
    manager.toggle_row(&id("row4"));
    let snapshot = manager.snapshot();
    assert_eq!(snapshot.column_order[0], "selectActions");
    assert_eq!(snapshot.column_widths.get("amount"), Some(&120.0));
    assert_eq!(snapshot.selected_rows, Some(vec!["row4".to_string()]));
}
