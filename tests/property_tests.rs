//! Property-based tests for layout invariants.
//!
//! Tests validate:
//! 1. Sorting is a stable permutation for every key and direction
//! 2. Pagination never yields zero pages or oversized slices
//! 3. The pinned column stays first and widths stay above the floor
//! 4. Layout loading is one-shot

use proptest::prelude::*;
use vendorgrid::model::{ColumnId, Initiator, LayoutConfig, Row, RowId, Status, StatusKind};
use vendorgrid::source::MemorySource;
use vendorgrid::state::{
    sorted_indices, LayoutManager, LoadOutcome, Pagination, SortConfig, SortDirection,
    TableOptions,
};

const SORTABLE: [ColumnId; 5] = [
    ColumnId::Vendor,
    ColumnId::Status,
    ColumnId::Amount,
    ColumnId::CreatedDate,
    ColumnId::InitiatedBy,
];

const COLUMN_IDS: [&str; 8] = [
    "selectActions",
    "vendor",
    "status",
    "amount",
    "poPiNumber",
    "createdDate",
    "initiatedBy",
    "ghost",
];

fn make_row(index: usize, vendor: &str, amount: u32, day: u8, garbled_date: bool) -> Row {
    let created_date = if garbled_date {
        "someday".to_string()
    } else {
        format!("{:02} Feb, 2024", day)
    };
    Row {
        id: RowId::new(format!("row{index}")).unwrap(),
        vendor: vendor.to_string(),
        status: Status {
            text: if amount % 2 == 0 { "Ready" } else { "Declined" }.to_string(),
            kind: StatusKind::Ready,
        },
        amount: f64::from(amount),
        po_pi_number: format!("PO-{index:06}"),
        has_attachment: index % 3 == 0,
        created_date,
        initiated_by: Initiator {
            avatar_url: String::new(),
            name: vendor.chars().rev().collect(),
            channel: "Via Email".to_string(),
        },
    }
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        ("[a-cA-C]{0,3}", 0u32..5, 1u8..28, prop::bool::weighted(0.2)),
        0..40,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (vendor, amount, day, garbled))| make_row(i, &vendor, amount, day, garbled))
            .collect()
    })
}

fn sort_strategy() -> impl Strategy<Value = SortConfig> {
    (prop::sample::select(SORTABLE.to_vec()), any::<bool>()).prop_map(|(key, desc)| {
        SortConfig::new(
            key,
            if desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            },
        )
    })
}

#[derive(Debug, Clone)]
enum LayoutOp {
    Reorder(usize, usize),
    Resize(ColumnId, i32),
    Load(Vec<String>, Vec<(String, f64)>),
}

fn op_strategy() -> impl Strategy<Value = LayoutOp> {
    prop_oneof![
        (0usize..8, 0usize..8).prop_map(|(s, d)| LayoutOp::Reorder(s, d)),
        (prop::sample::select(ColumnId::ALL.to_vec()), -300i32..300)
            .prop_map(|(c, d)| LayoutOp::Resize(c, d)),
        (
            prop::collection::vec(prop::sample::select(COLUMN_IDS.to_vec()), 0..8),
            prop::collection::vec(
                (prop::sample::select(COLUMN_IDS.to_vec()), -100.0f64..400.0),
                0..4
            ),
        )
            .prop_map(|(order, widths)| LayoutOp::Load(
                order.into_iter().map(String::from).collect(),
                widths.into_iter().map(|(k, w)| (k.to_string(), w)).collect(),
            )),
    ]
}

// ===== Property 1: Sorting =====

proptest! {
    #[test]
    fn sort_is_a_stable_permutation(rows in rows_strategy(), sort in sort_strategy()) {
        let order = sorted_indices(&rows, &sort);

        let mut seen = order.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..rows.len()).collect::<Vec<_>>());

        // Every adjacent pair is either strictly ordered or keeps source order.
        let key = sort.key.unwrap();
        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let mut ordering = key.compare(&rows[a], &rows[b]);
            if sort.direction == SortDirection::Desc {
                ordering = ordering.reverse();
            }
            prop_assert!(ordering != std::cmp::Ordering::Greater || key == ColumnId::CreatedDate);
            if ordering == std::cmp::Ordering::Equal && key != ColumnId::CreatedDate {
                prop_assert!(a < b, "equal rows {} and {} swapped", a, b);
            }
        }
    }

    #[test]
    fn flipping_twice_restores_order(rows in rows_strategy(), sort in sort_strategy()) {
        let once = sorted_indices(&rows, &sort);
        let key = sort.key.unwrap();
        let twice = sorted_indices(&rows, &sort.toggled(key).toggled(key));
        if sort.direction == SortDirection::Asc {
            prop_assert_eq!(once, twice);
        }
    }
}

// ===== Property 2: Pagination =====

proptest! {
    #[test]
    fn pagination_bounds(rows in 0usize..200, size in 1usize..60, page in 0usize..20) {
        let mut pagination = Pagination::new(size).unwrap();
        pagination.go_to(page, rows);

        let total = pagination.total_pages(rows);
        prop_assert!(total >= 1);
        prop_assert!(pagination.page() >= 1 && pagination.page() <= total);

        let range = pagination.range(rows);
        prop_assert!(range.len() <= size);
        prop_assert!(range.end <= rows);
    }

    #[test]
    fn pages_cover_every_row_once(rows in 0usize..100, size in 1usize..20) {
        let items: Vec<usize> = (0..rows).collect();
        let mut pagination = Pagination::new(size).unwrap();
        let mut collected = Vec::new();
        loop {
            collected.extend_from_slice(pagination.slice(&items));
            if !pagination.next(rows) {
                break;
            }
        }
        prop_assert_eq!(collected, items);
    }
}

// ===== Property 3 & 4: Column layout =====

proptest! {
    #[test]
    fn pinned_column_first_and_widths_floored(ops in prop::collection::vec(op_strategy(), 0..25)) {
        let mut manager =
            LayoutManager::mount(MemorySource::sample(), TableOptions::default()).unwrap();

        for op in ops {
            match op {
                LayoutOp::Reorder(s, d) => {
                    let _ = manager.reorder_columns(s, d);
                }
                LayoutOp::Resize(column, delta) => {
                    if let Ok(mut gesture) = manager.begin_resize(column) {
                        gesture.pointer_move(delta);
                        gesture.release();
                    }
                }
                LayoutOp::Load(order, widths) => {
                    // A fresh mount over the saved state, loading extra fields.
                    let mut config = manager.snapshot();
                    config.column_order.extend(order);
                    config.column_widths.extend(widths);
                    let source = MemorySource::sample().with_config(config);
                    manager = LayoutManager::mount(source, TableOptions::default()).unwrap();
                    manager.load_layout();
                }
            }

            prop_assert_eq!(manager.columns().order()[0], ColumnId::Select);
            prop_assert_eq!(manager.columns().columns().len(), 7);
            for column in manager.columns().columns() {
                prop_assert!(column.width >= 50, "{} shrank to {}", column.id, column.width);
            }
        }
    }

    #[test]
    fn layout_load_is_one_shot(order in prop::collection::vec(prop::sample::select(COLUMN_IDS.to_vec()), 0..8)) {
        let config = LayoutConfig {
            column_order: order.into_iter().map(String::from).collect(),
            ..LayoutConfig::default()
        };
        let mut manager = LayoutManager::mount(
            MemorySource::sample().with_config(config),
            TableOptions::default(),
        )
        .unwrap();

        prop_assert!(matches!(manager.load_layout(), LoadOutcome::Applied { .. }), "first load_layout should apply");
        let after_first = manager.columns().clone();
        prop_assert_eq!(manager.load_layout(), LoadOutcome::AlreadyLoaded);
        prop_assert_eq!(manager.columns(), &after_first);
        prop_assert_eq!(manager.source().config_fetches(), 1);
    }
}
