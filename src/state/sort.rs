//! Sort configuration and the stable row sort.
//!
//! Sorting always starts from the unsorted source rows; the previous sorted
//! order is never reused as input.

use crate::model::{ColumnId, Row};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    /// Largest first.
    #[serde(alias = "descending")]
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Active sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    /// `None` keeps source order.
    pub key: Option<ColumnId>,
    /// Ignored while `key` is `None`.
    pub direction: SortDirection,
}

impl SortConfig {
    /// Sort by `key` in `direction`.
    pub fn new(key: ColumnId, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Unsorted: rows keep their source order.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Header click on `key`: flip direction when `key` is already active
    /// and ascending, otherwise sort ascending by `key`.
    pub fn toggled(self, key: ColumnId) -> Self {
        let direction = if self.key == Some(key) && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self {
            key: Some(key),
            direction,
        }
    }

    fn compare(&self, a: &Row, b: &Row) -> Ordering {
        match self.key {
            Some(key) => self.direction.apply(key.compare(a, b)),
            None => Ordering::Equal,
        }
    }
}

/// Indices of `rows` in sorted order.
///
/// Stable: rows that compare equal keep their relative source order.
pub fn sorted_indices(rows: &[Row], sort: &SortConfig) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    if sort.key.is_some() {
        merge_sort_by(&mut order, |&a, &b| sort.compare(&rows[a], &rows[b]));
    }
    order
}

/// Sorted view of `rows`, borrowing from the input.
pub fn sort_rows<'a>(rows: &'a [Row], sort: &SortConfig) -> Vec<&'a Row> {
    sorted_indices(rows, sort)
        .into_iter()
        .map(|i| &rows[i])
        .collect()
}

/// Stable top-down merge sort.
///
/// Unparseable dates make the column comparator non-transitive, and
/// `slice::sort_by` may panic when it detects an inconsistent ordering.
/// Merging only ever asks "is right strictly less than left", so any
/// comparator is safe here and ties keep their input order.
fn merge_sort_by<T, F>(items: &mut Vec<T>, mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }
    let mut scratch = items.clone();
    let len = items.len();
    sort_range(items, &mut scratch, 0, len, &mut compare);
}

fn sort_range<T, F>(items: &mut [T], scratch: &mut [T], lo: usize, hi: usize, compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(items, scratch, lo, mid, compare);
    sort_range(items, scratch, mid, hi, compare);

    let (mut left, mut right) = (lo, mid);
    for slot in scratch[lo..hi].iter_mut() {
        let take_right = right < hi
            && (left >= mid || compare(&items[right], &items[left]) == Ordering::Less);
        if take_right {
            *slot = items[right];
            right += 1;
        } else {
            *slot = items[left];
            left += 1;
        }
    }
    items[lo..hi].copy_from_slice(&scratch[lo..hi]);
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
