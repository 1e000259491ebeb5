//! Row selection.
//!
//! The selection spans all pages and survives sorting and paging. Bulk
//! toggling only ever touches the rows of the page it is given.

use crate::model::RowId;
use std::collections::BTreeSet;

/// Set of selected row ids across all pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    rows: BTreeSet<RowId>,
}

impl Selection {
    /// Nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &RowId) -> bool {
        self.rows.contains(id)
    }

    /// Number of selected rows on all pages.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no row is selected.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &RowId> {
        self.rows.iter()
    }

    /// Flip one row. Returns `true` if the row is selected afterwards.
    pub fn toggle(&mut self, id: RowId) -> bool {
        if self.rows.remove(&id) {
            false
        } else {
            self.rows.insert(id);
            true
        }
    }

    /// True only for a non-empty page whose every row is selected.
    pub fn all_selected<'a>(&self, page: impl IntoIterator<Item = &'a RowId>) -> bool {
        let mut any = false;
        for id in page {
            if !self.rows.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Select every row of the page, or deselect the page's rows when all
    /// of them are already selected. Rows on other pages are untouched.
    pub fn toggle_page<'a, I>(&mut self, page: I)
    where
        I: IntoIterator<Item = &'a RowId>,
        I::IntoIter: Clone,
    {
        let page = page.into_iter();
        if self.all_selected(page.clone()) {
            for id in page {
                self.rows.remove(id);
            }
        } else {
            self.rows.extend(page.cloned());
        }
    }

    /// Deselect everything, on every page.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Swap in a new selection wholesale.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = RowId>) {
        self.rows = ids.into_iter().collect();
    }
}
