//! Page navigation over the sorted rows.
//!
//! Pages are 1-based. An empty table still has one (empty) page, so the
//! footer reads "Page 1 of 1" and every navigation control is disabled.

use std::num::NonZeroUsize;
use std::ops::Range;
use thiserror::Error;

/// Page sizes offered by the page-size picker.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [7, 10, 15, 20, 50];

/// Page size used at mount.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// A page size of zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Page size must be positive, got {0}")]
pub struct InvalidPageSize(pub usize);

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: NonZeroUsize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: NonZeroUsize::MIN.saturating_add(DEFAULT_PAGE_SIZE - 1),
        }
    }
}

impl Pagination {
    /// Start on page 1 with `page_size` rows per page.
    ///
    /// # Errors
    ///
    /// Rejects a zero page size.
    pub fn new(page_size: usize) -> Result<Self, InvalidPageSize> {
        let page_size = NonZeroUsize::new(page_size).ok_or(InvalidPageSize(page_size))?;
        Ok(Self { page: 1, page_size })
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// `ceil(row_count / page_size)`, never less than 1.
    pub fn total_pages(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size.get()).max(1)
    }

    /// Index range of the current page, clamped to `row_count`.
    pub fn range(&self, row_count: usize) -> Range<usize> {
        let size = self.page_size.get();
        let start = (self.page - 1).saturating_mul(size).min(row_count);
        let end = self.page.saturating_mul(size).min(row_count);
        start..end
    }

    /// The current page's slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// Pull the current page back into `[1, total_pages]`.
    ///
    /// Returns `true` when the page changed.
    pub fn clamp(&mut self, row_count: usize) -> bool {
        let clamped = self.page.clamp(1, self.total_pages(row_count));
        let changed = clamped != self.page;
        self.page = clamped;
        changed
    }

    /// Change the page size and go back to page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), InvalidPageSize> {
        self.page_size = NonZeroUsize::new(page_size).ok_or(InvalidPageSize(page_size))?;
        self.page = 1;
        Ok(())
    }

    /// Jump to `page`, clamped into range. Returns `true` when the page changed.
    pub fn go_to(&mut self, page: usize, row_count: usize) -> bool {
        let target = page.clamp(1, self.total_pages(row_count));
        let changed = target != self.page;
        self.page = target;
        changed
    }

    /// Whether "previous" would move.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether "next" would move.
    pub fn has_next(&self, row_count: usize) -> bool {
        self.page < self.total_pages(row_count)
    }

    /// No-op on page 1.
    pub fn first(&mut self) -> bool {
        self.go_to_unchecked(1)
    }

    /// No-op on page 1.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.go_to_unchecked(self.page - 1)
    }

    /// No-op on the last page.
    pub fn next(&mut self, row_count: usize) -> bool {
        if !self.has_next(row_count) {
            return false;
        }
        self.go_to_unchecked(self.page + 1)
    }

    /// No-op on the last page.
    pub fn last(&mut self, row_count: usize) -> bool {
        self.go_to_unchecked(self.total_pages(row_count))
    }

    fn go_to_unchecked(&mut self, page: usize) -> bool {
        let changed = page != self.page;
        self.page = page;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_page_one_of_seven() {
        let p = Pagination::default();
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(Pagination::new(0), Err(InvalidPageSize(0)));
        let mut p = Pagination::default();
        assert_eq!(p.set_page_size(0), Err(InvalidPageSize(0)));
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE, "failed change keeps old size");
    }

    #[test]
    fn nine_rows_in_pages_of_seven() {
        let mut p = Pagination::new(7).unwrap();
        assert_eq!(p.total_pages(9), 2);
        assert_eq!(p.range(9), 0..7);
        assert!(p.next(9));
        assert_eq!(p.range(9), 7..9);
    }

    #[test]
    fn requesting_page_past_end_clamps_to_last() {
        let mut p = Pagination::new(7).unwrap();
        p.go_to(3, 9);
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn go_to_zero_clamps_to_first() {
        let mut p = Pagination::new(7).unwrap();
        p.go_to(2, 9);
        p.go_to(0, 9);
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn empty_table_has_one_page() {
        let p = Pagination::new(7).unwrap();
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.range(0), 0..0);
        assert!(!p.has_previous());
        assert!(!p.has_next(0));
    }

    #[test]
    fn navigation_is_a_no_op_at_boundaries() {
        let mut p = Pagination::new(7).unwrap();
        assert!(!p.first());
        assert!(!p.previous());
        assert!(p.last(9));
        assert_eq!(p.page(), 2);
        assert!(!p.next(9));
        assert!(!p.last(9));
        assert!(p.previous());
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn changing_page_size_resets_to_first_page() {
        let mut p = Pagination::new(7).unwrap();
        p.last(9);
        p.set_page_size(10).unwrap();
        assert_eq!(p.page(), 1);
        assert_eq!(p.total_pages(9), 1);
    }

    #[test]
    fn clamp_follows_shrinking_row_count() {
        let mut p = Pagination::new(5).unwrap();
        p.go_to(4, 20);
        assert!(p.clamp(8));
        assert_eq!(p.page(), 2);
        assert!(!p.clamp(8));
    }

    #[test]
    fn slice_returns_current_page_items() {
        let items: Vec<u32> = (1..=9).collect();
        let mut p = Pagination::new(7).unwrap();
        assert_eq!(p.slice(&items), &[1, 2, 3, 4, 5, 6, 7]);
        p.next(items.len());
        assert_eq!(p.slice(&items), &[8, 9]);
    }
}
