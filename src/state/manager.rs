//! The layout manager: one table's user-adjustable presentation state.
//!
//! Owns the source rows, their sorted order, pagination, selection and
//! column layout, and talks to a [`TableSource`] for rows and persisted
//! layouts. Every change to widths, order or selection is followed by a
//! fire-and-forget save of the complete layout snapshot.

use super::columns::{ColumnLayout, ReorderRejection};
use super::pagination::{InvalidPageSize, Pagination, DEFAULT_PAGE_SIZE};
use super::resize::{ResizeError, ResizeGesture};
use super::selection::Selection;
use super::sort::{sorted_indices, SortConfig, SortDirection};
use crate::model::{
    default_columns, ColumnDescriptor, ColumnId, LayoutConfig, Row, RowId, MIN_COLUMN_WIDTH,
};
use crate::source::{SourceError, TableSource};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Mount-time settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Rows per page; must be positive.
    pub page_size: usize,
    /// Width floor for every column.
    pub min_column_width: u32,
    /// Initial sort. A key whose column is not sortable falls back to the
    /// default sort.
    pub sort: SortConfig,
    /// Default columns before any persisted layout is applied.
    pub columns: Vec<ColumnDescriptor>,
}

/// Amount ascending.
fn default_sort() -> SortConfig {
    SortConfig::new(ColumnId::Amount, SortDirection::Asc)
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            min_column_width: MIN_COLUMN_WIDTH,
            sort: default_sort(),
            columns: default_columns(),
        }
    }
}

/// What happened when the persisted layout was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The layout was fetched and merged in.
    Applied {
        /// Number of column widths taken from the layout.
        widths: usize,
        /// Whether the column order was re-sequenced.
        reordered: bool,
        /// Whether the selection was replaced.
        selection_replaced: bool,
    },
    /// The fetch failed; defaults stay in place.
    Failed,
    /// A layout was already loaded for this mount.
    AlreadyLoaded,
}

/// Presentation state of one table, backed by a [`TableSource`].
///
/// Rows are never mutated; sorting only reorders an index list, so the
/// source order is always available for stable re-sorts and exports.
pub struct LayoutManager<S: TableSource> {
    source: S,
    rows: Vec<Row>,
    /// Indices into `rows`, in sorted order.
    order: Vec<usize>,
    columns: ColumnLayout,
    sort: SortConfig,
    pagination: Pagination,
    selection: Selection,
    resizing: Option<ColumnId>,
    layout_loaded: bool,
}

impl<S: TableSource> LayoutManager<S> {
    /// Fetch rows and build the default state.
    ///
    /// # Errors
    ///
    /// Returns the source error when rows cannot be fetched, or
    /// [`SourceError::InvalidOptions`] for a zero page size.
    pub fn mount(mut source: S, options: TableOptions) -> Result<Self, SourceError> {
        let pagination = Pagination::new(options.page_size)
            .map_err(|e| SourceError::InvalidOptions(e.to_string()))?;
        let rows = source.fetch_rows()?;
        info!(rows = rows.len(), "Table mounted");

        let mut manager = Self {
            source,
            order: Vec::new(),
            rows,
            columns: ColumnLayout::new(options.columns, options.min_column_width),
            sort: SortConfig::unsorted(),
            pagination,
            selection: Selection::new(),
            resizing: None,
            layout_loaded: false,
        };
        if !manager.set_sort(options.sort) {
            let fallback = Some(default_sort())
                .filter(|sort| manager.can_sort_by(sort.key))
                .unwrap_or_else(SortConfig::unsorted);
            warn!(key = ?options.sort.key, ?fallback, "Initial sort column is not sortable");
            manager.set_sort(fallback);
        }
        Ok(manager)
    }

    // ===== Accessors =====

    /// The injected data source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Unmount, handing back the source with everything it saved.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Rows in source (unsorted) order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// All rows in sorted order.
    pub fn sorted_rows(&self) -> impl Iterator<Item = &Row> {
        self.order.iter().map(|&i| &self.rows[i])
    }

    /// Column order and widths.
    pub fn columns(&self) -> &ColumnLayout {
        &self.columns
    }

    /// Active sort.
    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    /// Current page and page size.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Selected rows on every page.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Column currently being resized, if a gesture is in progress.
    pub fn resizing(&self) -> Option<ColumnId> {
        self.resizing
    }

    /// Page count for the current rows, at least 1.
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.rows.len())
    }

    /// Rows of the current page, in sorted order.
    pub fn page_rows(&self) -> Vec<&Row> {
        self.pagination
            .slice(&self.order)
            .iter()
            .map(|&i| &self.rows[i])
            .collect()
    }

    fn page_row_ids(&self) -> Vec<RowId> {
        self.page_rows().into_iter().map(|r| r.id.clone()).collect()
    }

    /// Complete layout snapshot, as sent to `save_config`.
    pub fn snapshot(&self) -> LayoutConfig {
        LayoutConfig {
            column_widths: self.columns.widths(),
            column_order: self
                .columns
                .order()
                .into_iter()
                .map(|id| id.as_str().to_string())
                .collect(),
            selected_rows: Some(self.selection.iter().map(|id| id.to_string()).collect()),
        }
    }

    // ===== Startup layout =====

    /// Fetch the persisted layout and merge it into the defaults.
    ///
    /// Runs once per mount; later calls return [`LoadOutcome::AlreadyLoaded`]
    /// without touching the source. A failed fetch is logged and leaves the
    /// defaults in place. Loading does not trigger a save.
    pub fn load_layout(&mut self) -> LoadOutcome {
        if self.layout_loaded {
            return LoadOutcome::AlreadyLoaded;
        }
        self.layout_loaded = true;

        let config = match self.source.fetch_config() {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Failed to fetch layout; keeping defaults");
                return LoadOutcome::Failed;
            }
        };
        let outcome = self.apply_layout(&config);
        info!(?outcome, "Layout loaded");
        outcome
    }

    fn apply_layout(&mut self, config: &LayoutConfig) -> LoadOutcome {
        let widths = self.columns.apply_widths(config);
        let reordered = self.columns.apply_order(&config.column_order);

        let selection_replaced = match &config.selected_rows {
            Some(ids) => {
                let known: HashSet<&str> = self.rows.iter().map(|r| r.id.as_str()).collect();
                self.selection.replace(
                    ids.iter()
                        .filter(|id| known.contains(id.as_str()))
                        .filter_map(|id| RowId::new(id.as_str()).ok()),
                );
                true
            }
            None => false,
        };

        LoadOutcome::Applied {
            widths,
            reordered,
            selection_replaced,
        }
    }

    // ===== Rows and sorting =====

    /// Swap in a new row set, re-sort it and clamp the current page.
    pub fn replace_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.resort();
        self.pagination.clamp(self.rows.len());
    }

    /// Fetch rows again from the source.
    ///
    /// # Errors
    ///
    /// Returns the source error; current rows are kept in that case.
    pub fn refresh_rows(&mut self) -> Result<(), SourceError> {
        let rows = self.source.fetch_rows()?;
        self.replace_rows(rows);
        Ok(())
    }

    /// Header click: sort by `column`, flipping direction on repeat clicks.
    ///
    /// Returns `false` for unknown or non-sortable columns.
    pub fn sort_by(&mut self, column: ColumnId) -> bool {
        self.set_sort(self.sort.toggled(column))
    }

    /// Replace the active sort and re-sort from source order.
    ///
    /// A key naming a column that is missing or not sortable is ignored and
    /// `false` is returned. An unsorted config is always accepted.
    pub fn set_sort(&mut self, sort: SortConfig) -> bool {
        if !self.can_sort_by(sort.key) {
            debug!(key = ?sort.key, "Ignoring sort on non-sortable column");
            return false;
        }
        debug!(key = ?sort.key, direction = ?sort.direction, "Sort changed");
        self.sort = sort;
        self.resort();
        true
    }

    fn can_sort_by(&self, key: Option<ColumnId>) -> bool {
        key.is_none_or(|key| self.columns.get(key).is_some_and(|c| c.sortable))
    }

    fn resort(&mut self) {
        self.order = sorted_indices(&self.rows, &self.sort);
    }

    // ===== Pagination =====

    /// Go to page 1. Returns `true` when the page changed.
    pub fn first_page(&mut self) -> bool {
        self.pagination.first()
    }

    /// Go back one page; no-op on page 1.
    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous()
    }

    /// Go forward one page; no-op on the last page.
    pub fn next_page(&mut self) -> bool {
        self.pagination.next(self.rows.len())
    }

    /// Go to the last page.
    pub fn last_page(&mut self) -> bool {
        self.pagination.last(self.rows.len())
    }

    /// Jump to a page; out-of-range pages clamp to the nearest valid one.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.pagination.go_to(page, self.rows.len())
    }

    /// Change the page size and return to page 1.
    ///
    /// # Errors
    ///
    /// Rejects a zero page size.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), InvalidPageSize> {
        self.pagination.set_page_size(page_size)
    }

    // ===== Selection =====

    /// Flip one row's selection. Unknown rows are ignored.
    pub fn toggle_row(&mut self, id: &RowId) -> bool {
        if !self.rows.iter().any(|r| &r.id == id) {
            debug!(row = %id, "Ignoring toggle for unknown row");
            return false;
        }
        let selected = self.selection.toggle(id.clone());
        self.persist("row selection");
        selected
    }

    /// Select every row on the current page, or clear them all when the
    /// page is already fully selected.
    pub fn toggle_page_selection(&mut self) {
        let page = self.page_row_ids();
        self.selection.toggle_page(&page);
        self.persist("page selection");
    }

    /// Deselect rows on every page.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.persist("clear selection");
    }

    /// Header checkbox state: a non-empty page whose rows are all selected.
    pub fn is_page_fully_selected(&self) -> bool {
        self.selection.all_selected(&self.page_row_ids())
    }

    /// Selected rows in source order, regardless of page.
    pub fn selected_rows(&self) -> Vec<&Row> {
        self.rows
            .iter()
            .filter(|r| self.selection.contains(&r.id))
            .collect()
    }

    // ===== Columns =====

    /// Drag-and-drop reorder over the draggable columns.
    ///
    /// # Errors
    ///
    /// Returns why the move was rejected; the order is unchanged then.
    pub fn reorder_columns(
        &mut self,
        source: usize,
        destination: usize,
    ) -> Result<(), ReorderRejection> {
        self.columns.reorder(source, destination)?;
        self.persist("column reorder");
        Ok(())
    }

    /// Start a resize gesture on `column`.
    ///
    /// The gesture holds the manager exclusively until it is released or
    /// dropped, so only one column can be resizing at a time.
    ///
    /// # Errors
    ///
    /// Rejects unknown columns and pinned or drag-disabled ones.
    pub fn begin_resize(&mut self, column: ColumnId) -> Result<ResizeGesture<'_, S>, ResizeError> {
        let descriptor = self
            .columns
            .get(column)
            .ok_or(ResizeError::UnknownColumn(column))?;
        if !descriptor.is_resizable() {
            return Err(ResizeError::NotResizable(column));
        }
        self.resizing = Some(column);
        debug!(%column, "Resize started");
        Ok(ResizeGesture::new(self, column))
    }

    pub(super) fn resize_step(&mut self, column: ColumnId, delta: i32) -> u32 {
        self.columns
            .resize_by(column, delta)
            .unwrap_or_else(|| self.columns.min_width())
    }

    pub(super) fn end_resize(&mut self, persist: bool) {
        if let Some(column) = self.resizing.take() {
            debug!(%column, persist, "Resize ended");
            if persist {
                self.persist("column resize");
            }
        }
    }

    // ===== Persistence =====

    /// Fire-and-forget save of the full snapshot.
    fn persist(&mut self, reason: &'static str) {
        let snapshot = self.snapshot();
        match self.source.save_config(&snapshot) {
            Ok(()) => debug!(reason, "Layout saved"),
            Err(e) => warn!(reason, error = %e, "Failed to save layout; keeping in-memory state"),
        }
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
