//! Column resize gesture.
//!
//! A gesture is the lifetime of the pointer-move / pointer-up listeners:
//! it starts on pointer-down over a resize handle and ends on release.
//! Holding `&mut LayoutManager` for its whole life rules out a second
//! concurrent resize and any other mutation mid-drag.

use super::manager::LayoutManager;
use crate::model::ColumnId;
use crate::source::TableSource;
use thiserror::Error;

/// Why a resize gesture could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResizeError {
    /// The layout has no such column.
    #[error("Column {0} is not part of this layout")]
    UnknownColumn(ColumnId),

    /// The column is pinned or drag-disabled.
    #[error("Column {0} is pinned and cannot be resized")]
    NotResizable(ColumnId),
}

/// An in-progress resize of one column.
///
/// Call [`ResizeGesture::release`] on pointer-up to persist the widths.
/// Dropping the gesture without releasing it (component teardown) clears
/// the resizing marker and keeps the widths reached so far, without saving.
pub struct ResizeGesture<'a, S: TableSource> {
    manager: &'a mut LayoutManager<S>,
    column: ColumnId,
    released: bool,
}

impl<'a, S: TableSource> ResizeGesture<'a, S> {
    pub(super) fn new(manager: &'a mut LayoutManager<S>, column: ColumnId) -> Self {
        Self {
            manager,
            column,
            released: false,
        }
    }

    /// Column being resized.
    pub fn column(&self) -> ColumnId {
        self.column
    }

    /// Read-only view of the manager for rendering mid-drag.
    pub fn manager(&self) -> &LayoutManager<S> {
        self.manager
    }

    /// Apply one pointer-move delta. Returns the new width.
    ///
    /// Runs synchronously on every move event; no batching.
    pub fn pointer_move(&mut self, movement_x: i32) -> u32 {
        self.manager.resize_step(self.column, movement_x)
    }

    /// Pointer-up: end the gesture and save every column's width in one call.
    pub fn release(mut self) {
        self.released = true;
        self.manager.end_resize(true);
    }
}

impl<S: TableSource> Drop for ResizeGesture<'_, S> {
    fn drop(&mut self) {
        if !self.released {
            self.manager.end_resize(false);
        }
    }
}
