//! Column order and widths.
//!
//! The pinned selection column always sits at index 0. Reorder indices
//! coming from the drag-and-drop surface address only the reorderable
//! columns, i.e. they are offset by one from positions in the full list.

use crate::model::{ColumnDescriptor, ColumnId, LayoutConfig, MIN_COLUMN_WIDTH};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;
use tracing::debug;

/// Why a reorder request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReorderRejection {
    /// Source or destination is past the end of the column list.
    #[error("Column index out of range")]
    OutOfRange,

    /// Source or destination resolves to a drag-disabled column.
    #[error("Column cannot be dragged")]
    DragDisabled,

    /// Destination is the pinned first slot.
    #[error("The pinned first column cannot be displaced")]
    PinnedSlot,
}

/// Ordered column descriptors plus the width floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    columns: Vec<ColumnDescriptor>,
    min_width: u32,
}

impl ColumnLayout {
    /// Build a layout, moving any sticky column to the front.
    pub fn new(mut columns: Vec<ColumnDescriptor>, min_width: u32) -> Self {
        let min_width = min_width.max(1);
        columns.sort_by_key(|c| !c.sticky);
        for column in &mut columns {
            column.width = column.width.max(min_width);
        }
        Self { columns, min_width }
    }

    /// Descriptors in display order, pinned column first.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Descriptor for `id`, if the layout has that column.
    pub fn get(&self, id: ColumnId) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Width floor applied to every resize and load.
    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    /// Column ids in display order.
    pub fn order(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|c| c.id).collect()
    }

    /// Every column's width keyed by its persisted id.
    pub fn widths(&self) -> BTreeMap<String, f64> {
        self.columns
            .iter()
            .map(|c| (c.id.as_str().to_string(), f64::from(c.width)))
            .collect()
    }

    /// Columns rendered at the given viewport width.
    pub fn visible_at(&self, viewport_width: u32) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns
            .iter()
            .filter(move |c| c.is_visible_at(viewport_width))
    }

    /// Move one column within the reorderable subset.
    ///
    /// `source` and `destination` are indices among the draggable columns;
    /// the pinned column at position 0 is skipped.
    pub fn reorder(&mut self, source: usize, destination: usize) -> Result<(), ReorderRejection> {
        self.move_column(source.saturating_add(1), destination.saturating_add(1))
    }

    /// Move the column at full-list position `from` to position `to`.
    ///
    /// Single-element move (remove, then insert), not a swap. Nothing can
    /// leave or enter position 0.
    pub fn move_column(&mut self, from: usize, to: usize) -> Result<(), ReorderRejection> {
        let (Some(from_col), Some(to_col)) = (self.columns.get(from), self.columns.get(to)) else {
            return Err(ReorderRejection::OutOfRange);
        };
        if to == 0 {
            return Err(ReorderRejection::PinnedSlot);
        }
        if from_col.drag_disabled || to_col.drag_disabled {
            return Err(ReorderRejection::DragDisabled);
        }

        let moved = self.columns.remove(from);
        debug!(column = %moved.id, from, to, "Column moved");
        self.columns.insert(to, moved);
        Ok(())
    }

    /// Grow or shrink a column by `delta`, floored at the minimum width.
    ///
    /// Returns the resulting width, or `None` for an unknown column.
    pub fn resize_by(&mut self, id: ColumnId, delta: i32) -> Option<u32> {
        let min_width = self.min_width;
        let column = self.columns.iter_mut().find(|c| c.id == id)?;
        let widened = i64::from(column.width) + i64::from(delta);
        column.width = u32::try_from(widened.max(i64::from(min_width))).unwrap_or(u32::MAX);
        Some(column.width)
    }

    /// Take widths from a fetched configuration where it has a usable number.
    pub fn apply_widths(&mut self, config: &LayoutConfig) -> usize {
        let mut applied = 0;
        for column in &mut self.columns {
            if let Some(width) = config.width_for(column.id.as_str()) {
                column.width = clamp_width(width, self.min_width);
                applied += 1;
            }
        }
        applied
    }

    /// Re-sequence columns from a fetched order.
    ///
    /// Known ids come first in fetched order, then every local column the
    /// fetched order did not mention, in its current relative order. Unknown
    /// and duplicate ids are ignored. The pinned column is put back at index
    /// 0 whatever its fetched position. Returns `false` when nothing applied.
    pub fn apply_order(&mut self, order: &[String]) -> bool {
        let mut seen: HashSet<ColumnId> = HashSet::new();
        let fetched: Vec<ColumnId> = order
            .iter()
            .filter_map(|raw| raw.parse::<ColumnId>().ok())
            .filter(|id| self.get(*id).is_some())
            .filter(|id| seen.insert(*id))
            .collect();
        if fetched.is_empty() {
            return false;
        }

        let mut remaining = std::mem::take(&mut self.columns);
        let mut ordered: Vec<ColumnDescriptor> = Vec::with_capacity(remaining.len());
        for id in fetched {
            if let Some(pos) = remaining.iter().position(|c| c.id == id) {
                ordered.push(remaining.remove(pos));
            }
        }
        ordered.append(&mut remaining);

        // Stable: pinned first, everyone else keeps the merged order.
        ordered.sort_by_key(|c| !c.sticky);
        self.columns = ordered;
        true
    }
}

/// Round a fetched width and floor it.
fn clamp_width(width: f64, min_width: u32) -> u32 {
    let rounded = width.round().min(f64::from(u32::MAX));
    // `rounded` is finite, positive and within u32 range here.
    (rounded as u32).max(min_width)
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new(crate::model::default_columns(), MIN_COLUMN_WIDTH)
    }
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
