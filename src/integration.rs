//! Command integration for the CLI shell.
//!
//! Maps one parsed command onto layout manager calls and returns the text
//! to print. Everything here runs against an injected [`TableSource`] and
//! [`SpreadsheetSink`], so it is testable without files.

use crate::export::{export, ExportOutcome, ExportScope, SpreadsheetSink};
use crate::model::{AppError, ColumnId, RowId};
use crate::source::TableSource;
use crate::state::LayoutManager;
use crate::view::{footer, render_page};
use std::path::Path;
use tracing::{info, warn};

/// One table operation requested from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    /// Print the current page.
    Show,
    /// Toggle each listed row.
    Select(Vec<RowId>),
    /// Select the whole page, or clear it when fully selected.
    SelectPage,
    /// Deselect every row on every page.
    ClearSelection,
    /// Drag-reorder over the reorderable columns (0-based, pinned column excluded).
    Move {
        /// Position dragged from.
        from: usize,
        /// Position dropped at.
        to: usize,
    },
    /// Resize `column` by `delta` pixels in one gesture.
    Resize {
        /// Column whose handle is dragged.
        column: ColumnId,
        /// Horizontal movement in pixels; negative shrinks.
        delta: i32,
    },
    /// Write the current page or the selection to a workbook.
    Export {
        /// Export the selection instead of the current page.
        selected: bool,
    },
}

/// Run `command`, returning the report to print.
///
/// Mutating commands end with the rendered page so the effect is visible.
///
/// # Errors
///
/// Rejected moves and resizes, and export failures, are returned as
/// [`AppError`]. Unknown rows in `Select` are reported, not fatal.
pub fn execute<S, K>(
    manager: &mut LayoutManager<S>,
    command: TableCommand,
    viewport_width: u32,
    export_dir: &Path,
    sink: &mut K,
) -> Result<String, AppError>
where
    S: TableSource,
    K: SpreadsheetSink + ?Sized,
{
    info!(?command, "Executing command");
    let mut notes = Vec::new();

    match command {
        TableCommand::Show => {}
        TableCommand::Select(ids) => {
            for id in ids {
                if !manager.rows().iter().any(|r| r.id == id) {
                    warn!(row = %id, "Unknown row");
                    notes.push(format!("Ignored unknown row {id}"));
                    continue;
                }
                let verb = if manager.toggle_row(&id) {
                    "Selected"
                } else {
                    "Deselected"
                };
                notes.push(format!("{verb} {id}"));
            }
        }
        TableCommand::SelectPage => {
            manager.toggle_page_selection();
            let verb = if manager.is_page_fully_selected() {
                "Selected"
            } else {
                "Deselected"
            };
            notes.push(format!("{verb} page {}", manager.pagination().page()));
        }
        TableCommand::ClearSelection => {
            manager.clear_selection();
            notes.push("Selection cleared".to_string());
        }
        TableCommand::Move { from, to } => {
            manager.reorder_columns(from, to)?;
        }
        TableCommand::Resize { column, delta } => {
            let mut gesture = manager.begin_resize(column)?;
            let width = gesture.pointer_move(delta);
            gesture.release();
            notes.push(format!("{column} width is now {width}"));
        }
        TableCommand::Export { selected } => {
            let scope = if selected {
                ExportScope::Selected
            } else {
                ExportScope::CurrentPage
            };
            return Ok(match export(manager, scope, export_dir, sink)? {
                ExportOutcome::Written { path, rows } => {
                    format!("Exported {rows} rows to {}\n", path.display())
                }
                ExportOutcome::Notice(notice) => format!("{notice}\n{}\n", footer(manager)),
            });
        }
    }

    let mut out = String::new();
    for note in notes {
        out.push_str(&note);
        out.push('\n');
    }
    out.push_str(&render_page(manager, viewport_width));
    Ok(out)
}
