//! Spreadsheet export of the current page or the selected rows.
//!
//! Rows are projected into flat records (column label to display string)
//! following the current column order, then handed to a
//! [`SpreadsheetSink`]. The pinned selection column is never exported.

use crate::model::{ColumnId, Row};
use crate::source::TableSource;
use crate::state::LayoutManager;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub mod xlsx;

pub use xlsx::XlsxSink;

/// Error type for export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("Failed to create export directory {path}: {source}")]
    Directory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The spreadsheet writer failed.
    #[error("Failed to write workbook {path}: {reason}")]
    Write {
        /// Workbook path being written.
        path: PathBuf,
        /// Writer message.
        reason: String,
    },
}

/// Which rows to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// The rows of the current page, in sorted order.
    CurrentPage,
    /// Every selected row regardless of page, in source order.
    Selected,
}

impl ExportScope {
    /// Fixed workbook file name for this scope.
    pub fn file_name(self) -> &'static str {
        match self {
            ExportScope::CurrentPage => "table_data_current_page.xlsx",
            ExportScope::Selected => "table_data_selected.xlsx",
        }
    }
}

/// Message for the user instead of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserNotice {
    /// Selected-rows export with an empty selection.
    NothingSelected,
}

impl fmt::Display for UserNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserNotice::NothingSelected => f.write_str("No rows selected to export."),
        }
    }
}

/// Result of a successful export call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A workbook was written.
    Written {
        /// Full path of the workbook.
        path: PathBuf,
        /// Data rows written, header excluded.
        rows: usize,
    },
    /// Nothing was written; show this to the user instead.
    Notice(UserNotice),
}

/// Header cell of an exported column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportColumn {
    /// Header text.
    pub label: &'static str,
    /// Column width in spreadsheet character units.
    pub width: u16,
}

/// Flattened rows ready for a spreadsheet writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSheet {
    /// Exported columns in display order.
    pub columns: Vec<ExportColumn>,
    /// One entry per row, cells aligned with `columns`.
    pub rows: Vec<Vec<String>>,
}

impl ExportSheet {
    /// Project `rows` through `columns`, skipping columns with no export form.
    pub fn project<'a>(
        columns: impl IntoIterator<Item = ColumnId>,
        rows: impl IntoIterator<Item = &'a Row>,
    ) -> Self {
        let exported: Vec<ColumnId> = columns
            .into_iter()
            .filter(|id| id.export_label().is_some())
            .collect();

        let header = exported
            .iter()
            .filter_map(|id| {
                id.export_label().map(|label| ExportColumn {
                    label,
                    width: id.export_width_hint(),
                })
            })
            .collect();

        let rows = rows
            .into_iter()
            .map(|row| {
                exported
                    .iter()
                    .filter_map(|id| id.export_text(row))
                    .collect()
            })
            .collect();

        Self {
            columns: header,
            rows,
        }
    }

    /// Row `index` as ordered `(label, value)` pairs.
    pub fn record(&self, index: usize) -> Option<Vec<(&'static str, &str)>> {
        let cells = self.rows.get(index)?;
        Some(
            self.columns
                .iter()
                .zip(cells)
                .map(|(column, value)| (column.label, value.as_str()))
                .collect(),
        )
    }

    /// Whether the sheet has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Something that can persist an [`ExportSheet`] as a spreadsheet file.
pub trait SpreadsheetSink {
    /// Write `sheet` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Write`] when the file cannot be produced.
    fn write(&mut self, path: &Path, sheet: &ExportSheet) -> Result<(), ExportError>;
}

/// Export `scope` from `manager` into `dir`.
///
/// Exporting an empty selection writes nothing and returns
/// [`UserNotice::NothingSelected`]. An empty current page still produces a
/// header-only workbook.
///
/// # Errors
///
/// Fails when `dir` cannot be created or the sink cannot write the file.
pub fn export<S, K>(
    manager: &LayoutManager<S>,
    scope: ExportScope,
    dir: &Path,
    sink: &mut K,
) -> Result<ExportOutcome, ExportError>
where
    S: TableSource,
    K: SpreadsheetSink + ?Sized,
{
    let rows = match scope {
        ExportScope::CurrentPage => manager.page_rows(),
        ExportScope::Selected => {
            let selected = manager.selected_rows();
            if selected.is_empty() {
                info!("Export skipped: nothing selected");
                return Ok(ExportOutcome::Notice(UserNotice::NothingSelected));
            }
            selected
        }
    };

    let sheet = ExportSheet::project(manager.columns().order(), rows);

    if !dir.as_os_str().is_empty() {
        std::fs::create_dir_all(dir).map_err(|source| ExportError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let path = dir.join(scope.file_name());
    sink.write(&path, &sheet)?;

    info!(path = %path.display(), rows = sheet.rows.len(), ?scope, "Exported");
    Ok(ExportOutcome::Written {
        path,
        rows: sheet.rows.len(),
    })
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
