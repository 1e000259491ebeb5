//! Error types for vendorgrid.
//!
//! Each concern owns a `thiserror` enum next to the code that raises it.
//! This module gathers the top-level [`AppError`] used by the CLI shell.
//!
//! # Error Hierarchy
//!
//! - [`AppError`]: top-level error wrapping every fatal failure
//!   - [`SourceError`]: rows or layout could not be read or written
//!   - [`ConfigError`]: the TOML settings file is unreadable or invalid
//!   - [`ExportError`]: the workbook could not be written
//!   - [`LoggingError`]: the log file could not be set up
//!   - [`ResizeError`], [`ReorderRejection`], [`InvalidPageSize`]: a layout
//!     command was rejected
//!   - [`InvalidRowId`], [`UnknownColumn`]: a command-line argument names no
//!     valid row or column
//!
//! # Recovery Strategy
//!
//! Inside the layout manager nothing here is fatal: malformed layout fields
//! are ignored one by one and failed saves are logged and dropped. Only the
//! CLI shell turns these errors into a non-zero exit.

use super::column::UnknownColumn;
use super::identifiers::InvalidRowId;
use crate::config::ConfigError;
use crate::export::ExportError;
use crate::logging::LoggingError;
use crate::source::SourceError;
use crate::state::{InvalidPageSize, ReorderRejection, ResizeError};
use thiserror::Error;

/// Top-level application error.
///
/// Every domain error converts into `AppError` via `From`, so the CLI can
/// use `?` throughout and report a single message on exit.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rows or layout could not be fetched or saved.
    ///
    /// Fatal only when fetching rows at startup; failed layout saves are
    /// swallowed by the manager and never reach this type.
    #[error("Data source error: {0}")]
    Source(#[from] SourceError),

    /// The settings file could not be read or holds invalid values.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing the spreadsheet failed.
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// The log file could not be opened.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// A resize command targeted a pinned or missing column.
    #[error("Resize rejected: {0}")]
    Resize(#[from] ResizeError),

    /// A move command was rejected by the column layout.
    #[error("Move rejected: {0}")]
    Reorder(#[from] ReorderRejection),

    /// A zero page size was requested.
    #[error(transparent)]
    PageSize(#[from] InvalidPageSize),

    /// A row id argument was empty.
    #[error(transparent)]
    RowId(#[from] InvalidRowId),

    /// A column id argument named no known column.
    #[error(transparent)]
    Column(#[from] UnknownColumn),
}
