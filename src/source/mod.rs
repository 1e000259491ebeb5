//! Data-access capability for the table.
//!
//! The layout manager never reaches for global data or a network client;
//! it is handed a [`TableSource`] that can:
//! - fetch the rows to display
//! - fetch the persisted layout configuration (once, at startup)
//! - save a complete layout snapshot (fire-and-forget)
//!
//! Implementations:
//! - [`MemorySource`]: in-memory rows and layout, records every save
//! - [`JsonFileSource`]: rows and layout stored as JSON files

use crate::model::{LayoutConfig, Row};
use std::path::PathBuf;
use thiserror::Error;

pub mod file;
pub mod memory;
mod sample;

pub use file::JsonFileSource;
pub use memory::MemorySource;
pub use sample::sample_rows;

/// Errors surfaced by a [`TableSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading or writing a backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A backing document is not valid JSON of the expected shape.
    #[error("Invalid data in {path}: {reason}")]
    Parse {
        /// Document that failed to parse.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The source refused or could not serve the request.
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// Mount options were rejected before any data was fetched.
    #[error("Invalid table options: {0}")]
    InvalidOptions(String),
}

/// Where rows come from and where layouts go.
///
/// Calls are synchronous from the manager's side. An implementation backed
/// by a remote service may queue the save and return immediately; the
/// manager only logs a returned error and never retries.
pub trait TableSource {
    /// All rows, in source order.
    fn fetch_rows(&mut self) -> Result<Vec<Row>, SourceError>;

    /// The persisted layout. Missing fields mean "use defaults".
    fn fetch_config(&mut self) -> Result<LayoutConfig, SourceError>;

    /// Persist a complete layout snapshot.
    fn save_config(&mut self, config: &LayoutConfig) -> Result<(), SourceError>;
}

impl<S: TableSource + ?Sized> TableSource for &mut S {
    fn fetch_rows(&mut self) -> Result<Vec<Row>, SourceError> {
        (**self).fetch_rows()
    }

    fn fetch_config(&mut self) -> Result<LayoutConfig, SourceError> {
        (**self).fetch_config()
    }

    fn save_config(&mut self, config: &LayoutConfig) -> Result<(), SourceError> {
        (**self).save_config(config)
    }
}

impl<S: TableSource + ?Sized> TableSource for Box<S> {
    fn fetch_rows(&mut self) -> Result<Vec<Row>, SourceError> {
        (**self).fetch_rows()
    }

    fn fetch_config(&mut self) -> Result<LayoutConfig, SourceError> {
        (**self).fetch_config()
    }

    fn save_config(&mut self, config: &LayoutConfig) -> Result<(), SourceError> {
        (**self).save_config(config)
    }
}
