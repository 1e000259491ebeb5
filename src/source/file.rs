//! File-backed table source.
//!
//! Rows come from a JSON array document; the layout lives in its own JSON
//! document that is rewritten on every save.

use super::{sample_rows, SourceError, TableSource};
use crate::model::{LayoutConfig, Row};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Rows from a JSON array file, layout from and to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    /// `None` serves the built-in sample rows.
    rows_path: Option<PathBuf>,
    layout_path: PathBuf,
}

impl JsonFileSource {
    /// Read rows from `rows_path` (sample rows when `None`) and keep the
    /// layout at `layout_path`. Nothing is read until the first fetch.
    pub fn new(rows_path: Option<PathBuf>, layout_path: impl Into<PathBuf>) -> Self {
        Self {
            rows_path,
            layout_path: layout_path.into(),
        }
    }

    /// Rows document, if one was given.
    pub fn rows_path(&self) -> Option<&Path> {
        self.rows_path.as_deref()
    }

    /// Layout document, created on the first save.
    pub fn layout_path(&self) -> &Path {
        &self.layout_path
    }
}

fn io_error(path: &Path, source: std::io::Error) -> SourceError {
    SourceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn parse_error(path: &Path, e: serde_json::Error) -> SourceError {
    SourceError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

impl TableSource for JsonFileSource {
    /// # Errors
    ///
    /// Fails when the rows file is unreadable or not a JSON array of rows.
    fn fetch_rows(&mut self) -> Result<Vec<Row>, SourceError> {
        let Some(path) = &self.rows_path else {
            debug!("No rows file configured; serving sample rows");
            return Ok(sample_rows());
        };
        let content = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        let rows: Vec<Row> = serde_json::from_str(&content).map_err(|e| parse_error(path, e))?;
        info!(path = %path.display(), rows = rows.len(), "Rows loaded");
        Ok(rows)
    }

    /// A missing layout file is an empty layout, not an error.
    fn fetch_config(&mut self) -> Result<LayoutConfig, SourceError> {
        let path = &self.layout_path;
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No saved layout");
                return Ok(LayoutConfig::default());
            }
            Err(e) => return Err(io_error(path, e)),
        };
        serde_json::from_str(&content).map_err(|e| parse_error(path, e))
    }

    /// Writes a sibling temp file, then renames it over the layout file so a
    /// reader never sees a half-written document.
    fn save_config(&mut self, config: &LayoutConfig) -> Result<(), SourceError> {
        let path = &self.layout_path;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }

        let json = serde_json::to_string_pretty(config).map_err(|e| parse_error(path, e))?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| io_error(path, e))?;
        debug!(path = %path.display(), "Layout written");
        Ok(())
    }
}
