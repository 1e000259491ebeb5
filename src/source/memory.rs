//! In-memory table source.
//!
//! Holds rows and a layout in memory and records every saved snapshot, so
//! the layout manager can be exercised without files or a network.

use super::{sample_rows, SourceError, TableSource};
use crate::model::{LayoutConfig, Row};
use tracing::debug;

/// Rows and layout held in memory; every save is recorded.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<Row>,
    config: LayoutConfig,
    saves: Vec<LayoutConfig>,
    fetches: usize,
    fail_config_fetch: bool,
    fail_saves: bool,
}

impl MemorySource {
    /// Serve `rows` with an empty layout.
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Source preloaded with the built-in sample purchase orders.
    pub fn sample() -> Self {
        Self::new(sample_rows())
    }

    /// Layout returned by the next `fetch_config`.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Make `fetch_config` fail.
    pub fn failing_config_fetch(mut self) -> Self {
        self.fail_config_fetch = true;
        self
    }

    /// Make every `save_config` fail.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Every successfully saved snapshot, oldest first.
    pub fn saves(&self) -> &[LayoutConfig] {
        &self.saves
    }

    /// Most recent saved snapshot.
    pub fn last_save(&self) -> Option<&LayoutConfig> {
        self.saves.last()
    }

    /// Number of `fetch_config` calls served so far.
    pub fn config_fetches(&self) -> usize {
        self.fetches
    }
}

impl TableSource for MemorySource {
    fn fetch_rows(&mut self) -> Result<Vec<Row>, SourceError> {
        Ok(self.rows.clone())
    }

    fn fetch_config(&mut self) -> Result<LayoutConfig, SourceError> {
        self.fetches += 1;
        if self.fail_config_fetch {
            return Err(SourceError::Unavailable("configuration service offline".into()));
        }
        Ok(self.config.clone())
    }

    fn save_config(&mut self, config: &LayoutConfig) -> Result<(), SourceError> {
        if self.fail_saves {
            return Err(SourceError::Unavailable("configuration service offline".into()));
        }
        debug!(
            widths = config.column_widths.len(),
            order = config.column_order.len(),
            selected = config.selected_rows.as_ref().map_or(0, Vec::len),
            "Saving config"
        );
        // The next fetch sees what was saved, like a real backend would.
        self.config = config.clone();
        self.saves.push(config.clone());
        Ok(())
    }
}
