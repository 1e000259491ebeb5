//! Configuration file loading with precedence handling.

use crate::model::{default_columns, ColumnId, UnknownColumn, MIN_COLUMN_WIDTH};
use crate::state::{SortConfig, SortDirection, DEFAULT_PAGE_SIZE};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "VENDORGRID_CONFIG";

/// Environment variable overriding the page size.
pub const PAGE_SIZE_ENV: &str = "VENDORGRID_PAGE_SIZE";

/// Viewport width assumed when none is configured (a desktop screen).
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Sort key value that disables sorting.
const UNSORTED_KEY: &str = "none";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but holds a value the table cannot use.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name as written in the file or environment.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/vendorgrid/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Rows per page at startup.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Floor applied to every column width, in pixels.
    #[serde(default)]
    pub min_column_width: Option<u32>,

    /// Initial sort column id (e.g. "amount"), or "none" for source order.
    #[serde(default)]
    pub sort_key: Option<String>,

    /// Initial sort direction ("asc" or "desc").
    #[serde(default)]
    pub sort_direction: Option<SortDirection>,

    /// Viewport width used for responsive column visibility.
    #[serde(default)]
    pub viewport_width: Option<u32>,

    /// Directory where exported workbooks are written.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Rows per page. Zero is rejected when the table mounts.
    pub page_size: usize,
    /// Column width floor.
    pub min_column_width: u32,
    /// Initial sort.
    pub sort: SortConfig,
    /// Viewport width for responsive visibility.
    pub viewport_width: u32,
    /// Export directory.
    pub export_dir: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            min_column_width: MIN_COLUMN_WIDTH,
            sort: SortConfig::new(ColumnId::Amount, SortDirection::Asc),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            export_dir: PathBuf::from("."),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/vendorgrid/vendorgrid.log` on Linux, or the
/// platform equivalent. Falls back to the current directory when no state
/// directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("vendorgrid").join("vendorgrid.log")
    } else {
        PathBuf::from("vendorgrid.log")
    }
}

/// Resolve default layout file path (`<data dir>/vendorgrid/layout.json`).
pub fn default_layout_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("vendorgrid").join("layout.json")
    } else {
        PathBuf::from("layout.json")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/vendorgrid/config.toml` on Linux.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vendorgrid").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `VENDORGRID_CONFIG` environment variable
/// 3. Default path `~/.config/vendorgrid/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

fn positive_page_size(field: &'static str, page_size: usize) -> Result<usize, ConfigError> {
    if page_size == 0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "page size must be at least 1".to_string(),
        });
    }
    Ok(page_size)
}

fn parse_sort_key(raw: &str) -> Result<Option<ColumnId>, ConfigError> {
    if raw.eq_ignore_ascii_case(UNSORTED_KEY) {
        return Ok(None);
    }
    let key: ColumnId = raw.parse().map_err(|e: UnknownColumn| ConfigError::InvalidValue {
        field: "sort_key",
        reason: e.to_string(),
    })?;
    sortable("sort_key", key).map(Some)
}

fn sortable(field: &'static str, key: ColumnId) -> Result<ColumnId, ConfigError> {
    if default_columns().iter().any(|c| c.id == key && c.sortable) {
        Ok(key)
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("column {key} is not sortable"),
        })
    }
}

/// Parse a `--sort` argument: a column id whose column is sortable.
///
/// # Errors
///
/// Rejects unknown ids and columns that cannot be sorted on
/// (`selectActions`, `poPiNumber`).
pub fn parse_sort_column(raw: &str) -> Result<ColumnId, ConfigError> {
    let key: ColumnId = raw.parse().map_err(|e: UnknownColumn| ConfigError::InvalidValue {
        field: "--sort",
        reason: e.to_string(),
    })?;
    sortable("--sort", key)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `VENDORGRID_PAGE_SIZE`: override page size
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] when the variable is set but is
/// not a positive integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(PAGE_SIZE_ENV) {
        let page_size = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidValue {
                field: PAGE_SIZE_ENV,
                reason: format!("{raw:?}: {e}"),
            })?;
        config.page_size = positive_page_size(PAGE_SIZE_ENV, page_size)?;
    }

    Ok(config)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Rejects a zero page size and sort keys that name no sortable column.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let page_size = match config.page_size {
        Some(size) => positive_page_size("page_size", size)?,
        None => defaults.page_size,
    };
    let key = match config.sort_key.as_deref() {
        Some(raw) => parse_sort_key(raw)?,
        None => defaults.sort.key,
    };

    Ok(ResolvedConfig {
        page_size,
        min_column_width: config.min_column_width.unwrap_or(defaults.min_column_width),
        sort: SortConfig {
            key,
            direction: config.sort_direction.unwrap_or(defaults.sort.direction),
        },
        viewport_width: config.viewport_width.unwrap_or(defaults.viewport_width),
        export_dir: config.export_dir.unwrap_or(defaults.export_dir),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
/// `descending` applies to the CLI sort column, or to the configured one.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Errors
///
/// Rejects a sort column that is not sortable.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size_override: Option<usize>,
    sort_override: Option<ColumnId>,
    descending: bool,
    viewport_override: Option<u32>,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    if let Some(key) = sort_override {
        config.sort = SortConfig::new(sortable("--sort", key)?, SortDirection::Asc);
    }
    if descending {
        config.sort.direction = SortDirection::Desc;
    }

    if let Some(width) = viewport_override {
        config.viewport_width = width;
    }

    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
