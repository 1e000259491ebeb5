//! vendorgrid
//!
//! Headless layout engine for an interactive purchase-order table: sorting,
//! pagination, column reorder and resize, row selection, layout persistence
//! and spreadsheet export.
//!
//! Follows a Pure Core / Impure Shell split: `model` and `state` hold the
//! table logic, while `source`, `export`, `view`, `config` and `logging`
//! talk to files, terminals and the environment.

pub mod config;
pub mod export;
pub mod integration;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
