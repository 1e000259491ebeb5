//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod column;
pub mod error;
pub mod format;
pub mod identifiers;
pub mod layout_config;
pub mod row;

// Re-export for convenience
pub use column::{
    default_columns, Breakpoint, ColumnDescriptor, ColumnId, UnknownColumn, MIN_COLUMN_WIDTH,
};
pub use error::AppError;
pub use format::format_inr;
pub use identifiers::{InvalidRowId, RowId};
pub use layout_config::LayoutConfig;
pub use row::{parse_created_date, Initiator, Row, Status, StatusKind};
