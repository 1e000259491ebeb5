//! Table layout state machine (pure apart from the injected source).
//!
//! All state transitions are plain method calls testable without a UI.

pub mod columns;
pub mod manager;
pub mod pagination;
pub mod resize;
pub mod selection;
pub mod sort;

// Re-export for convenience
pub use columns::{ColumnLayout, ReorderRejection};
pub use manager::{LayoutManager, LoadOutcome, TableOptions};
pub use pagination::{InvalidPageSize, Pagination, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use resize::{ResizeError, ResizeGesture};
pub use selection::Selection;
pub use sort::{sort_rows, sorted_indices, SortConfig, SortDirection};
