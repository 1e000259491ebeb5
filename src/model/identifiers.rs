//! Row identifier newtype with a smart constructor.
//!
//! Row ids validate non-empty strings at construction time.
//! The raw constructor is never exported - use `RowId::new` only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable unique identifier of a table row (e.g. "row1").
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RowId(String);

impl RowId {
    /// Smart constructor: rejects empty and whitespace-only ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRowId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            Err(InvalidRowId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RowId {
    type Error = InvalidRowId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<RowId> for String {
    fn from(id: RowId) -> Self {
        id.0
    }
}

// ===== Error Types =====

/// Rejection from [`RowId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRowId {
    /// The id was empty or only whitespace.
    #[error("Row ID cannot be empty")]
    Empty,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_id_accepts_valid_string() {
        let id = RowId::new("row1");
        assert!(id.is_ok(), "Valid row ID should be accepted");
    }

    #[test]
    fn row_id_rejects_empty_string() {
        assert_eq!(RowId::new(""), Err(InvalidRowId::Empty));
    }

    #[test]
    fn row_id_rejects_whitespace_only() {
        assert_eq!(RowId::new("   "), Err(InvalidRowId::Empty));
    }

    #[test]
    fn row_id_as_str_returns_original() {
        let id = RowId::new("row42").expect("Valid row ID");
        assert_eq!(id.as_str(), "row42");
    }

    #[test]
    fn row_id_display_returns_inner_string() {
        let id = RowId::new("row42").expect("Valid row ID");
        assert_eq!(id.to_string(), "row42");
    }

    #[test]
    fn row_id_deserializes_from_json_string() {
        let id: RowId = serde_json::from_str("\"row7\"").expect("should parse");
        assert_eq!(id.as_str(), "row7");
    }

    #[test]
    fn row_id_deserialize_rejects_empty_string() {
        let result: Result<RowId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err(), "Empty id must not deserialize");
    }

    #[test]
    fn row_ids_order_lexicographically() {
        let a = RowId::new("row1").unwrap();
        let b = RowId::new("row2").unwrap();
        assert!(a < b);
    }
}
