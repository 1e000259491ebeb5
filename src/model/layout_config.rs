//! Persisted layout configuration.
//!
//! This is the wire shape exchanged with the configuration service:
//!
//! ```json
//! { "columnWidths": { "vendor": 180 }, "columnOrder": ["selectActions", "amount"], "selectedRows": ["row1"] }
//! ```
//!
//! Deserialization is lenient field by field: a missing or malformed field
//! falls back to "use defaults" instead of rejecting the whole document.
//! Ids stay plain strings here; unknown ids are filtered when the layout is
//! applied, not when it is parsed.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Complete snapshot of user layout customization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Column id to width. Non-numeric entries are dropped on load.
    #[serde(deserialize_with = "lenient_widths")]
    pub column_widths: BTreeMap<String, f64>,

    /// Column ids in display order. Empty means "keep default order".
    #[serde(deserialize_with = "lenient_ids")]
    pub column_order: Vec<String>,

    /// Selected row ids. `None` means "leave selection untouched".
    #[serde(deserialize_with = "lenient_selection")]
    pub selected_rows: Option<Vec<String>>,
}

impl LayoutConfig {
    /// Whether applying this configuration would change nothing.
    pub fn is_empty(&self) -> bool {
        self.column_widths.is_empty() && self.column_order.is_empty() && self.selected_rows.is_none()
    }

    /// Numeric width for a column id, if the configuration has a usable one.
    ///
    /// Zero, negative and non-finite widths count as absent.
    pub fn width_for(&self, column_id: &str) -> Option<f64> {
        self.column_widths
            .get(column_id)
            .copied()
            .filter(|w| w.is_finite() && *w > 0.0)
    }
}

fn lenient_widths<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    // Go through `Value` so a wrongly-typed field is consumed whole.
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|(id, width)| width.as_f64().map(|w| (id, w)))
        .collect())
}

fn lenient_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_selection(deserializer)?.unwrap_or_default())
}

fn lenient_selection<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(values) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
    ))
}
