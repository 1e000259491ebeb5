//! Column kinds and column descriptors.
//!
//! `ColumnId` is a closed set: every column the table can show is a variant,
//! and each variant knows how to compare, display and export its cell.
//! The string form (`"vendor"`, `"selectActions"`, ...) is only used at the
//! persistence boundary.

use super::format::format_inr;
use super::row::Row;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Minimum width any column can be resized to.
pub const MIN_COLUMN_WIDTH: u32 = 50;

/// Identity of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    /// Synthetic row-selection checkbox column. Always pinned first.
    #[serde(rename = "selectActions")]
    Select,
    /// Vendor name.
    Vendor,
    /// Status badge text.
    Status,
    /// Order amount in rupees.
    Amount,
    /// Purchase-order / proforma-invoice number.
    PoPiNumber,
    /// Creation date as displayed.
    CreatedDate,
    /// Initiator name and channel.
    InitiatedBy,
}

impl ColumnId {
    /// Every column, in default display order.
    pub const ALL: [ColumnId; 7] = [
        ColumnId::Select,
        ColumnId::Vendor,
        ColumnId::Status,
        ColumnId::Amount,
        ColumnId::PoPiNumber,
        ColumnId::CreatedDate,
        ColumnId::InitiatedBy,
    ];

    /// Key used in persisted layouts.
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnId::Select => "selectActions",
            ColumnId::Vendor => "vendor",
            ColumnId::Status => "status",
            ColumnId::Amount => "amount",
            ColumnId::PoPiNumber => "poPiNumber",
            ColumnId::CreatedDate => "createdDate",
            ColumnId::InitiatedBy => "initiatedBy",
        }
    }

    /// Ascending comparison of two rows on this column.
    ///
    /// Columns without a meaningful order (the selection column) compare
    /// every pair as equal. Dates that fail to parse compare equal to
    /// anything, so the result is not guaranteed to be a total order.
    pub fn compare(self, a: &Row, b: &Row) -> Ordering {
        match self {
            ColumnId::Select => Ordering::Equal,
            ColumnId::Vendor => collate(&a.vendor, &b.vendor),
            ColumnId::Status => collate(&a.status.text, &b.status.text),
            ColumnId::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
            ColumnId::PoPiNumber => collate(&a.po_pi_number, &b.po_pi_number),
            ColumnId::CreatedDate => match (a.created_on(), b.created_on()) {
                (Some(left), Some(right)) => left.cmp(&right),
                _ => Ordering::Equal,
            },
            ColumnId::InitiatedBy => collate(&a.initiated_by.name, &b.initiated_by.name),
        }
    }

    /// Text shown in a rendered cell.
    pub fn cell_text(self, row: &Row) -> String {
        match self {
            ColumnId::Select => String::new(),
            ColumnId::PoPiNumber if row.has_attachment => format!("{} 📎", row.po_pi_number),
            ColumnId::InitiatedBy => row.initiated_by.name.clone(),
            other => other.export_text(row).unwrap_or_default(),
        }
    }

    /// Header used in exported spreadsheets. `None` for columns not exported.
    pub fn export_label(self) -> Option<&'static str> {
        match self {
            ColumnId::Select => None,
            ColumnId::Vendor => Some("Vendor"),
            ColumnId::Status => Some("Status"),
            ColumnId::Amount => Some("Amount"),
            ColumnId::PoPiNumber => Some("PO/PI Number"),
            ColumnId::CreatedDate => Some("Created Date"),
            ColumnId::InitiatedBy => Some("Initiated By"),
        }
    }

    /// Flattened cell value written to spreadsheets.
    pub fn export_text(self, row: &Row) -> Option<String> {
        let text = match self {
            ColumnId::Select => return None,
            ColumnId::Vendor => row.vendor.clone(),
            ColumnId::Status => row.status.text.clone(),
            ColumnId::Amount => format_inr(row.amount),
            ColumnId::PoPiNumber => row.po_pi_number.clone(),
            ColumnId::CreatedDate => row.created_date.clone(),
            ColumnId::InitiatedBy => {
                format!("{} ({})", row.initiated_by.name, row.initiated_by.channel)
            }
        };
        Some(text)
    }

    /// Spreadsheet column width hint, in characters.
    pub fn export_width_hint(self) -> u16 {
        match self {
            ColumnId::Select => 0,
            ColumnId::Vendor | ColumnId::Status | ColumnId::PoPiNumber => 20,
            ColumnId::Amount | ColumnId::CreatedDate => 15,
            ColumnId::InitiatedBy => 25,
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

/// A column id string that names no known column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown column id: {0:?}")]
pub struct UnknownColumn(pub String);

/// Locale-style string ordering: case-insensitive first, then lowercase
/// before uppercase for otherwise identical text.
fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        a.chars()
            .map(char::is_uppercase)
            .cmp(b.chars().map(char::is_uppercase))
    })
}

/// Viewport breakpoint below which a column is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// 640 and up.
    Sm,
    /// 768 and up.
    Md,
    /// 1024 and up.
    Lg,
}

impl Breakpoint {
    /// Smallest viewport width at which the breakpoint is reached.
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
        }
    }
}

/// Presentation settings for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Which column this describes.
    pub id: ColumnId,
    /// Header text. Empty for the selection column.
    pub label: String,
    /// Current width; never below [`MIN_COLUMN_WIDTH`].
    pub width: u32,
    /// Pinned to the left edge and excluded from reordering.
    pub sticky: bool,
    /// Excluded from reordering and resizing even when not sticky.
    pub drag_disabled: bool,
    /// Header clicks may make this column the sort key.
    pub sortable: bool,
    /// Responsive-visibility tier: hidden on viewports narrower than this.
    pub hidden_below: Option<Breakpoint>,
}

impl ColumnDescriptor {
    fn new(id: ColumnId, label: &str, width: u32) -> Self {
        Self {
            id,
            label: label.to_string(),
            width,
            sticky: false,
            drag_disabled: false,
            sortable: false,
            hidden_below: None,
        }
    }

    fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    fn hidden_below(mut self, breakpoint: Breakpoint) -> Self {
        self.hidden_below = Some(breakpoint);
        self
    }

    /// Whether the column can take part in drag-reordering.
    pub fn is_reorderable(&self) -> bool {
        !self.sticky && !self.drag_disabled
    }

    /// Pinned and drag-disabled columns have no resize handle.
    pub fn is_resizable(&self) -> bool {
        self.is_reorderable()
    }

    /// Whether the column is shown on a viewport `viewport_width` wide.
    pub fn is_visible_at(&self, viewport_width: u32) -> bool {
        self.hidden_below
            .is_none_or(|breakpoint| viewport_width >= breakpoint.min_width())
    }
}

/// Columns shown when no layout has been persisted yet.
pub fn default_columns() -> Vec<ColumnDescriptor> {
    let mut select = ColumnDescriptor::new(ColumnId::Select, "", MIN_COLUMN_WIDTH);
    select.sticky = true;
    select.drag_disabled = true;

    vec![
        select,
        ColumnDescriptor::new(ColumnId::Vendor, "Vendor", 150).sortable(),
        ColumnDescriptor::new(ColumnId::Status, "Status", 180).sortable(),
        ColumnDescriptor::new(ColumnId::Amount, "Amount", 120).sortable(),
        ColumnDescriptor::new(ColumnId::PoPiNumber, "PO/PI Number", 160)
            .hidden_below(Breakpoint::Md),
        ColumnDescriptor::new(ColumnId::CreatedDate, "Created Date", 130)
            .sortable()
            .hidden_below(Breakpoint::Lg),
        ColumnDescriptor::new(ColumnId::InitiatedBy, "Initiated By", 200).sortable(),
    ]
}

#[cfg(test)]
#[path = "column_tests.rs"]
mod tests;
