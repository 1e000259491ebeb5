//! Row records displayed by the table.
//!
//! Rows are read-only from the layout engine's point of view: it sorts,
//! slices and projects them but never edits a field.

use super::identifiers::RowId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Workflow state of a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Documents are missing before the order can proceed.
    Missing,
    /// Ready for payment.
    Ready,
    /// Rejected by the approver.
    Declined,
}

/// Status as shown in the Status column: a display text plus its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Badge text; the Status column sorts on this.
    pub text: String,
    /// Badge kind, carried as `type` on the wire.
    #[serde(rename = "type")]
    pub kind: StatusKind,
}

/// Who raised the purchase order and through which channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiator {
    /// Avatar image URL; may be empty.
    #[serde(default)]
    pub avatar_url: String,
    /// Display name; the Initiated By column sorts on this.
    pub name: String,
    /// How the order came in, e.g. "Via Email".
    pub channel: String,
}

/// One purchase-order row.
///
/// The JSON form uses camelCase keys (`poPiNumber`, `createdDate`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Unique id; selection is keyed on it.
    pub id: RowId,
    /// Vendor name.
    pub vendor: String,
    /// Workflow status.
    pub status: Status,
    /// Amount in rupees.
    pub amount: f64,
    /// Purchase-order / proforma-invoice number.
    pub po_pi_number: String,
    /// Whether documents are attached (shown as a paperclip).
    #[serde(default)]
    pub has_attachment: bool,
    /// Date-like display string, e.g. "10 Jan, 2024".
    pub created_date: String,
    /// Who raised the order.
    pub initiated_by: Initiator,
}

impl Row {
    /// Calendar date of `created_date`, or `None` when it does not parse.
    pub fn created_on(&self) -> Option<NaiveDate> {
        parse_created_date(&self.created_date)
    }
}

/// Accepted layouts for the created-date string, tried in order.
const DATE_FORMATS: &[&str] = &["%d %b %Y", "%b %d %Y", "%Y-%m-%d", "%d %B %Y"];

/// Parse a date-like display string ("10 Jan, 2024", "2024-01-10").
///
/// Commas are ignored and runs of whitespace collapse to a single space.
pub fn parse_created_date(raw: &str) -> Option<NaiveDate> {
    let normalized = raw
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&normalized, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "row1",
            "vendor": "Alpha Corp",
            "status": { "text": "Ready", "type": "ready" },
            "amount": 15000,
            "poPiNumber": "PO-000031",
            "hasAttachment": true,
            "createdDate": "10 Jan, 2024",
            "initiatedBy": {
                "avatarUrl": "https://example.invalid/sk.png",
                "name": "Sarah K.",
                "channel": "Via Email"
            }
        }"#
    }

    #[test]
    fn row_parses_camel_case_json() {
        let row: Row = serde_json::from_str(sample_json()).expect("valid row");
        assert_eq!(row.id.as_str(), "row1");
        assert_eq!(row.status.kind, StatusKind::Ready);
        assert_eq!(row.po_pi_number, "PO-000031");
        assert!(row.has_attachment);
        assert_eq!(row.initiated_by.name, "Sarah K.");
    }

    #[test]
    fn has_attachment_defaults_to_false() {
        let json = sample_json().replace("\"hasAttachment\": true,", "");
        let row: Row = serde_json::from_str(&json).expect("valid row");
        assert!(!row.has_attachment);
    }

    #[test]
    fn created_on_parses_day_month_comma_year() {
        let row: Row = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(row.created_on(), NaiveDate::from_ymd_opt(2024, 1, 10));
    }

    #[test]
    fn parse_created_date_accepts_iso() {
        assert_eq!(
            parse_created_date("2024-02-25"),
            NaiveDate::from_ymd_opt(2024, 2, 25)
        );
    }

    #[test]
    fn parse_created_date_accepts_month_first() {
        assert_eq!(
            parse_created_date("Feb 21, 2024"),
            NaiveDate::from_ymd_opt(2024, 2, 21)
        );
    }

    #[test]
    fn parse_created_date_rejects_garbage() {
        assert_eq!(parse_created_date("not a date"), None);
        assert_eq!(parse_created_date(""), None);
    }
}
