//! Built-in purchase-order rows.
//!
//! Used when no rows file is configured, and as the fixture for tests.

use crate::model::{Initiator, Row, RowId, Status, StatusKind};

struct SampleRow {
    id: &'static str,
    vendor: &'static str,
    status: (&'static str, StatusKind),
    amount: f64,
    po_pi_number: &'static str,
    has_attachment: bool,
    created_date: &'static str,
    initiator: (&'static str, &'static str, &'static str),
}

const SAMPLE: [SampleRow; 9] = [
    SampleRow {
        id: "row1",
        vendor: "Alpha Corp",
        status: ("Ready", StatusKind::Ready),
        amount: 15000.0,
        po_pi_number: "PO-000031",
        has_attachment: true,
        created_date: "10 Jan, 2024",
        initiator: ("Sarah K.", "Via Email", "FFC0CB/000000?text=SK"),
    },
    SampleRow {
        id: "row2",
        vendor: "Beta Solutions",
        status: ("Missing Items", StatusKind::Missing),
        amount: 8500.0,
        po_pi_number: "PO-000032",
        has_attachment: false,
        created_date: "15 Jan, 2024",
        initiator: ("John M.", "Via Portal", "ADD8E6/000000?text=JM"),
    },
    SampleRow {
        id: "row3",
        vendor: "Gamma Inc",
        status: ("Declined", StatusKind::Declined),
        amount: 22000.0,
        po_pi_number: "PO-000033",
        has_attachment: true,
        created_date: "01 Feb, 2024",
        initiator: ("Lisa P.", "Via JIRA", "90EE90/000000?text=LP"),
    },
    SampleRow {
        id: "row4",
        vendor: "Delta Co",
        status: ("Ready", StatusKind::Ready),
        amount: 5000.0,
        po_pi_number: "PO-000034",
        has_attachment: false,
        created_date: "05 Feb, 2024",
        initiator: ("Ankit Jain", "Via JIRA", "C7D2FE/374151?text=AJ"),
    },
    SampleRow {
        id: "row5",
        vendor: "Epsilon Ltd",
        status: ("Missing Items", StatusKind::Missing),
        amount: 12000.0,
        po_pi_number: "PO-000035",
        has_attachment: true,
        created_date: "10 Feb, 2024",
        initiator: ("Bob D.", "Via Email", "FFFF00/000000?text=BD"),
    },
    SampleRow {
        id: "row6",
        vendor: "Zeta LLC",
        status: ("Ready", StatusKind::Ready),
        amount: 18000.0,
        po_pi_number: "PO-000036",
        has_attachment: false,
        created_date: "12 Feb, 2024",
        initiator: ("Carol H.", "Via Portal", "FFA500/FFFFFF?text=CH"),
    },
    SampleRow {
        id: "row7",
        vendor: "Omega Group",
        status: ("Declined", StatusKind::Declined),
        amount: 9500.0,
        po_pi_number: "PO-000037",
        has_attachment: true,
        created_date: "20 Feb, 2024",
        initiator: ("Eva M.", "Via JIRA", "800080/FFFFFF?text=EM"),
    },
    SampleRow {
        id: "row8",
        vendor: "Theta Industries",
        status: ("Missing Items", StatusKind::Missing),
        amount: 11000.0,
        po_pi_number: "PO-000038",
        has_attachment: true,
        created_date: "21 Feb, 2024",
        initiator: ("Tarun Daharwal", "Via Email", "A52A2A/FFFFFF?text=TD"),
    },
    SampleRow {
        id: "row9",
        vendor: "Sigma Services",
        status: ("Ready", StatusKind::Ready),
        amount: 7000.0,
        po_pi_number: "PO-000039",
        has_attachment: false,
        created_date: "25 Feb, 2024",
        initiator: ("Fiona G.", "Via Portal", "00FFFF/000000?text=FG"),
    },
];

/// The nine sample purchase orders, in source order (`row1`..`row9`).
pub fn sample_rows() -> Vec<Row> {
    SAMPLE.iter().filter_map(SampleRow::to_row).collect()
}

impl SampleRow {
    fn to_row(&self) -> Option<Row> {
        let (text, kind) = self.status;
        let (name, channel, avatar) = self.initiator;
        Some(Row {
            id: RowId::new(self.id).ok()?,
            vendor: self.vendor.to_string(),
            status: Status {
                text: text.to_string(),
                kind,
            },
            amount: self.amount,
            po_pi_number: self.po_pi_number.to_string(),
            has_attachment: self.has_attachment,
            created_date: self.created_date.to_string(),
            initiated_by: Initiator {
                avatar_url: format!("https://via.placeholder.com/32/{avatar}"),
                name: name.to_string(),
                channel: channel.to_string(),
            },
        })
    }
}
