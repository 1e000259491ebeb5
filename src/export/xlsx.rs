//! `.xlsx` writer backed by `rust_xlsxwriter`.

use super::{ExportError, ExportSheet, SpreadsheetSink};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;

const SHEET_NAME: &str = "Sheet1";

/// Writes one worksheet with a bold header row and per-column widths.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxSink;

impl XlsxSink {
    /// A sink with no state; each write builds a fresh workbook.
    pub fn new() -> Self {
        Self
    }

    fn build(path: &Path, sheet: &ExportSheet) -> Result<(), XlsxError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, column) in (0u16..).zip(&sheet.columns) {
            worksheet.write_string_with_format(0, col, column.label, &header)?;
            worksheet.set_column_width(col, column.width)?;
        }

        for (row, cells) in (1u32..).zip(&sheet.rows) {
            for (col, value) in (0u16..).zip(cells) {
                worksheet.write_string(row, col, value)?;
            }
        }

        workbook.save(path)
    }
}

impl SpreadsheetSink for XlsxSink {
    fn write(&mut self, path: &Path, sheet: &ExportSheet) -> Result<(), ExportError> {
        Self::build(path, sheet).map_err(|e| ExportError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
