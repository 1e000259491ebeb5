//! Plain-text rendering of the current page (impure shell output).
//!
//! Columns hidden at the given viewport width are left out. Widths are
//! measured in terminal cells with `unicode-width`, so the rupee sign and
//! the attachment marker line up. A column is never narrower than its
//! layout width converted to cells, so resizes show up in the output.

use crate::model::ColumnId;
use crate::source::TableSource;
use crate::state::{LayoutManager, SortDirection};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " | ";
const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";
const EMPTY_TABLE: &str = "No data available.";

/// Layout pixels per terminal cell.
const PIXELS_PER_CELL: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct TextColumn {
    header: String,
    cells: Vec<String>,
    align: Align,
    min_cells: usize,
}

impl TextColumn {
    fn width(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.width())
            .chain([self.header.width(), self.min_cells])
            .max()
            .unwrap_or(0)
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

fn header_label<S: TableSource>(manager: &LayoutManager<S>, id: ColumnId, label: &str) -> String {
    let sort = manager.sort();
    if id == ColumnId::Select {
        let all = manager.is_page_fully_selected();
        return if all { CHECKED } else { UNCHECKED }.to_string();
    }
    match (sort.key == Some(id), sort.direction) {
        (true, SortDirection::Asc) => format!("{label} ▲"),
        (true, SortDirection::Desc) => format!("{label} ▼"),
        (false, _) => label.to_string(),
    }
}

/// Render the current page as a table followed by a "Page X of Y" footer.
pub fn render_page<S: TableSource>(manager: &LayoutManager<S>, viewport_width: u32) -> String {
    let rows = manager.page_rows();

    let columns: Vec<TextColumn> = manager
        .columns()
        .visible_at(viewport_width)
        .map(|column| {
            let cells = rows
                .iter()
                .map(|row| match column.id {
                    ColumnId::Select if manager.selection().contains(&row.id) => {
                        CHECKED.to_string()
                    }
                    ColumnId::Select => UNCHECKED.to_string(),
                    id => id.cell_text(row),
                })
                .collect();
            TextColumn {
                header: header_label(manager, column.id, &column.label),
                cells,
                align: if column.id == ColumnId::Amount {
                    Align::Right
                } else {
                    Align::Left
                },
                min_cells: usize::try_from(column.width / PIXELS_PER_CELL).unwrap_or(0),
            }
        })
        .collect();
    let widths: Vec<usize> = columns.iter().map(TextColumn::width).collect();

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(
        columns
            .iter()
            .zip(&widths)
            .map(|(c, &w)| pad(&c.header, w, Align::Left))
            .collect::<Vec<_>>()
            .join(SEPARATOR),
    );
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );

    if rows.is_empty() {
        lines.push(EMPTY_TABLE.to_string());
    }
    for index in 0..rows.len() {
        lines.push(
            columns
                .iter()
                .zip(&widths)
                .map(|(c, &w)| pad(&c.cells[index], w, c.align))
                .collect::<Vec<_>>()
                .join(SEPARATOR),
        );
    }

    lines.push(footer(manager));

    let mut out = lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}

/// "Page X of Y | N rows | M selected"
pub fn footer<S: TableSource>(manager: &LayoutManager<S>) -> String {
    format!(
        "Page {} of {} | {} rows | {} selected",
        manager.pagination().page(),
        manager.total_pages(),
        manager.rows().len(),
        manager.selection().len()
    )
}
