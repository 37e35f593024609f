//! Screen exporter: a boxed table on stdout.
//!
//! Responsibilities:
//! - Render a header row of field names and one row per result row.
//! - Truncate cell values to the configured width, marking the cut with a
//!   3-character ellipsis suffix so truncation is visually evident.
//!
//! Does NOT handle:
//! - CSV output (see [`super::csv`]): CSV values are never truncated.
//!
//! Invariants:
//! - Headers are never truncated; only cell values are.
//! - Column order follows the resolved field order.

use sumo_client::{FieldDescriptor, ResultRow};

use super::value_text;

/// Render rows as a boxed table, ready to print.
pub fn render(fields: &[FieldDescriptor], rows: &[ResultRow], max_cell_width: usize) -> String {
    let headers: Vec<String> = fields.iter().map(|f| f.name.clone()).collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            fields
                .iter()
                .map(|f| truncate(&value_text(row.get(&f.name)), max_cell_width))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&border(&widths, '┌', '┬', '┐'));
    out.push_str(&table_row(&headers, &widths));
    out.push_str(&border(&widths, '├', '┼', '┤'));
    for row in &body {
        out.push_str(&table_row(row, &widths));
    }
    out.push_str(&border(&widths, '└', '┴', '┘'));
    out
}

/// Cut a value to `max_width`, replacing the tail with `...` when needed.
pub fn truncate(content: &str, max_width: usize) -> String {
    if content.chars().count() <= max_width {
        content.to_string()
    } else {
        let kept: String = content.chars().take(max_width.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        for _ in 0..width + 2 {
            line.push('─');
        }
    }
    line.push(right);
    line.push('\n');
    line
}

fn table_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    line.push('│');
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        for _ in 0..padding + 1 {
            line.push(' ');
        }
        line.push('│');
    }
    line.push('\n');
    line
}
