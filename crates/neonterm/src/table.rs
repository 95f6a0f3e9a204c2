//! Fixed-width column tables
//!
//! Header, separator rule, and data rows built from a declared column
//! spec. Every cell goes through `pad_or_truncate` before insertion, so
//! each emitted line has the same total display width no matter what the
//! cells contain. Overflowing cells truncate with `…`; nothing ever wraps.

use std::io::Write;

use crate::buffer::OutputBuffer;
use crate::error::UiError;
use crate::theme::{StyleTag, Theme};
use crate::width::pad_or_truncate;

/// One table column: header label and fixed display width.
///
/// The width is fixed for the lifetime of a render; a zero width is a
/// caller contract violation.
#[derive(Debug, Clone)]
pub struct Column {
    /// Header label (truncated to `width` like any cell).
    pub label: String,
    /// Display columns allotted to cells in this column.
    pub width: usize,
}

impl Column {
    /// Declare a column.
    pub fn new(label: impl Into<String>, width: usize) -> Self {
        Self {
            label: label.into(),
            width,
        }
    }
}

/// Total display width of a table built from `columns`.
///
/// Each column contributes `"│ " + cell + " "`, plus one closing `│`.
pub fn table_width(columns: &[Column]) -> usize {
    columns.iter().map(|c| c.width + 3).sum::<usize>() + 1
}

/// Render header, separator, and data rows.
///
/// Rows shorter than the column spec are filled with empty cells; extra
/// cells are ignored. Fails fast on an empty spec or a zero-width column.
pub fn render_table<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    columns: &[Column],
    rows: &[Vec<String>],
) -> Result<(), UiError> {
    if columns.is_empty() {
        return Err(UiError::BadWidth(0));
    }
    if let Some(bad) = columns.iter().find(|c| c.width == 0) {
        return Err(UiError::BadWidth(bad.width));
    }

    let labels: Vec<String> = columns.iter().map(|c| c.label.clone()).collect();
    buf.write_line(&theme.paint(StyleTag::Muted, &format_row(columns, &labels)))?;
    buf.write_line(&theme.paint(StyleTag::Muted, &separator_row(columns)))?;

    for row in rows {
        buf.write_line(&format_row(columns, row))?;
    }
    buf.flush()?;
    Ok(())
}

/// Build one data line, padding or truncating each cell to its column.
fn format_row(columns: &[Column], cells: &[String]) -> String {
    let empty = String::new();
    let mut line = String::new();
    for (i, col) in columns.iter().enumerate() {
        let cell = cells.get(i).unwrap_or(&empty);
        line.push_str("│ ");
        line.push_str(&pad_or_truncate(cell, col.width));
        line.push(' ');
    }
    line.push('│');
    line
}

/// Build the header/body separator rule.
fn separator_row(columns: &[Column]) -> String {
    let mut line = String::new();
    for (i, col) in columns.iter().enumerate() {
        line.push(if i == 0 { '├' } else { '┼' });
        line.push_str(&"─".repeat(col.width + 2));
    }
    line.push('┤');
    line
}
