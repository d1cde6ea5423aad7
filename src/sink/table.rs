//! Plain-text rendering of a sheet for the terminal.
//!
//! Column widths are measured in display columns so that Japanese work names
//! line up with ASCII ones.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{Cell, Sheet};

/// Widest a single column may get before its cells are truncated.
pub const MAX_COLUMN_WIDTH: usize = 32;

const COLUMN_GAP: &str = "  ";

/// Truncate a string to fit within `max_width` display columns, adding "…"
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    const ELLIPSIS: &str = "…";
    let target_width = max_width.saturating_sub(1);
    let mut truncated = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        truncated.push(c);
        current_width += char_width;
    }

    format!("{}{}", truncated, ELLIPSIS)
}

fn pad(s: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(s.width()));
    if right_align {
        format!("{}{}", fill, s)
    } else {
        format!("{}{}", s, fill)
    }
}

/// Render header, rows and totals as aligned columns.
pub fn render_table(sheet: &Sheet) -> String {
    let body: Vec<&Vec<Cell>> = sheet.rows.iter().chain(sheet.totals.iter()).collect();

    let columns = body
        .iter()
        .map(|row| row.len())
        .chain(std::iter::once(sheet.header.len()))
        .max()
        .unwrap_or(0);

    let header: Vec<String> = (0..columns)
        .map(|i| {
            let label = sheet.header.get(i).map(String::as_str).unwrap_or("");
            truncate_str(label, MAX_COLUMN_WIDTH)
        })
        .collect();
    let cells: Vec<Vec<(String, bool)>> = body
        .iter()
        .map(|row| {
            (0..columns)
                .map(|i| match row.get(i) {
                    Some(cell) => (
                        truncate_str(&cell.to_string(), MAX_COLUMN_WIDTH),
                        matches!(cell, Cell::Number(_)),
                    ),
                    None => (String::new(), false),
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            cells
                .iter()
                .map(|row| row[i].0.width())
                .chain(std::iter::once(header[i].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let render_line = |parts: Vec<String>| parts.join(COLUMN_GAP).trim_end().to_string();

    out.push_str(&render_line(
        header
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w, false))
            .collect(),
    ));
    out.push('\n');
    out.push_str(&render_line(widths.iter().map(|w| "-".repeat(*w)).collect()));
    out.push('\n');

    for row in &cells {
        out.push_str(&render_line(
            row.iter()
                .zip(&widths)
                .map(|((text, numeric), w)| pad(text, *w, *numeric))
                .collect(),
        ));
        out.push('\n');
    }

    out
}
