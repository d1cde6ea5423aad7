//! Tabular output of aggregated records.
//!
//! A [`Sheet`] is what gets persisted: a header, one row per record and an
//! optional totals row. The same shape carries cross-tab output, so every
//! [`TabularSink`] can write both.

mod csv_file;
mod table;

pub use self::csv_file::CsvSink;
pub use self::table::render_table;

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use anyhow::Result;

use crate::aggregate::WorkRecord;
use crate::duration::{format_hhmm, hours};
use crate::report::fields::SheetField;

/// Label in the first column of the totals row.
pub const TOTAL_LABEL: &str = "Total";

/// A single sheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Numeric value, if the cell holds one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{:.0}", n),
            Cell::Number(n) => write!(f, "{:.2}", n),
            Cell::Empty => Ok(()),
        }
    }
}

/// Header, body rows and an optional totals row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub totals: Option<Vec<Cell>>,
}

impl Sheet {
    /// Cell at a 1-based column of a body row.
    pub fn cell(&self, row: usize, column: u32) -> Option<&Cell> {
        let index = (column as usize).checked_sub(1)?;
        self.rows.get(row)?.get(index)
    }
}

/// Build the report sheet from ordered records.
///
/// Worker codes are shown through `display_names`, falling back to the code
/// itself. The totals row sums minutes and shows them as `HH:MM`.
///
/// Hours cells hold the exact quotient; the two-decimal rounding seen in CSV
/// and table output happens only when a [`Cell`] is displayed.
pub fn build_sheet(records: &[WorkRecord], display_names: &HashMap<String, String>) -> Sheet {
    let header = SheetField::ALL
        .iter()
        .map(|field| field.label().to_string())
        .collect();

    let rows = records
        .iter()
        .map(|record| {
            let worker = display_names
                .get(&record.worker)
                .cloned()
                .unwrap_or_else(|| record.worker.clone());
            vec![
                Cell::text(record.work_name.as_str()),
                Cell::text(record.client_name.as_str()),
                Cell::text(record.task.as_str()),
                Cell::Text(worker),
                Cell::Number(record.duration_minutes as f64),
                Cell::Number(hours(record.duration_minutes)),
                record
                    .source_color
                    .as_deref()
                    .map_or(Cell::Empty, Cell::text),
            ]
        })
        .collect();

    let total_minutes: u64 = records.iter().map(|r| r.duration_minutes).sum();
    let totals = vec![
        Cell::text(TOTAL_LABEL),
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
        Cell::Text(format_hhmm(total_minutes)),
        Cell::Number(hours(total_minutes)),
        Cell::Empty,
    ];

    Sheet {
        header,
        rows,
        totals: Some(totals),
    }
}

/// Destination for finished sheets.
///
/// `name` is the artifact name; writing the same name again replaces the
/// earlier artifact.
pub trait TabularSink {
    fn write(&mut self, name: &str, sheet: &Sheet) -> Result<PathBuf>;

    /// Remove a previously written artifact. Returns whether one existed.
    fn remove(&mut self, name: &str) -> Result<bool>;
}
