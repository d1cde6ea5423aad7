//! In-memory cross-tab builder.
//!
//! Groups sheet rows by the row fields, spreads them across the distinct
//! values of the column fields and summarizes each value field per cell.
//! Keys are ordered with the same collation as the record sheet.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::{CrossTabBuilder, ResolvedField, ResolvedReport, SummarizeKind};
use crate::aggregate::order::collate;
use crate::sink::{Cell, Sheet};

/// Label of the grand total row.
pub const GRAND_TOTAL_LABEL: &str = "Grand total";

type Key = Vec<String>;
type Row = Vec<Cell>;

#[derive(Debug, Clone, Copy, Default)]
pub struct PivotBuilder;

/// 0-based indexes of the fields that resolved; the rest are logged and skipped.
fn usable(fields: &[ResolvedField], role: &str) -> Vec<(String, usize)> {
    fields
        .iter()
        .filter_map(|field| match field.column {
            Some(column) => Some((field.name.clone(), column as usize - 1)),
            None => {
                tracing::warn!(field = %field.name, role, "unknown report field, skipping");
                None
            }
        })
        .collect()
}

fn key_of(row: &Row, indexes: &[(String, usize)]) -> Key {
    indexes
        .iter()
        .map(|(_, i)| row.get(*i).map(Cell::to_string).unwrap_or_default())
        .collect()
}

fn compare_keys(a: &Key, b: &Key) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| collate(x, y))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

fn distinct_keys<'a>(keys: impl Iterator<Item = &'a Key>) -> Vec<Key> {
    let mut out: Vec<Key> = keys.cloned().collect();
    out.sort_by(compare_keys);
    out.dedup();
    out
}

fn summarize(kind: SummarizeKind, index: usize, rows: &[&Row]) -> Cell {
    let present: Vec<&Cell> = rows
        .iter()
        .filter_map(|row| row.get(index))
        .filter(|cell| !matches!(cell, Cell::Empty))
        .collect();
    let numbers: Vec<f64> = present.iter().filter_map(|c| c.as_number()).collect();
    kind.apply(&numbers, present.len())
        .map_or(Cell::Empty, Cell::Number)
}

impl CrossTabBuilder for PivotBuilder {
    fn build(&self, report: &ResolvedReport, data: &Sheet) -> Option<Sheet> {
        let row_fields = usable(&report.rows, "row");
        let column_fields = usable(&report.columns, "column");
        let values: Vec<(usize, SummarizeKind, &str)> = report
            .values
            .iter()
            .filter_map(|value| match value.field.column {
                Some(column) => Some((column as usize - 1, value.kind, value.display_name.as_str())),
                None => {
                    tracing::warn!(field = %value.field.name, "unknown value field, skipping");
                    None
                }
            })
            .collect();

        if values.is_empty() {
            tracing::warn!("report has no usable value field, no cross-tab built");
            return None;
        }

        let keyed: Vec<(Key, Key, &Row)> = data
            .rows
            .iter()
            .map(|row| (key_of(row, &row_fields), key_of(row, &column_fields), row))
            .collect();

        let row_keys = distinct_keys(keyed.iter().map(|(r, _, _)| r));
        let column_keys = if column_fields.is_empty() {
            vec![Key::new()]
        } else {
            distinct_keys(keyed.iter().map(|(_, c, _)| c))
        };

        let mut groups: HashMap<(&Key, &Key), Vec<&Row>> = HashMap::new();
        let mut by_column: HashMap<&Key, Vec<&Row>> = HashMap::new();
        for (row_key, column_key, row) in &keyed {
            groups.entry((row_key, column_key)).or_default().push(*row);
            by_column.entry(column_key).or_default().push(*row);
        }

        let mut header: Vec<String> = row_fields.iter().map(|(name, _)| name.clone()).collect();
        for column_key in &column_keys {
            for (_, _, display_name) in &values {
                if column_key.is_empty() {
                    header.push(display_name.to_string());
                } else {
                    header.push(format!("{} - {}", column_key.join(" / "), display_name));
                }
            }
        }

        let rows = row_keys
            .iter()
            .map(|row_key| {
                let mut out: Row = row_key.iter().map(|k| Cell::text(k.as_str())).collect();
                for column_key in &column_keys {
                    let group = groups
                        .get(&(row_key, column_key))
                        .map(Vec::as_slice)
                        .unwrap_or_default();
                    for (index, kind, _) in &values {
                        if group.is_empty() {
                            out.push(Cell::Empty);
                        } else {
                            out.push(summarize(*kind, *index, group));
                        }
                    }
                }
                out
            })
            .collect();

        let totals = (!row_fields.is_empty()).then(|| {
            let mut out: Row = vec![Cell::text(GRAND_TOTAL_LABEL)];
            out.resize(row_fields.len(), Cell::Empty);
            for column_key in &column_keys {
                let group = by_column
                    .get(column_key)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                for (index, kind, _) in &values {
                    out.push(summarize(*kind, *index, group));
                }
            }
            out
        });

        Some(Sheet {
            header,
            rows,
            totals,
        })
    }
}
