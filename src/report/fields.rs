//! Static lookup tables for the report sheet.
//!
//! Maps human field names (Japanese labels, English labels and snake_case
//! aliases) to 1-based sheet column positions, and summary operator names to
//! [`SummarizeKind`]. Both tables are closed; nothing is registered at runtime.

use std::fmt;

use serde::Serialize;

use crate::normalize::normalize;

/// Columns of the report sheet, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetField {
    WorkName,
    ClientName,
    Task,
    Worker,
    Minutes,
    Hours,
    Color,
}

impl SheetField {
    pub const ALL: [SheetField; 7] = [
        SheetField::WorkName,
        SheetField::ClientName,
        SheetField::Task,
        SheetField::Worker,
        SheetField::Minutes,
        SheetField::Hours,
        SheetField::Color,
    ];

    /// 1-based column position in the sheet.
    pub fn column(self) -> u32 {
        match self {
            SheetField::WorkName => 1,
            SheetField::ClientName => 2,
            SheetField::Task => 3,
            SheetField::Worker => 4,
            SheetField::Minutes => 5,
            SheetField::Hours => 6,
            SheetField::Color => 7,
        }
    }

    /// Header label written to the sheet.
    pub fn label(self) -> &'static str {
        match self {
            SheetField::WorkName => "Work name",
            SheetField::ClientName => "Client",
            SheetField::Task => "Task",
            SheetField::Worker => "Worker",
            SheetField::Minutes => "Minutes",
            SheetField::Hours => "Hours",
            SheetField::Color => "Color",
        }
    }

    /// Every name that resolves to this field, lowercase.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            SheetField::WorkName => &["作業名", "work name", "work_name", "work"],
            SheetField::ClientName => &["顧客名", "client", "client name", "client_name"],
            SheetField::Task => &["作業内容", "task"],
            SheetField::Worker => &["担当者", "worker", "worker name", "worker_name"],
            SheetField::Minutes => &["時間(分)", "minutes", "duration_minutes"],
            SheetField::Hours => &["時間(h)", "hours", "duration_hours"],
            SheetField::Color => &["色", "color", "colour"],
        }
    }

    /// Resolve a field name, ignoring case, surrounding whitespace and
    /// full-width variants.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name).to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|field| field.names().contains(&wanted.as_str()))
    }
}

impl fmt::Display for SheetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Column position for a field name, `None` when empty or unknown.
pub fn column_index(name: &str) -> Option<u32> {
    SheetField::from_name(name).map(SheetField::column)
}

/// Operators a cross-tab value field can summarize with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SummarizeKind {
    #[default]
    Sum,
    Count,
    Average,
    Max,
    Min,
    Median,
    Product,
}

impl SummarizeKind {
    pub const ALL: [SummarizeKind; 7] = [
        SummarizeKind::Sum,
        SummarizeKind::Count,
        SummarizeKind::Average,
        SummarizeKind::Max,
        SummarizeKind::Min,
        SummarizeKind::Median,
        SummarizeKind::Product,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SummarizeKind::Sum => "SUM",
            SummarizeKind::Count => "COUNT",
            SummarizeKind::Average => "AVERAGE",
            SummarizeKind::Max => "MAX",
            SummarizeKind::Min => "MIN",
            SummarizeKind::Median => "MEDIAN",
            SummarizeKind::Product => "PRODUCT",
        }
    }

    /// Exact lookup; `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        let wanted = name.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|kind| kind.name() == wanted)
    }

    /// Apply the operator to numeric values.
    ///
    /// `count` is the number of cells in the group, numeric or not; only
    /// [`SummarizeKind::Count`] uses it. Other operators return `None` when
    /// there is nothing numeric to summarize.
    pub fn apply(self, values: &[f64], count: usize) -> Option<f64> {
        match self {
            SummarizeKind::Count => Some(count as f64),
            _ if values.is_empty() => None,
            SummarizeKind::Sum => Some(values.iter().sum()),
            SummarizeKind::Average => Some(values.iter().sum::<f64>() / values.len() as f64),
            SummarizeKind::Max => Some(values.iter().copied().fold(f64::MIN, f64::max)),
            SummarizeKind::Min => Some(values.iter().copied().fold(f64::MAX, f64::min)),
            SummarizeKind::Median => {
                let mut sorted = values.to_vec();
                sorted.sort_by(f64::total_cmp);
                let mid = sorted.len() / 2;
                if sorted.len() % 2 == 0 {
                    Some((sorted[mid - 1] + sorted[mid]) / 2.0)
                } else {
                    Some(sorted[mid])
                }
            }
            SummarizeKind::Product => Some(values.iter().product()),
        }
    }
}

impl fmt::Display for SummarizeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operator for a name, falling back to [`SummarizeKind::Sum`].
///
/// Lookup is case-insensitive and ignores surrounding whitespace. Unknown or
/// empty names log a warning and resolve to `Sum`.
pub fn summarize_kind(name: &str) -> SummarizeKind {
    match SummarizeKind::parse(name) {
        Some(kind) => kind,
        None => {
            tracing::warn!(operator = name, "unknown summarize operator, using SUM");
            SummarizeKind::Sum
        }
    }
}
