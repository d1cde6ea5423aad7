//! Cross-tab report definitions.
//!
//! A [`ReportDefinition`] names its row, column and value fields the way a
//! person would write them in the config file. [`ReportDefinition::resolve`]
//! turns those names into sheet column positions and summarize operators;
//! names that do not resolve stay `None` and are left for the builder to
//! handle.

pub mod fields;
pub mod pivot;

pub use fields::{column_index, summarize_kind, SheetField, SummarizeKind};
pub use pivot::PivotBuilder;

use serde::{Deserialize, Serialize};

use crate::sink::Sheet;

/// One summarized value column of a cross-tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueField {
    pub field: String,
    /// Operator name such as `SUM` or `average`; absent means `SUM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summarize: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Declarative row/column/value layout of a cross-tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDefinition {
    #[serde(default = "default_rows")]
    pub rows: Vec<String>,
    #[serde(default = "default_columns")]
    pub columns: Vec<String>,
    #[serde(default = "default_values")]
    pub values: Vec<ValueField>,
}

fn default_rows() -> Vec<String> {
    vec!["work_name".to_string()]
}

fn default_columns() -> Vec<String> {
    vec!["worker".to_string()]
}

fn default_values() -> Vec<ValueField> {
    vec![ValueField {
        field: "minutes".to_string(),
        summarize: Some("SUM".to_string()),
        display_name: Some("Total minutes".to_string()),
    }]
}

impl Default for ReportDefinition {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
            values: default_values(),
        }
    }
}

/// A field name paired with its sheet column, if it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub name: String,
    pub column: Option<u32>,
}

impl ResolvedField {
    fn resolve(name: &str) -> Self {
        Self {
            name: name.to_string(),
            column: column_index(name),
        }
    }
}

/// A value field with its operator and header resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    pub field: ResolvedField,
    pub kind: SummarizeKind,
    pub display_name: String,
}

/// A [`ReportDefinition`] with every name looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReport {
    pub rows: Vec<ResolvedField>,
    pub columns: Vec<ResolvedField>,
    pub values: Vec<ResolvedValue>,
}

impl ResolvedReport {
    /// Names that did not resolve to a column.
    pub fn unresolved(&self) -> Vec<&str> {
        self.rows
            .iter()
            .chain(&self.columns)
            .chain(self.values.iter().map(|v| &v.field))
            .filter(|f| f.column.is_none())
            .map(|f| f.name.as_str())
            .collect()
    }
}

impl ReportDefinition {
    /// Look up every field name and operator.
    ///
    /// Unknown operators fall back to `SUM` with a warning. A value without a
    /// display name gets `"<OPERATOR> of <field>"`.
    pub fn resolve(&self) -> ResolvedReport {
        let values = self
            .values
            .iter()
            .map(|value| {
                let kind = summarize_kind(value.summarize.as_deref().unwrap_or_default());
                let display_name = value
                    .display_name
                    .clone()
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| format!("{} of {}", kind, value.field));
                ResolvedValue {
                    field: ResolvedField::resolve(&value.field),
                    kind,
                    display_name,
                }
            })
            .collect();

        ResolvedReport {
            rows: self.rows.iter().map(|n| ResolvedField::resolve(n)).collect(),
            columns: self
                .columns
                .iter()
                .map(|n| ResolvedField::resolve(n))
                .collect(),
            values,
        }
    }
}

/// Builds a cross-tab from report sheet data.
///
/// Returns `None` when the report has nothing it can summarize.
pub trait CrossTabBuilder {
    fn build(&self, report: &ResolvedReport, data: &Sheet) -> Option<Sheet>;
}
