//! Deterministic ordering of aggregated records.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::WorkRecord;

/// Fold a string for human-sensible comparison.
///
/// Compatibility-decomposes, strips combining marks and lowercases, so
/// `Émile`, `emile` and `ＥＭＩＬＥ` sort together.
pub fn collation_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two strings: folded form first, raw form as tiebreak.
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Composite sort key, `work | client | task | worker`.
pub fn sort_key(record: &WorkRecord) -> String {
    format!(
        "{}|{}|{}|{}",
        record.work_name, record.client_name, record.task, record.worker
    )
}

fn folded_fields(record: &WorkRecord) -> [String; 4] {
    [
        collation_key(&record.work_name),
        collation_key(&record.client_name),
        collation_key(&record.task),
        collation_key(&record.worker),
    ]
}

/// Sort records into a total, input-order independent sequence.
///
/// Fields are compared left to right on their folded form, then on their raw
/// form; no two records share all four raw fields, so there are no ties.
pub fn order(mut records: Vec<WorkRecord>) -> Vec<WorkRecord> {
    records.sort_by_cached_key(|r| {
        (
            folded_fields(r),
            [
                r.work_name.clone(),
                r.client_name.clone(),
                r.task.clone(),
                r.worker.clone(),
            ],
        )
    });
    records
}
