//! Whole-minute durations and their display formats.

use chrono::{DateTime, Utc};

const MS_PER_MINUTE: i64 = 60_000;

/// Elapsed minutes between two instants, rounded to the nearest minute.
///
/// Ties round half away from zero. Non-positive results are reported as-is;
/// deciding what to do with them is up to the caller.
pub fn minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let ms = end.signed_duration_since(start).num_milliseconds();
    let half = MS_PER_MINUTE / 2;
    if ms >= 0 {
        (ms + half) / MS_PER_MINUTE
    } else {
        -((-ms + half) / MS_PER_MINUTE)
    }
}

/// Format minutes as `HH:MM`. Hours are not wrapped at 24.
pub fn format_hhmm(total_minutes: u64) -> String {
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Minutes expressed as fractional hours.
pub fn hours(total_minutes: u64) -> f64 {
    total_minutes as f64 / 60.0
}
