//! Reporting time windows.
//!
//! A window is a half-open `[start, end)` interval of UTC instants built from
//! whole calendar days. Its artifact name is derived from the first and the
//! last day it covers, so the same window always maps to the same output.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("window end {last} is before its start {first}")]
    Reversed { first: NaiveDate, last: NaiveDate },

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("date out of range")]
    OutOfRange,
}

/// Named windows relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WindowPreset {
    CurrentMonth,
    #[default]
    PreviousMonth,
    CurrentWeek,
    PreviousWeek,
}

/// Half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, WindowError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| WindowError::InvalidDate(s.to_string()))
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, WindowError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(WindowError::OutOfRange)
}

impl TimeWindow {
    /// Window covering `first` through `last`, both inclusive.
    pub fn from_dates(first: NaiveDate, last: NaiveDate) -> Result<Self, WindowError> {
        if last < first {
            return Err(WindowError::Reversed { first, last });
        }
        let end_day = last.succ_opt().ok_or(WindowError::OutOfRange)?;
        let start = first
            .and_hms_opt(0, 0, 0)
            .ok_or(WindowError::OutOfRange)?
            .and_utc();
        let end = end_day
            .and_hms_opt(0, 0, 0)
            .ok_or(WindowError::OutOfRange)?
            .and_utc();
        Ok(Self { start, end })
    }

    /// Resolve a preset against `today`.
    pub fn preset(preset: WindowPreset, today: NaiveDate) -> Result<Self, WindowError> {
        match preset {
            WindowPreset::CurrentMonth => {
                let first = first_of_month(today.year(), today.month())?;
                let next = if today.month() == 12 {
                    first_of_month(today.year() + 1, 1)?
                } else {
                    first_of_month(today.year(), today.month() + 1)?
                };
                Self::from_dates(first, next.pred_opt().ok_or(WindowError::OutOfRange)?)
            }
            WindowPreset::PreviousMonth => {
                let this_month = first_of_month(today.year(), today.month())?;
                let last = this_month.pred_opt().ok_or(WindowError::OutOfRange)?;
                let first = first_of_month(last.year(), last.month())?;
                Self::from_dates(first, last)
            }
            WindowPreset::CurrentWeek => {
                let monday =
                    today - Duration::days(today.weekday().num_days_from_monday() as i64);
                Self::from_dates(monday, monday + Duration::days(6))
            }
            WindowPreset::PreviousWeek => {
                let monday = today
                    - Duration::days(today.weekday().num_days_from_monday() as i64 + 7);
                Self::from_dates(monday, monday + Duration::days(6))
            }
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether an instant falls inside `[start, end)`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Last calendar day covered (the day before `end`).
    pub fn last_day(&self) -> NaiveDate {
        (self.end - Duration::nanoseconds(1)).date_naive()
    }

    /// Deterministic artifact name, `<prefix>_<first day>_<last day>`.
    pub fn artifact_name(&self, prefix: &str) -> String {
        format!(
            "{}_{}_{}",
            prefix,
            self.first_day().format("%Y-%m-%d"),
            self.last_day().format("%Y-%m-%d")
        )
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} .. {}",
            self.first_day().format("%Y-%m-%d"),
            self.last_day().format("%Y-%m-%d")
        )
    }
}
