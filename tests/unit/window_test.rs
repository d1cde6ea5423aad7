//! Unit tests for reporting windows

use caltally::window::{parse_date, WindowError};
use caltally::{TimeWindow, WindowPreset};
use chrono::{NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn window_is_half_open() {
    let window = TimeWindow::from_dates(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
    assert!(window.contains(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()));
    assert!(window.contains(Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap()));
    assert!(!window.contains(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()));
    assert!(!window.contains(Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap()));
}

#[test]
fn artifact_name_is_derived_from_days() {
    let window = TimeWindow::from_dates(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
    assert_eq!(
        window.artifact_name("worklog"),
        "worklog_2025-01-01_2025-01-31"
    );
    let again = TimeWindow::from_dates(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
    assert_eq!(again.artifact_name("worklog"), window.artifact_name("worklog"));
}

#[test]
fn single_day_window() {
    let window = TimeWindow::from_dates(date(2025, 3, 9), date(2025, 3, 9)).unwrap();
    assert_eq!(window.first_day(), window.last_day());
    assert_eq!(window.to_string(), "2025-03-09 .. 2025-03-09");
}

#[test]
fn reversed_window_is_rejected() {
    assert!(matches!(
        TimeWindow::from_dates(date(2025, 2, 1), date(2025, 1, 1)),
        Err(WindowError::Reversed { .. })
    ));
}

#[test]
fn previous_month_crosses_year_boundary() {
    let window = TimeWindow::preset(WindowPreset::PreviousMonth, date(2025, 1, 10)).unwrap();
    assert_eq!(window.first_day(), date(2024, 12, 1));
    assert_eq!(window.last_day(), date(2024, 12, 31));
}

#[test]
fn current_month_handles_leap_february() {
    let window = TimeWindow::preset(WindowPreset::CurrentMonth, date(2024, 2, 14)).unwrap();
    assert_eq!(window.first_day(), date(2024, 2, 1));
    assert_eq!(window.last_day(), date(2024, 2, 29));
}

#[test]
fn weeks_start_on_monday() {
    // 2025-01-15 is a Wednesday
    let current = TimeWindow::preset(WindowPreset::CurrentWeek, date(2025, 1, 15)).unwrap();
    assert_eq!(current.first_day(), date(2025, 1, 13));
    assert_eq!(current.last_day(), date(2025, 1, 19));

    let previous = TimeWindow::preset(WindowPreset::PreviousWeek, date(2025, 1, 15)).unwrap();
    assert_eq!(previous.first_day(), date(2025, 1, 6));
    assert_eq!(previous.last_day(), date(2025, 1, 12));
}

#[test]
fn parse_date_accepts_iso_only() {
    assert_eq!(parse_date(" 2025-01-31 ").unwrap(), date(2025, 1, 31));
    assert!(matches!(
        parse_date("31/01/2025"),
        Err(WindowError::InvalidDate(_))
    ));
    assert!(parse_date("2025-02-30").is_err());
}
