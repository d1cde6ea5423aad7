//! End-to-end tests: JSON source through batch to CSV files

use std::collections::HashMap;
use std::fs;

use caltally::report::{CrossTabBuilder, PivotBuilder};
use caltally::sink::{build_sheet, CsvSink};
use caltally::source::JsonFileSource;
use caltally::{run_batch, BatchOptions, Config, EventSource, TabularSink, TimeWindow};
use chrono::NaiveDate;

use crate::helpers::january_events_file;

fn january() -> TimeWindow {
    TimeWindow::from_dates(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    )
    .unwrap()
}

fn summary(records: &[caltally::WorkRecord]) -> Vec<(String, String, String, String, u64)> {
    records
        .iter()
        .map(|r| {
            (
                r.work_name.clone(),
                r.client_name.clone(),
                r.task.clone(),
                r.worker.clone(),
                r.duration_minutes,
            )
        })
        .collect()
}

fn tuple(w: &str, c: &str, t: &str, worker: &str, m: u64) -> (String, String, String, String, u64) {
    (w.into(), c.into(), t.into(), worker.into(), m)
}

#[test]
fn source_keeps_only_events_starting_in_window() {
    let (_temp, path) = january_events_file();
    let events = JsonFileSource::new(&path).fetch(&january()).unwrap();
    assert_eq!(events.len(), 7);
    assert!(events
        .iter()
        .all(|e| e.title.as_deref() != Some("【Epsilon】Outside / John")));
}

#[test]
fn batch_over_january_export() {
    let (_temp, path) = january_events_file();
    let events = JsonFileSource::new(&path).fetch(&january()).unwrap();
    let outcome = run_batch(events, &Config::default().batch_options().unwrap());

    assert_eq!(
        summary(&outcome.records),
        vec![
            tuple("Alpha Tower", "Acme Co.", "Inspection", "John", 90),
            tuple("Alpha Tower", "Acme Co.", "Inspection", "Mary", 90),
            tuple("Beta Site", "", "Cleanup", "unassigned", 30),
            tuple("Gamma", "", "Survey", "John", 45),
        ]
    );
    assert_eq!(outcome.stats.fetched, 7);
    assert_eq!(outcome.stats.excluded_color, 1);
    assert_eq!(outcome.stats.malformed, 1);
    assert_eq!(outcome.stats.non_positive, 1);
    assert_eq!(outcome.stats.aggregated, 4);
    assert_eq!(outcome.rejected_titles, vec!["not bracketed"]);
    assert_eq!(outcome.records[0].source_color.as_deref(), Some("5"));
}

#[test]
fn disabled_color_filter_counts_everything() {
    let (_temp, path) = january_events_file();
    let events = JsonFileSource::new(&path).fetch(&january()).unwrap();
    let outcome = run_batch(events, &BatchOptions::default());

    assert_eq!(outcome.stats.excluded_color, 0);
    assert!(outcome
        .records
        .iter()
        .any(|r| r.work_name == "Hidden" && r.duration_minutes == 180));
}

#[test]
fn rerun_replaces_window_artifacts() {
    let (temp, path) = january_events_file();
    let out_dir = temp.path().join("reports");
    let window = january();
    let artifact = window.artifact_name("worklog");

    let config = Config::default();
    let events = JsonFileSource::new(&path).fetch(&window).unwrap();
    let outcome = run_batch(events, &config.batch_options().unwrap());
    let sheet = build_sheet(&outcome.records, &HashMap::new());
    let pivot = PivotBuilder.build(&config.report.resolve(), &sheet).unwrap();

    let mut sink = CsvSink::new(&out_dir);
    for _ in 0..2 {
        sink.write(&artifact, &sheet).unwrap();
        sink.write(&format!("{}_pivot", artifact), &pivot).unwrap();
    }

    let mut files: Vec<String> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    assert_eq!(
        files,
        vec![
            "worklog_2025-01-01_2025-01-31.csv",
            "worklog_2025-01-01_2025-01-31_pivot.csv",
        ]
    );

    let report = fs::read_to_string(out_dir.join("worklog_2025-01-01_2025-01-31.csv")).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "Work name,Client,Task,Worker,Minutes,Hours,Color");
    assert_eq!(lines[1], "Alpha Tower,Acme Co.,Inspection,John,90,1.50,5");
    assert_eq!(lines[3], "Beta Site,,Cleanup,unassigned,30,0.50,");
    assert_eq!(lines[5], "Total,,,,04:15,4.25,");
    assert_eq!(lines.len(), 6);

    let pivot_csv =
        fs::read_to_string(out_dir.join("worklog_2025-01-01_2025-01-31_pivot.csv")).unwrap();
    let pivot_lines: Vec<&str> = pivot_csv.lines().collect();
    assert_eq!(
        pivot_lines[0],
        "work_name,John - Total minutes,Mary - Total minutes,unassigned - Total minutes"
    );
    assert_eq!(pivot_lines[1], "Alpha Tower,90,90,");
    assert_eq!(pivot_lines.last().copied(), Some("Grand total,135,90,30"));
}
