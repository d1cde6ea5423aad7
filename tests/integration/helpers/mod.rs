//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;

/// One exported event as JSON.
pub fn event(title: &str, start: &str, end: &str, color: Option<&str>) -> serde_json::Value {
    let mut value = json!({ "title": title, "start": start, "end": end });
    if let Some(color) = color {
        value["color"] = json!(color);
    }
    value
}

/// A January 2025 export covering every kind of event the batch handles.
pub fn january_events() -> serde_json::Value {
    json!([
        event(
            "【Alpha Tower | Acme Co.】Inspection / John・Mary",
            "2025-01-15T09:00:00Z",
            "2025-01-15T10:30:00Z",
            Some("5"),
        ),
        event("【Beta Site】Cleanup", "2025-01-16T09:00:00Z", "2025-01-16T09:30:00Z", None),
        event("【Gamma】Survey / John", "2025-01-17T09:00:00Z", "2025-01-17T09:20:00Z", None),
        event("【Ｇａｍｍａ】Survey／John", "2025-01-20T13:00:00+09:00", "2025-01-20T13:25:00+09:00", None),
        event("not bracketed", "2025-01-18T09:00:00Z", "2025-01-18T10:00:00Z", None),
        event("【Delta】Zero", "2025-01-19T09:00:00Z", "2025-01-19T09:00:00Z", None),
        event("【Hidden】Private / John", "2025-01-21T09:00:00Z", "2025-01-21T12:00:00Z", Some("8")),
        event("【Epsilon】Outside / John", "2025-02-01T00:00:00Z", "2025-02-01T01:00:00Z", None),
    ])
}

/// Write the January export into a fresh temp dir.
pub fn january_events_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("events.json");
    fs::write(&path, january_events().to_string()).expect("Failed to write events file");
    (temp_dir, path)
}
