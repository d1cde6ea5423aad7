//! Calendar event sources.
//!
//! The batch only needs a title, an interval and an optional color per
//! event. Calendar exports are read from JSON; tests use [`VecSource`].
//!
//! # Format
//!
//! ```text
//! [
//!   {"title": "【Alpha | Acme】Inspection / John", "start": "2025-01-15T09:00:00+09:00",
//!    "end": "2025-01-15T10:30:00+09:00", "color": "5"}
//! ]
//! ```
//!
//! An object with an `events` array is accepted as well.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::window::TimeWindow;

/// One calendar event as the source delivers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub title: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub color: Option<String>,
}

impl RawEvent {
    pub fn new(title: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            title: Some(title.to_string()),
            start,
            end,
            color: None,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

/// Supplies the events of a window.
///
/// An event belongs to a window when its start lies in `[start, end)`.
pub trait EventSource {
    fn fetch(&self, window: &TimeWindow) -> Result<Vec<RawEvent>>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EventDocument {
    List(Vec<RawEvent>),
    Wrapped { events: Vec<RawEvent> },
}

/// Parse an event export from a JSON string.
pub fn parse_events(json: &str) -> Result<Vec<RawEvent>> {
    let document: EventDocument =
        serde_json::from_str(json).context("Failed to parse event JSON")?;
    Ok(match document {
        EventDocument::List(events) => events,
        EventDocument::Wrapped { events } => events,
    })
}

/// Events exported to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for JsonFileSource {
    fn fetch(&self, window: &TimeWindow) -> Result<Vec<RawEvent>> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read events file: {}", self.path.display()))?;
        let events = parse_events(&contents)
            .with_context(|| format!("Invalid events file: {}", self.path.display()))?;

        let total = events.len();
        let selected: Vec<RawEvent> = events
            .into_iter()
            .filter(|e| window.contains(e.start))
            .collect();
        tracing::debug!(
            path = %self.path.display(),
            total,
            in_window = selected.len(),
            "loaded events"
        );
        Ok(selected)
    }
}

/// In-memory events.
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    events: Vec<RawEvent>,
}

impl VecSource {
    pub fn new(events: Vec<RawEvent>) -> Self {
        Self { events }
    }
}

impl EventSource for VecSource {
    fn fetch(&self, window: &TimeWindow) -> Result<Vec<RawEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|e| window.contains(e.start))
            .cloned()
            .collect())
    }
}
