//! Per-worker aggregation of parsed events.
//!
//! Every `(event, worker)` pair lands in exactly one [`WorkRecord`], keyed by
//! `(work name, client, task, worker)`. Events naming several workers credit
//! the full duration to each of them, so the sum over all records is the
//! attributed effort, not the calendar time booked.

pub mod order;

pub use order::order;

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::title::ParsedTitle;

/// Identity of a [`WorkRecord`]. Two records with equal keys are one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub work_name: String,
    pub client_name: String,
    pub task: String,
    pub worker: String,
}

impl RecordKey {
    pub fn new(parsed: &ParsedTitle, worker: &str) -> Self {
        Self {
            work_name: parsed.work_name.clone(),
            client_name: parsed.client_name.clone(),
            task: parsed.task.clone(),
            worker: worker.to_string(),
        }
    }
}

/// Aggregated effort for one worker on one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    pub work_name: String,
    pub client_name: String,
    pub task: String,
    pub worker: String,
    pub duration_minutes: u64,
    /// Color of the first event that created the record.
    pub source_color: Option<String>,
}

impl WorkRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            work_name: self.work_name.clone(),
            client_name: self.client_name.clone(),
            task: self.task.clone(),
            worker: self.worker.clone(),
        }
    }
}

/// Merge-by-key accumulator for one batch.
///
/// Records are only ever inserted or grown; nothing is removed and keys never
/// change once inserted.
#[derive(Debug, Default)]
pub struct AggregationTable {
    records: HashMap<RecordKey, WorkRecord>,
}

impl AggregationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `minutes` to one worker of a parsed event.
    ///
    /// The first event for a key fixes its color; later events only add time.
    pub fn accumulate(
        &mut self,
        parsed: &ParsedTitle,
        worker: &str,
        minutes: u64,
        color: Option<&str>,
    ) {
        match self.records.entry(RecordKey::new(parsed, worker)) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().duration_minutes += minutes;
            }
            Entry::Vacant(entry) => {
                let key = entry.key();
                let record = WorkRecord {
                    work_name: key.work_name.clone(),
                    client_name: key.client_name.clone(),
                    task: key.task.clone(),
                    worker: key.worker.clone(),
                    duration_minutes: minutes,
                    source_color: color.map(str::to_string),
                };
                entry.insert(record);
            }
        }
    }

    /// Credit `minutes` to every worker the event names.
    pub fn accumulate_all(&mut self, parsed: &ParsedTitle, minutes: u64, color: Option<&str>) {
        for worker in &parsed.workers {
            self.accumulate(parsed, worker, minutes, color);
        }
    }

    pub fn get(&self, key: &RecordKey) -> Option<&WorkRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = &WorkRecord> {
        self.records.values()
    }

    /// Sum of all record durations (attributed effort).
    pub fn total_minutes(&self) -> u64 {
        self.records.values().map(|r| r.duration_minutes).sum()
    }

    /// Consume the table, yielding records in unspecified order.
    pub fn into_records(self) -> Vec<WorkRecord> {
        self.records.into_values().collect()
    }
}
