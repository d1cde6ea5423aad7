//! One reporting pass over a window of events.
//!
//! Events flow through: color filter, title parsing, duration check,
//! per-worker accumulation, ordering. A bad event never stops the batch; it
//! is counted and, for malformed titles, reported back to the caller.

use serde::Serialize;

use crate::aggregate::{self, AggregationTable, WorkRecord};
use crate::duration;
use crate::source::RawEvent;
use crate::title::{TitleError, TitleParser};

/// Options a batch runs with.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub parser: TitleParser,
    /// Events with this color are left out before parsing.
    pub excluded_color: Option<String>,
}

/// Counters for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BatchStats {
    pub fetched: usize,
    pub excluded_color: usize,
    pub malformed: usize,
    pub non_positive: usize,
    /// Events that contributed to at least one record.
    pub aggregated: usize,
}

/// Result of a batch: ordered records plus what was skipped.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub records: Vec<WorkRecord>,
    pub stats: BatchStats,
    /// Raw titles the grammar rejected, in input order.
    pub rejected_titles: Vec<String>,
}

impl BatchOutcome {
    /// Sum of attributed minutes over all records.
    ///
    /// Multi-worker events are counted once per worker, so this can exceed
    /// the calendar time of the window.
    pub fn total_minutes(&self) -> u64 {
        self.records.iter().map(|r| r.duration_minutes).sum()
    }
}

/// Run the whole pipeline over a closed set of events.
pub fn run_batch(events: Vec<RawEvent>, options: &BatchOptions) -> BatchOutcome {
    let mut table = AggregationTable::new();
    let mut stats = BatchStats {
        fetched: events.len(),
        ..BatchStats::default()
    };
    let mut rejected_titles = Vec::new();

    for event in events {
        if let (Some(excluded), Some(color)) = (&options.excluded_color, &event.color) {
            if excluded == color {
                stats.excluded_color += 1;
                continue;
            }
        }

        let raw_title = event.title.as_deref().unwrap_or_default();
        let parsed = match options.parser.parse(raw_title) {
            Ok(parsed) => parsed,
            Err(err) => {
                match &err {
                    TitleError::Empty => {
                        tracing::warn!(title = ?raw_title, "skipping event with empty title")
                    }
                    TitleError::NoMatch { title } => {
                        tracing::warn!(title = %title, "skipping event with malformed title")
                    }
                }
                stats.malformed += 1;
                rejected_titles.push(raw_title.to_string());
                continue;
            }
        };

        let minutes = duration::minutes(event.start, event.end);
        if minutes <= 0 {
            tracing::debug!(title = raw_title, minutes, "skipping non-positive duration");
            stats.non_positive += 1;
            continue;
        }

        table.accumulate_all(&parsed, minutes as u64, event.color.as_deref());
        stats.aggregated += 1;
    }

    let records = aggregate::order(table.into_records());
    tracing::info!(
        fetched = stats.fetched,
        aggregated = stats.aggregated,
        malformed = stats.malformed,
        non_positive = stats.non_positive,
        excluded_color = stats.excluded_color,
        records = records.len(),
        "batch complete"
    );

    BatchOutcome {
        records,
        stats,
        rejected_titles,
    }
}
