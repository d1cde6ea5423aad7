//! caltally library
//!
//! Turns free-text calendar event titles into per-worker work-time records.
//! Titles follow a small grammar, `【work | client】task / worker・worker`;
//! parsed events are credited to every worker they name, merged by
//! `(work, client, task, worker)` and written out as a sheet with totals and
//! an optional cross-tab.

pub mod aggregate;
pub mod batch;
pub mod cli;
pub mod config;
pub mod duration;
pub mod normalize;
pub mod report;
pub mod sink;
pub mod source;
pub mod title;
pub mod window;

pub use aggregate::{AggregationTable, RecordKey, WorkRecord};
pub use batch::{run_batch, BatchOptions, BatchOutcome, BatchStats};
pub use config::Config;
pub use normalize::normalize;
pub use report::{ReportDefinition, SummarizeKind};
pub use sink::{Sheet, TabularSink};
pub use source::{EventSource, RawEvent};
pub use title::{ParsedTitle, TitleError, TitleParser};
pub use window::{TimeWindow, WindowPreset};
