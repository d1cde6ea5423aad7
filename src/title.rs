//! Calendar title grammar.
//!
//! Work is logged by writing event titles in a fixed shape:
//!
//! ```text
//! 【<work name> | <client>】<task> / <worker>・<worker>
//! ```
//!
//! The client and the worker list are optional. Full-width `｜` and `／`
//! are accepted as separators, and workers may be separated by `・` or `,`.
//!
//! # Example
//!
//! ```
//! use caltally::title::{ParserOptions, TitleParser};
//!
//! let parser = TitleParser::new(ParserOptions::default());
//! let parsed = parser.parse("【Alpha Tower | Acme Co.】Inspection / John・Mary").unwrap();
//! assert_eq!(parsed.work_name, "Alpha Tower");
//! assert_eq!(parsed.client_name, "Acme Co.");
//! assert_eq!(parsed.task, "Inspection");
//! assert_eq!(parsed.workers, vec!["John", "Mary"]);
//! ```

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::normalize;

/// Characters that separate workers inside the worker list.
pub const WORKER_DELIMITERS: &[char] = &['・', ','];

/// Worker code used when a title names nobody and no config overrides it.
pub const DEFAULT_FALLBACK_WORKER: &str = "unassigned";

fn title_re() -> &'static Regex {
    static TITLE_RE: OnceLock<Regex> = OnceLock::new();
    TITLE_RE.get_or_init(|| {
        Regex::new(concat!(
            r"^【(?P<work>.+?)",
            r"(?:\s*[|｜]\s*(?P<client>.*?))?",
            r"】(?P<task>.+?)",
            r"(?:\s*[/／]\s*(?P<workers>.+))?$",
        ))
        .expect("valid title regex")
    })
}

/// Why a title was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("title is empty")]
    Empty,

    #[error("title does not match 【work | client】task / workers: {title:?}")]
    NoMatch { title: String },
}

/// Invalid parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserOptionsError {
    #[error("fallback worker must not be empty")]
    EmptyFallbackWorker,

    #[error("fallback worker {0:?} contains a worker delimiter (・ or ,)")]
    DelimiterInFallbackWorker(String),
}

/// Options recognized by [`TitleParser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    fallback_worker: String,
}

impl ParserOptions {
    /// Build options, rejecting a fallback worker the grammar could never emit.
    pub fn new(fallback_worker: &str) -> Result<Self, ParserOptionsError> {
        let fallback_worker = normalize(fallback_worker);
        if fallback_worker.is_empty() {
            return Err(ParserOptionsError::EmptyFallbackWorker);
        }
        if fallback_worker.contains(WORKER_DELIMITERS) {
            return Err(ParserOptionsError::DelimiterInFallbackWorker(
                fallback_worker,
            ));
        }
        Ok(Self { fallback_worker })
    }

    pub fn fallback_worker(&self) -> &str {
        &self.fallback_worker
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            fallback_worker: DEFAULT_FALLBACK_WORKER.to_string(),
        }
    }
}

/// Structured fields extracted from one title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTitle {
    pub work_name: String,
    /// Empty when the title names no client.
    pub client_name: String,
    pub task: String,
    /// Never empty.
    pub workers: Vec<String>,
}

impl ParsedTitle {
    /// Render back into the canonical title format.
    pub fn to_title(&self) -> String {
        let mut out = String::from("【");
        out.push_str(&self.work_name);
        if !self.client_name.is_empty() {
            out.push_str(" | ");
            out.push_str(&self.client_name);
        }
        out.push('】');
        out.push_str(&self.task);
        if !self.workers.is_empty() {
            out.push_str(" / ");
            out.push_str(&self.workers.join("・"));
        }
        out
    }
}

impl fmt::Display for ParsedTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_title())
    }
}

/// Applies the title grammar to raw event titles.
#[derive(Debug, Clone, Default)]
pub struct TitleParser {
    options: ParserOptions,
}

impl TitleParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a raw title.
    ///
    /// The title is normalized first and the grammar must match the whole
    /// string; any unmatched leading or trailing character rejects it.
    /// A separator with no worker after it (`【A】T /`) is not a worker list,
    /// so it stays part of the task and the fallback worker applies.
    pub fn parse(&self, raw: &str) -> Result<ParsedTitle, TitleError> {
        let title = normalize(raw);
        if title.is_empty() {
            return Err(TitleError::Empty);
        }

        let no_match = || TitleError::NoMatch {
            title: raw.to_string(),
        };

        let caps = title_re().captures(&title).ok_or_else(no_match)?;

        let work_name = caps.name("work").map_or("", |m| m.as_str().trim());
        let task = caps.name("task").map_or("", |m| m.as_str().trim());
        if work_name.is_empty() || task.is_empty() {
            return Err(no_match());
        }

        let client_name = caps.name("client").map_or("", |m| m.as_str().trim());

        let workers = caps
            .name("workers")
            .map(|m| split_workers(m.as_str()))
            .unwrap_or_default();
        let workers = if workers.is_empty() {
            vec![self.options.fallback_worker.clone()]
        } else {
            workers
        };

        Ok(ParsedTitle {
            work_name: work_name.to_string(),
            client_name: client_name.to_string(),
            task: task.to_string(),
            workers,
        })
    }
}

/// Split a worker list, trimming each token and dropping blanks.
fn split_workers(list: &str) -> Vec<String> {
    list.split(WORKER_DELIMITERS)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
