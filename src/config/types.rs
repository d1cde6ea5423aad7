//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::report::ReportDefinition;
use crate::title::DEFAULT_FALLBACK_WORKER;
use crate::window::WindowPreset;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub workers: WorkersConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub report: ReportDefinition,
}

/// Title grammar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Worker code credited when a title names nobody
    #[serde(default = "default_fallback_worker")]
    pub fallback_worker: String,
}

pub fn default_fallback_worker() -> String {
    DEFAULT_FALLBACK_WORKER.to_string()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            fallback_worker: default_fallback_worker(),
        }
    }
}

/// Event source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Default events file (overridden by `--input`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<String>,
    /// Events with this color are never reported (Google Calendar "8" is
    /// graphite). Empty disables the filter.
    #[serde(default = "default_excluded_color")]
    pub excluded_color: String,
}

pub fn default_excluded_color() -> String {
    "8".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            events_file: None,
            excluded_color: default_excluded_color(),
        }
    }
}

/// Worker display names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkersConfig {
    /// Worker code -> name shown in reports
    #[serde(default)]
    pub display_names: BTreeMap<String, String>,
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: String,
    /// Artifact names are `<prefix>_<first day>_<last day>`
    #[serde(default = "default_artifact_prefix")]
    pub artifact_prefix: String,
    /// Also write the cross-tab described by `[report]`
    #[serde(default = "default_write_pivot")]
    pub write_pivot: bool,
}

pub fn default_output_directory() -> String {
    "~/caltally_reports".to_string()
}

pub fn default_artifact_prefix() -> String {
    "worklog".to_string()
}

pub fn default_write_pivot() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            artifact_prefix: default_artifact_prefix(),
            write_pivot: default_write_pivot(),
        }
    }
}

/// Time window defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window used when neither `--from/--to` nor `--preset` is given
    #[serde(default)]
    pub default: WindowPreset,
}
