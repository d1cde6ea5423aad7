//! Configuration management for caltally

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::batch::BatchOptions;
use crate::title::{ParserOptions, TitleParser};

/// Characters that cannot appear in an artifact prefix.
const INVALID_PREFIX_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

impl Config {
    /// Get the config file path (~/.config/caltally/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/caltally)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Validate configuration values.
    ///
    /// Returns an error describing the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        ParserOptions::new(&self.parser.fallback_worker)
            .map_err(|e| format!("parser.fallback_worker: {}", e))?;

        let prefix = &self.output.artifact_prefix;
        if prefix.trim().is_empty() {
            return Err("output.artifact_prefix must not be empty".to_string());
        }
        if prefix.contains(INVALID_PREFIX_CHARS) {
            return Err(format!(
                "output.artifact_prefix '{}' contains a character not allowed in file names",
                prefix
            ));
        }
        if self.output.directory.trim().is_empty() {
            return Err("output.directory must not be empty".to_string());
        }

        if let Some(code) = self
            .workers
            .display_names
            .keys()
            .find(|code| code.trim().is_empty())
        {
            return Err(format!("workers.display_names has a blank worker code {:?}", code));
        }

        Ok(())
    }

    /// Expand ~ in the output directory path
    pub fn output_directory(&self) -> PathBuf {
        expand_home(&self.output.directory)
    }

    /// Configured events file, with ~ expanded
    pub fn events_file(&self) -> Option<PathBuf> {
        self.source.events_file.as_deref().map(expand_home)
    }

    /// Color excluded from reports, `None` when the filter is disabled
    pub fn excluded_color(&self) -> Option<&str> {
        let color = self.source.excluded_color.trim();
        (!color.is_empty()).then_some(color)
    }

    pub fn parser_options(&self) -> Result<ParserOptions> {
        ParserOptions::new(&self.parser.fallback_worker)
            .map_err(|e| anyhow::anyhow!("parser.fallback_worker: {}", e))
    }

    /// Options for a batch run built from this configuration
    pub fn batch_options(&self) -> Result<BatchOptions> {
        Ok(BatchOptions {
            parser: TitleParser::new(self.parser_options()?),
            excluded_color: self.excluded_color().map(str::to_string),
        })
    }

    /// Worker code to display name map
    pub fn display_names(&self) -> HashMap<String, String> {
        self.workers
            .display_names
            .iter()
            .map(|(code, name)| (code.clone(), name.clone()))
            .collect()
    }
}
