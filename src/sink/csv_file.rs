//! CSV files in a report directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{Sheet, TabularSink};

/// Writes each sheet to `<directory>/<name>.csv`.
///
/// The file is written next to its destination and renamed into place, so a
/// failed run never leaves a half-written report and a rerun replaces the
/// previous one.
#[derive(Debug, Clone)]
pub struct CsvSink {
    directory: PathBuf,
}

impl CsvSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Final path for an artifact name.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{}.csv", name))
    }
}

impl TabularSink for CsvSink {
    fn write(&mut self, name: &str, sheet: &Sheet) -> Result<PathBuf> {
        fs::create_dir_all(&self.directory).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.directory.display()
            )
        })?;

        let path = self.path_for(name);
        let tmp_path = self.directory.join(format!("{}.csv.tmp", name));

        write_csv(&tmp_path, sheet)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path).with_context(|| {
            format!(
                "Failed to move {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        tracing::info!(path = %path.display(), rows = sheet.rows.len(), "wrote sheet");
        Ok(path)
    }

    fn remove(&mut self, name: &str) -> Result<bool> {
        let path = self.path_for(name);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove stale artifact: {}", path.display()))?;
        tracing::info!(path = %path.display(), "removed stale sheet");
        Ok(true)
    }
}

fn write_csv(path: &Path, sheet: &Sheet) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    writer.write_record(&sheet.header)?;
    for row in &sheet.rows {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    if let Some(totals) = &sheet.totals {
        writer.write_record(totals.iter().map(|cell| cell.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}
