//! Run command handler

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

use caltally::report::{CrossTabBuilder, PivotBuilder};
use caltally::sink::{build_sheet, render_table, CsvSink, Sheet, TabularSink};
use caltally::source::{EventSource, JsonFileSource};
use caltally::{run_batch, BatchOutcome, Config, TimeWindow, WindowPreset};

use super::{load_config, truncate_string};

/// Longest rejected title shown in the summary.
const MAX_TITLE_DISPLAY: usize = 60;

pub struct RunArgs {
    /// Inclusive first and last day
    pub range: Option<(NaiveDate, NaiveDate)>,
    pub preset: Option<WindowPreset>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}

/// Pick the window: explicit dates, then `--preset`, then the configured default.
pub fn resolve_window(
    range: Option<(NaiveDate, NaiveDate)>,
    preset: Option<WindowPreset>,
    config: &Config,
    today: NaiveDate,
) -> Result<TimeWindow> {
    let window = match range {
        Some((first, last)) => TimeWindow::from_dates(first, last)?,
        None => TimeWindow::preset(preset.unwrap_or(config.window.default), today)?,
    };
    Ok(window)
}

/// The report sheet and its optional cross-tab.
pub struct Report {
    pub outcome: BatchOutcome,
    pub sheet: Sheet,
    pub pivot: Option<Sheet>,
}

/// Fetch, aggregate and lay out one window.
pub fn build_report(
    config: &Config,
    source: &dyn EventSource,
    window: &TimeWindow,
) -> Result<Report> {
    let events = source.fetch(window)?;
    let outcome = run_batch(events, &config.batch_options()?);

    let sheet = build_sheet(&outcome.records, &config.display_names());
    let pivot = if config.output.write_pivot {
        PivotBuilder.build(&config.report.resolve(), &sheet)
    } else {
        None
    };

    Ok(Report {
        outcome,
        sheet,
        pivot,
    })
}

/// Write the report; a missing cross-tab removes any stale one for the window.
pub fn write_report(
    sink: &mut dyn TabularSink,
    artifact: &str,
    report: &Report,
) -> Result<Vec<PathBuf>> {
    let mut written = vec![sink.write(artifact, &report.sheet)?];

    let pivot_name = format!("{}_pivot", artifact);
    match &report.pivot {
        Some(pivot) => written.push(sink.write(&pivot_name, pivot)?),
        None => {
            sink.remove(&pivot_name)?;
        }
    }
    Ok(written)
}

fn input_path(input: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    input
        .or_else(|| config.events_file())
        .context("No events file given. Pass --input or set [source].events_file in the config.")
}

fn print_summary(window: &TimeWindow, outcome: &BatchOutcome) {
    let stats = &outcome.stats;
    println!("Window: {}", window);
    println!(
        "Events: {} fetched, {} counted, {} malformed, {} zero-length, {} excluded by color",
        stats.fetched, stats.aggregated, stats.malformed, stats.non_positive, stats.excluded_color
    );
    println!(
        "Records: {} ({} attributed minutes)",
        outcome.records.len(),
        outcome.total_minutes()
    );

    if !outcome.rejected_titles.is_empty() {
        println!();
        println!("Skipped titles (expected 【work | client】task / workers):");
        for title in &outcome.rejected_titles {
            let shown = if title.is_empty() { "(empty)" } else { title };
            println!("  {}", truncate_string(shown, MAX_TITLE_DISPLAY));
        }
    }
}

/// Handle the run command.
#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: Option<&Path>, args: RunArgs) -> Result<()> {
    let config = load_config(config_path)?;
    let window = resolve_window(args.range, args.preset, &config, Local::now().date_naive())?;
    let source = JsonFileSource::new(input_path(args.input, &config)?);

    let report = build_report(&config, &source, &window)?;
    print_summary(&window, &report.outcome);

    if args.dry_run {
        println!();
        print!("{}", render_table(&report.sheet));
        if let Some(pivot) = &report.pivot {
            println!();
            print!("{}", render_table(pivot));
        }
        return Ok(());
    }

    let directory = args.output.unwrap_or_else(|| config.output_directory());
    let mut sink = CsvSink::new(directory);
    let artifact = window.artifact_name(&config.output.artifact_prefix);

    println!();
    for path in write_report(&mut sink, &artifact, &report)? {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
