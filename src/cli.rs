//! CLI definitions for caltally
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use chrono::NaiveDate;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

use crate::window::{parse_date, WindowPreset};

/// Build clap styles.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "caltally")]
#[command(about = "Turn calendar event titles into per-worker time reports")]
#[command(
    long_about = "caltally - Turn calendar event titles into per-worker time reports.

Events are logged by title, in the form:

    【work name | client】task / worker・worker

The client and the worker list are optional. caltally parses every event
in a time window, credits its duration to each worker it names, merges
entries for the same work, client, task and worker, and writes a report
sheet with a totals row plus a cross-tab.

QUICK START:
    caltally run --input events.json                 Report the previous month
    caltally run --input events.json --preset current-week
    caltally parse \"【Alpha | Acme】Inspection / John\"  Check a title
    caltally config init                             Write a default config"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Use this config file instead of ~/.config/caltally/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output (-v for debug, -vv for trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the report for a time window
    #[command(long_about = "Build the report for a time window.

Reads events from a JSON export, keeps those starting inside the window,
and writes <prefix>_<first day>_<last day>.csv (and _pivot.csv) into the
output directory. Running again for the same window replaces the files.

Without --from/--to or --preset, the window comes from [window].default
in the config (previous month unless configured).

EXAMPLES:
    caltally run --input events.json
    caltally run --input events.json --from 2025-01-01 --to 2025-01-31
    caltally run --input events.json --preset previous-week --dry-run")]
    Run {
        /// First day of the window (inclusive)
        #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date, requires = "to")]
        from: Option<NaiveDate>,
        /// Last day of the window (inclusive)
        #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date, requires = "from")]
        to: Option<NaiveDate>,
        /// Named window relative to today
        #[arg(long, value_enum, conflicts_with_all = ["from", "to"])]
        preset: Option<WindowPreset>,
        /// Events JSON file (overrides [source].events_file)
        #[arg(long, short, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Output directory (overrides [output].directory)
        #[arg(long, short, value_name = "DIR")]
        output: Option<PathBuf>,
        /// Print the report instead of writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Show what the title grammar extracts
    #[command(long_about = "Parse titles and show the extracted fields.

Useful for checking how an event title will be counted before running
a report. Titles that do not match the grammar are reported and make
the command exit with status 1.

EXAMPLES:
    caltally parse \"【Alpha Tower | Acme Co.】Inspection / John・Mary\"
    caltally parse \"【Beta Site】Cleanup\"")]
    Parse {
        /// Event titles to parse
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// List report field names and summarize operators
    Fields,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
