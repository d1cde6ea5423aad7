//! xtask - Build tasks for caltally
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate man pages and COMMANDS.md from the CLI definitions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};

use caltally::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for caltally")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages only
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md only
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

fn write_man_page(man_dir: &Path, file_stem: &str, cmd: &Command) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;

    let path = man_dir.join(format!("{}.1", file_stem));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    write_man_page(&man_dir, "caltally", &cmd)?;

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let stem = format!("caltally-{}", subcommand.get_name());
        write_man_page(&man_dir, &stem, subcommand)?;

        for nested in subcommand.get_subcommands().filter(|c| !c.is_hide_set()) {
            write_man_page(
                &man_dir,
                &format!("{}-{}", stem, nested.get_name()),
                nested,
            )?;
        }
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

/// Arguments and options of one command as markdown bullets.
fn argument_list(cmd: &Command) -> String {
    let mut out = String::new();

    for arg in cmd.get_arguments() {
        let id = arg.get_id().as_str();
        if id == "help" || id == "version" {
            continue;
        }

        let flag = if arg.is_positional() {
            format!("<{}>", id.to_uppercase())
        } else {
            let long = arg.get_long().map(|l| format!("--{}", l));
            let short = arg.get_short().map(|s| format!("-{}", s));
            match (long, short) {
                (Some(l), Some(s)) => format!("{}, {}", s, l),
                (Some(l), None) => l,
                (None, Some(s)) => s,
                _ => continue,
            }
        };

        out.push_str(&format!("- `{}`", flag));
        if let Some(help) = arg.get_help() {
            out.push_str(&format!(": {}", help));
        }
        out.push('\n');
    }

    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn command_section(markdown: &mut String, heading: &str, path: &str, cmd: &Command) {
    markdown.push_str(&format!("{} {}\n\n", heading, path));

    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    markdown.push_str(&argument_list(cmd));

    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", long_about));
        markdown.push_str("```\n\n");
    }
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# caltally Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    markdown.push_str("## Table of Contents\n\n");
    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("- [{}](#caltally-{})\n", name, name));
    }
    markdown.push_str("\n---\n\n");

    command_section(&mut markdown, "##", "caltally", &cmd);

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let path = format!("caltally {}", subcommand.get_name());
        command_section(&mut markdown, "##", &path, subcommand);

        for nested in subcommand.get_subcommands().filter(|c| !c.is_hide_set()) {
            let nested_path = format!("{} {}", path, nested.get_name());
            command_section(&mut markdown, "###", &nested_path, nested);
        }
        markdown.push_str("---\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
