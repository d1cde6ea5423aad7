//! Parse command handler

use anyhow::{bail, Result};
use std::path::Path;

use caltally::{ParsedTitle, TitleParser};

use super::load_config;

/// Describe one parsed title, one field per line.
pub fn describe(parsed: &ParsedTitle) -> String {
    let client = if parsed.client_name.is_empty() {
        "(none)"
    } else {
        parsed.client_name.as_str()
    };
    format!(
        "  work:    {}\n  client:  {}\n  task:    {}\n  workers: {}\n",
        parsed.work_name,
        client,
        parsed.task,
        parsed.workers.join(", ")
    )
}

/// Handle the parse command.
///
/// Fails when any title is rejected, so the command works in scripts.
#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: Option<&Path>, titles: &[String]) -> Result<()> {
    let config = load_config(config_path)?;
    let parser = TitleParser::new(config.parser_options()?);

    let mut rejected = 0;
    for title in titles {
        println!("{}", title);
        match parser.parse(title) {
            Ok(parsed) => print!("{}", describe(&parsed)),
            Err(err) => {
                rejected += 1;
                println!("  rejected: {}", err);
            }
        }
    }

    if rejected > 0 {
        bail!("{} of {} titles did not match", rejected, titles.len());
    }
    Ok(())
}
