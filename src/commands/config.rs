//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use caltally::Config;

use super::load_config;

fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Effective configuration as TOML.
pub fn render_config(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// Show the effective configuration (file values merged over defaults).
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    print!("{}", render_config(&config)?);
    Ok(())
}

/// Print the config file path and whether it exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    let path = resolve_path(config_path)?;
    if path.exists() {
        println!("{}", path.display());
    } else {
        println!("{} (not created yet, defaults in use)", path.display());
    }
    Ok(())
}

/// Write a default config file, refusing to overwrite unless forced.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }
    Config::default().save_to(path)
}

/// Handle `config init`.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = resolve_path(config_path)?;
    init_config(&path, force)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
