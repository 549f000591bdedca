//! Config command implementation.

use crate::config::AppConfig;
use anyhow::{Context, Result};

/// Prints the default configuration as JSON, or the config file location.
pub(crate) fn show_config(path_only: bool) -> Result<()> {
    if path_only {
        let path = AppConfig::default_path().context("No config directory on this platform")?;
        println!("{}", path.display());
        return Ok(());
    }
    println!("{}", AppConfig::default().to_json()?);
    Ok(())
}
