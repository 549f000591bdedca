//! Feeds command implementation.
//!
//! Fetches every configured RSS/Atom source and appends the entries to the
//! feed CSV file.

use crate::config::AppConfig;
use crate::display::feeds_summary;
use anyhow::{Context, Result};
use clap::Args;
use quotewire_lib::prelude::*;
use std::path::PathBuf;

/// Arguments for `quotewire feeds`.
#[derive(Debug, Args)]
pub(crate) struct FeedsArgs {
    /// Config file (JSON). Defaults to the platform config file if present.
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// CSV file to append to
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Feed URL; repeat to replace the configured sources
    #[arg(short, long = "source")]
    pub(crate) sources: Vec<String>,
}

impl FeedsArgs {
    /// Applies the command-line overrides on top of the loaded config.
    pub(crate) fn apply(self, config: &mut FeedConfig) {
        if let Some(output) = self.output {
            config.output = output;
        }
        if !self.sources.is_empty() {
            config.sources = self.sources;
        }
    }
}

/// Collect feeds and append them to the output file.
pub(crate) async fn feeds(args: FeedsArgs, quiet: bool) -> Result<()> {
    let mut app = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut app.feeds);

    let outcome = collect_feeds(&ClientConfig::default(), &app.feeds)
        .await
        .context("Feed collection failed")?;

    if !quiet {
        println!("{}", feeds_summary(&outcome));
    }
    Ok(())
}
