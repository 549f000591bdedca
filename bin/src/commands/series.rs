//! Series command implementation.
//!
//! Downloads monthly daily-trading data for one instrument, writes the
//! cleaned table and renders the candlestick chart.

use crate::config::AppConfig;
use crate::display::{month_line, month_progress, series_summary};
use anyhow::{Context, Result};
use clap::Args;
use quotewire_lib::prelude::*;
use std::path::PathBuf;
use tracing::warn;

/// Arguments for `quotewire series`.
#[derive(Debug, Args)]
pub(crate) struct SeriesArgs {
    /// Config file (JSON). Defaults to the platform config file if present.
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Exchange instrument identifier (e.g., 2330)
    #[arg(long)]
    pub(crate) stock: Option<String>,

    /// First month (YYYY-MM)
    #[arg(short, long)]
    pub(crate) start: Option<YearMonth>,

    /// Last month (YYYY-MM)
    #[arg(short, long)]
    pub(crate) end: Option<YearMonth>,

    /// Output file path. Defaults to all_data.<format extension>
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Output format (tsv, csv, json, ndjson)
    #[arg(short, long)]
    pub(crate) format: Option<OutputFormat>,

    /// Chart file path (SVG)
    #[arg(long)]
    pub(crate) chart: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long)]
    pub(crate) no_chart: bool,

    /// Chart title
    #[arg(short, long)]
    pub(crate) title: Option<String>,
}

impl SeriesArgs {
    /// Applies the command-line overrides on top of the loaded config.
    pub(crate) fn apply(&self, app: &mut AppConfig) {
        let series = &mut app.series;
        if let Some(stock) = &self.stock {
            series.stock_no.clone_from(stock);
        }
        if let Some(start) = self.start {
            series.start = start;
        }
        if let Some(end) = self.end {
            series.end = end;
        }
        if let Some(format) = self.format {
            series.format = format;
            if self.output.is_none() {
                series.output.set_extension(format.extension());
            }
        }
        if let Some(output) = &self.output {
            series.output.clone_from(output);
        }

        #[cfg(feature = "chart")]
        {
            if let Some(chart) = &self.chart {
                app.chart.output.clone_from(chart);
            }
            if let Some(title) = &self.title {
                app.chart.title.clone_from(title);
            } else if let Some(stock) = &self.stock {
                app.chart.title = format!("{stock} Daily Candlestick");
            }
        }
    }
}

/// Download, clean and write the series, then render the chart.
pub(crate) async fn series(args: SeriesArgs, quiet: bool) -> Result<()> {
    let mut app = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut app);

    let range = app.series.range()?;
    let today = chrono::Local::now().date_naive();
    let planned = range
        .clamp_end(YearMonth::of(today))
        .map_or(0, |r| r.total_months());

    let progress = month_progress(
        planned,
        format!("{} {range}", app.series.stock_no),
        quiet,
    )?;

    let run = download_series(&ClientConfig::default(), &app.series, today, |month| {
        if month.is_failed() {
            progress.println(month_line(month));
        }
        progress.inc(1);
    })
    .await
    .context("Series download failed")?;

    progress.finish_with_message(series_summary(&run));

    if !quiet {
        println!("Output written to: {}", run.output.display());
    }

    if args.no_chart {
        return Ok(());
    }
    if run.table.is_empty() {
        warn!("no trading days in the output, chart skipped");
        return Ok(());
    }

    #[cfg(feature = "chart")]
    {
        render_chart(&run.table, &app.chart).context("Chart rendering failed")?;
        if !quiet {
            println!("Chart written to: {}", app.chart.output.display());
        }
    }

    Ok(())
}
