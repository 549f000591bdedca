//! Progress and summary output for the quotewire CLI.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use quotewire_lib::prelude::*;

/// Creates the month-loop progress bar, hidden in quiet mode.
pub(crate) fn month_progress(total: usize, message: String, quiet: bool) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} months ({percent}%) {msg}",
        )?
        .progress_chars("=>-"),
    );
    pb.set_message(message);
    Ok(pb)
}

/// One-line progress note for a finished month.
pub(crate) fn month_line(report: &MonthReport) -> String {
    match &report.status {
        MonthStatus::Fetched { rows } => format!("{} ok, {rows} rows", report.month),
        MonthStatus::Failed(e) => format!("{} skipped: {e}", report.month),
    }
}

/// Final message for the series progress bar.
pub(crate) fn series_summary(run: &SeriesRun) -> String {
    let failed = run.report.failed_months().count();
    let mut msg = format!(
        "Wrote {} trading days from {} months",
        run.table.len(),
        run.report.fetched_months()
    );
    if failed > 0 {
        msg.push_str(&format!(" ({failed} months skipped due to errors)"));
    }
    if run.report.skipped_future > 0 {
        msg.push_str(&format!(
            " ({} future months not requested)",
            run.report.skipped_future
        ));
    }
    msg
}

/// Summary line for a feed collection run.
pub(crate) fn feeds_summary(outcome: &CollectOutcome) -> String {
    match outcome {
        CollectOutcome::Written {
            path,
            rows,
            failed_sources,
        } => {
            let mut msg = format!("Appended {rows} entries to {}", path.display());
            if *failed_sources > 0 {
                msg.push_str(&format!(" ({failed_sources} sources skipped)"));
            }
            msg
        }
        CollectOutcome::NothingCollected { failed_sources } => {
            format!("No entries found ({failed_sources} sources skipped); nothing written")
        }
    }
}
