//! Monthly exchange series downloader for quotewire.
//!
//! [`SeriesDownloader`] requests one month of daily trading data at a time
//! from the exchange `STOCK_DAY` endpoint, retrying transport failures
//! with a fixed delay. Months that still fail are reported and skipped,
//! and months after the current one are never requested. The raw rows of
//! all fetched months are then passed through the [`clean`] pipeline and
//! written out as a date-indexed table.

#![doc(issue_tracker_base_url = "https://github.com/quotewire/quotewire/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod clean;
mod downloader;
mod error;
mod response;

pub use clean::{CleanOptions, CoercedRow, clean};
pub use downloader::{
    DownloadReport, MonthPlan, MonthReport, MonthStatus, SeriesConfig, SeriesDownloader,
    SeriesRun,
};
pub use error::SeriesError;
pub use response::{RawRow, columns, parse_month_response};
