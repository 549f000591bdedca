//! Feed collection and exchange series download library.
//!
//! This is a facade crate that re-exports functionality from the quotewire
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use quotewire_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ClientConfig::default();
//!
//!     collect_feeds(&client, &FeedConfig::default()).await?;
//!
//!     let today = chrono::Local::now().date_naive();
//!     let run = download_series(&client, &SeriesConfig::default(), today, |_| {}).await?;
//!     println!("{} trading days", run.table.len());
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/quotewire/quotewire/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod pipeline;

pub use error::{QuotewireError, Result};
pub use pipeline::{collect_feeds, download_series};

#[cfg(feature = "chart")]
pub use pipeline::render_chart;

// Re-export core types
pub use quotewire_types::*;

// Re-export fetch functionality
pub use quotewire_fetch::{
    ClientConfig, FetchError, Fetcher, HttpClient, RetryError, RetryPolicy, Retryable,
};

// Re-export pipelines
pub use quotewire_feeds::{
    CollectOutcome, CollectReport, FeedCollector, FeedConfig, FeedError, SourceReport, parse_feed,
};
pub use quotewire_series::{
    CleanOptions, DownloadReport, MonthPlan, MonthReport, MonthStatus, RawRow, SeriesConfig,
    SeriesDownloader, SeriesError, SeriesRun, clean, parse_month_response,
};

// Re-export formatters
pub use quotewire_format::{
    DelimitedFormatter, FeedCsvWriter, FormatError, Formatter, OutputFormat, write_series_file,
};

#[cfg(feature = "json")]
pub use quotewire_format::JsonFormatter;

// Re-export chart rendering
#[cfg(feature = "chart")]
pub use quotewire_chart::{ChartConfig, ChartError, ChartStyle, render_svg};

/// Prelude module for convenient imports.
///
/// ```
/// use quotewire_lib::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{QuotewireError, Result};
    pub use crate::pipeline::{collect_feeds, download_series};

    #[cfg(feature = "chart")]
    pub use crate::pipeline::render_chart;

    pub use quotewire_types::{DailyBar, FeedEntry, MonthRange, SeriesTable, YearMonth};

    pub use quotewire_fetch::{ClientConfig, Fetcher, HttpClient, RetryPolicy};

    pub use quotewire_feeds::{CollectOutcome, FeedCollector, FeedConfig};

    pub use quotewire_series::{
        MonthReport, MonthStatus, SeriesConfig, SeriesDownloader, SeriesRun,
    };

    pub use quotewire_format::{OutputFormat, write_series_file};

    #[cfg(feature = "chart")]
    pub use quotewire_chart::{ChartConfig, ChartStyle};
}
