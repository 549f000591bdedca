//! Output writers for quotewire feed entries and daily series.
//!
//! - [`FeedCsvWriter`] - Append-mode CSV for feed entries
//! - [`DelimitedFormatter`] - TSV (with byte-order mark) or CSV series output
//! - [`JsonFormatter`] - JSON array or NDJSON series output

#![doc(issue_tracker_base_url = "https://github.com/quotewire/quotewire/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod delimited;
mod feed;
mod file;
mod formatter;

#[cfg(feature = "json")]
mod json;

pub use delimited::{DelimitedFormatter, UTF8_BOM};
pub use feed::{DEFAULT_FEED_HEADER, FeedCsvWriter};
pub use file::write_series_file;
pub use formatter::{FormatError, Formatter, OutputFormat, SERIES_COLUMNS, format_float};

#[cfg(feature = "json")]
pub use json::JsonFormatter;
