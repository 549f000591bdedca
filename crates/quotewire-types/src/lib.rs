//! Core types for the quotewire feed collector and series downloader.
//!
//! This crate provides the data structures shared by the pipelines:
//!
//! - [`FeedEntry`] - A single (title, link, published) triple from a feed
//! - [`DailyBar`] - One trading day of cleaned exchange data
//! - [`SeriesTable`] - Date-indexed, ascending, de-duplicated daily bars
//! - [`YearMonth`] / [`MonthRange`] - Monthly request ranges
//! - [`calendar`] - Local (Minguo) calendar date conversion

#![doc(issue_tracker_base_url = "https://github.com/quotewire/quotewire/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
pub mod calendar;
mod error;
mod feed;
mod month;
mod table;

pub use bar::DailyBar;
pub use error::{MonthRangeError, YearMonthParseError};
pub use feed::{FeedEntry, NO_DATE, NO_LINK, NO_TITLE};
pub use month::{MonthIterator, MonthRange, YearMonth};
pub use table::SeriesTable;
