//! Error types for the series downloader.

use quotewire_fetch::{FetchError, RetryError};
use quotewire_format::FormatError;
use quotewire_types::{MonthRangeError, YearMonth};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while downloading a series.
#[derive(Error, Debug)]
pub enum SeriesError {
    /// The configured month range is invalid.
    #[error(transparent)]
    Range(#[from] MonthRangeError),

    /// The configured lot size is zero, negative or not finite.
    #[error("Invalid lot size {0}, expected a positive number")]
    InvalidLotSize(f64),

    /// The request URL for a month could not be built.
    #[error("Invalid request for {month}: {source}")]
    InvalidRequest {
        /// The month being requested.
        month: YearMonth,
        /// The underlying error.
        source: FetchError,
    },

    /// The month could not be fetched after the configured attempts.
    #[error("Failed to fetch {month}: {source}")]
    Fetch {
        /// The month being requested.
        month: YearMonth,
        /// The underlying error.
        source: RetryError<FetchError>,
    },

    /// The response body was not the expected JSON.
    #[error("Malformed response for {month}: {source}")]
    Parse {
        /// The month being requested.
        month: YearMonth,
        /// The underlying error.
        source: serde_json::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write '{path}': {source}")]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying error.
        source: FormatError,
    },
}

impl SeriesError {
    /// Returns the month this error belongs to, if any.
    #[must_use]
    pub const fn month(&self) -> Option<YearMonth> {
        match self {
            Self::InvalidRequest { month, .. }
            | Self::Fetch { month, .. }
            | Self::Parse { month, .. } => Some(*month),
            Self::Range(_) | Self::InvalidLotSize(_) | Self::Write { .. } => None,
        }
    }
}
