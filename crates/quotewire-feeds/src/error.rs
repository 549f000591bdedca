//! Error types for feed collection.

use quotewire_fetch::{FetchError, RetryError};
use quotewire_format::FormatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting feeds.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The feed could not be fetched.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] RetryError<FetchError>),

    /// The document is not a well-formed feed.
    #[error("Malformed feed: {0}")]
    Parse(#[from] feed_rs::parser::ParseFeedError),

    /// The output file could not be written.
    #[error("Failed to write '{path}': {source}")]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying error.
        source: FormatError,
    },
}
