//! HTTP client and retry policy for the quotewire pipelines.
//!
//! This crate provides the fetch layer shared by both pipelines:
//!
//! - [`Fetcher`] - Single-attempt document fetch, implemented by [`HttpClient`]
//! - [`RetryPolicy`] - Bounded attempts with a fixed delay
//! - [`url::stock_day_url`] - Exchange request URL construction

#![doc(issue_tracker_base_url = "https://github.com/quotewire/quotewire/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod retry;
pub mod url;

pub use client::{ClientConfig, FetchError, Fetcher, HttpClient};
pub use retry::{RetryError, RetryPolicy, Retryable};
