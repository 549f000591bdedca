//! RSS/Atom feed collector for quotewire.
//!
//! For each configured source the collector fetches the document, parses
//! it with [`parse_feed`], and accumulates (title, link, published)
//! entries. Sources that fail are logged and skipped. The collected
//! entries are appended to a CSV file behind a header row; nothing is
//! written when no entries were found.

#![doc(issue_tracker_base_url = "https://github.com/quotewire/quotewire/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod collector;
mod error;
mod parse;

pub use collector::{CollectOutcome, CollectReport, FeedCollector, FeedConfig, SourceReport};
pub use error::FeedError;
pub use parse::parse_feed;
