//! Feed collection pipeline: fetch, parse, append.

use quotewire_fetch::{Fetcher, RetryPolicy};
use quotewire_format::{DEFAULT_FEED_HEADER, FeedCsvWriter};
use quotewire_types::FeedEntry;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::{FeedError, parse_feed};

/// Configuration for a feed collection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Feed URLs, processed in order.
    pub sources: Vec<String>,
    /// CSV file that rows are appended to.
    pub output: PathBuf,
    /// Header row written before each batch.
    pub header: [String; 3],
    /// Retry policy for each feed request.
    pub retry: RetryPolicy,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                "https://finance.yahoo.com/rss/headline?s=WELL".to_string(),
                "https://tw.stock.yahoo.com/rss?q=%E6%88%BF%E5%9C%B0%E7%94%A2".to_string(),
            ],
            output: PathBuf::from("rss_feed_data.csv"),
            header: DEFAULT_FEED_HEADER.map(String::from),
            retry: RetryPolicy::single_attempt(),
        }
    }
}

/// Result of processing one feed source.
#[derive(Debug)]
pub struct SourceReport {
    /// The feed URL.
    pub source: String,
    /// Entry count, or the error that caused the source to be skipped.
    pub outcome: Result<usize, FeedError>,
}

impl SourceReport {
    /// Returns true if the source was skipped.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Everything gathered from one pass over the configured sources.
#[derive(Debug, Default)]
pub struct CollectReport {
    /// All entries, sources in configured order, entries in feed order.
    pub entries: Vec<FeedEntry>,
    /// Per-source outcomes.
    pub sources: Vec<SourceReport>,
}

impl CollectReport {
    /// Returns the number of sources that were skipped.
    #[must_use]
    pub fn failed_sources(&self) -> usize {
        self.sources.iter().filter(|s| s.is_failed()).count()
    }

    /// Returns the number of sources that parsed successfully.
    #[must_use]
    pub fn parsed_sources(&self) -> usize {
        self.sources.len() - self.failed_sources()
    }
}

/// What a collection run did with its output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectOutcome {
    /// No entries were found; the output file was not touched.
    NothingCollected {
        /// Number of sources that were skipped.
        failed_sources: usize,
    },
    /// Rows were appended to the output file.
    Written {
        /// The output file.
        path: PathBuf,
        /// Number of data rows (excluding the header).
        rows: usize,
        /// Number of sources that were skipped.
        failed_sources: usize,
    },
}

/// Fetches every configured feed and appends the entries as CSV rows.
#[derive(Debug)]
pub struct FeedCollector<'a, F: ?Sized> {
    fetcher: &'a F,
    config: &'a FeedConfig,
}

impl<'a, F: Fetcher + ?Sized> FeedCollector<'a, F> {
    /// Creates a collector over the given fetcher and configuration.
    pub const fn new(fetcher: &'a F, config: &'a FeedConfig) -> Self {
        Self { fetcher, config }
    }

    /// Fetches and parses a single source.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails after the configured attempts or
    /// the document is not a valid feed.
    pub async fn fetch_source(&self, source: &str) -> Result<Vec<FeedEntry>, FeedError> {
        let body = self
            .config
            .retry
            .run(|_| self.fetcher.fetch(source))
            .await?;
        parse_feed(&body)
    }

    /// Processes every source in order, skipping the ones that fail.
    pub async fn collect(&self) -> CollectReport {
        let mut report = CollectReport::default();

        for source in &self.config.sources {
            info!(source = %source, "processing feed");
            let outcome = match self.fetch_source(source).await {
                Ok(entries) => {
                    info!(source = %source, entries = entries.len(), "parsed feed");
                    for entry in &entries {
                        debug!(title = entry.title_or_placeholder(), "entry");
                    }
                    let count = entries.len();
                    report.entries.extend(entries);
                    Ok(count)
                }
                Err(e) => {
                    warn!(source = %source, error = %e, "skipping feed");
                    Err(e)
                }
            };
            report.sources.push(SourceReport {
                source: source.clone(),
                outcome,
            });
        }

        report
    }

    /// Collects all sources and appends the result to the output file.
    ///
    /// Nothing is written when no entries were collected.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Write`] if the output file cannot be written.
    /// Source failures are not errors; they are counted in the outcome.
    pub async fn run(&self) -> Result<CollectOutcome, FeedError> {
        let report = self.collect().await;
        let failed_sources = report.failed_sources();

        if report.entries.is_empty() {
            warn!(
                sources = report.sources.len(),
                failed_sources, "no entries found, nothing written"
            );
            return Ok(CollectOutcome::NothingCollected { failed_sources });
        }

        let path = self.config.output.clone();
        let writer = FeedCsvWriter::new(self.config.header.clone());
        let rows = writer
            .append(&path, &report.entries)
            .map_err(|source| FeedError::Write {
                path: path.clone(),
                source,
            })?;

        info!(path = %path.display(), rows, "appended feed entries");
        Ok(CollectOutcome::Written {
            path,
            rows,
            failed_sources,
        })
    }
}
