//! Append-mode CSV output for feed entries.

use quotewire_types::FeedEntry;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::FormatError;

/// Default header row, as written by earlier releases of the collector.
pub const DEFAULT_FEED_HEADER: [&str; 3] = ["標題", "連結", "發布時間"];

/// Writes feed entries as comma-separated rows.
///
/// Every write emits the header row first, so appending to an existing
/// file repeats the header. Absent fields become their placeholders.
#[derive(Debug, Clone)]
pub struct FeedCsvWriter {
    header: [String; 3],
}

impl Default for FeedCsvWriter {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_HEADER.map(String::from))
    }
}

impl FeedCsvWriter {
    /// Creates a writer with the given header row.
    #[must_use]
    pub const fn new(header: [String; 3]) -> Self {
        Self { header }
    }

    /// Returns the header row.
    #[must_use]
    pub const fn header(&self) -> &[String; 3] {
        &self.header
    }

    /// Writes the header and one row per entry to `writer`.
    ///
    /// Returns the number of data rows written.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_entries<W: Write>(
        &self,
        entries: &[FeedEntry],
        writer: W,
    ) -> Result<usize, FormatError> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(&self.header)?;
        for entry in entries {
            out.write_record(entry.to_record())?;
        }
        out.flush()?;
        Ok(entries.len())
    }

    /// Appends the header and entries to the file at `path`, creating it if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append(&self, path: &Path, entries: &[FeedEntry]) -> Result<usize, FormatError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        debug!(path = %path.display(), rows = entries.len(), "appending feed rows");
        self.write_entries(entries, BufWriter::new(file))
    }
}
