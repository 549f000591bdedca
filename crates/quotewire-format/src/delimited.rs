//! Delimited (TSV / CSV) series output.

use quotewire_types::SeriesTable;
use std::io::Write;

use crate::{FormatError, Formatter, SERIES_COLUMNS, format_float};

/// UTF-8 byte-order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Delimited series formatter.
#[derive(Debug, Clone)]
pub struct DelimitedFormatter {
    /// Field delimiter.
    delimiter: u8,
    /// Whether to include the header row.
    include_header: bool,
    /// Whether to prefix the output with a UTF-8 byte-order mark.
    byte_order_mark: bool,
}

impl Default for DelimitedFormatter {
    fn default() -> Self {
        Self::tsv()
    }
}

impl DelimitedFormatter {
    /// Creates a comma-separated formatter without byte-order mark.
    #[must_use]
    pub const fn csv() -> Self {
        Self {
            delimiter: b',',
            include_header: true,
            byte_order_mark: false,
        }
    }

    /// Creates the tab-separated formatter used for the series file:
    /// header row, UTF-8 with byte-order mark.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            include_header: true,
            byte_order_mark: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Sets whether to write a UTF-8 byte-order mark.
    #[must_use]
    pub const fn with_byte_order_mark(mut self, bom: bool) -> Self {
        self.byte_order_mark = bom;
        self
    }
}

impl Formatter for DelimitedFormatter {
    fn write_series<W: Write>(
        &self,
        table: &SeriesTable,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.byte_order_mark {
            writer.write_all(UTF8_BOM)?;
        }

        let mut out = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        if self.include_header {
            out.write_record(SERIES_COLUMNS)?;
        }

        for bar in table {
            out.write_record([
                bar.date.format("%Y-%m-%d").to_string(),
                format_float(bar.open),
                format_float(bar.high),
                format_float(bar.low),
                format_float(bar.close),
                format_float(bar.volume),
                format_float(bar.turnover),
                format_float(bar.change),
                format_float(bar.transactions),
            ])?;
        }

        out.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == b'\t' { "txt" } else { "csv" }
    }
}
