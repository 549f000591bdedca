//! JSON output: one bar object per line, either inside an array or bare.

use quotewire_types::SeriesTable;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON series writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormatter {
    /// A single JSON array, one bar per line.
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON).
    Lines,
}

impl Formatter for JsonFormatter {
    fn write_series<W: Write>(
        &self,
        table: &SeriesTable,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if *self == Self::Array && table.is_empty() {
            writer.write_all(b"[]\n")?;
            writer.flush()?;
            return Ok(());
        }

        if *self == Self::Array {
            writer.write_all(b"[\n")?;
        }
        for (idx, bar) in table.iter().enumerate() {
            if idx > 0 && *self == Self::Array {
                writer.write_all(b",\n")?;
            }
            serde_json::to_writer(&mut writer, bar)?;
            if *self == Self::Lines {
                writer.write_all(b"\n")?;
            }
        }
        if *self == Self::Array {
            writer.write_all(b"\n]\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        match self {
            Self::Array => "json",
            Self::Lines => "ndjson",
        }
    }
}
