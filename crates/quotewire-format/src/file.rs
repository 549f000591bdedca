//! Writing a series table to a file in a chosen format.

use quotewire_types::SeriesTable;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::{DelimitedFormatter, FormatError, Formatter, OutputFormat};

/// Writes `table` to `path` in `format`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written, or if the
/// format was not compiled in.
pub fn write_series_file(
    path: &Path,
    table: &SeriesTable,
    format: OutputFormat,
) -> Result<(), FormatError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Tsv => DelimitedFormatter::tsv().write_series(table, &mut writer)?,
        OutputFormat::Csv => DelimitedFormatter::csv().write_series(table, &mut writer)?,
        #[cfg(feature = "json")]
        OutputFormat::Json => crate::JsonFormatter::Array.write_series(table, &mut writer)?,
        #[cfg(feature = "json")]
        OutputFormat::Ndjson => crate::JsonFormatter::Lines.write_series(table, &mut writer)?,
        #[cfg(not(feature = "json"))]
        OutputFormat::Json | OutputFormat::Ndjson => return Err(FormatError::Unsupported(format)),
    }

    writer.flush()?;
    debug!(path = %path.display(), rows = table.len(), %format, "wrote series");
    Ok(())
}
