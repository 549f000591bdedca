//! Cleaning pipeline: raw exchange rows to a date-indexed [`SeriesTable`].
//!
//! The pipeline is an ordered sequence of pure, whole-table transforms.
//! Each step takes the previous step's rows by reference and returns new
//! rows:
//!
//! 1. [`convert_era_dates`] - Minguo year to Gregorian year
//! 2. [`strip_thousands_separators`] - `1,234,567` to `1234567`
//! 3. [`coerce_numeric`] - text to `f64`, failures become `None`
//! 4. [`scale_lots`] - shares to lots for volume and turnover
//! 5. [`drop_incomplete`] - remove rows with any `None`
//! 6. [`index_by_date`] - parse dates, sort, de-duplicate

use quotewire_types::calendar::{minguo_to_gregorian, parse_gregorian};
use quotewire_types::{DailyBar, SeriesTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::RawRow;
use crate::response::columns;

/// Number of numeric columns (every column except the date).
pub const NUMERIC_COLUMNS: usize = columns::COUNT - 1;

/// Raw columns divided by the lot size.
pub const SCALED_COLUMNS: [usize; 2] = [columns::VOLUME, columns::TURNOVER];

/// Options for [`clean`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Shares per lot.
    pub lot_size: f64,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self { lot_size: 1000.0 }
    }
}

/// A row after numeric coercion. `None` is the missing-value sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct CoercedRow {
    /// Date text (Gregorian after [`convert_era_dates`]).
    pub date: String,
    /// Numeric fields in raw column order, date excluded.
    pub values: [Option<f64>; NUMERIC_COLUMNS],
}

impl CoercedRow {
    /// Returns the value of a raw column (see [`columns`]).
    ///
    /// Returns `None` for the date column or an out-of-range column.
    #[must_use]
    pub fn get(&self, column: usize) -> Option<f64> {
        column
            .checked_sub(1)
            .and_then(|slot| self.values.get(slot).copied().flatten())
    }

    /// Returns true if any numeric field is missing.
    #[must_use]
    pub fn has_missing(&self) -> bool {
        self.values.iter().any(Option::is_none)
    }
}

/// Runs the full cleaning pipeline.
#[must_use]
pub fn clean(rows: &[RawRow], options: &CleanOptions) -> SeriesTable {
    let dated = convert_era_dates(rows);
    let stripped = strip_thousands_separators(&dated);
    let coerced = coerce_numeric(&stripped);
    let scaled = scale_lots(&coerced, options.lot_size);
    let complete = drop_incomplete(&scaled);
    let table = index_by_date(&complete);

    debug!(
        raw = rows.len(),
        incomplete = scaled.len() - complete.len(),
        duplicate_or_undated = complete.len() - table.len(),
        kept = table.len(),
        "cleaned series"
    );
    table
}

/// Rewrites each row's date from the Minguo calendar to the Gregorian one.
///
/// Dates that cannot be converted are left unchanged; they fail to parse in
/// [`index_by_date`].
#[must_use]
pub fn convert_era_dates(rows: &[RawRow]) -> Vec<RawRow> {
    rows.iter()
        .map(|row| {
            let mut fields = row.fields().to_vec();
            if let Some(date) = fields.get_mut(columns::DATE)
                && let Some(converted) = minguo_to_gregorian(date)
            {
                *date = converted;
            }
            RawRow(fields)
        })
        .collect()
}

/// Removes `,` thousands separators from every non-date field.
#[must_use]
pub fn strip_thousands_separators(rows: &[RawRow]) -> Vec<RawRow> {
    rows.iter()
        .map(|row| {
            RawRow(
                row.fields()
                    .iter()
                    .enumerate()
                    .map(|(idx, field)| {
                        if idx == columns::DATE {
                            field.clone()
                        } else {
                            field.replace(',', "")
                        }
                    })
                    .collect(),
            )
        })
        .collect()
}

/// Parses every non-date field as `f64`.
///
/// Values that do not parse, or are not finite, become `None`. A row with
/// the wrong number of fields gets `None` everywhere.
#[must_use]
pub fn coerce_numeric(rows: &[RawRow]) -> Vec<CoercedRow> {
    rows.iter()
        .map(|row| {
            let mut values = [None; NUMERIC_COLUMNS];
            if row.len() == columns::COUNT {
                for (slot, value) in values.iter_mut().enumerate() {
                    *value = row.field(slot + 1).and_then(parse_number);
                }
            }
            CoercedRow {
                date: row.field(columns::DATE).unwrap_or_default().to_string(),
                values,
            }
        })
        .collect()
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Divides the volume and turnover columns by `lot_size`.
///
/// A quotient that is not finite becomes `None`.
#[must_use]
pub fn scale_lots(rows: &[CoercedRow], lot_size: f64) -> Vec<CoercedRow> {
    rows.iter()
        .map(|row| {
            let mut scaled = row.clone();
            for column in SCALED_COLUMNS {
                let slot = &mut scaled.values[column - 1];
                *slot = slot.map(|value| value / lot_size).filter(|v| v.is_finite());
            }
            scaled
        })
        .collect()
}

/// Keeps only rows whose numeric fields are all present.
#[must_use]
pub fn drop_incomplete(rows: &[CoercedRow]) -> Vec<CoercedRow> {
    rows.iter().filter(|row| !row.has_missing()).cloned().collect()
}

/// Parses dates and builds the ascending, de-duplicated table.
///
/// Rows whose date does not parse are dropped. For duplicate dates the
/// first row wins.
#[must_use]
pub fn index_by_date(rows: &[CoercedRow]) -> SeriesTable {
    let bars = rows
        .iter()
        .filter_map(|row| {
            let date = parse_gregorian(&row.date)?;
            let [
                Some(volume),
                Some(turnover),
                Some(open),
                Some(high),
                Some(low),
                Some(close),
                Some(change),
                Some(transactions),
            ] = row.values
            else {
                return None;
            };
            Some(DailyBar::new(
                date,
                open,
                high,
                low,
                close,
                volume,
                turnover,
                change,
                transactions,
            ))
        })
        .collect();
    SeriesTable::from_bars(bars)
}
