//! Error types for quotewire core types.

use crate::YearMonth;
use thiserror::Error;

/// Error for invalid month ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonthRangeError {
    /// Start month is after end month.
    #[error("Invalid month range: {start} > {end}")]
    InvalidRange {
        /// The start month.
        start: YearMonth,
        /// The end month.
        end: YearMonth,
    },
}

/// Error returned when a `YYYY-MM` string cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YearMonthParseError {
    /// The string is not of the form `YYYY-MM` or `YYYYMM`.
    #[error("Invalid month '{0}', expected YYYY-MM")]
    Malformed(String),

    /// The month component is outside 1..=12.
    #[error("Month out of range in '{0}'")]
    MonthOutOfRange(String),

    /// The year component is outside the supported range.
    #[error("Year out of range in '{0}', expected 0001-9999")]
    YearOutOfRange(String),
}
