//! Top-level error type.

use quotewire_feeds::FeedError;
use quotewire_fetch::FetchError;
use quotewire_format::FormatError;
use quotewire_series::SeriesError;
use quotewire_types::{MonthRangeError, YearMonthParseError};
use thiserror::Error;

/// Result type alias for quotewire operations.
pub type Result<T> = std::result::Result<T, QuotewireError>;

/// Errors from any quotewire pipeline.
#[derive(Error, Debug)]
pub enum QuotewireError {
    /// The HTTP client could not be built or a request failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Feed collection failed.
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// Series download failed.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Output could not be written.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Chart rendering failed.
    #[cfg(feature = "chart")]
    #[error(transparent)]
    Chart(#[from] quotewire_chart::ChartError),

    /// Invalid month range.
    #[error(transparent)]
    MonthRange(#[from] MonthRangeError),

    /// Invalid month string.
    #[error(transparent)]
    YearMonth(#[from] YearMonthParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotewire_types::YearMonth;

    #[test]
    fn test_month_parse_error_converts() {
        fn parse(s: &str) -> Result<YearMonth> {
            Ok(s.parse::<YearMonth>()?)
        }
        let err = parse("2024-13").unwrap_err();
        assert!(matches!(err, QuotewireError::YearMonth(_)));
        assert!(err.to_string().contains("2024-13"));
    }

    #[test]
    fn test_series_error_is_transparent() {
        let start = YearMonth::new(2024, 5).unwrap();
        let end = YearMonth::new(2024, 1).unwrap();
        let err: QuotewireError = SeriesError::from(MonthRangeError::InvalidRange { start, end }).into();
        assert_eq!(err.to_string(), "Invalid month range: 2024-05 > 2024-01");
    }
}
