//! Daily trading bar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of cleaned exchange data.
///
/// Volume and turnover are stored in lots (thousands) after cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Trading date (Gregorian).
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest price of the day.
    pub high: f64,
    /// Lowest price of the day.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume in lots of 1,000 shares.
    pub volume: f64,
    /// Traded value, scaled by the same lot factor as volume.
    pub turnover: f64,
    /// Price change against the previous close.
    pub change: f64,
    /// Number of transactions, unscaled.
    pub transactions: f64,
}

impl DailyBar {
    /// Creates a new daily bar.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        turnover: f64,
        change: f64,
        transactions: f64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
            turnover,
            change,
            transactions,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if the day closed at or above its open.
    ///
    /// Flat days count as bullish so every candle gets a color.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}
