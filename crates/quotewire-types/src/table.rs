//! Date-indexed table of daily bars.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::DailyBar;

/// Daily bars keyed by date, ascending, with a unique index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesTable {
    bars: Vec<DailyBar>,
}

impl SeriesTable {
    /// Builds a table from bars in any order.
    ///
    /// Bars are sorted by date. When a date appears more than once, the
    /// first bar in input order is kept.
    #[must_use]
    pub fn from_bars(mut bars: Vec<DailyBar>) -> Self {
        // Stable sort keeps input order among equal dates.
        bars.sort_by_key(|bar| bar.date);
        bars.dedup_by_key(|bar| bar.date);
        Self { bars }
    }

    /// Returns the bars in date order.
    #[must_use]
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// Consumes the table, returning the bars.
    #[must_use]
    pub fn into_bars(self) -> Vec<DailyBar> {
        self.bars
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true if the table has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns the bar for the given date.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyBar> {
        self.bars
            .binary_search_by_key(&date, |bar| bar.date)
            .ok()
            .map(|idx| &self.bars[idx])
    }

    /// Returns the first and last dates, if any.
    #[must_use]
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.bars.first()?.date, self.bars.last()?.date))
    }

    /// Returns the lowest low and highest high across all bars.
    #[must_use]
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let mut bars = self.bars.iter();
        let first = bars.next()?;
        Some(bars.fold((first.low, first.high), |(lo, hi), bar| {
            (lo.min(bar.low), hi.max(bar.high))
        }))
    }

    /// Returns the largest volume across all bars.
    #[must_use]
    pub fn max_volume(&self) -> Option<f64> {
        self.bars.iter().map(|bar| bar.volume).reduce(f64::max)
    }

    /// Returns an iterator over the bars.
    pub fn iter(&self) -> std::slice::Iter<'_, DailyBar> {
        self.bars.iter()
    }
}

impl<'a> IntoIterator for &'a SeriesTable {
    type Item = &'a DailyBar;
    type IntoIter = std::slice::Iter<'a, DailyBar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}
