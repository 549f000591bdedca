//! Calendar months and month-range iteration.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{MonthRangeError, YearMonthParseError};

/// A calendar month (Gregorian).
///
/// Serializes as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Earliest accepted year.
    pub const MIN_YEAR: i32 = 1;
    /// Latest accepted year.
    pub const MAX_YEAR: i32 = 9999;

    /// Creates a new month.
    ///
    /// Returns `None` if `month` is outside 1..=12 or `year` is outside
    /// [`Self::MIN_YEAR`]..=[`Self::MAX_YEAR`].
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Option<Self> {
        if month >= 1 && month <= 12 && year >= Self::MIN_YEAR && year <= Self::MAX_YEAR {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Returns the month containing the given date.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns the following month.
    #[must_use]
    pub const fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Formats the month as the exchange request date `YYYYMM01`.
    #[must_use]
    pub fn request_date(&self) -> String {
        format!("{:04}{:02}01", self.year, self.month)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (year, month) = match trimmed.split_once(['-', '/']) {
            Some((y, m)) => (y, m),
            None if trimmed.len() == 6 && trimmed.is_ascii() => trimmed.split_at(4),
            None => return Err(YearMonthParseError::Malformed(s.to_string())),
        };

        let year: i32 = year
            .parse()
            .map_err(|_| YearMonthParseError::Malformed(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| YearMonthParseError::Malformed(s.to_string()))?;

        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(YearMonthParseError::YearOutOfRange(s.to_string()));
        }
        Self::new(year, month).ok_or_else(|| YearMonthParseError::MonthOutOfRange(s.to_string()))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = YearMonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// An inclusive range of calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    /// First month (inclusive).
    pub start: YearMonth,
    /// Last month (inclusive).
    pub end: YearMonth,
}

impl MonthRange {
    /// Creates a new month range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: YearMonth, end: YearMonth) -> Result<Self, MonthRangeError> {
        if start > end {
            return Err(MonthRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range covering a single month.
    #[must_use]
    pub const fn single_month(month: YearMonth) -> Self {
        Self {
            start: month,
            end: month,
        }
    }

    /// Returns an iterator over every month in the range.
    pub const fn months(&self) -> MonthIterator {
        MonthIterator {
            current: self.start,
            end: self.end,
        }
    }

    /// Returns the number of months in the range.
    #[must_use]
    pub fn total_months(&self) -> usize {
        let span = (i64::from(self.end.year) - i64::from(self.start.year)) * 12
            + i64::from(self.end.month)
            - i64::from(self.start.month);
        usize::try_from(span + 1).unwrap_or(0)
    }

    /// Returns the range truncated so that it ends no later than `limit`.
    ///
    /// Returns `None` if the whole range lies after `limit`.
    #[must_use]
    pub fn clamp_end(&self, limit: YearMonth) -> Option<Self> {
        if self.start > limit {
            return None;
        }
        Some(Self {
            start: self.start,
            end: self.end.min(limit),
        })
    }

    /// Returns true if the range contains the given month.
    #[must_use]
    pub fn contains(&self, month: YearMonth) -> bool {
        month >= self.start && month <= self.end
    }
}

impl std::fmt::Display for MonthRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Iterator over the months in a [`MonthRange`].
#[derive(Debug, Clone)]
pub struct MonthIterator {
    current: YearMonth,
    end: YearMonth,
}

impl Iterator for MonthIterator {
    type Item = YearMonth;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current > self.end {
            return None;
        }

        let result = self.current;
        self.current = self.current.next();
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current > self.end {
            return (0, Some(0));
        }
        let remaining = MonthRange {
            start: self.current,
            end: self.end,
        }
        .total_months();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_year_month_new_rejects_out_of_range() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
        assert!(YearMonth::new(2024, 12).is_some());
        assert!(YearMonth::new(0, 1).is_none());
        assert!(YearMonth::new(10_000, 1).is_none());
    }

    #[test]
    fn test_parse_rejects_extreme_years() {
        assert!(matches!(
            "0000-01".parse::<YearMonth>(),
            Err(YearMonthParseError::YearOutOfRange(_))
        ));
        assert!(matches!(
            "2147483647-12".parse::<YearMonth>(),
            Err(YearMonthParseError::YearOutOfRange(_))
        ));
    }

    #[test]
    fn test_total_months_widest_range() {
        let range = MonthRange::new(
            ym(YearMonth::MIN_YEAR, 1),
            ym(YearMonth::MAX_YEAR, 12),
        )
        .unwrap();
        assert_eq!(range.total_months(), 9999 * 12);
    }

    #[test]
    fn test_next_wraps_year() {
        assert_eq!(ym(2023, 12).next(), ym(2024, 1));
        assert_eq!(ym(2024, 4).next(), ym(2024, 5));
    }

    #[test]
    fn test_request_date() {
        assert_eq!(ym(2024, 4).request_date(), "20240401");
        assert_eq!(ym(2024, 11).request_date(), "20241101");
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("2024-04".parse::<YearMonth>().unwrap(), ym(2024, 4));
        assert_eq!("2024/4".parse::<YearMonth>().unwrap(), ym(2024, 4));
        assert_eq!("202404".parse::<YearMonth>().unwrap(), ym(2024, 4));
        assert!(matches!(
            "2024-13".parse::<YearMonth>(),
            Err(YearMonthParseError::MonthOutOfRange(_))
        ));
        assert!(matches!(
            "April".parse::<YearMonth>(),
            Err(YearMonthParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&ym(2024, 4)).unwrap();
        assert_eq!(json, "\"2024-04\"");
        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ym(2024, 4));
    }

    #[test]
    fn test_month_range_invalid() {
        assert!(MonthRange::new(ym(2024, 5), ym(2024, 4)).is_err());
    }

    #[test]
    fn test_month_iterator_crosses_year() {
        let range = MonthRange::new(ym(2023, 11), ym(2024, 2)).unwrap();
        let months: Vec<_> = range.months().collect();

        assert_eq!(range.total_months(), 4);
        assert_eq!(range.months().len(), 4);
        assert_eq!(
            months,
            vec![ym(2023, 11), ym(2023, 12), ym(2024, 1), ym(2024, 2)]
        );
    }

    #[test]
    fn test_clamp_end() {
        let range = MonthRange::new(ym(2024, 1), ym(2024, 12)).unwrap();

        let clamped = range.clamp_end(ym(2024, 6)).unwrap();
        assert_eq!(clamped.end, ym(2024, 6));
        assert_eq!(clamped.total_months(), 6);

        assert_eq!(range.clamp_end(ym(2025, 3)), Some(range));
        assert!(range.clamp_end(ym(2023, 12)).is_none());
    }
}
