//! Local (Minguo) calendar conversion.
//!
//! The exchange reports dates as `YYY/MM/DD` where `YYY` counts years from
//! 1912 (Minguo year 1). Gregorian year = Minguo year + 1911.

use chrono::NaiveDate;

/// Offset between Minguo and Gregorian years.
pub const MINGUO_YEAR_OFFSET: i32 = 1911;

/// Rewrites a `YYY/MM/DD` Minguo date string with a Gregorian year.
///
/// Only the year component changes; separators and the month/day text are
/// kept as-is. Returns `None` when the year component is not an integer.
///
/// # Example
///
/// ```
/// use quotewire_types::calendar::minguo_to_gregorian;
///
/// assert_eq!(minguo_to_gregorian("113/04/01").as_deref(), Some("2024/04/01"));
/// ```
#[must_use]
pub fn minguo_to_gregorian(date: &str) -> Option<String> {
    let date = date.trim();
    let (year, rest) = date.split_once('/')?;
    let year: i32 = year.trim().parse().ok()?;
    Some(format!("{}/{}", year + MINGUO_YEAR_OFFSET, rest))
}

/// Parses a Gregorian `YYYY/MM/DD` (or `YYYY-MM-DD`) date string.
#[must_use]
pub fn parse_gregorian(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y/%m/%d")
        .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d"))
        .ok()
}

/// Parses a Minguo `YYY/MM/DD` date string directly into a Gregorian date.
#[must_use]
pub fn parse_minguo(date: &str) -> Option<NaiveDate> {
    minguo_to_gregorian(date).and_then(|d| parse_gregorian(&d))
}
