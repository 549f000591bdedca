//! Benchmark utilities for quotewire.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use quotewire_series::RawRow;
use quotewire_types::calendar::MINGUO_YEAR_OFFSET;

/// Formats a number with `,` thousands separators, as the exchange does.
pub fn with_separators(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Generates `days` weekday rows in exchange format starting at `start`.
///
/// Every `bad_every`-th row carries a non-numeric change field so the
/// cleaning pipeline has rows to drop; `0` disables this.
pub fn synthetic_rows(start: NaiveDate, days: usize, bad_every: usize) -> Vec<RawRow> {
    let mut rows = Vec::with_capacity(days);
    let mut date = start;
    let mut price = 580.0_f64;

    while rows.len() < days {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            date += Duration::days(1);
            continue;
        }

        let n = rows.len();
        let open = price;
        let close = price + ((n % 7) as f64 - 3.0);
        let high = open.max(close) + 2.0;
        let low = open.min(close) - 2.0;
        let shares = 20_000_000 + (n as u64 % 13) * 1_000_000;
        let change = if bad_every > 0 && n % bad_every == bad_every - 1 {
            "X0.00".to_string()
        } else {
            format!("{:+.2}", close - open)
        };

        rows.push(RawRow::new([
            format!(
                "{}/{:02}/{:02}",
                date.year() - MINGUO_YEAR_OFFSET,
                date.month(),
                date.day()
            ),
            with_separators(shares),
            with_separators(shares * close as u64),
            format!("{open:.2}"),
            format!("{high:.2}"),
            format!("{low:.2}"),
            format!("{close:.2}"),
            change,
            with_separators(30_000 + n as u64),
        ]));

        price = close;
        date += Duration::days(1);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotewire_series::{CleanOptions, clean};

    #[test]
    fn test_with_separators() {
        assert_eq!(with_separators(0), "0");
        assert_eq!(with_separators(999), "999");
        assert_eq!(with_separators(1_000), "1,000");
        assert_eq!(with_separators(1_234_567), "1,234,567");
    }

    #[test]
    fn test_synthetic_rows_clean() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let rows = synthetic_rows(start, 20, 5);
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0].field(0), Some("113/01/01"));

        let table = clean(&rows, &CleanOptions::default());
        assert_eq!(table.len(), 16);
    }
}
