//! Month loop, retry and output behaviour against a scripted exchange.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::NaiveDate;
use quotewire_fetch::{FetchError, Fetcher, RetryError, RetryPolicy};
use quotewire_series::{MonthStatus, SeriesConfig, SeriesDownloader, SeriesError};
use quotewire_types::YearMonth;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Answers by the `date=` query parameter; unknown dates fail with 503.
struct ScriptedExchange {
    bodies: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedExchange {
    fn new(bodies: &[(&str, String)]) -> Self {
        Self {
            bodies: bodies
                .iter()
                .map(|(date, body)| ((*date).to_string(), body.clone()))
                .collect(),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests_for(&self, date: &str) -> usize {
        let needle = format!("date={date}");
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|url| url.contains(&needle))
            .count()
    }

    fn total_requests(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Fetcher for ScriptedExchange {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        let body = self
            .bodies
            .iter()
            .find(|(date, _)| url.contains(&format!("date={date}")))
            .map(|(_, body)| body.clone());
        body.map(Bytes::from).ok_or_else(|| FetchError::Status {
            status: 503,
            url: url.to_string(),
        })
    }
}

fn body(rows: &[[&str; 9]]) -> String {
    let data: Vec<String> = rows
        .iter()
        .map(|row| {
            let fields: Vec<String> = row.iter().map(|f| format!("\"{f}\"")).collect();
            format!("[{}]", fields.join(","))
        })
        .collect();
    format!(r#"{{"stat":"OK","data":[{}]}}"#, data.join(","))
}

fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

fn config(start: YearMonth, end: YearMonth) -> SeriesConfig {
    SeriesConfig {
        start,
        end,
        retry: RetryPolicy::new(5, Duration::ZERO),
        ..SeriesConfig::default()
    }
}

fn january() -> String {
    body(&[
        ["113/01/02", "5,000", "3,000,000", "593.00", "595.00", "589.00", "593.00", "+0.00", "12,345"],
        ["113/01/03", "6,000", "3,500,000", "584.00", "585.00", "576.00", "578.00", "-15.00", "23,456"],
    ])
}

fn march() -> String {
    body(&[
        ["113/03/01", "4,000", "2,800,000", "697.00", "706.00", "694.00", "700.00", "+7.00", "30,001"],
        ["113/03/04", "7,000", "5,100,000", "722.00", "735.00", "718.00", "730.00", "X0.00", "40,002"],
    ])
}

#[tokio::test]
async fn test_failed_month_is_skipped_after_five_attempts() {
    let exchange = ScriptedExchange::new(&[("20240101", january()), ("20240301", march())]);
    let config = config(ym(2024, 1), ym(2024, 3));
    let downloader = SeriesDownloader::new(&exchange, &config);

    let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let report = downloader.download(today).await.unwrap();

    assert_eq!(exchange.requests_for("20240101"), 1);
    assert_eq!(exchange.requests_for("20240201"), 5);
    assert_eq!(exchange.requests_for("20240301"), 1);

    assert_eq!(report.months.len(), 3);
    assert_eq!(report.fetched_months(), 2);
    assert_eq!(report.rows.len(), 4);
    assert_eq!(report.rows[2].field(0), Some("113/03/01"));

    let failed: Vec<_> = report.failed_months().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].month, ym(2024, 2));
    assert!(matches!(
        &failed[0].status,
        MonthStatus::Failed(SeriesError::Fetch {
            source: RetryError::Exhausted { attempts: 5, .. },
            ..
        })
    ));
}

#[tokio::test]
async fn test_future_months_are_never_requested() {
    let exchange = ScriptedExchange::new(&[("20240101", january())]);
    let config = config(ym(2024, 1), ym(2024, 12));
    let downloader = SeriesDownloader::new(&exchange, &config);

    let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
    let mut seen = Vec::new();
    let report = downloader
        .download_with(today, |m| seen.push(m.month))
        .await
        .unwrap();

    assert_eq!(seen, vec![ym(2024, 1), ym(2024, 2)]);
    assert_eq!(report.skipped_future, 10);
    assert_eq!(exchange.requests_for("20240301"), 0);
    assert_eq!(exchange.total_requests(), 1 + 5);
}

#[tokio::test]
async fn test_malformed_body_is_not_retried() {
    let exchange = ScriptedExchange::new(&[("20240101", "<html>busy</html>".to_string())]);
    let config = config(ym(2024, 1), ym(2024, 1));
    let downloader = SeriesDownloader::new(&exchange, &config);

    let err = downloader.fetch_month(ym(2024, 1)).await.unwrap_err();
    assert!(matches!(err, SeriesError::Parse { .. }));
    assert_eq!(exchange.total_requests(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_default_retry_waits_between_attempts() {
    let exchange = ScriptedExchange::new(&[]);
    let config = SeriesConfig {
        start: ym(2024, 1),
        end: ym(2024, 1),
        ..SeriesConfig::default()
    };
    let downloader = SeriesDownloader::new(&exchange, &config);

    let start = tokio::time::Instant::now();
    let result = downloader.fetch_month(ym(2024, 1)).await;

    assert!(result.is_err());
    assert_eq!(exchange.total_requests(), 5);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(12));
    assert!(elapsed < Duration::from_secs(13));
}

#[tokio::test]
async fn test_run_writes_cleaned_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("all_data.txt");
    let exchange = ScriptedExchange::new(&[("20240101", january()), ("20240301", march())]);
    let config = SeriesConfig {
        output: output.clone(),
        ..config(ym(2024, 1), ym(2024, 3))
    };
    let downloader = SeriesDownloader::new(&exchange, &config);

    let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let run = downloader.run(today).await.unwrap();

    // The 2024-03-04 row has a non-numeric change and is dropped.
    assert_eq!(run.table.len(), 3);
    assert_eq!(run.output, output);

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Date\tOpen\tHigh\tLow\tClose\tVolume\tTurnover\tChange\tTransactions"
    );
    assert_eq!(
        lines[1],
        "2024-01-02\t593.0\t595.0\t589.0\t593.0\t5.0\t3000.0\t0.0\t12345.0"
    );
    assert!(lines[3].starts_with("2024-03-01\t"));
    assert!(!text.contains("2024-03-04"));
}

#[tokio::test]
async fn test_run_with_no_months_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("all_data.txt");
    let exchange = ScriptedExchange::new(&[]);
    let config = SeriesConfig {
        output: output.clone(),
        ..config(ym(2030, 1), ym(2030, 2))
    };
    let downloader = SeriesDownloader::new(&exchange, &config);

    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let run = downloader.run(today).await.unwrap();

    assert!(run.table.is_empty());
    assert_eq!(exchange.total_requests(), 0);
    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(text.trim_start_matches('\u{feff}').lines().count(), 1);
}
