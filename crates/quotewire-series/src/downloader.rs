//! Month-by-month download of exchange daily data.

use chrono::NaiveDate;
use quotewire_fetch::url::{STOCK_DAY_ENDPOINT, stock_day_url};
use quotewire_fetch::{Fetcher, RetryPolicy};
use quotewire_format::{OutputFormat, write_series_file};
use quotewire_types::{MonthRange, SeriesTable, YearMonth};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::{CleanOptions, RawRow, SeriesError, clean, parse_month_response};

const DEFAULT_START: YearMonth = match YearMonth::new(2024, 1) {
    Some(month) => month,
    None => panic!("invalid default start month"),
};

const DEFAULT_END: YearMonth = match YearMonth::new(2024, 12) {
    Some(month) => month,
    None => panic!("invalid default end month"),
};

/// Configuration for a series download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Exchange instrument identifier.
    pub stock_no: String,
    /// First month to request.
    pub start: YearMonth,
    /// Last month to request.
    pub end: YearMonth,
    /// `STOCK_DAY` endpoint URL.
    pub endpoint: String,
    /// Output file, overwritten on every run.
    pub output: PathBuf,
    /// Output file format.
    pub format: OutputFormat,
    /// Shares per lot for volume and turnover.
    pub lot_size: f64,
    /// Retry policy for each month request.
    pub retry: RetryPolicy,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            stock_no: "2330".to_string(),
            start: DEFAULT_START,
            end: DEFAULT_END,
            endpoint: STOCK_DAY_ENDPOINT.to_string(),
            output: PathBuf::from("all_data.txt"),
            format: OutputFormat::Tsv,
            lot_size: CleanOptions::default().lot_size,
            retry: RetryPolicy::default(),
        }
    }
}

impl SeriesConfig {
    /// Returns the validated month range.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Range`] if `start` is after `end`, or
    /// [`SeriesError::InvalidLotSize`] if `lot_size` is not a positive
    /// finite number.
    pub fn range(&self) -> Result<MonthRange, SeriesError> {
        if !(self.lot_size.is_finite() && self.lot_size > 0.0) {
            return Err(SeriesError::InvalidLotSize(self.lot_size));
        }
        Ok(MonthRange::new(self.start, self.end)?)
    }

    /// Returns the cleaning options derived from this configuration.
    #[must_use]
    pub const fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            lot_size: self.lot_size,
        }
    }
}

/// The months a run will request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPlan {
    /// Months to request, ascending.
    pub months: Vec<YearMonth>,
    /// Months of the configured range that lie after the current month.
    pub skipped_future: usize,
}

/// Outcome of a single month request.
#[derive(Debug)]
pub enum MonthStatus {
    /// The month was fetched and parsed.
    Fetched {
        /// Raw rows in the response.
        rows: usize,
    },
    /// The month was skipped.
    Failed(SeriesError),
}

/// Per-month entry of a [`DownloadReport`].
#[derive(Debug)]
pub struct MonthReport {
    /// The requested month.
    pub month: YearMonth,
    /// What happened.
    pub status: MonthStatus,
}

impl MonthReport {
    /// Returns true if the month was skipped.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, MonthStatus::Failed(_))
    }
}

/// Result of downloading every planned month.
#[derive(Debug, Default)]
pub struct DownloadReport {
    /// Raw rows of all fetched months, in month order.
    pub rows: Vec<RawRow>,
    /// Per-month outcomes, in month order.
    pub months: Vec<MonthReport>,
    /// Months that were not requested because they lie in the future.
    pub skipped_future: usize,
}

impl DownloadReport {
    /// Returns the months that failed.
    pub fn failed_months(&self) -> impl Iterator<Item = &MonthReport> {
        self.months.iter().filter(|m| m.is_failed())
    }

    /// Returns the number of months that were fetched.
    #[must_use]
    pub fn fetched_months(&self) -> usize {
        self.months.len() - self.failed_months().count()
    }
}

/// A completed series run.
#[derive(Debug)]
pub struct SeriesRun {
    /// What the download did.
    pub report: DownloadReport,
    /// The cleaned table that was written.
    pub table: SeriesTable,
    /// The file the table was written to.
    pub output: PathBuf,
}

/// Downloads and cleans daily data for one instrument over a month range.
#[derive(Debug)]
pub struct SeriesDownloader<'a, F: ?Sized> {
    fetcher: &'a F,
    config: &'a SeriesConfig,
}

impl<'a, F: Fetcher + ?Sized> SeriesDownloader<'a, F> {
    /// Creates a downloader over the given fetcher and configuration.
    pub const fn new(fetcher: &'a F, config: &'a SeriesConfig) -> Self {
        Self { fetcher, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SeriesConfig {
        self.config
    }

    /// Lists the months to request given today's date.
    ///
    /// The current month is included; later months are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured range or lot size is invalid.
    pub fn plan(&self, today: NaiveDate) -> Result<MonthPlan, SeriesError> {
        let range = self.config.range()?;
        let months: Vec<_> = range
            .clamp_end(YearMonth::of(today))
            .map(|r| r.months().collect())
            .unwrap_or_default();
        Ok(MonthPlan {
            skipped_future: range.total_months() - months.len(),
            months,
        })
    }

    /// Fetches and parses one month, retrying transport failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built, every attempt fails, or
    /// the body is not the expected JSON.
    pub async fn fetch_month(&self, month: YearMonth) -> Result<Vec<RawRow>, SeriesError> {
        let url = stock_day_url(&self.config.endpoint, &self.config.stock_no, month)
            .map_err(|source| SeriesError::InvalidRequest { month, source })?;

        let body = self
            .config
            .retry
            .run(|_| self.fetcher.fetch(&url))
            .await
            .map_err(|source| SeriesError::Fetch { month, source })?;

        parse_month_response(&body).map_err(|source| SeriesError::Parse { month, source })
    }

    /// Downloads every planned month, calling `on_month` after each one.
    ///
    /// Failed months are recorded and skipped; they never abort the run.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Range`] if the configured range is invalid.
    pub async fn download_with<C>(
        &self,
        today: NaiveDate,
        mut on_month: C,
    ) -> Result<DownloadReport, SeriesError>
    where
        C: FnMut(&MonthReport),
    {
        let plan = self.plan(today)?;
        if plan.skipped_future > 0 {
            info!(skipped = plan.skipped_future, "skipping future months");
        }

        let mut report = DownloadReport {
            skipped_future: plan.skipped_future,
            ..DownloadReport::default()
        };

        for month in plan.months {
            let status = match self.fetch_month(month).await {
                Ok(rows) => {
                    info!(%month, stock = %self.config.stock_no, rows = rows.len(), "fetched month");
                    let count = rows.len();
                    report.rows.extend(rows);
                    MonthStatus::Fetched { rows: count }
                }
                Err(e) => {
                    warn!(%month, error = %e, "skipping month");
                    MonthStatus::Failed(e)
                }
            };
            let entry = MonthReport { month, status };
            on_month(&entry);
            report.months.push(entry);
        }

        Ok(report)
    }

    /// Downloads every planned month.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Range`] if the configured range is invalid.
    pub async fn download(&self, today: NaiveDate) -> Result<DownloadReport, SeriesError> {
        self.download_with(today, |_| {}).await
    }

    /// Downloads, cleans and writes the series, calling `on_month` after
    /// each month.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is invalid or the output cannot be
    /// written. Month failures are reported, not returned.
    pub async fn run_with<C>(&self, today: NaiveDate, on_month: C) -> Result<SeriesRun, SeriesError>
    where
        C: FnMut(&MonthReport),
    {
        let report = self.download_with(today, on_month).await?;
        let table = clean(&report.rows, &self.config.clean_options());

        let output = self.config.output.clone();
        write_series_file(&output, &table, self.config.format).map_err(|source| {
            SeriesError::Write {
                path: output.clone(),
                source,
            }
        })?;

        info!(
            path = %output.display(),
            rows = table.len(),
            months = report.fetched_months(),
            "wrote series"
        );
        Ok(SeriesRun {
            report,
            table,
            output,
        })
    }

    /// Downloads, cleans and writes the series.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is invalid or the output cannot be
    /// written.
    pub async fn run(&self, today: NaiveDate) -> Result<SeriesRun, SeriesError> {
        self.run_with(today, |_| {}).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use quotewire_fetch::FetchError;

    struct Unreachable;

    #[async_trait]
    impl Fetcher for Unreachable {
        async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
            Err(FetchError::Status {
                status: 503,
                url: url.to_string(),
            })
        }
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = SeriesConfig::default();
        assert_eq!(config.stock_no, "2330");
        assert_eq!(config.output, PathBuf::from("all_data.txt"));
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.range().unwrap().total_months(), 12);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: SeriesConfig =
            serde_json::from_str(r#"{"stock_no": "0050", "start": "2023-11", "format": "csv"}"#)
                .unwrap();
        assert_eq!(config.stock_no, "0050");
        assert_eq!(config.start, ym(2023, 11));
        assert_eq!(config.end, ym(2024, 12));
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_plan_includes_current_month() {
        let config = SeriesConfig::default();
        let downloader = SeriesDownloader::new(&Unreachable, &config);

        let plan = downloader.plan(date(2024, 3, 15)).unwrap();
        assert_eq!(plan.months, vec![ym(2024, 1), ym(2024, 2), ym(2024, 3)]);
        assert_eq!(plan.skipped_future, 9);
    }

    #[test]
    fn test_plan_past_range() {
        let config = SeriesConfig::default();
        let downloader = SeriesDownloader::new(&Unreachable, &config);

        let plan = downloader.plan(date(2026, 1, 1)).unwrap();
        assert_eq!(plan.months.len(), 12);
        assert_eq!(plan.skipped_future, 0);
    }

    #[test]
    fn test_plan_entirely_in_future() {
        let config = SeriesConfig::default();
        let downloader = SeriesDownloader::new(&Unreachable, &config);

        let plan = downloader.plan(date(2023, 6, 1)).unwrap();
        assert!(plan.months.is_empty());
        assert_eq!(plan.skipped_future, 12);
    }

    #[test]
    fn test_plan_invalid_range() {
        let config = SeriesConfig {
            start: ym(2024, 5),
            end: ym(2024, 1),
            ..SeriesConfig::default()
        };
        let downloader = SeriesDownloader::new(&Unreachable, &config);
        assert!(matches!(
            downloader.plan(date(2024, 6, 1)),
            Err(SeriesError::Range(_))
        ));
    }

    #[test]
    fn test_plan_rejects_bad_lot_size() {
        let downloader_plan = |lot_size: f64| {
            let config = SeriesConfig {
                lot_size,
                ..SeriesConfig::default()
            };
            SeriesDownloader::new(&Unreachable, &config).plan(date(2024, 6, 1))
        };

        for lot_size in [0.0, -1000.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                downloader_plan(lot_size),
                Err(SeriesError::InvalidLotSize(_))
            ));
        }
        assert!(downloader_plan(1.0).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_endpoint_is_not_fetched() {
        let config = SeriesConfig {
            endpoint: "not a url".to_string(),
            ..SeriesConfig::default()
        };
        let downloader = SeriesDownloader::new(&Unreachable, &config);
        let result = downloader.fetch_month(ym(2024, 1)).await;

        let err = result.unwrap_err();
        assert!(matches!(err, SeriesError::InvalidRequest { .. }));
        assert_eq!(err.month(), Some(ym(2024, 1)));
    }
}
