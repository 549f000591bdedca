//! One-call entry points that wire the pipelines to the HTTP client.

use chrono::NaiveDate;
use quotewire_feeds::{CollectOutcome, FeedCollector, FeedConfig};
use quotewire_fetch::{ClientConfig, HttpClient};
use quotewire_series::{MonthReport, SeriesConfig, SeriesDownloader, SeriesRun};

use crate::Result;

/// Collects every configured feed over HTTP and appends the entries.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the output file
/// cannot be written.
pub async fn collect_feeds(client: &ClientConfig, config: &FeedConfig) -> Result<CollectOutcome> {
    let http = HttpClient::new(client.clone())?;
    Ok(FeedCollector::new(&http, config).run().await?)
}

/// Downloads, cleans and writes a series over HTTP.
///
/// `on_month` is called after every requested month.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the month range is
/// invalid, or the output file cannot be written.
pub async fn download_series<C>(
    client: &ClientConfig,
    config: &SeriesConfig,
    today: NaiveDate,
    on_month: C,
) -> Result<SeriesRun>
where
    C: FnMut(&MonthReport),
{
    let http = HttpClient::new(client.clone())?;
    Ok(SeriesDownloader::new(&http, config)
        .run_with(today, on_month)
        .await?)
}

/// Renders the default-styled candlestick chart to `config.output`.
///
/// # Errors
///
/// Returns an error if the table is empty or the file cannot be written.
#[cfg(feature = "chart")]
pub fn render_chart(
    table: &quotewire_types::SeriesTable,
    config: &quotewire_chart::ChartConfig,
) -> Result<()> {
    let style = quotewire_chart::ChartStyle::default();
    Ok(quotewire_chart::render_svg(&config.output, table, config, &style)?)
}
