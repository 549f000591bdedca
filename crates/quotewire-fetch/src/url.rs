//! Exchange URL construction.

use quotewire_types::YearMonth;
use reqwest::Url;

use crate::FetchError;

/// Default endpoint for monthly daily-trading data.
pub const STOCK_DAY_ENDPOINT: &str = "https://www.twse.com.tw/exchangeReport/STOCK_DAY";

/// Builds the request URL for one month of daily trading data.
///
/// Query format: `?response=json&date=YYYYMM01&stockNo=<id>`
///
/// # Errors
///
/// Returns an error if `endpoint` is not an absolute URL.
///
/// # Example
///
/// ```
/// use quotewire_fetch::url::{stock_day_url, STOCK_DAY_ENDPOINT};
/// use quotewire_types::YearMonth;
///
/// let month = YearMonth::new(2024, 4).unwrap();
/// let url = stock_day_url(STOCK_DAY_ENDPOINT, "2330", month).unwrap();
/// assert_eq!(
///     url,
///     "https://www.twse.com.tw/exchangeReport/STOCK_DAY?response=json&date=20240401&stockNo=2330"
/// );
/// ```
pub fn stock_day_url(endpoint: &str, stock_no: &str, month: YearMonth) -> Result<String, FetchError> {
    let date = month.request_date();
    Url::parse_with_params(
        endpoint,
        &[
            ("response", "json"),
            ("date", date.as_str()),
            ("stockNo", stock_no),
        ],
    )
    .map(String::from)
    .map_err(|e| FetchError::InvalidUrl {
        url: endpoint.to_string(),
        reason: e.to_string(),
    })
}
