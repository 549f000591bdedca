//! Exchange `STOCK_DAY` response parsing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Raw column positions in a `STOCK_DAY` data row.
pub mod columns {
    /// Trading date, Minguo `YYY/MM/DD`.
    pub const DATE: usize = 0;
    /// Traded shares.
    pub const VOLUME: usize = 1;
    /// Traded value.
    pub const TURNOVER: usize = 2;
    /// Opening price.
    pub const OPEN: usize = 3;
    /// Highest price.
    pub const HIGH: usize = 4;
    /// Lowest price.
    pub const LOW: usize = 5;
    /// Closing price.
    pub const CLOSE: usize = 6;
    /// Change against previous close.
    pub const CHANGE: usize = 7;
    /// Number of transactions.
    pub const TRANSACTIONS: usize = 8;
    /// Fields per row.
    pub const COUNT: usize = 9;
}

/// One untyped row of the `data` array, fields in exchange order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow(pub Vec<String>);

impl RawRow {
    /// Creates a row from its fields.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    /// Returns the field at `column`, if present.
    #[must_use]
    pub fn field(&self, column: usize) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// Returns all fields.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn from_values(values: Vec<Value>) -> Self {
        Self(
            values
                .into_iter()
                .map(|v| match v {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                })
                .collect(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct StockDayResponse {
    #[serde(default)]
    stat: Option<String>,
    #[serde(default)]
    data: Option<Vec<Vec<Value>>>,
}

/// Parses a `STOCK_DAY` JSON body into raw rows.
///
/// A body without a `data` key (the exchange answers this way for months
/// with no trading, e.g. `"stat": "很抱歉，沒有符合條件的資料!"`) yields no
/// rows.
///
/// # Errors
///
/// Returns an error if the body is not JSON of the expected shape.
pub fn parse_month_response(body: &[u8]) -> Result<Vec<RawRow>, serde_json::Error> {
    let response: StockDayResponse = serde_json::from_slice(body)?;
    match response.data {
        Some(rows) => Ok(rows.into_iter().map(RawRow::from_values).collect()),
        None => {
            debug!(stat = response.stat.as_deref().unwrap_or(""), "response has no data");
            Ok(Vec::new())
        }
    }
}
