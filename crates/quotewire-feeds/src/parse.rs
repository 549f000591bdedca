//! Feed document parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use feed_rs::model::Entry;
use quotewire_types::FeedEntry;

use crate::FeedError;

/// Parses an RSS, Atom or JSON Feed document into entries, in document
/// order.
///
/// The publish time is rendered as RFC 2822. Timestamps without a zone,
/// such as `2024-04-01 08:30`, are read as UTC. Missing fields stay `None`.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] if the document is not a well-formed feed.
pub fn parse_feed(document: &[u8]) -> Result<Vec<FeedEntry>, FeedError> {
    let parser = feed_rs::parser::Builder::new()
        .timestamp_parser(parse_timestamp)
        .build();
    let feed = parser.parse(document)?;
    Ok(feed.entries.into_iter().map(to_feed_entry).collect())
}

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const NAIVE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Reads the timestamp forms seen in real feeds, zoned or not.
fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(ts) = DateTime::parse_from_rfc2822(text) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NAIVE_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

fn to_feed_entry(entry: Entry) -> FeedEntry {
    let title = entry
        .title
        .map(|text| text.content.trim().to_string())
        .filter(|t| !t.is_empty());
    let link = entry.links.into_iter().next().map(|link| link.href);
    let published = entry.published.map(|ts| ts.to_rfc2822());
    FeedEntry::new(title, link, published)
}
