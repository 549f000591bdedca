//! Feed entry representation.

use serde::{Deserialize, Serialize};

/// Placeholder written when an entry has no title.
pub const NO_TITLE: &str = "No Title";
/// Placeholder written when an entry has no link.
pub const NO_LINK: &str = "No Link";
/// Placeholder written when an entry has no publish time.
pub const NO_DATE: &str = "No Date";

/// A single entry extracted from an RSS or Atom feed.
///
/// Absent fields stay `None` here; placeholders only appear when the entry
/// is written out (see [`FeedEntry::to_record`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Entry title.
    pub title: Option<String>,
    /// Entry link.
    pub link: Option<String>,
    /// Publish timestamp as text.
    pub published: Option<String>,
}

impl FeedEntry {
    /// Creates a new feed entry.
    #[must_use]
    pub const fn new(
        title: Option<String>,
        link: Option<String>,
        published: Option<String>,
    ) -> Self {
        Self {
            title,
            link,
            published,
        }
    }

    /// Returns the title, or the `No Title` placeholder.
    #[must_use]
    pub fn title_or_placeholder(&self) -> &str {
        self.title.as_deref().unwrap_or(NO_TITLE)
    }

    /// Returns the link, or the `No Link` placeholder.
    #[must_use]
    pub fn link_or_placeholder(&self) -> &str {
        self.link.as_deref().unwrap_or(NO_LINK)
    }

    /// Returns the publish time, or the `No Date` placeholder.
    #[must_use]
    pub fn published_or_placeholder(&self) -> &str {
        self.published.as_deref().unwrap_or(NO_DATE)
    }

    /// Returns the three output columns with placeholders filled in.
    #[must_use]
    pub fn to_record(&self) -> [&str; 3] {
        [
            self.title_or_placeholder(),
            self.link_or_placeholder(),
            self.published_or_placeholder(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_all_fields() {
        let entry = FeedEntry::new(
            Some("Rates hold".to_string()),
            Some("https://example.com/a".to_string()),
            Some("Mon, 1 Apr 2024 08:00:00 +0000".to_string()),
        );
        assert_eq!(
            entry.to_record(),
            [
                "Rates hold",
                "https://example.com/a",
                "Mon, 1 Apr 2024 08:00:00 +0000"
            ]
        );
    }

    #[test]
    fn test_record_placeholders() {
        let entry = FeedEntry::default();
        assert_eq!(entry.to_record(), [NO_TITLE, NO_LINK, NO_DATE]);
    }

    #[test]
    fn test_partial_entry() {
        let entry = FeedEntry::new(None, Some("https://example.com".to_string()), None);
        assert_eq!(entry.title_or_placeholder(), "No Title");
        assert_eq!(entry.link_or_placeholder(), "https://example.com");
        assert_eq!(entry.published_or_placeholder(), "No Date");
    }
}
