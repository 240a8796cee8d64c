//! Search hit domain model.
//!
//! A [`Hit`] is one record returned by the Hacker News search API. Only the
//! fields the table displays are decoded; everything else in the payload is
//! ignored. The API sends `null` for counters on some records, so counters
//! decode `null` as zero.

use serde::{Deserialize, Deserializer, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Number of seconds in one (30-day) month.
const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;

/// Number of seconds in one (365-day) year.
const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

/// Discussion page used when a hit has no external URL (Ask HN, polls, ...).
const ITEM_URL_BASE: &str = "https://news.ycombinator.com/item?id=";

/// One search result record.
///
/// `object_id` is unique within a result set; dismissal relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,
    #[serde(default)]
    pub created_at_i: Option<i64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Hit {
    /// Creates a hit with the given id and title and zeroed counters.
    ///
    /// # Examples
    ///
    /// ```
    /// use hnsearch::domain::Hit;
    ///
    /// let hit = Hit::new("42", "Show HN: a thing");
    /// assert_eq!(hit.object_id, "42");
    /// assert_eq!(hit.points, 0);
    /// ```
    pub fn new(object_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            title: Some(title.into()),
            author: None,
            url: None,
            num_comments: 0,
            points: 0,
            created_at_i: None,
        }
    }

    /// Title for display, empty when the record has none.
    #[must_use]
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Author for display, empty when the record has none.
    #[must_use]
    pub fn author_or_empty(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }

    /// Returns the link to open for this hit.
    ///
    /// The story URL when present and non-empty, otherwise the Hacker News
    /// discussion page for the item.
    ///
    /// # Examples
    ///
    /// ```
    /// use hnsearch::domain::Hit;
    ///
    /// let hit = Hit::new("8863", "My YC app");
    /// assert_eq!(hit.link(), "https://news.ycombinator.com/item?id=8863");
    /// ```
    #[must_use]
    pub fn link(&self) -> String {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("{ITEM_URL_BASE}{}", self.object_id),
        }
    }

    /// Returns how long ago the hit was created, relative to `now`.
    ///
    /// Empty when the API did not send a creation timestamp.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm"
    /// - Less than 1 day: "Xh"
    /// - Less than 30 days: "Xd"
    /// - Less than 1 year: "Xmo"
    /// - Otherwise: "Xy"
    #[must_use]
    pub fn time_ago_at(&self, now: i64) -> String {
        let Some(created) = self.created_at_i else {
            return String::new();
        };
        let diff = (now - created).max(0);

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h", diff / SECONDS_PER_HOUR)
        } else if diff < SECONDS_PER_MONTH {
            format!("{}d", diff / SECONDS_PER_DAY)
        } else if diff < SECONDS_PER_YEAR {
            format!("{}mo", diff / SECONDS_PER_MONTH)
        } else {
            format!("{}y", diff / SECONDS_PER_YEAR)
        }
    }
}
