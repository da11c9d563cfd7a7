use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// Identity is the `id`; duplicate URLs are allowed and toggling treats the
/// first URL match as canonical.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    pub date_added: DateTime<Utc>,
}

/// Outcome of a bookmark toggle, carrying the affected bookmark's ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkToggle {
    Added(String),
    Removed(String),
}
