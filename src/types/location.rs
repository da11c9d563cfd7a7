use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::services::router;

/// A resolved navigation target: external content or a built-in page.
///
/// Exactly one side is ever active. The engine never stores raw user input;
/// everything is classified into a `Location` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Content loaded by the embedding viewport, identified by URL.
    External(String),
    /// A page rendered by the shell itself.
    Internal(InternalPage),
}

/// Pages the shell renders without touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalPage {
    Home,
    Settings,
    /// Search results page. The query may be empty.
    Search(String),
}

impl Location {
    /// Title a tab shows for this location until a real one arrives.
    /// External locations use the URL itself as a placeholder.
    pub fn default_title(&self) -> String {
        match self {
            Location::External(url) => url.clone(),
            Location::Internal(page) => page.title(),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Location::External(_))
    }
}

impl InternalPage {
    /// Tab title for a built-in page.
    pub fn title(&self) -> String {
        match self {
            InternalPage::Home => "Home".to_string(),
            InternalPage::Settings => "Settings".to_string(),
            InternalPage::Search(query) => {
                if query.is_empty() {
                    "Search".to_string()
                } else {
                    format!("Search: {}", query)
                }
            }
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&router::render(self))
    }
}

// Snapshots store locations as their canonical strings, so the stored form
// stays readable and matches what the address bar would show.

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&router::render(self))
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        router::classify(&raw).map_err(de::Error::custom)
    }
}
