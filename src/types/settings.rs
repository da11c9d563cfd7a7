use serde::{Deserialize, Serialize};

/// User-facing shell settings, persisted as one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrowserSettings {
    pub theme: ThemeMode,
    /// Home page backdrop image URL. Empty selects the built-in backdrop.
    pub background: String,
    pub show_clock: bool,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            background: String::new(),
            show_clock: true,
        }
    }
}

/// Color scheme for the shell chrome.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    Colored,
}
