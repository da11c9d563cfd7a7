//! Session state for TabShell.
//!
//! One process-wide aggregate for everything that lives outside the tab
//! strip: bookmarks, the cross-tab history log, user settings, and the
//! runtime privacy flag. Injected into the engine explicitly rather than
//! held as ambient globals.

use chrono::Utc;
use uuid::Uuid;

use crate::types::bookmark::{Bookmark, BookmarkToggle};
use crate::types::history::HistoryLogEntry;
use crate::types::settings::{BrowserSettings, ThemeMode};

/// Trait defining session state operations.
pub trait SessionStateTrait {
    fn toggle_bookmark(&mut self, url: &str, title: &str) -> BookmarkToggle;
    fn is_bookmarked(&self, url: &str) -> bool;
    fn bookmarks(&self) -> &[Bookmark];
    fn record_visit(&mut self, url: &str, title: &str);
    fn history_log(&self) -> &[HistoryLogEntry];
    fn clear_history_log(&mut self);
    fn settings(&self) -> &BrowserSettings;
    fn set_theme(&mut self, theme: ThemeMode);
    fn set_background(&mut self, background: &str);
    fn set_show_clock(&mut self, show_clock: bool);
    fn reset_settings(&mut self);
    fn set_privacy_mode(&mut self, enabled: bool);
    fn privacy_mode(&self) -> bool;
}

/// In-memory session aggregate.
pub struct SessionState {
    bookmarks: Vec<Bookmark>,
    history_log: Vec<HistoryLogEntry>,
    settings: BrowserSettings,
    privacy_mode: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            bookmarks: Vec::new(),
            history_log: Vec::new(),
            settings: BrowserSettings::default(),
            privacy_mode: false,
        }
    }

    /// Rebuilds session state from restored snapshots. The privacy flag is
    /// runtime-only and always starts off.
    pub fn restore(
        bookmarks: Vec<Bookmark>,
        history_log: Vec<HistoryLogEntry>,
        settings: BrowserSettings,
    ) -> Self {
        Self {
            bookmarks,
            history_log,
            settings,
            privacy_mode: false,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStateTrait for SessionState {
    /// Adds a bookmark for the URL, or removes the first bookmark matching
    /// it. Adding mints a fresh ID and timestamp.
    fn toggle_bookmark(&mut self, url: &str, title: &str) -> BookmarkToggle {
        if let Some(position) = self.bookmarks.iter().position(|b| b.url == url) {
            let removed = self.bookmarks.remove(position);
            return BookmarkToggle::Removed(removed.id);
        }

        let id = Uuid::new_v4().to_string();
        self.bookmarks.push(Bookmark {
            id: id.clone(),
            url: url.to_string(),
            title: title.to_string(),
            date_added: Utc::now(),
        });
        BookmarkToggle::Added(id)
    }

    /// Membership is by exact URL match.
    fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b.url == url)
    }

    fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Appends a visit to the history log. Silently dropped while privacy
    /// mode is active.
    fn record_visit(&mut self, url: &str, title: &str) {
        if self.privacy_mode {
            return;
        }
        self.history_log.push(HistoryLogEntry {
            url: url.to_string(),
            title: title.to_string(),
            timestamp: Utc::now(),
        });
    }

    /// The history log, most recent visit last.
    fn history_log(&self) -> &[HistoryLogEntry] {
        &self.history_log
    }

    fn clear_history_log(&mut self) {
        self.history_log.clear();
    }

    fn settings(&self) -> &BrowserSettings {
        &self.settings
    }

    fn set_theme(&mut self, theme: ThemeMode) {
        self.settings.theme = theme;
    }

    fn set_background(&mut self, background: &str) {
        self.settings.background = background.to_string();
    }

    fn set_show_clock(&mut self, show_clock: bool) {
        self.settings.show_clock = show_clock;
    }

    fn reset_settings(&mut self) {
        self.settings = BrowserSettings::default();
    }

    fn set_privacy_mode(&mut self, enabled: bool) {
        self.privacy_mode = enabled;
    }

    fn privacy_mode(&self) -> bool {
        self.privacy_mode
    }
}
