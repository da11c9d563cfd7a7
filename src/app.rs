//! App core for TabShell.
//!
//! [`BrowserApp`] wires the tab collection, session state, persistence sync,
//! and the injected viewport and search backends into one facade. UI layers
//! call these methods; every mutation marks the session dirty so the
//! debounced flush picks it up.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::database::kv::{KeyValueStore, SqliteKvStore};
use crate::managers::session_state::{SessionState, SessionStateTrait};
use crate::managers::tab_collection::{TabCollection, TabCollectionTrait};
use crate::platform;
use crate::services::persistence::{PersistenceSync, PersistenceSyncTrait};
use crate::services::router;
use crate::services::search::{MockSearchProvider, SearchProvider, SearchResult};
use crate::services::viewport::{ContentViewport, NullViewport};
use crate::types::bookmark::{Bookmark, BookmarkToggle};
use crate::types::errors::{HistoryError, NavigationError, PersistenceError, StoreError, TabError};
use crate::types::history::HistoryLogEntry;
use crate::types::location::Location;
use crate::types::settings::{BrowserSettings, ThemeMode};
use crate::types::tab::Tab;

/// Central application struct coordinating tabs, session state, and persistence.
///
/// Fields stay private: every mutation must pass through a method here so the
/// persistence timer learns about it.
pub struct BrowserApp {
    tabs: TabCollection,
    session: SessionState,
    persistence: PersistenceSync,
    viewport: Box<dyn ContentViewport>,
    search: Box<dyn SearchProvider>,
}

impl BrowserApp {
    /// Creates an app over the given store and backends, restoring the
    /// previous session before anything else can observe the state.
    pub fn new(
        store: Box<dyn KeyValueStore>,
        viewport: Box<dyn ContentViewport>,
        search: Box<dyn SearchProvider>,
    ) -> Self {
        let mut persistence = PersistenceSync::new(store);
        let restored = persistence.restore();
        Self {
            tabs: restored.tabs,
            session: restored.session,
            persistence,
            viewport,
            search,
        }
    }

    /// Opens an app over a SQLite store at the given path, with the default
    /// viewport and search backends.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let store = SqliteKvStore::open(path)?;
        Ok(Self::new(
            Box::new(store),
            Box::new(NullViewport),
            Box::new(MockSearchProvider::new()),
        ))
    }

    /// Default location of the session database.
    pub fn default_db_path() -> PathBuf {
        platform::get_data_dir().join("session.db")
    }

    fn touch(&mut self) {
        self.persistence.note_mutation(Instant::now());
    }

    // --- Navigation ---

    /// Routes raw address-bar input and navigates the given tab.
    pub fn navigate(&mut self, tab_id: &str, input: &str) -> Result<(), NavigationError> {
        let location = router::classify(input)?;
        self.tabs
            .navigate(tab_id, location, &mut self.session, self.viewport.as_mut())?;
        self.touch();
        Ok(())
    }

    /// Routes raw address-bar input and navigates the active tab.
    pub fn navigate_active(&mut self, input: &str) -> Result<(), NavigationError> {
        let tab_id = self.tabs.active_tab_id().to_string();
        self.navigate(&tab_id, input)
    }

    pub fn go_back(&mut self) -> Result<Location, HistoryError> {
        let location = self.tabs.go_back(self.viewport.as_mut())?;
        self.touch();
        Ok(location)
    }

    pub fn go_forward(&mut self) -> Result<Location, HistoryError> {
        let location = self.tabs.go_forward(self.viewport.as_mut())?;
        self.touch();
        Ok(location)
    }

    /// Re-issues the current location's load for a tab. History and the
    /// visit log are untouched.
    pub fn reload(&mut self, tab_id: &str) -> Result<(), TabError> {
        self.tabs.reload(tab_id, self.viewport.as_mut())?;
        self.touch();
        Ok(())
    }

    /// Reports a finished page load. Stale and unexpected completions are
    /// ignored; only an accepted one marks the session dirty.
    pub fn complete_load(&mut self, tab_id: &str, sequence: u64, title: &str) -> bool {
        let accepted = self.tabs.complete_load(tab_id, sequence, title);
        if accepted {
            self.touch();
        }
        accepted
    }

    // --- Tab strip ---

    /// Opens a new active home tab and returns its ID.
    pub fn new_tab(&mut self) -> String {
        let id = self.tabs.create_tab(None, true);
        self.touch();
        id
    }

    /// Closes a tab. Pinned tabs and unknown IDs are left alone; returns
    /// whether a tab was actually closed.
    pub fn close_tab(&mut self, tab_id: &str) -> bool {
        match self.tabs.close_tab(tab_id) {
            Ok(()) => {
                self.touch();
                true
            }
            Err(_) => false,
        }
    }

    pub fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        self.tabs.switch_tab(tab_id)?;
        self.touch();
        Ok(())
    }

    /// Duplicates a tab and returns the new tab's ID.
    pub fn duplicate_tab(&mut self, tab_id: &str) -> Result<String, TabError> {
        let id = self.tabs.duplicate_tab(tab_id)?;
        self.touch();
        Ok(id)
    }

    pub fn close_other_tabs(&mut self, tab_id: &str) -> Result<(), TabError> {
        self.tabs.close_other_tabs(tab_id)?;
        self.touch();
        Ok(())
    }

    pub fn toggle_pin(&mut self, tab_id: &str) -> Result<bool, TabError> {
        let pinned = self.tabs.toggle_pin(tab_id)?;
        self.touch();
        Ok(pinned)
    }

    pub fn toggle_mute(&mut self, tab_id: &str) -> Result<bool, TabError> {
        let muted = self.tabs.toggle_mute(tab_id, self.viewport.as_mut())?;
        self.touch();
        Ok(muted)
    }

    // --- Bookmarks, history log, settings ---

    /// Toggles a bookmark for the active tab's current location.
    pub fn toggle_bookmark(&mut self) -> BookmarkToggle {
        let url = router::render(self.tabs.active_tab().location());
        let title = self.tabs.active_tab().title.clone();
        let toggle = self.session.toggle_bookmark(&url, &title);
        self.touch();
        toggle
    }

    /// Whether the active tab's current location is bookmarked.
    pub fn is_current_bookmarked(&self) -> bool {
        let url = router::render(self.tabs.active_tab().location());
        self.session.is_bookmarked(&url)
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        self.session.bookmarks()
    }

    pub fn history_log(&self) -> &[HistoryLogEntry] {
        self.session.history_log()
    }

    pub fn clear_history_log(&mut self) {
        self.session.clear_history_log();
        self.touch();
    }

    pub fn settings(&self) -> &BrowserSettings {
        self.session.settings()
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.session.set_theme(theme);
        self.touch();
    }

    pub fn set_background(&mut self, background: &str) {
        self.session.set_background(background);
        self.touch();
    }

    pub fn set_show_clock(&mut self, show_clock: bool) {
        self.session.set_show_clock(show_clock);
        self.touch();
    }

    pub fn reset_settings(&mut self) {
        self.session.reset_settings();
        self.touch();
    }

    /// Privacy mode is a runtime flag, never written to the store, so
    /// toggling it does not mark the session dirty.
    pub fn set_privacy_mode(&mut self, enabled: bool) {
        self.session.set_privacy_mode(enabled);
    }

    pub fn privacy_mode(&self) -> bool {
        self.session.privacy_mode()
    }

    /// Runs a search query against the configured provider.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        self.search.search(query)
    }

    // --- State access ---

    pub fn tabs(&self) -> &TabCollection {
        &self.tabs
    }

    pub fn active_tab(&self) -> &Tab {
        self.tabs.active_tab()
    }

    // --- Lifecycle ---

    /// Drives the persistence timer. Call periodically with the current
    /// instant; returns whether a flush happened.
    pub fn tick(&mut self, now: Instant) -> Result<bool, PersistenceError> {
        self.persistence.flush_if_due(now, &self.tabs, &self.session)
    }

    /// Shutdown sequence: flush the session immediately, skipping the
    /// debounce timer.
    pub fn shutdown(&mut self) -> Result<(), PersistenceError> {
        self.persistence.flush_now(&self.tabs, &self.session)
    }
}
