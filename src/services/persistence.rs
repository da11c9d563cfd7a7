//! Debounced session persistence.
//!
//! All durable state (tabs, active tab, bookmarks, history log, settings)
//! is written as JSON values in a key-value store. Writes are coalesced:
//! the first mutation after a clean state arms a flush deadline, further
//! mutations before the deadline do not push it back, and the flush writes
//! whatever the state looks like when the deadline passes.

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::kv::KeyValueStore;
use crate::managers::session_state::{SessionState, SessionStateTrait};
use crate::managers::tab_collection::{TabCollection, TabCollectionTrait};
use crate::types::bookmark::Bookmark;
use crate::types::errors::PersistenceError;
use crate::types::history::HistoryLogEntry;
use crate::types::session::TabSnapshot;
use crate::types::settings::BrowserSettings;

/// Delay between the first unsaved mutation and the flush that writes it.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

const KEY_TABS: &str = "tabs";
const KEY_ACTIVE_TAB: &str = "active_tab";
const KEY_BOOKMARKS: &str = "bookmarks";
const KEY_HISTORY_LOG: &str = "history_log";
const KEY_SETTINGS: &str = "settings";

/// Session state rebuilt from the store at startup.
pub struct RestoredSession {
    pub tabs: TabCollection,
    pub session: SessionState,
}

/// Trait defining persistence sync operations.
pub trait PersistenceSyncTrait {
    fn note_mutation(&mut self, now: Instant);
    fn flush_if_due(
        &mut self,
        now: Instant,
        tabs: &TabCollection,
        session: &SessionState,
    ) -> Result<bool, PersistenceError>;
    fn flush_now(
        &mut self,
        tabs: &TabCollection,
        session: &SessionState,
    ) -> Result<(), PersistenceError>;
    fn restore(&mut self) -> RestoredSession;
    fn is_dirty(&self) -> bool;
}

/// Writes session snapshots to a key-value store on a debounce timer.
pub struct PersistenceSync {
    store: Box<dyn KeyValueStore>,
    debounce: Duration,
    flush_due: Option<Instant>,
}

impl PersistenceSync {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_debounce(store, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(store: Box<dyn KeyValueStore>, debounce: Duration) -> Self {
        Self {
            store,
            debounce,
            flush_due: None,
        }
    }

    /// Read access to the backing store.
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    fn write_key<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))?;
        self.store
            .set(key, &raw)
            .map_err(|e| PersistenceError::Storage(e.to_string()))
    }

    /// Reads and parses one key. A value that fails to parse is removed so
    /// the next restore starts from defaults instead of failing again.
    fn read_key<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        let raw = self.store.get(key).ok()??;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(_) => {
                let _ = self.store.remove(key);
                None
            }
        }
    }

    fn write_all(
        &mut self,
        tabs: &TabCollection,
        session: &SessionState,
    ) -> Result<(), PersistenceError> {
        let snapshots: Vec<TabSnapshot> = tabs.tabs().iter().map(TabSnapshot::capture).collect();
        self.write_key(KEY_TABS, &snapshots)?;
        self.write_key(KEY_ACTIVE_TAB, tabs.active_tab_id())?;
        self.write_key(KEY_BOOKMARKS, session.bookmarks())?;
        if !session.privacy_mode() {
            self.write_key(KEY_HISTORY_LOG, session.history_log())?;
        }
        self.write_key(KEY_SETTINGS, session.settings())
    }

    fn restore_tabs(&mut self) -> TabCollection {
        // Tab entries are restored individually so one corrupt snapshot
        // does not discard the rest of the session.
        let tabs: Vec<_> = self
            .read_key::<Vec<serde_json::Value>>(KEY_TABS)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<TabSnapshot>(entry).ok())
            .map(TabSnapshot::into_tab)
            .collect();
        let active_id = self.read_key::<String>(KEY_ACTIVE_TAB);
        TabCollection::restore(tabs, active_id)
    }
}

impl PersistenceSyncTrait for PersistenceSync {
    /// Marks the session dirty. The flush deadline is anchored at the first
    /// mutation, so continuous activity cannot postpone saving forever.
    fn note_mutation(&mut self, now: Instant) {
        if self.flush_due.is_none() {
            self.flush_due = Some(now + self.debounce);
        }
    }

    /// Flushes if the debounce deadline has passed. Returns whether a flush
    /// happened. A failed flush stays armed and is retried on a later call.
    fn flush_if_due(
        &mut self,
        now: Instant,
        tabs: &TabCollection,
        session: &SessionState,
    ) -> Result<bool, PersistenceError> {
        match self.flush_due {
            Some(due) if now >= due => {
                self.write_all(tabs, session)?;
                self.flush_due = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Flushes immediately, regardless of the debounce state. Used at
    /// shutdown so the latest state is never lost to the timer.
    fn flush_now(
        &mut self,
        tabs: &TabCollection,
        session: &SessionState,
    ) -> Result<(), PersistenceError> {
        self.write_all(tabs, session)?;
        self.flush_due = None;
        Ok(())
    }

    /// Rebuilds the session from the store. Restore is tolerant: missing or
    /// corrupt keys fall back to defaults rather than failing startup.
    fn restore(&mut self) -> RestoredSession {
        let tabs = self.restore_tabs();
        let bookmarks = self.read_key::<Vec<Bookmark>>(KEY_BOOKMARKS).unwrap_or_default();
        let history_log = self
            .read_key::<Vec<HistoryLogEntry>>(KEY_HISTORY_LOG)
            .unwrap_or_default();
        let settings = self.read_key::<BrowserSettings>(KEY_SETTINGS).unwrap_or_default();
        RestoredSession {
            tabs,
            session: SessionState::restore(bookmarks, history_log, settings),
        }
    }

    fn is_dirty(&self) -> bool {
        self.flush_due.is_some()
    }
}
