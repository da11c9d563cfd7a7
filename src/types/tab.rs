use super::history::HistoryStack;
use super::location::Location;

/// A single browsing context with its own history, flags, and load state.
#[derive(Debug, Clone)]
pub struct Tab {
    /// Opaque stable identifier; never reused across the process lifetime.
    pub id: String,
    pub history: HistoryStack,
    pub title: String,
    pub pinned: bool,
    pub muted: bool,
    pub load_state: LoadState,
    /// Monotonic per-tab counter stamped onto each external load request.
    /// A completion is honored only when its number matches this value.
    pub load_sequence: u64,
}

impl Tab {
    /// The tab's current location (the entry under its history cursor).
    pub fn location(&self) -> &Location {
        self.history.current()
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }
}

/// Whether a tab is waiting on the viewport to finish an external load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
}
