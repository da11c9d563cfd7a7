use serde::{Deserialize, Serialize};

use super::history::HistoryStack;
use super::location::Location;
use super::tab::{LoadState, Tab};

/// A tab's state as stored in a session snapshot.
///
/// `location` mirrors `history[history_index]` so a snapshot with a broken
/// cursor can still be restored to a usable single-entry tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TabSnapshot {
    pub id: String,
    pub location: Location,
    pub title: String,
    pub history: Vec<Location>,
    pub history_index: usize,
    pub is_pinned: bool,
    pub is_muted: bool,
}

impl TabSnapshot {
    /// Captures a live tab into its stored form.
    pub fn capture(tab: &Tab) -> Self {
        Self {
            id: tab.id.clone(),
            location: tab.history.current().clone(),
            title: tab.title.clone(),
            history: tab.history.entries().to_vec(),
            history_index: tab.history.index(),
            is_pinned: tab.pinned,
            is_muted: tab.muted,
        }
    }

    /// Rebuilds a live tab from the stored form.
    ///
    /// A history with an out-of-bounds cursor collapses to a single entry at
    /// the snapshot's `location`. Restored tabs always wake idle; load
    /// sequences do not survive a restart.
    pub fn into_tab(self) -> Tab {
        let TabSnapshot {
            id,
            location,
            title,
            history,
            history_index,
            is_pinned,
            is_muted,
        } = self;

        let history = HistoryStack::from_parts(history, history_index)
            .unwrap_or_else(|| HistoryStack::new(location));

        Tab {
            id,
            history,
            title,
            pinned: is_pinned,
            muted: is_muted,
            load_state: LoadState::Idle,
            load_sequence: 0,
        }
    }
}
