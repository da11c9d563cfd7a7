//! Tab collection for TabShell.
//!
//! Owns the ordered set of open tabs and the active-tab selection, and
//! drives per-tab history, load state, and viewport requests. The
//! collection is never empty and `active_id` always names a live tab.

use uuid::Uuid;

use crate::managers::session_state::{SessionState, SessionStateTrait};
use crate::services::viewport::ContentViewport;
use crate::types::errors::{HistoryError, NavigationError, TabError};
use crate::types::history::HistoryStack;
use crate::types::location::{InternalPage, Location};
use crate::types::tab::{LoadState, Tab};

/// Trait defining the tab collection interface.
pub trait TabCollectionTrait {
    fn create_tab(&mut self, location: Option<Location>, active: bool) -> String;
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn duplicate_tab(&mut self, tab_id: &str) -> Result<String, TabError>;
    fn close_other_tabs(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn toggle_pin(&mut self, tab_id: &str) -> Result<bool, TabError>;
    fn toggle_mute(
        &mut self,
        tab_id: &str,
        viewport: &mut dyn ContentViewport,
    ) -> Result<bool, TabError>;
    fn navigate(
        &mut self,
        tab_id: &str,
        location: Location,
        session: &mut SessionState,
        viewport: &mut dyn ContentViewport,
    ) -> Result<(), NavigationError>;
    fn go_back(&mut self, viewport: &mut dyn ContentViewport) -> Result<Location, HistoryError>;
    fn go_forward(&mut self, viewport: &mut dyn ContentViewport)
        -> Result<Location, HistoryError>;
    fn reload(&mut self, tab_id: &str, viewport: &mut dyn ContentViewport)
        -> Result<(), TabError>;
    fn complete_load(&mut self, tab_id: &str, sequence: u64, title: &str) -> bool;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn active_tab(&self) -> &Tab;
    fn active_tab_id(&self) -> &str;
    fn tabs(&self) -> &[Tab];
    fn display_order(&self) -> Vec<&Tab>;
    fn tab_count(&self) -> usize;
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
}

/// In-memory tab collection.
///
/// `tabs` is kept in creation order; the pinned-first tab strip is a
/// derived view and never mutates the underlying order.
pub struct TabCollection {
    tabs: Vec<Tab>,
    active_id: String,
}

impl TabCollection {
    /// Creates a collection holding a single active home tab.
    pub fn new() -> Self {
        let tab = Self::make_tab(Location::Internal(InternalPage::Home));
        let active_id = tab.id.clone();
        Self {
            tabs: vec![tab],
            active_id,
        }
    }

    /// Rebuilds a collection from restored tabs, enforcing the invariants:
    /// an empty list falls back to a single home tab, and an active ID that
    /// names no restored tab falls back to the first one.
    pub fn restore(tabs: Vec<Tab>, active_id: Option<String>) -> Self {
        let mut tabs = tabs;
        if tabs.is_empty() {
            tabs.push(Self::make_tab(Location::Internal(InternalPage::Home)));
        }
        let active_id = active_id
            .filter(|id| tabs.iter().any(|t| &t.id == id))
            .unwrap_or_else(|| tabs[0].id.clone());
        Self { tabs, active_id }
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn active_index(&self) -> usize {
        self.tabs
            .iter()
            .position(|t| t.id == self.active_id)
            .unwrap_or(0)
    }

    fn make_tab(location: Location) -> Tab {
        let title = location.default_title();
        Tab {
            id: Uuid::new_v4().to_string(),
            history: HistoryStack::new(location),
            title,
            pinned: false,
            muted: false,
            load_state: LoadState::Idle,
            load_sequence: 0,
        }
    }

    /// Applies the effects of the history cursor landing on `location`:
    /// external entries start a fresh sequenced load, internal pages render
    /// synchronously and settle the tab immediately.
    fn apply_move(&mut self, index: usize, location: &Location, viewport: &mut dyn ContentViewport) {
        let tab = &mut self.tabs[index];
        match location {
            Location::External(url) => {
                tab.load_sequence += 1;
                tab.load_state = LoadState::Loading;
                tab.title = url.clone();
                viewport.load(&tab.id, tab.load_sequence, url, tab.muted);
            }
            Location::Internal(page) => {
                tab.load_state = LoadState::Idle;
                tab.title = page.title();
            }
        }
    }
}

impl Default for TabCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl TabCollectionTrait for TabCollection {
    /// Creates a new tab, defaulting to the internal home page.
    /// Returns the new tab's ID.
    fn create_tab(&mut self, location: Option<Location>, active: bool) -> String {
        let location = location.unwrap_or(Location::Internal(InternalPage::Home));
        let tab = Self::make_tab(location);
        let id = tab.id.clone();
        self.tabs.push(tab);
        if active {
            self.active_id = id.clone();
        }
        id
    }

    /// Closes a tab. Pinned tabs are rejected; closing the only tab
    /// atomically replaces it with a fresh home tab; closing the active tab
    /// activates its left neighbor in creation order (or the new first tab).
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let index = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;

        if self.tabs[index].pinned {
            return Err(TabError::PinnedCloseRejected(tab_id.to_string()));
        }

        if self.tabs.len() == 1 {
            let fresh = Self::make_tab(Location::Internal(InternalPage::Home));
            self.active_id = fresh.id.clone();
            self.tabs[0] = fresh;
            return Ok(());
        }

        let was_active = self.active_id == tab_id;
        self.tabs.remove(index);

        if was_active {
            let neighbor = if index > 0 { index - 1 } else { 0 };
            self.active_id = self.tabs[neighbor].id.clone();
        }

        Ok(())
    }

    /// Switches the active tab to the given tab ID.
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()));
        }
        self.active_id = tab_id.to_string();
        Ok(())
    }

    /// Duplicates a tab: full history copy, flags copied except `pinned`,
    /// fresh ID and load sequence. The duplicate becomes active.
    fn duplicate_tab(&mut self, tab_id: &str) -> Result<String, TabError> {
        let index = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;

        let source = &self.tabs[index];
        let new_id = Uuid::new_v4().to_string();
        let copy = Tab {
            id: new_id.clone(),
            history: source.history.clone(),
            title: source.title.clone(),
            pinned: false,
            muted: source.muted,
            load_state: LoadState::Idle,
            load_sequence: 0,
        };

        self.tabs.push(copy);
        self.active_id = new_id.clone();
        Ok(new_id)
    }

    /// Closes every tab except pinned ones and the given tab, which
    /// becomes active.
    fn close_other_tabs(&mut self, tab_id: &str) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()));
        }
        self.tabs.retain(|t| t.pinned || t.id == tab_id);
        self.active_id = tab_id.to_string();
        Ok(())
    }

    /// Toggles the pinned flag. Returns the new value.
    fn toggle_pin(&mut self, tab_id: &str) -> Result<bool, TabError> {
        let index = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        self.tabs[index].pinned = !self.tabs[index].pinned;
        Ok(self.tabs[index].pinned)
    }

    /// Toggles the muted flag. Returns the new value. Muting the active tab
    /// also signals the viewport; background tabs pick the flag up on their
    /// next load request.
    fn toggle_mute(
        &mut self,
        tab_id: &str,
        viewport: &mut dyn ContentViewport,
    ) -> Result<bool, TabError> {
        let index = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        self.tabs[index].muted = !self.tabs[index].muted;
        let muted = self.tabs[index].muted;
        if self.active_id == tab_id {
            viewport.set_muted(tab_id, muted);
        }
        Ok(muted)
    }

    /// Navigates a tab to an already-classified location.
    ///
    /// Re-navigating to the tab's current location is a no-op. External
    /// targets record a visit in the session history log (suppressed in
    /// privacy mode); traversal via back/forward never logs.
    fn navigate(
        &mut self,
        tab_id: &str,
        location: Location,
        session: &mut SessionState,
        viewport: &mut dyn ContentViewport,
    ) -> Result<(), NavigationError> {
        let index = self
            .find_tab_index(tab_id)
            .ok_or_else(|| NavigationError::TabNotFound(tab_id.to_string()))?;

        if self.tabs[index].history.current() == &location {
            return Ok(());
        }

        self.tabs[index].history.push(location.clone());
        self.apply_move(index, &location, viewport);

        if let Location::External(url) = &location {
            session.record_visit(url, url);
        }
        Ok(())
    }

    /// Moves the active tab one history entry back.
    fn go_back(&mut self, viewport: &mut dyn ContentViewport) -> Result<Location, HistoryError> {
        let index = self.active_index();
        let location = self.tabs[index].history.back()?;
        self.apply_move(index, &location, viewport);
        Ok(location)
    }

    /// Moves the active tab one history entry forward.
    fn go_forward(
        &mut self,
        viewport: &mut dyn ContentViewport,
    ) -> Result<Location, HistoryError> {
        let index = self.active_index();
        let location = self.tabs[index].history.forward()?;
        self.apply_move(index, &location, viewport);
        Ok(location)
    }

    /// Re-issues the load for a tab's current location without touching
    /// its history or the session log.
    ///
    /// External locations start a fresh sequenced load, superseding any
    /// in-flight one; the title is kept until the new completion arrives.
    /// Internal pages render synchronously, so reloading them changes
    /// nothing.
    fn reload(
        &mut self,
        tab_id: &str,
        viewport: &mut dyn ContentViewport,
    ) -> Result<(), TabError> {
        let index = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;

        let tab = &mut self.tabs[index];
        if let Location::External(url) = tab.history.current().clone() {
            tab.load_sequence += 1;
            tab.load_state = LoadState::Loading;
            viewport.load(&tab.id, tab.load_sequence, &url, tab.muted);
        }
        Ok(())
    }

    /// Applies a load completion reported by the viewport.
    ///
    /// Honored only when the tab exists, is still loading, and the sequence
    /// number matches its latest request; everything else is a stale or
    /// duplicate signal and is dropped. Returns whether it was honored.
    fn complete_load(&mut self, tab_id: &str, sequence: u64, title: &str) -> bool {
        let tab = match self.tabs.iter_mut().find(|t| t.id == tab_id) {
            Some(tab) => tab,
            None => return false,
        };
        if tab.load_state != LoadState::Loading || tab.load_sequence != sequence {
            return false;
        }
        tab.load_state = LoadState::Idle;
        tab.title = title.to_string();
        true
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn active_tab(&self) -> &Tab {
        &self.tabs[self.active_index()]
    }

    fn active_tab_id(&self) -> &str {
        &self.active_id
    }

    /// All tabs in creation order.
    fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Tab strip order: pinned tabs first, then the rest, each group in
    /// creation order.
    fn display_order(&self) -> Vec<&Tab> {
        let mut ordered: Vec<&Tab> = Vec::with_capacity(self.tabs.len());
        ordered.extend(self.tabs.iter().filter(|t| t.pinned));
        ordered.extend(self.tabs.iter().filter(|t| !t.pinned));
        ordered
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn can_go_back(&self) -> bool {
        self.active_tab().history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.active_tab().history.can_go_forward()
    }
}
