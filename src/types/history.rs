use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::HistoryError;
use super::location::Location;

/// Per-tab back/forward navigation ledger.
///
/// Holds at least one entry at all times; the cursor always points at a
/// valid entry. Pushing while the cursor sits behind the newest entry
/// discards the forward branch before appending.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStack {
    entries: Vec<Location>,
    index: usize,
}

impl HistoryStack {
    /// Creates a stack containing a single entry with the cursor on it.
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// Rebuilds a stack from stored parts. Returns `None` when the entries
    /// are empty or the cursor is out of bounds.
    pub fn from_parts(entries: Vec<Location>, index: usize) -> Option<Self> {
        if entries.is_empty() || index >= entries.len() {
            return None;
        }
        Some(Self { entries, index })
    }

    /// Appends a new entry, discarding anything ahead of the cursor first.
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }

    /// Moves the cursor one entry back and returns the new current location.
    pub fn back(&mut self) -> Result<Location, HistoryError> {
        if self.index == 0 {
            return Err(HistoryError::AtStart);
        }
        self.index -= 1;
        Ok(self.entries[self.index].clone())
    }

    /// Moves the cursor one entry forward and returns the new current location.
    pub fn forward(&mut self) -> Result<Location, HistoryError> {
        if self.index + 1 >= self.entries.len() {
            return Err(HistoryError::AtEnd);
        }
        self.index += 1;
        Ok(self.entries[self.index].clone())
    }

    /// The location under the cursor. Never fails.
    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// One visit in the global, append-only history log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryLogEntry {
    pub url: String,
    pub title: String,
    pub timestamp: DateTime<Utc>,
}
