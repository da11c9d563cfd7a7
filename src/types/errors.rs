use std::fmt;

// === NavigationError ===

/// Errors related to navigation requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The navigation input was empty after trimming.
    EmptyInput,
    /// Tab with the given ID was not found.
    TabNotFound(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::EmptyInput => write!(f, "Empty navigation input"),
            NavigationError::TabNotFound(id) => write!(f, "Tab not found: {}", id),
        }
    }
}

impl std::error::Error for NavigationError {}

// === HistoryError ===

/// Errors related to history stack traversal.
///
/// These are disabled-control conditions rather than user-facing failures;
/// callers typically map them to greyed-out back/forward buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Already at the oldest entry; cannot go back.
    AtStart,
    /// Already at the newest entry; cannot go forward.
    AtEnd,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::AtStart => write!(f, "Already at the start of history"),
            HistoryError::AtEnd => write!(f, "Already at the end of history"),
        }
    }
}

impl std::error::Error for HistoryError {}

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    /// Tab with the given ID was not found.
    NotFound(String),
    /// The tab is pinned and cannot be closed.
    PinnedCloseRejected(String),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::NotFound(id) => write!(f, "Tab not found: {}", id),
            TabError::PinnedCloseRejected(id) => {
                write!(f, "Cannot close pinned tab: {}", id)
            }
        }
    }
}

impl std::error::Error for TabError {}

// === PersistenceError ===

/// Errors related to session snapshot persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Failed to serialize a snapshot to JSON.
    Serialization(String),
    /// The backing store rejected a write.
    Storage(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(msg) => {
                write!(f, "Snapshot serialization error: {}", msg)
            }
            PersistenceError::Storage(msg) => write!(f, "Snapshot storage error: {}", msg),
        }
    }
}

impl std::error::Error for PersistenceError {}

// === StoreError ===

/// Errors related to the durable key-value store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Database operation failed.
    Database(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(msg) => write!(f, "Store database error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
