use tabshell::types::errors::*;

// === NavigationError Tests ===

#[test]
fn navigation_error_empty_input_display() {
    let err = NavigationError::EmptyInput;
    assert_eq!(err.to_string(), "Empty navigation input");
}

#[test]
fn navigation_error_tab_not_found_display() {
    let err = NavigationError::TabNotFound("tab-123".to_string());
    assert_eq!(err.to_string(), "Tab not found: tab-123");
}

#[test]
fn navigation_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(NavigationError::EmptyInput);
    assert!(err.source().is_none());
}

// === HistoryError Tests ===

#[test]
fn history_error_display_variants() {
    assert_eq!(
        HistoryError::AtStart.to_string(),
        "Already at the start of history"
    );
    assert_eq!(
        HistoryError::AtEnd.to_string(),
        "Already at the end of history"
    );
}

// === TabError Tests ===

#[test]
fn tab_error_not_found_display() {
    let err = TabError::NotFound("tab-456".to_string());
    assert_eq!(err.to_string(), "Tab not found: tab-456");
}

#[test]
fn tab_error_pinned_close_rejected_display() {
    let err = TabError::PinnedCloseRejected("tab-789".to_string());
    assert_eq!(err.to_string(), "Cannot close pinned tab: tab-789");
}

// === PersistenceError Tests ===

#[test]
fn persistence_error_display_variants() {
    assert_eq!(
        PersistenceError::Serialization("invalid json".to_string()).to_string(),
        "Snapshot serialization error: invalid json"
    );
    assert_eq!(
        PersistenceError::Storage("disk full".to_string()).to_string(),
        "Snapshot storage error: disk full"
    );
}

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::Database("connection lost".to_string()).to_string(),
        "Store database error: connection lost"
    );
}

// === Cross-cutting: all errors implement std::error::Error ===

#[test]
fn all_errors_implement_std_error() {
    // Verify each error type can be used as a trait object
    let errors: Vec<Box<dyn std::error::Error>> = vec![
        Box::new(NavigationError::EmptyInput),
        Box::new(HistoryError::AtStart),
        Box::new(TabError::NotFound("id".to_string())),
        Box::new(PersistenceError::Storage("msg".to_string())),
        Box::new(StoreError::Database("msg".to_string())),
    ];

    // All 5 error types should be present
    assert_eq!(errors.len(), 5);

    // Each error should have a non-empty display string
    for err in &errors {
        assert!(!err.to_string().is_empty());
    }
}

// === Debug trait verification ===

#[test]
fn all_errors_implement_debug() {
    let debug_str = format!("{:?}", NavigationError::EmptyInput);
    assert!(debug_str.contains("EmptyInput"));

    let debug_str = format!("{:?}", HistoryError::AtEnd);
    assert!(debug_str.contains("AtEnd"));

    let debug_str = format!("{:?}", TabError::PinnedCloseRejected("test".to_string()));
    assert!(debug_str.contains("PinnedCloseRejected"));

    let debug_str = format!("{:?}", PersistenceError::Serialization("test".to_string()));
    assert!(debug_str.contains("Serialization"));

    let debug_str = format!("{:?}", StoreError::Database("test".to_string()));
    assert!(debug_str.contains("Database"));
}
