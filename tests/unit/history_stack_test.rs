//! Unit tests for the per-tab history stack.
//!
//! These tests exercise cursor movement, branch truncation on push, and
//! the boundary errors surfaced when moving past either end.
//!
//! Requirements: 2.1 (never-empty stack with valid cursor),
//!               2.2 (back/forward bounds),
//!               2.3 (push discards the forward branch)

use tabshell::types::errors::HistoryError;
use tabshell::types::history::HistoryStack;
use tabshell::types::location::{InternalPage, Location};

fn external(url: &str) -> Location {
    Location::External(url.to_string())
}

/// A fresh stack with entries A, B, C and the cursor on C.
fn abc_stack() -> HistoryStack {
    let mut stack = HistoryStack::new(external("https://a.example"));
    stack.push(external("https://b.example"));
    stack.push(external("https://c.example"));
    stack
}

// === Construction ===

#[test]
fn new_stack_holds_single_entry_at_cursor() {
    let stack = HistoryStack::new(Location::Internal(InternalPage::Home));
    assert_eq!(stack.entries().len(), 1);
    assert_eq!(stack.index(), 0);
    assert_eq!(stack.current(), &Location::Internal(InternalPage::Home));
    assert!(!stack.can_go_back());
    assert!(!stack.can_go_forward());
}

#[test]
fn from_parts_accepts_valid_cursor() {
    let stack = HistoryStack::from_parts(
        vec![external("https://a.example"), external("https://b.example")],
        0,
    )
    .unwrap();
    assert_eq!(stack.current(), &external("https://a.example"));
    assert!(stack.can_go_forward());
}

#[test]
fn from_parts_rejects_empty_entries() {
    assert!(HistoryStack::from_parts(vec![], 0).is_none());
}

#[test]
fn from_parts_rejects_out_of_bounds_cursor() {
    let entries = vec![external("https://a.example")];
    assert!(HistoryStack::from_parts(entries, 1).is_none());
}

// === Back and forward ===

#[test]
fn back_moves_cursor_and_returns_new_current() {
    let mut stack = abc_stack();
    let location = stack.back().unwrap();
    assert_eq!(location, external("https://b.example"));
    assert_eq!(stack.current(), &external("https://b.example"));
    assert_eq!(stack.index(), 1);
}

#[test]
fn forward_moves_cursor_and_returns_new_current() {
    let mut stack = abc_stack();
    stack.back().unwrap();
    let location = stack.forward().unwrap();
    assert_eq!(location, external("https://c.example"));
    assert_eq!(stack.index(), 2);
}

#[test]
fn back_at_start_fails_without_moving() {
    let mut stack = HistoryStack::new(external("https://a.example"));
    assert!(matches!(stack.back(), Err(HistoryError::AtStart)));
    assert_eq!(stack.index(), 0);
}

#[test]
fn forward_at_end_fails_without_moving() {
    let mut stack = abc_stack();
    assert!(matches!(stack.forward(), Err(HistoryError::AtEnd)));
    assert_eq!(stack.index(), 2);
}

#[test]
fn can_go_flags_track_cursor_position() {
    let mut stack = abc_stack();
    assert!(stack.can_go_back());
    assert!(!stack.can_go_forward());

    stack.back().unwrap();
    assert!(stack.can_go_back());
    assert!(stack.can_go_forward());

    stack.back().unwrap();
    assert!(!stack.can_go_back());
    assert!(stack.can_go_forward());
}

// === Branch truncation ===

/// Pushing from the middle of the stack drops the forward branch:
/// [A, B, C] with the cursor on B becomes [A, B, D].
#[test]
fn push_from_middle_discards_forward_entries() {
    let mut stack = abc_stack();
    stack.back().unwrap();
    stack.push(external("https://d.example"));

    assert_eq!(
        stack.entries(),
        &[
            external("https://a.example"),
            external("https://b.example"),
            external("https://d.example"),
        ]
    );
    assert_eq!(stack.index(), 2);
    assert!(!stack.can_go_forward());
}

#[test]
fn push_from_start_keeps_only_first_entry_behind() {
    let mut stack = abc_stack();
    stack.back().unwrap();
    stack.back().unwrap();
    stack.push(external("https://d.example"));

    assert_eq!(stack.entries().len(), 2);
    assert_eq!(stack.entries()[0], external("https://a.example"));
    assert_eq!(stack.current(), &external("https://d.example"));
}

#[test]
fn push_at_end_appends_normally() {
    let mut stack = abc_stack();
    stack.push(external("https://d.example"));
    assert_eq!(stack.entries().len(), 4);
    assert_eq!(stack.index(), 3);
}

#[test]
fn push_same_location_still_appends() {
    // De-duplication is the caller's business; the stack itself records
    // whatever it is handed.
    let mut stack = HistoryStack::new(external("https://a.example"));
    stack.push(external("https://a.example"));
    assert_eq!(stack.entries().len(), 2);
}
