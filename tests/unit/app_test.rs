//! Unit tests for the top-level BrowserApp facade.
//!
//! These tests wire the app to in-memory backends (memory store, null
//! viewport, mock search) to cover the facade's routing, tab strip,
//! session, and lifecycle surface, plus one full save/reopen cycle
//! against a real SQLite file.
//!
//! Requirements: 7.1 (facade wires routing through the tab engine),
//!               7.2 (every mutation arms the persistence timer),
//!               7.3 (shutdown flush and session restore)

use std::time::{Duration, Instant};

use tempfile::TempDir;

use tabshell::app::BrowserApp;
use tabshell::database::kv::MemoryKvStore;
use tabshell::managers::tab_collection::TabCollectionTrait;
use tabshell::services::search::MockSearchProvider;
use tabshell::services::viewport::NullViewport;
use tabshell::types::bookmark::BookmarkToggle;
use tabshell::types::errors::NavigationError;
use tabshell::types::location::{InternalPage, Location};
use tabshell::types::settings::{BrowserSettings, ThemeMode};
use tabshell::types::tab::LoadState;

fn memory_app() -> BrowserApp {
    BrowserApp::new(
        Box::new(MemoryKvStore::new()),
        Box::new(NullViewport),
        Box::new(MockSearchProvider::new()),
    )
}

// === Startup ===

#[test]
fn fresh_app_starts_with_single_home_tab() {
    let app = memory_app();
    assert_eq!(app.tabs().tab_count(), 1);
    assert_eq!(
        app.active_tab().location(),
        &Location::Internal(InternalPage::Home)
    );
    assert_eq!(app.active_tab().load_state, LoadState::Idle);
    assert!(app.bookmarks().is_empty());
    assert!(app.history_log().is_empty());
}

// === Navigation ===

#[test]
fn navigate_active_routes_raw_input() {
    let mut app = memory_app();
    app.navigate_active("example.com").unwrap();

    let tab = app.active_tab();
    assert_eq!(
        tab.location(),
        &Location::External("https://example.com".to_string())
    );
    assert_eq!(tab.load_state, LoadState::Loading);
    assert_eq!(tab.load_sequence, 1);
}

#[test]
fn navigate_active_rejects_blank_input() {
    let mut app = memory_app();
    assert_eq!(app.navigate_active("   "), Err(NavigationError::EmptyInput));
}

#[test]
fn navigate_unknown_tab_fails() {
    let mut app = memory_app();
    let result = app.navigate("no-such-tab", "https://example.com");
    assert_eq!(
        result,
        Err(NavigationError::TabNotFound("no-such-tab".to_string()))
    );
}

#[test]
fn complete_load_applies_title_once() {
    let mut app = memory_app();
    app.navigate_active("https://example.com").unwrap();
    let id = app.active_tab().id.clone();

    assert!(app.complete_load(&id, 1, "Example Domain"));
    assert_eq!(app.active_tab().title, "Example Domain");
    assert_eq!(app.active_tab().load_state, LoadState::Idle);

    // Duplicate and stale reports are ignored
    assert!(!app.complete_load(&id, 1, "Again"));
    assert!(!app.complete_load(&id, 0, "Ancient"));
    assert_eq!(app.active_tab().title, "Example Domain");
}

#[test]
fn back_and_forward_walk_active_tab_history() {
    let mut app = memory_app();
    app.navigate_active("https://a.example").unwrap();
    app.navigate_active("https://b.example").unwrap();

    let back = app.go_back().unwrap();
    assert_eq!(back, Location::External("https://a.example".to_string()));

    let forward = app.go_forward().unwrap();
    assert_eq!(forward, Location::External("https://b.example".to_string()));
}

#[test]
fn go_back_at_history_start_fails() {
    let mut app = memory_app();
    assert!(app.go_back().is_err());
}

#[test]
fn reload_restarts_the_active_load() {
    let mut app = memory_app();
    app.navigate_active("https://example.com").unwrap();
    let id = app.active_tab().id.clone();
    assert!(app.complete_load(&id, 1, "Example Domain"));

    app.reload(&id).unwrap();
    assert_eq!(app.active_tab().load_state, LoadState::Loading);
    assert_eq!(app.active_tab().load_sequence, 2);
    assert_eq!(app.active_tab().title, "Example Domain");
    assert_eq!(app.active_tab().history.entries().len(), 2);
    assert_eq!(app.history_log().len(), 1);

    assert!(app.complete_load(&id, 2, "Example Domain (fresh)"));
    assert_eq!(app.active_tab().title, "Example Domain (fresh)");

    assert!(app.reload("no-such-tab").is_err());
}

// === Tab strip ===

#[test]
fn new_tab_becomes_active_home_tab() {
    let mut app = memory_app();
    let first = app.active_tab().id.clone();

    let second = app.new_tab();
    assert_eq!(app.tabs().tab_count(), 2);
    assert_eq!(app.active_tab().id, second);
    assert_eq!(
        app.active_tab().location(),
        &Location::Internal(InternalPage::Home)
    );
    assert_ne!(first, second);
}

#[test]
fn close_tab_reports_whether_anything_closed() {
    let mut app = memory_app();
    let first = app.active_tab().id.clone();
    let second = app.new_tab();

    assert!(app.close_tab(&second));
    assert_eq!(app.tabs().tab_count(), 1);
    assert_eq!(app.active_tab().id, first);

    // Unknown IDs are a no-op, not a panic
    assert!(!app.close_tab("no-such-tab"));
}

#[test]
fn close_tab_leaves_pinned_tabs_alone() {
    let mut app = memory_app();
    let id = app.active_tab().id.clone();
    app.toggle_pin(&id).unwrap();

    assert!(!app.close_tab(&id));
    assert_eq!(app.tabs().tab_count(), 1);
    assert!(app.active_tab().pinned);
}

#[test]
fn duplicate_tab_copies_state_into_new_active_tab() {
    let mut app = memory_app();
    app.navigate_active("https://example.com").unwrap();
    let id = app.active_tab().id.clone();
    app.complete_load(&id, 1, "Example Domain");

    let copy = app.duplicate_tab(&id).unwrap();
    assert_eq!(app.active_tab().id, copy);
    assert_eq!(app.active_tab().title, "Example Domain");
    assert_eq!(
        app.active_tab().location(),
        &Location::External("https://example.com".to_string())
    );
}

#[test]
fn toggle_mute_flips_and_reports_the_flag() {
    let mut app = memory_app();
    let id = app.active_tab().id.clone();

    assert!(app.toggle_mute(&id).unwrap());
    assert!(app.active_tab().muted);
    assert!(!app.toggle_mute(&id).unwrap());
    assert!(!app.active_tab().muted);
}

// === Bookmarks and session ===

#[test]
fn toggle_bookmark_tracks_active_location() {
    let mut app = memory_app();
    assert!(!app.is_current_bookmarked());

    let toggle = app.toggle_bookmark();
    let id = match toggle {
        BookmarkToggle::Added(id) => id,
        other => panic!("expected Added, got {other:?}"),
    };
    assert!(app.is_current_bookmarked());
    assert_eq!(app.bookmarks()[0].url, "home://");
    assert_eq!(app.bookmarks()[0].title, "Home");

    assert_eq!(app.toggle_bookmark(), BookmarkToggle::Removed(id));
    assert!(!app.is_current_bookmarked());
    assert!(app.bookmarks().is_empty());
}

#[test]
fn external_navigation_lands_in_history_log() {
    let mut app = memory_app();
    app.navigate_active("https://example.com").unwrap();

    assert_eq!(app.history_log().len(), 1);
    assert_eq!(app.history_log()[0].url, "https://example.com");

    app.clear_history_log();
    assert!(app.history_log().is_empty());
}

#[test]
fn privacy_mode_keeps_navigation_out_of_the_log() {
    let mut app = memory_app();
    app.set_privacy_mode(true);
    assert!(app.privacy_mode());

    app.navigate_active("https://secret.example").unwrap();
    assert!(app.history_log().is_empty());

    // The tab itself still navigated
    assert_eq!(
        app.active_tab().location(),
        &Location::External("https://secret.example".to_string())
    );

    app.set_privacy_mode(false);
    app.navigate_active("https://public.example").unwrap();
    assert_eq!(app.history_log().len(), 1);
}

#[test]
fn settings_mutations_go_through_the_facade() {
    let mut app = memory_app();
    app.set_theme(ThemeMode::Dark);
    app.set_background("aurora");
    app.set_show_clock(false);

    assert_eq!(app.settings().theme, ThemeMode::Dark);
    assert_eq!(app.settings().background, "aurora");
    assert!(!app.settings().show_clock);

    app.reset_settings();
    assert_eq!(app.settings(), &BrowserSettings::default());
}

#[test]
fn search_delegates_to_the_provider() {
    let app = memory_app();
    let results = app.search("rust");
    assert!(!results.is_empty());
    assert!(app.search("   ").is_empty());
}

// === Lifecycle ===

#[test]
fn tick_flushes_once_after_the_debounce_window() {
    let mut app = memory_app();
    app.navigate_active("https://example.com").unwrap();

    // The mutation just happened; the deadline is still in the future.
    assert!(!app.tick(Instant::now()).unwrap());

    // Well past any 500ms deadline.
    let later = Instant::now() + Duration::from_secs(1);
    assert!(app.tick(later).unwrap());

    // Clean again until the next mutation.
    assert!(!app.tick(later + Duration::from_secs(1)).unwrap());
}

#[test]
fn session_survives_shutdown_and_reopen() {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("session.db");

    {
        let mut app = BrowserApp::open(&db_path).expect("open failed");
        app.navigate_active("https://example.com/docs").unwrap();
        let id = app.active_tab().id.clone();
        app.complete_load(&id, 1, "Example Docs");
        app.new_tab();
        app.toggle_bookmark();
        app.set_theme(ThemeMode::Dark);
        app.shutdown().expect("shutdown flush failed");
    }

    let app = BrowserApp::open(&db_path).expect("reopen failed");
    assert_eq!(app.tabs().tab_count(), 2);
    assert_eq!(app.tabs().display_order()[0].title, "Example Docs");
    // The second tab was active at shutdown and stays active after restore
    assert_eq!(
        app.active_tab().location(),
        &Location::Internal(InternalPage::Home)
    );
    assert_eq!(app.bookmarks().len(), 1);
    assert_eq!(app.bookmarks()[0].url, "home://");
    assert_eq!(app.settings().theme, ThemeMode::Dark);
    assert_eq!(app.history_log().len(), 1);

    // Restored tabs wake up idle with a fresh sequence counter
    for tab in app.tabs().tabs() {
        assert_eq!(tab.load_state, LoadState::Idle);
        assert_eq!(tab.load_sequence, 0);
    }
}
