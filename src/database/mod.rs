//! Durable storage for the session snapshot.
//!
//! A thin SQLite layer: [`Database`] opens the file and migrates the
//! schema, `kv` exposes the key-value store the persistence service
//! writes its JSON snapshots through.
//!
//! # Usage
//!
//! ```no_run
//! use tabshell::database::kv::{KeyValueStore, SqliteKvStore};
//!
//! let mut store = SqliteKvStore::open_in_memory().expect("in-memory store");
//! store.set("settings", "{}").expect("write");
//! assert_eq!(store.get("settings").expect("read").as_deref(), Some("{}"));
//! ```

pub mod connection;
pub mod kv;
pub mod migrations;

pub use connection::Database;
