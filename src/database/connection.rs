//! Connection handling for the on-disk session store.

use std::path::Path;

use rusqlite::Connection;

use super::migrations;

/// Owns the SQLite connection behind the key-value session store.
///
/// Opening a `Database` always brings the schema up to date, so callers
/// never see a connection to an unmigrated file.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the store at `path` and applies any pending
    /// schema migrations.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` when the file cannot be opened or a
    /// migration statement fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens a throwaway in-memory store, mainly for tests and the demo.
    /// Dropped together with the `Database`.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, rusqlite::Error> {
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    /// Direct access to the underlying connection for query execution.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
