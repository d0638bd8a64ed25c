//! SQLite-backed session store.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension, params};

use super::SessionStore;
use crate::error::{DatabaseResultExt, Result, StagehandError};
use crate::models::Session;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS sessions (
    key  INTEGER PRIMARY KEY,
    data TEXT NOT NULL
)";

/// Persistent session store, one JSON-encoded session row per user key.
///
/// Swapping this in for [`super::MemoryStore`] lets in-progress
/// conversations survive a process restart; the engine is oblivious to the
/// difference.
pub struct SqliteStore {
    connection: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and initializes the
    /// schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(|e| StagehandError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let connection =
            Connection::open(path).db_context("Failed to open session database")?;
        connection
            .execute(SCHEMA, [])
            .db_context("Failed to initialize session schema")?;

        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    /// Returns the default database path following the XDG Base Directory
    /// specification: `$XDG_DATA_HOME/stagehand/sessions.db`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stagehand")
            .place_data_file("sessions.db")
            .map_err(|e| StagehandError::XdgDirectory(e.to_string()))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.connection
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SessionStore for SqliteStore {
    fn get(&self, key: i64) -> Result<Option<Session>> {
        let data: Option<String> = self
            .lock()
            .query_row(
                "SELECT data FROM sessions WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .db_context("Failed to load session")?;

        match data {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn put(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string(session)?;
        self.lock()
            .execute(
                "INSERT INTO sessions (key, data) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET data = excluded.data",
                params![session.key, json],
            )
            .db_context("Failed to store session")?;
        Ok(())
    }

    fn remove(&self, key: i64) -> Result<()> {
        self.lock()
            .execute("DELETE FROM sessions WHERE key = ?1", params![key])
            .db_context("Failed to remove session")?;
        Ok(())
    }
}
