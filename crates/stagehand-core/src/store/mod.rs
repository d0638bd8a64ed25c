//! Session storage backends.
//!
//! The engine reads and writes sessions through the [`SessionStore`] trait
//! so it can be tested against the in-memory backend and deployed against
//! the SQLite one without code changes. Both backends give per-key
//! isolation: each call locks the store for its own read-modify-write, so
//! two users never observe or corrupt each other's session, and two racing
//! inputs for the same key cannot lose an update.

use crate::error::Result;
use crate::models::Session;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Key-value storage for conversation sessions, keyed by user id.
pub trait SessionStore: Send + Sync {
    /// Fetches the session for a key, if one exists.
    fn get(&self, key: i64) -> Result<Option<Session>>;

    /// Inserts or replaces the session stored under `session.key`.
    fn put(&self, session: &Session) -> Result<()>;

    /// Removes the session for a key. Removing an absent key is not an
    /// error.
    fn remove(&self, key: i64) -> Result<()>;
}
