//! In-memory session store.

use std::collections::HashMap;
use std::sync::Mutex;

use super::SessionStore;
use crate::error::Result;
use crate::models::Session;

/// Process-local session store backed by a mutex-guarded map.
///
/// This is the default backend: sessions live only as long as the process,
/// which matches the product's lifetime expectations for an interactive
/// conversation. An abandoned session stays in the map until the process
/// exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: Mutex<HashMap<i64, Session>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<i64, Session>> {
        // A poisoned lock means a panic mid-insert on a std HashMap, which
        // cannot leave the map itself inconsistent.
        self.sessions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: i64) -> Result<Option<Session>> {
        Ok(self.lock().get(&key).cloned())
    }

    fn put(&self, session: &Session) -> Result<()> {
        self.lock().insert(session.key, session.clone());
        Ok(())
    }

    fn remove(&self, key: i64) -> Result<()> {
        self.lock().remove(&key);
        Ok(())
    }
}
