//! # Session persistence
//!
//! [`SessionStore`] wraps a [`SessionBackend`] (raw string storage under a
//! single well-known key) with typed load/save/clear operations for
//! [`Session`]. There is no schema versioning and at most one session per
//! client.
//!
//! A malformed persisted blob surfaces as [`SessionError::Parse`]; callers
//! treat that the same as an absent session and move on — a corrupt value in
//! storage must never take the UI down.

use crate::models::Session;

/// Storage key for the serialized session blob.
pub const SESSION_KEY: &str = "placement_portal_session";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("stored session is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("storage backend unavailable: {0}")]
    Backend(String),
}

/// Raw key-value storage for the session blob. No network calls.
pub trait SessionBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Typed session store over a storage backend.
#[derive(Clone, Debug)]
pub struct SessionStore<B: SessionBackend> {
    backend: B,
}

impl<B: SessionBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the persisted session. Absent → `Ok(None)`; malformed →
    /// `Err(Parse)`.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let Some(raw) = self.backend.get(SESSION_KEY) else {
            return Ok(None);
        };
        let session = serde_json::from_str(&raw)?;
        Ok(Some(session))
    }

    /// Load, treating a malformed blob as no session (logged, not propagated).
    pub fn load_or_none(&self) -> Option<Session> {
        match self.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("discarding unreadable session blob: {e}");
                None
            }
        }
    }

    /// Persist the session, overwriting any prior value.
    pub fn save(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(raw) => self.backend.put(SESSION_KEY, &raw),
            Err(e) => tracing::error!("failed to serialize session: {e}"),
        }
    }

    /// Remove the persisted session; subsequent [`load`](Self::load) returns
    /// `Ok(None)`.
    pub fn clear(&self) {
        self.backend.remove(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use crate::models::UserRole;

    fn sample() -> Session {
        Session {
            user_id: "9876543210".to_string(),
            role: UserRole::Student,
            full_name: "Ravi Kumar".to_string(),
        }
    }

    #[test]
    fn load_absent_is_none() {
        let store = SessionStore::new(MemoryBackend::new());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let store = SessionStore::new(MemoryBackend::new());
        store.save(&sample());
        assert_eq!(store.load().unwrap(), Some(sample()));
    }

    #[test]
    fn save_overwrites_prior_value() {
        let store = SessionStore::new(MemoryBackend::new());
        store.save(&sample());
        let mut other = sample();
        other.full_name = "Someone Else".to_string();
        store.save(&other);
        assert_eq!(store.load().unwrap().unwrap().full_name, "Someone Else");
    }

    #[test]
    fn clear_removes_session() {
        let store = SessionStore::new(MemoryBackend::new());
        store.save(&sample());
        store.clear();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn malformed_blob_is_parse_error_and_none() {
        let backend = MemoryBackend::new();
        backend.put(SESSION_KEY, "{not json");
        let store = SessionStore::new(backend);
        assert!(matches!(store.load(), Err(SessionError::Parse(_))));
        assert!(store.load_or_none().is_none());
    }
}
