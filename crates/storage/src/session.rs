//! Session-scoped key-value storage
//!
//! Persists the logged-in user's data under the `session` scope. The value
//! type is left generic so the data layer owns the credential shape; this
//! module only owns where it lives.

use crate::kv::{KvStore, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Key under which the logged-in user's credential is stored.
pub const USER_KEY: &str = "user";

/// Scoped key-value store for session data
pub struct SessionStore {
    kv: Arc<KvStore>,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    /// Get a session-level value
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.kv.get_scoped(&["session", key])
    }

    /// Set a session-level value
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.kv.set_scoped(&["session", key], value)
    }

    /// Remove a session-level value
    pub fn remove(&self, key: &str) -> Result<bool> {
        self.kv.remove_scoped(&["session", key])
    }

    /// Check if a session-level key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        self.kv.contains_scoped(&["session", key])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestUser {
        id: String,
        nickname: String,
    }

    #[test]
    fn test_session_store_roundtrip() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        let session = SessionStore::new(kv);

        let user = TestUser { id: "u1".to_string(), nickname: "alice".to_string() };

        session.set(USER_KEY, &user).unwrap();
        assert!(session.contains(USER_KEY).unwrap());

        let stored: Option<TestUser> = session.get(USER_KEY).unwrap();
        assert_eq!(stored, Some(user));
    }

    #[test]
    fn test_session_store_missing_user() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        let session = SessionStore::new(kv);

        let stored: Option<TestUser> = session.get(USER_KEY).unwrap();
        assert_eq!(stored, None);
    }

    #[test]
    fn test_session_store_logout_clears_user() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        let session = SessionStore::new(kv);

        let user = TestUser { id: "u1".to_string(), nickname: "alice".to_string() };
        session.set(USER_KEY, &user).unwrap();

        assert!(session.remove(USER_KEY).unwrap());
        assert!(!session.contains(USER_KEY).unwrap());
        assert!(!session.remove(USER_KEY).unwrap());
    }

    #[test]
    fn test_session_scope_is_isolated() {
        let kv = Arc::new(KvStore::in_memory().unwrap());
        kv.set("user", &"bare".to_string()).unwrap();

        let session = SessionStore::new(kv);
        let stored: Option<String> = session.get(USER_KEY).unwrap();
        assert_eq!(stored, None);
    }
}
