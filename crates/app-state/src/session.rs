//! Session state: the logged-in user's credential
//!
//! The router never talks to storage directly. It sees the [`CredentialSource`]
//! interface; the storage-backed implementation lives here and keeps storage
//! failures out of the routing layer by degrading to "not logged in".

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storage::{SessionStore, USER_KEY};
use thiserror::Error;

/// Session-related errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] storage::KvError),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// The logged-in user's credential, as persisted by the auth flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credential {
    /// User identifier
    pub user_id: String,
    /// Display nickname
    pub nickname: String,
    /// Access token for the pin/user services
    pub token: String,
}

impl Credential {
    /// Create a new credential
    pub fn new(
        user_id: impl Into<String>,
        nickname: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: nickname.into(),
            token: token.into(),
        }
    }
}

/// Async lookup of the stored credential
///
/// This is the session-check collaborator the panel router consults before
/// opening the add-trashcan panel. Implementations own their failure
/// handling: the router only ever sees "some credential" or "none".
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// The stored credential, or `None` when nobody is logged in
    async fn current_user(&self) -> Option<Credential>;
}

/// Credential source backed by the persistent session store
pub struct StoredCredentials {
    store: Arc<SessionStore>,
}

impl StoredCredentials {
    /// Create a credential source over a session store
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// Persist a credential after a successful login
    pub fn login(&self, credential: &Credential) -> Result<()> {
        self.store.set(USER_KEY, credential)?;
        tracing::debug!(user_id = %credential.user_id, "credential stored");
        Ok(())
    }

    /// Remove the stored credential; returns whether one was present
    pub fn logout(&self) -> Result<bool> {
        let removed = self.store.remove(USER_KEY)?;
        tracing::debug!(removed, "credential cleared");
        Ok(removed)
    }
}

#[async_trait]
impl CredentialSource for StoredCredentials {
    async fn current_user(&self) -> Option<Credential> {
        match self.store.get(USER_KEY) {
            Ok(credential) => credential,
            Err(e) => {
                tracing::warn!("Credential lookup failed, treating as logged out: {}", e);
                None
            }
        }
    }
}
