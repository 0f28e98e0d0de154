//! Session store - the current bearer token and user identity
//!
//! Two durable entries hold the session: `authToken` (opaque string) and
//! `user` (the backend's user record as JSON text). Reads never fail; writes
//! are only reachable from the auth controller.

pub mod storage;

use std::sync::Arc;

use crate::error::Result;
use crate::models::{AuthState, User};

pub use storage::{default_session_path, FileStorage, KeyValueStorage, MemoryStorage};

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "authToken";

/// Storage key for the serialized user record
pub const USER_KEY: &str = "user";

/// Single source of truth for "am I logged in, and as whom"
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Session kept only in memory
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Replace the session with `token` and `user` in a single write
    pub(crate) fn set_session(&self, token: &str, user: Option<&User>) -> Result<()> {
        match user {
            Some(user) => {
                let user_json = serde_json::to_string(user)?;
                self.storage
                    .update(&[(TOKEN_KEY, token), (USER_KEY, &user_json)], &[])
            }
            None => self.storage.update(&[(TOKEN_KEY, token)], &[USER_KEY]),
        }
    }

    /// Remove token and user
    pub(crate) fn clear(&self) -> Result<()> {
        self.storage.remove_entries(&[TOKEN_KEY, USER_KEY])
    }

    /// Stored bearer token, if any
    pub fn get_token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("[session] Failed to read token: {}", e);
                None
            }
        }
    }

    /// Stored user record; unparseable data reads as no user
    pub fn get_user(&self) -> Option<User> {
        let raw = match self.storage.get(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("[session] Failed to read user: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) if !user.as_value().is_null() => Some(user),
            Ok(_) => None,
            Err(e) => {
                log::warn!("[session] Ignoring corrupt stored user: {}", e);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    pub fn state(&self) -> AuthState {
        if self.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        }
    }
}
