//! Persisted sign-in session and the storage it survives reloads in.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is the only writer. The store is read once when the client
//! starts and written on every login/logout.
//!
//! DESIGN
//! ======
//! A session is either empty or holds both a token and a user; the two cannot
//! drift apart in memory. On disk they live under two keys, so `save` clears
//! the old pair, writes the user then the token, and clears again on failure.
//! `load` treats any half-written or undecodable state as signed out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::net::types::{Role, User};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-encoded user record.
pub const USER_KEY: &str = "user";

/// Token and user issued together by the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub user: User,
}

/// Who is currently using the app, if anyone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    /// A signed-in session.
    #[must_use]
    pub fn signed_in(token: impl Into<String>, user: User) -> Self {
        Self { credentials: Some(Credentials { token: token.into(), user }) }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(|c| &c.user)
    }

    /// Role of the signed-in user; `None` when signed out or role unknown.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user().and_then(|user| user.role)
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

/// Failure writing to durable storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend exists in this environment.
    #[error("storage unavailable")]
    Unavailable,

    /// The backend refused a write or delete (quota, privacy mode, ...).
    #[error("storage write failed for {key}: {reason}")]
    Write { key: String, reason: String },

    /// The session could not be encoded.
    #[error("session encode failed: {0}")]
    Encode(String),
}

/// String key/value storage that outlives the page.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the value could not be stored.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if the key could not be removed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`. Inert outside the hydrate build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.remove_item(key).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// In-memory storage. Clones share the same map, so a clone handed to a
/// fresh store behaves like the same browser after a reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        let mut entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut entries)
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_entries(|entries| entries.insert(key.to_owned(), value.to_owned()));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_entries(|entries| entries.remove(key));
        Ok(())
    }
}

/// Reads and writes the session under [`TOKEN_KEY`] and [`USER_KEY`].
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self { storage: Arc::new(storage) }
    }

    /// Store backed by the browser's `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(LocalStorage)
    }

    /// Read the persisted session. Missing, partial, or corrupt data yields an
    /// empty session.
    #[must_use]
    pub fn load(&self) -> Session {
        let Some(token) = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty()) else {
            return Session::default();
        };
        let Some(raw_user) = self.storage.get(USER_KEY) else {
            return Session::default();
        };
        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Session::signed_in(token, user),
            Err(_) => Session::default(),
        }
    }

    /// Persist `session`; an empty session clears storage.
    ///
    /// The previous session is removed before anything is written, so a
    /// failure can only leave storage empty, never holding another user.
    ///
    /// # Errors
    ///
    /// Returns an error if the old session could not be removed or either key
    /// could not be written. A failed write clears both keys again.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let Some(credentials) = session.credentials() else {
            return self.clear();
        };
        let raw_user = serde_json::to_string(&credentials.user).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.clear()?;
        let written = self
            .storage
            .set(USER_KEY, &raw_user)
            .and_then(|()| self.storage.set(TOKEN_KEY, &credentials.token));
        if let Err(e) = written {
            if let Err(rollback) = self.clear() {
                leptos::logging::warn!("session rollback failed: {rollback}");
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove the persisted session.
    ///
    /// # Errors
    ///
    /// Returns the first removal error; both keys are still attempted.
    pub fn clear(&self) -> Result<(), StorageError> {
        let token = self.storage.remove(TOKEN_KEY);
        let user = self.storage.remove(USER_KEY);
        token.and(user)
    }
}
