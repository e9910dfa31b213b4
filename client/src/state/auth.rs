//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root. Route guards, the auth page, and dashboards
//! read it; only `login`, `logout`, and `restore` write it.
//!
//! DESIGN
//! ======
//! The session lives in a single `RwSignal`, so every reader is a subscriber
//! and sees a mutation as soon as the writing call returns. Storage is
//! written before the signal so a reload never resurrects a logged-out
//! session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::{Session, SessionStore};
use crate::net::types::User;

/// Authentication state tracking the session and restore status.
///
/// `loading` stays true until the persisted session has been read on the
/// client; guards wait instead of redirecting while it is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: Session::default(), loading: true }
    }
}

impl AuthState {
    /// Settled state holding `session`.
    #[must_use]
    pub fn ready(session: Session) -> Self {
        Self { session, loading: false }
    }
}

/// Handle to the app-wide session. `Copy`, so closures can capture it freely.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    store: StoredValue<SessionStore>,
}

impl AuthContext {
    /// Context in the loading state; call [`AuthContext::restore`] once the
    /// client is running to read the persisted session.
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self { state: RwSignal::new(AuthState::default()), store: StoredValue::new(store) }
    }

    /// Load the persisted session and leave the loading state.
    pub fn restore(&self) {
        let session = self.store.with_value(SessionStore::load);
        self.state.set(AuthState::ready(session));
    }

    /// Sign in with credentials issued by the backend.
    pub fn login(&self, token: impl Into<String>, user: User) {
        let session = Session::signed_in(token, user);
        if let Err(e) = self.store.with_value(|store| store.save(&session)) {
            leptos::logging::warn!("session not persisted: {e}");
        }
        self.state.set(AuthState::ready(session));
    }

    /// Sign out locally. Always succeeds, even offline.
    pub fn logout(&self) {
        if let Err(e) = self.store.with_value(SessionStore::clear) {
            leptos::logging::warn!("stored session not cleared: {e}");
        }
        self.state.set(AuthState::ready(Session::default()));
    }

    /// Tracked read of the full state.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    /// Tracked read through a borrow.
    pub fn with_state<R>(&self, f: impl FnOnce(&AuthState) -> R) -> R {
        self.state.with(f)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.session.is_authenticated())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.with(|s| s.session.user().cloned())
    }

    /// Read-only signal for components that only observe.
    #[must_use]
    pub fn signal(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }
}
