//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read this state to coordinate login
//! redirects and onboarding gating. The client wraps a [`SessionStore`] in an
//! `RwSignal` provided through context; there is no global instance.
//!
//! PERSISTENCE
//! ===========
//! `{user, isAuthenticated, hasProfile}` is written under [`AUTH_STORAGE_KEY`]
//! after every mutation, wrapped in a `{"state": .., "version": 0}` envelope.
//! Persisted `is_authenticated` can go stale when tokens disappear underneath
//! it, which is why [`SessionStore::check_auth_state`] exists.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, load_json, save_json};
use crate::tokens::TokenStore;
use crate::types::User;

pub const AUTH_STORAGE_KEY: &str = "auth-storage";
const PERSIST_VERSION: u32 = 0;

/// Session flags. `has_profile == None` means "not checked yet".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub has_profile: Option<bool>,
    pub is_checking_profile: bool,
}

impl SessionState {
    /// True when user, auth flag and profile status are all cleared.
    #[must_use]
    pub fn is_logged_out(&self) -> bool {
        self.user.is_none() && !self.is_authenticated && self.has_profile.is_none()
    }

    fn reset_identity(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.has_profile = None;
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    user: Option<User>,
    is_authenticated: bool,
    has_profile: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistEnvelope {
    state: PersistedSession,
    #[serde(default)]
    version: u32,
}

/// Session state plus the token store and persistence adapter it reconciles against.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    state: SessionState,
    tokens: TokenStore<S>,
    storage: S,
    return_to: Option<String>,
    signed_out: bool,
}

impl<S: KeyValueStore + Clone> SessionStore<S> {
    /// Rebuild the store from persisted state. Absent or unreadable state starts logged out.
    pub fn restore(storage: S) -> Self {
        let state = load_json::<PersistEnvelope>(&storage, AUTH_STORAGE_KEY)
            .map(|envelope| SessionState {
                user: envelope.state.user,
                is_authenticated: envelope.state.is_authenticated,
                has_profile: envelope.state.has_profile,
                is_checking_profile: false,
            })
            .unwrap_or_default();
        Self { state, tokens: TokenStore::new(storage.clone()), storage, return_to: None, signed_out: false }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn tokens(&self) -> &TokenStore<S> {
        &self.tokens
    }

    /// Mark `user` as signed in. Profile status is left untouched.
    pub fn set_auth(&mut self, user: User) {
        self.state.user = Some(user);
        self.state.is_authenticated = true;
        self.signed_out = false;
        self.persist();
    }

    pub fn set_profile_status(&mut self, has_profile: bool) {
        self.state.has_profile = Some(has_profile);
        self.persist();
    }

    pub fn set_checking_profile(&mut self, checking: bool) {
        self.state.is_checking_profile = checking;
    }

    /// Commit a completed login/registration in one step.
    pub fn commit(&mut self, user: User, has_profile: bool) {
        self.state.user = Some(user);
        self.state.is_authenticated = true;
        self.state.has_profile = Some(has_profile);
        self.state.is_checking_profile = false;
        self.signed_out = false;
        self.persist();
    }

    /// Clear tokens and reset identity. Safe to call when already logged out.
    pub fn logout(&mut self) {
        self.tokens.clear_tokens();
        self.state.reset_identity();
        self.state.is_checking_profile = false;
        self.return_to = None;
        self.signed_out = true;
        self.persist();
    }

    /// Reconcile persisted flags with token presence.
    ///
    /// Returns `false` iff neither token is stored, forcing the logged-out
    /// shape first when the state still claims otherwise. Presence only; token
    /// validity is the server's business.
    pub fn check_auth_state(&mut self) -> bool {
        if self.tokens.has_any() {
            return true;
        }
        if !self.state.is_logged_out() {
            log::debug!("tokens missing, resetting stale session state");
            self.state.reset_identity();
            self.persist();
        }
        false
    }

    /// True when [`Self::check_auth_state`] would modify state.
    pub fn is_stale(&self) -> bool {
        !self.tokens.has_any() && !self.state.is_logged_out()
    }

    /// Remember where an unauthenticated visitor was headed.
    ///
    /// Ignored after an explicit [`Self::logout`] until the next sign-in, so
    /// the page the user signed out from is not replayed on the next login.
    pub fn remember_return_to(&mut self, path: impl Into<String>) {
        if self.signed_out {
            return;
        }
        self.return_to = Some(path.into());
    }

    pub fn take_return_to(&mut self) -> Option<String> {
        self.return_to.take()
    }

    pub fn return_to(&self) -> Option<&str> {
        self.return_to.as_deref()
    }

    fn persist(&self) {
        let envelope = PersistEnvelope {
            state: PersistedSession {
                user: self.state.user.clone(),
                is_authenticated: self.state.is_authenticated,
                has_profile: self.state.has_profile,
            },
            version: PERSIST_VERSION,
        };
        save_json(&self.storage, AUTH_STORAGE_KEY, &envelope);
    }
}
