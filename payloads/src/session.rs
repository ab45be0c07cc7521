//! Session state and the seam through which requests read it.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::responses::{Session, User};

/// What every request needs from whoever owns the session: the bearer token
/// to send, and a way to tear the session down when the backend answers 401.
pub trait SessionContext {
    fn token(&self) -> Option<String>;
    fn on_unauthorized(&self);
}

/// A session owner that sign-in and sign-up write their outcome to.
pub trait SessionStore: SessionContext {
    fn establish(&self, session: Session);
    fn clear(&self);
}

/// The authenticated user and the token authorizing their requests.
///
/// `establish` and `clear_session` always move both fields together, so a
/// state built only through them never holds one without the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    #[serde(default)]
    pub session: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthState {
    /// Replace the current user. The token is left untouched.
    pub fn set_session(&mut self, user: User) {
        self.session = Some(user);
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_session(&mut self) {
        self.session = None;
        self.token = None;
    }

    /// Store the user and token from a successful sign-in or sign-up.
    pub fn establish(&mut self, session: Session) {
        self.set_session(session.user);
        self.set_token(session.token);
    }

    /// Drop a state holding only one of user and token.
    pub fn normalized(mut self) -> Self {
        if !self.is_authenticated() {
            self.clear_session();
        }
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some() && self.token.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref()
    }
}

/// Session store held in process memory, shared between clones.
///
/// Used where there is no browser storage to persist to, such as native
/// tools and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
    state: Arc<Mutex<AuthState>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.update(|state| state.set_token(token));
        session
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> AuthState {
        self.lock().clone()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, AuthState> {
        // state is plain data, so a poisoned lock is still consistent
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionContext for InMemorySession {
    fn token(&self) -> Option<String> {
        self.lock().token.clone()
    }

    fn on_unauthorized(&self) {
        tracing::debug!("Clearing session after unauthorized response");
        self.lock().clear_session();
    }
}

impl SessionStore for InMemorySession {
    fn establish(&self, session: Session) {
        self.lock().establish(session);
    }

    fn clear(&self) {
        self.lock().clear_session();
    }
}
