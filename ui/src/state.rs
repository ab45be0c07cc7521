use payloads::{AuthState, SessionContext, SessionStore, responses};
use yewdux::prelude::*;

use crate::storage::{self, PersistedState};

/// App-wide state. Only the session store lives here; request data is kept
/// by the hook that fetched it.
#[derive(Clone, PartialEq, Store)]
pub struct State {
    pub auth: AuthState,
}

impl Default for State {
    /// Rehydrates from local storage, signed out unless both user and token
    /// were stored.
    fn default() -> Self {
        let PersistedState { auth } = storage::load();
        Self { auth }
    }
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    fn persisted(&self) -> PersistedState {
        PersistedState {
            auth: self.auth.clone(),
        }
    }
}

/// Change the session store and persist the result.
pub fn update_auth(dispatch: &Dispatch<State>, f: impl FnOnce(&mut AuthState)) {
    dispatch.reduce_mut(|state| {
        f(&mut state.auth);
        storage::save(&state.persisted());
    });
}

/// The session as seen by outgoing requests: the token comes from the
/// store, and a 401 clears the store.
#[derive(Clone)]
pub struct StoreSession {
    dispatch: Dispatch<State>,
}

impl StoreSession {
    pub fn new(dispatch: Dispatch<State>) -> Self {
        Self { dispatch }
    }
}

impl SessionContext for StoreSession {
    fn token(&self) -> Option<String> {
        self.dispatch.get().auth.token.clone()
    }

    fn on_unauthorized(&self) {
        tracing::info!("Session rejected by the backend, signing out");
        update_auth(&self.dispatch, AuthState::clear_session);
    }
}

impl SessionStore for StoreSession {
    fn establish(&self, session: responses::Session) {
        update_auth(&self.dispatch, |auth| auth.establish(session));
    }

    fn clear(&self) {
        update_auth(&self.dispatch, AuthState::clear_session);
    }
}
