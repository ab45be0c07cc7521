//! Persisting the session store to browser local storage.
//!
//! Everything here degrades to in-memory operation: a missing storage
//! object, a quota error or a corrupt blob is logged and otherwise ignored.

use payloads::AuthState;
use serde::{Deserialize, Serialize};
use web_sys::Storage;

/// Key of the single blob holding all persisted state.
pub const STORAGE_KEY: &str = "election-dashboard-state";

/// The persisted blob, `{"auth": {"session": ..., "token": ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub auth: AuthState,
}

pub fn encode(state: &PersistedState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}

pub fn decode(blob: &str) -> Result<PersistedState, serde_json::Error> {
    serde_json::from_str(blob)
}

/// Decode a stored blob into a usable state. A session missing either its
/// user or its token is treated as signed out.
pub fn rehydrate(blob: &str) -> Result<PersistedState, serde_json::Error> {
    let PersistedState { auth } = decode(blob)?;
    Ok(PersistedState {
        auth: auth.normalized(),
    })
}

fn local_storage() -> Option<Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            tracing::warn!("Local storage is not available: {e:?}");
            None
        }
    }
}

/// Read the persisted state, falling back to the empty state.
pub fn load() -> PersistedState {
    let Some(storage) = local_storage() else {
        return PersistedState::default();
    };
    let blob = match storage.get_item(STORAGE_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => return PersistedState::default(),
        Err(e) => {
            tracing::error!("Failed to read persisted state: {e:?}");
            return PersistedState::default();
        }
    };
    rehydrate(&blob).unwrap_or_else(|e| {
        tracing::error!("Discarding unreadable persisted state: {e}");
        PersistedState::default()
    })
}

pub fn save(state: &PersistedState) {
    let Some(storage) = local_storage() else {
        return;
    };
    let blob = match encode(state) {
        Ok(blob) => blob,
        Err(e) => {
            tracing::error!("Failed to serialize state: {e}");
            return;
        }
    };
    if let Err(e) = storage.set_item(STORAGE_KEY, &blob) {
        tracing::error!("Failed to persist state: {e:?}");
    }
}
