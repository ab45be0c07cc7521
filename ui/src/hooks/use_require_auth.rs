use payloads::responses::User;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::State;

/// The signed-in user, or None when there is no session.
///
/// Re-renders when the session changes, including when a 401 anywhere in
/// the app clears it.
#[hook]
pub fn use_require_auth() -> Option<User> {
    let (state, _) = use_store::<State>();

    if state.is_authenticated() {
        state.auth.user().cloned()
    } else {
        None
    }
}
