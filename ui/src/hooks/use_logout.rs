use payloads::AuthState;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::state::{State, update_auth};

/// Clears the session store and returns to the sign-in page. There is no
/// backend call; the token simply stops being sent.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator();

    Callback::from(move |_| {
        update_auth(&dispatch, AuthState::clear_session);
        tracing::info!("Signed out");
        if let Some(navigator) = &navigator {
            navigator.push(&Route::SignIn);
        }
    })
}
