use payloads::{requests, responses};
use yew::prelude::*;

use super::use_request::{RequestHandle, use_request};
use crate::get_api_client;

/// Signs in and establishes the session. A failed attempt also clears any
/// session already held.
#[hook]
pub fn use_login(
    on_success: Callback<responses::User>,
) -> RequestHandle<(), requests::Credentials> {
    use_request(move |credentials: requests::Credentials, session, cancel| {
        let on_success = on_success.clone();
        async move {
            let established = get_api_client()
                .login(&credentials, &session, &cancel)
                .await?;
            tracing::info!(user_id = %established.user.id, "Signed in");
            on_success.emit(established.user);
            Ok(())
        }
    })
}

/// Creates an account and establishes its session. A failed attempt leaves
/// the session store as it was.
#[hook]
pub fn use_register(
    on_success: Callback<responses::User>,
) -> RequestHandle<(), requests::NewAccount> {
    use_request(move |details: requests::NewAccount, session, cancel| {
        let on_success = on_success.clone();
        async move {
            let established = get_api_client()
                .register(&details, &session, &cancel)
                .await?;
            tracing::info!(user_id = %established.user.id, "Registered");
            on_success.emit(established.user);
            Ok(())
        }
    })
}
