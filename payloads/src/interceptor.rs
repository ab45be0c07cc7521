//! Request dispatch shared by every endpoint: bearer injection on the way
//! out, session teardown on a 401 on the way back.

use reqwest::{RequestBuilder, Response, StatusCode};

use crate::SessionContext;

/// Whether a request carries the session's bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Bearer,
    /// Sign-in and sign-up are sent without credentials.
    Anonymous,
}

/// Send `request`, applying the session rules to it.
///
/// A 401 clears the session through [`SessionContext::on_unauthorized`]
/// before the response is handed back, whatever its body contains. The
/// response itself is returned unchanged so the caller can still report it.
pub async fn send<S>(
    request: RequestBuilder,
    session: &S,
    auth: Auth,
) -> Result<Response, reqwest::Error>
where
    S: SessionContext + ?Sized,
{
    let request = match (auth, session.token()) {
        (Auth::Bearer, Some(token)) => request.bearer_auth(token),
        _ => request,
    };

    let response = request.send().await?;

    if response.status() == StatusCode::UNAUTHORIZED {
        tracing::debug!(
            url = %response.url(),
            "Unauthorized response, clearing session"
        );
        session.on_unauthorized();
    }

    Ok(response)
}
