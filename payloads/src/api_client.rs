use reqwest::{Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;
use std::marker::PhantomData;

use crate::interceptor::{self, Auth};
use crate::{
    Cancellation, HttpError, Resource, SessionContext, SessionStore, requests,
    responses,
};

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn send<S>(
        &self,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + ?Sized)>,
        session: &S,
        auth: Auth,
    ) -> Result<reqwest::Response, ClientError>
    where
        S: SessionContext + ?Sized,
    {
        let request = self.inner_client.request(method, self.format_url(path));
        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };
        Ok(interceptor::send(request, session, auth).await?)
    }

    /// Typed access to one resource's CRUD endpoints.
    pub fn resource<R: Resource>(&self) -> ResourceClient<'_, R> {
        ResourceClient {
            client: self,
            resource: PhantomData,
        }
    }
}

/// Methods on the backend API
impl APIClient {
    pub fn campaigns(&self) -> ResourceClient<'_, responses::Campaign> {
        self.resource()
    }

    pub fn candidates(&self) -> ResourceClient<'_, responses::Candidate> {
        self.resource()
    }

    pub fn political_parties(
        &self,
    ) -> ResourceClient<'_, responses::PoliticalParty> {
        self.resource()
    }

    /// Exchange credentials for a session. No bearer token is sent, but a
    /// 401 still tears down whatever session the context holds.
    pub async fn sign_in<S>(
        &self,
        credentials: &requests::Credentials,
        session: &S,
        cancel: &Cancellation,
    ) -> Result<responses::Session, ClientError>
    where
        S: SessionContext + ?Sized,
    {
        guarded(cancel, async {
            let response = self
                .send(
                    Method::POST,
                    "auth/sign-in",
                    Some(credentials),
                    session,
                    Auth::Anonymous,
                )
                .await?;
            ok_body(response).await
        })
        .await
    }

    pub async fn sign_up<S>(
        &self,
        details: &requests::NewAccount,
        session: &S,
        cancel: &Cancellation,
    ) -> Result<responses::Session, ClientError>
    where
        S: SessionContext + ?Sized,
    {
        guarded(cancel, async {
            let response = self
                .send(
                    Method::POST,
                    "auth/sign-up",
                    Some(details),
                    session,
                    Auth::Anonymous,
                )
                .await?;
            ok_body(response).await
        })
        .await
    }

    /// Sign in and record the outcome in `store`.
    ///
    /// A successful sign-in establishes the session. Any other failure
    /// clears it, so a rejected attempt never leaves a stale session
    /// behind. A cancelled attempt changes nothing.
    pub async fn login<S>(
        &self,
        credentials: &requests::Credentials,
        store: &S,
        cancel: &Cancellation,
    ) -> Result<responses::Session, ClientError>
    where
        S: SessionStore + ?Sized,
    {
        match self.sign_in(credentials, store, cancel).await {
            Ok(session) => {
                store.establish(session.clone());
                Ok(session)
            }
            Err(ClientError::Cancelled) => Err(ClientError::Cancelled),
            Err(error) => {
                tracing::debug!("Sign-in failed, clearing session: {error}");
                store.clear();
                Err(error)
            }
        }
    }

    /// Create an account and establish its session in `store`. A failed
    /// registration leaves the current session as it was.
    pub async fn register<S>(
        &self,
        details: &requests::NewAccount,
        store: &S,
        cancel: &Cancellation,
    ) -> Result<responses::Session, ClientError>
    where
        S: SessionStore + ?Sized,
    {
        let session = self.sign_up(details, store, cancel).await?;
        store.establish(session.clone());
        Ok(session)
    }
}

/// The five CRUD operations for resource `R`.
///
/// Mutations never return or merge the changed entity; callers re-run
/// [`ResourceClient::find`] to observe the result.
pub struct ResourceClient<'a, R> {
    client: &'a APIClient,
    resource: PhantomData<R>,
}

impl<R: Resource> ResourceClient<'_, R> {
    fn item_path(id: R::Id) -> String {
        format!("{}/{id}", R::PATH)
    }

    /// `GET /api/{PATH}`
    pub async fn find<S>(
        &self,
        session: &S,
        cancel: &Cancellation,
    ) -> Result<Vec<R>, ClientError>
    where
        S: SessionContext + ?Sized,
    {
        guarded(cancel, async {
            let response = self
                .client
                .send(Method::GET, R::PATH, None::<&()>, session, Auth::Bearer)
                .await?;
            ok_body(response).await
        })
        .await
    }

    /// `GET /api/{PATH}/{id}`
    pub async fn find_one<S>(
        &self,
        id: R::Id,
        session: &S,
        cancel: &Cancellation,
    ) -> Result<R, ClientError>
    where
        S: SessionContext + ?Sized,
    {
        guarded(cancel, async {
            let response = self
                .client
                .send(
                    Method::GET,
                    &Self::item_path(id),
                    None::<&()>,
                    session,
                    Auth::Bearer,
                )
                .await?;
            ok_body(response).await
        })
        .await
    }

    /// `POST /api/{PATH}`
    pub async fn create<S>(
        &self,
        draft: &R::Draft,
        session: &S,
        cancel: &Cancellation,
    ) -> Result<(), ClientError>
    where
        S: SessionContext + ?Sized,
    {
        guarded(cancel, async {
            let response = self
                .client
                .send(Method::POST, R::PATH, Some(draft), session, Auth::Bearer)
                .await?;
            ok_empty(response).await
        })
        .await
    }

    /// `PUT /api/{PATH}/{id}`
    pub async fn update<S>(
        &self,
        id: R::Id,
        patch: &R::Patch,
        session: &S,
        cancel: &Cancellation,
    ) -> Result<(), ClientError>
    where
        S: SessionContext + ?Sized,
    {
        guarded(cancel, async {
            let response = self
                .client
                .send(
                    Method::PUT,
                    &Self::item_path(id),
                    Some(patch),
                    session,
                    Auth::Bearer,
                )
                .await?;
            ok_empty(response).await
        })
        .await
    }

    /// `DELETE /api/{PATH}/{id}`
    pub async fn remove<S>(
        &self,
        id: R::Id,
        session: &S,
        cancel: &Cancellation,
    ) -> Result<(), ClientError>
    where
        S: SessionContext + ?Sized,
    {
        guarded(cancel, async {
            let response = self
                .client
                .send(
                    Method::DELETE,
                    &Self::item_path(id),
                    None::<&()>,
                    session,
                    Auth::Bearer,
                )
                .await?;
            ok_empty(response).await
        })
        .await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-2xx response with the backend's error body.
    #[error("{1}")]
    APIError(StatusCode, HttpError),
    /// No response, or a response that could not be decoded.
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Request cancelled")]
    Cancelled,
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
            Self::Cancelled => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// The error to show the user. Only backend error bodies are surfaced;
    /// everything else becomes the generic 500.
    pub fn into_http_error(self) -> HttpError {
        match self {
            Self::APIError(_, body) => body,
            Self::Network(e) => {
                tracing::warn!("Request failed without a usable response: {e}");
                HttpError::unexpected()
            }
            Self::Cancelled => HttpError::unexpected(),
        }
    }
}

async fn guarded<T>(
    cancel: &Cancellation,
    request: impl Future<Output = Result<T, ClientError>>,
) -> Result<T, ClientError> {
    cancel
        .run(request)
        .await
        .map_err(|_| ClientError::Cancelled)?
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let response = error_for_status(response).await?;
    Ok(response.json::<T>().await?)
}

/// Check that a response is OK, discarding its body, returning a
/// ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    error_for_status(response).await?;
    Ok(())
}

async fn error_for_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    // a body that isn't JSON is reported like a transport failure
    let body = response.json::<serde_json::Value>().await?;
    Err(ClientError::APIError(status, HttpError::from_json(body)))
}
