use payloads::{Cancellation, ClientError, HttpError};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use super::request_state::{RequestAction, RequestState};
use super::use_cancellation;
use crate::state::{State, StoreSession};

/// What a request hook hands back to its component.
pub struct RequestHandle<T, A> {
    pub data: T,
    pub is_loading: bool,
    pub error: Option<HttpError>,
    /// Sends the request. Each call is independent; the last one to finish
    /// wins.
    pub run: Callback<A>,
}

impl<T, A> RequestHandle<T, A> {
    /// Validation message for `field` from the last failed request.
    pub fn field_error(&self, field: &str) -> Option<String> {
        self.error
            .as_ref()
            .and_then(|error| error.field(field))
            .map(str::to_string)
    }

    /// Banner text for the last failed request, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Generic request hook composer.
///
/// `request` receives the call's arguments plus the session and the
/// component's cancellation. Its outcome drives the returned state; an
/// outcome cancelled by unmounting is dropped.
#[hook]
pub fn use_request<T, A, F, Fut>(request: F) -> RequestHandle<T, A>
where
    T: Clone + Default + 'static,
    A: 'static,
    F: Fn(A, StoreSession, Cancellation) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let (_, dispatch) = use_store::<State>();
    let state = use_reducer(RequestState::<T>::default);
    let cancel = use_cancellation();

    let run = {
        let dispatcher = state.dispatcher();
        let session = StoreSession::new(dispatch);
        let request = Rc::new(request);

        Callback::from(move |args: A| {
            let dispatcher = dispatcher.clone();
            let response = request(args, session.clone(), cancel.clone());

            dispatcher.dispatch(RequestAction::Begin);
            yew::platform::spawn_local(async move {
                match response.await {
                    Err(ClientError::Cancelled) => {
                        tracing::debug!("Dropping cancelled request");
                    }
                    result => {
                        let result =
                            result.map_err(ClientError::into_http_error);
                        dispatcher.dispatch(RequestAction::Settle(result));
                    }
                }
            });
        })
    };

    RequestHandle {
        data: state.data.clone(),
        is_loading: state.is_loading,
        error: state.error.clone(),
        run,
    }
}
