use payloads::HttpError;
use std::rc::Rc;
use yew::prelude::*;

/// Lifecycle of one request as seen by the component that issued it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestState<T> {
    pub data: T,
    pub error: Option<HttpError>,
    pub is_loading: bool,
}

pub enum RequestAction<T> {
    /// A request was sent.
    Begin,
    /// The request finished. A failure also resets `data` to its empty
    /// value, so stale results are never shown next to an error.
    Settle(Result<T, HttpError>),
}

impl<T: Default + Clone> Reducible for RequestState<T> {
    type Action = RequestAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            RequestAction::Begin => Self {
                data: self.data.clone(),
                error: None,
                is_loading: true,
            },
            RequestAction::Settle(Ok(data)) => Self {
                data,
                error: None,
                is_loading: false,
            },
            RequestAction::Settle(Err(error)) => Self {
                data: T::default(),
                error: Some(error),
                is_loading: false,
            },
        };
        Rc::new(next)
    }
}
