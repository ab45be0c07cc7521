//! Abandoning requests whose caller has gone away.

use futures::future::{AbortHandle, Abortable, Aborted};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cancels every request run through it, including ones already in flight.
///
/// Once cancelled it stays cancelled: later requests fail immediately
/// without touching the network. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: bool,
    next_id: u64,
    in_flight: Vec<(u64, AbortHandle)>,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        let mut inner = self.lock();
        inner.cancelled = true;
        for (_, handle) in inner.in_flight.drain(..) {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    /// Drive `future` to completion unless cancelled first.
    pub async fn run<F: Future>(&self, future: F) -> Result<F::Output, Aborted> {
        let (id, registration) = {
            let mut inner = self.lock();
            if inner.cancelled {
                return Err(Aborted);
            }
            let (handle, registration) = AbortHandle::new_pair();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.in_flight.push((id, handle));
            (id, registration)
        };

        let result = Abortable::new(future, registration).await;

        self.lock().in_flight.retain(|(other, _)| *other != id);
        result
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
