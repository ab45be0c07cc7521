//! CRUD hooks, one set shared by every resource.
//!
//! Mutations report success through `on_success` and never touch the data
//! of a `use_find` elsewhere; callers refetch to see the change.

use payloads::Resource;
use yew::prelude::*;

use super::use_request::{RequestHandle, use_request};
use crate::get_api_client;

/// Lists every record of `R`, fetching once on mount. `run` refetches.
#[hook]
pub fn use_find<R: Resource>() -> RequestHandle<Vec<R>, ()> {
    let handle = use_request(|(), session, cancel| async move {
        get_api_client()
            .resource::<R>()
            .find(&session, &cancel)
            .await
    });

    {
        let run = handle.run.clone();
        use_effect_with((), move |_| run.emit(()));
    }

    handle
}

/// Fetches a single record, fetching on mount and whenever `id` changes.
#[hook]
pub fn use_find_one<R: Resource>(id: R::Id) -> RequestHandle<Option<R>, ()> {
    let handle = use_request(move |(), session, cancel| async move {
        get_api_client()
            .resource::<R>()
            .find_one(id, &session, &cancel)
            .await
            .map(Some)
    });

    {
        let run = handle.run.clone();
        use_effect_with(id, move |_| run.emit(()));
    }

    handle
}

#[hook]
pub fn use_create<R: Resource>(
    on_success: Callback<()>,
) -> RequestHandle<(), R::Draft> {
    use_request(move |draft: R::Draft, session, cancel| {
        let on_success = on_success.clone();
        async move {
            get_api_client()
                .resource::<R>()
                .create(&draft, &session, &cancel)
                .await?;
            on_success.emit(());
            Ok(())
        }
    })
}

#[hook]
pub fn use_update<R: Resource>(
    on_success: Callback<()>,
) -> RequestHandle<(), (R::Id, R::Patch)> {
    use_request(move |(id, patch): (R::Id, R::Patch), session, cancel| {
        let on_success = on_success.clone();
        async move {
            get_api_client()
                .resource::<R>()
                .update(id, &patch, &session, &cancel)
                .await?;
            on_success.emit(());
            Ok(())
        }
    })
}

#[hook]
pub fn use_remove<R: Resource>(
    on_success: Callback<()>,
) -> RequestHandle<(), R::Id> {
    use_request(move |id: R::Id, session, cancel| {
        let on_success = on_success.clone();
        async move {
            get_api_client()
                .resource::<R>()
                .remove(id, &session, &cancel)
                .await?;
            on_success.emit(());
            Ok(())
        }
    })
}
