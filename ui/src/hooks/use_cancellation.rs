use payloads::Cancellation;
use yew::prelude::*;

/// A cancellation owned by the calling component. Everything run through it
/// is aborted when the component unmounts.
#[hook]
pub fn use_cancellation() -> Cancellation {
    let cancel = use_memo((), |_| Cancellation::new());

    {
        let cancel = (*cancel).clone();
        use_effect_with((), move |_| move || cancel.cancel());
    }

    (*cancel).clone()
}
