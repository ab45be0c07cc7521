use payloads::Resource;
use yew::prelude::*;

use crate::components::{ErrorBanner, FieldDef, ResourceForm};
use crate::hooks::use_find_one;

#[derive(Properties, PartialEq)]
pub struct RecordDetailProps {
    pub id: i64,
    pub fields: &'static [FieldDef],
}

/// Edit page for a single candidate or party.
#[function_component]
pub fn RecordDetailPage<R>(props: &RecordDetailProps) -> Html
where
    R: Resource,
{
    let record = use_find_one::<R>(R::Id::from(props.id));
    let on_saved = {
        let refetch = record.run.clone();
        Callback::from(move |()| refetch.emit(()))
    };

    let body = match &record.data {
        Some(current) => html! {
            <ResourceForm<R>
                heading={current.title()}
                fields={props.fields}
                record={current.clone()}
                {on_saved}
            />
        },
        None if record.is_loading => html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {format!("Loading {}...", R::NAME.to_lowercase())}
            </p>
        },
        None => html! {},
    };

    html! {
        <div class="max-w-2xl space-y-6">
            if let Some(message) = record.error_message() {
                <ErrorBanner message={message} />
            }
            {body}
        </div>
    }
}
