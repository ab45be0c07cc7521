use payloads::Resource;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::ErrorBanner;
use crate::Route;
use crate::hooks::{use_find, use_remove};

#[derive(Properties, PartialEq)]
pub struct ResourceListProps {
    pub heading: AttrValue,
    /// Where a record's title links to, given its id.
    #[prop_or_default]
    pub detail: Option<Callback<i64, Route>>,
}

/// Every record of `R` with refresh and delete buttons, narrowed by a
/// search box. Deleting refetches the list once the backend confirms.
#[function_component]
pub fn ResourceList<R>(props: &ResourceListProps) -> Html
where
    R: Resource,
{
    let records = use_find::<R>();
    let search = use_state(String::new);
    let remove = {
        let refetch = records.run.clone();
        use_remove::<R>(Callback::from(move |()| refetch.emit(())))
    };

    let on_refresh = {
        let refetch = records.run.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            search.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let shown: Vec<&R> =
        records.data.iter().filter(|r| r.matches(&search)).collect();
    let rows = shown.iter().map(|record| {
        let id = record.id();
        let on_delete = {
            let run = remove.run.clone();
            Callback::from(move |_: MouseEvent| run.emit(id))
        };
        let title = match &props.detail {
            Some(detail) => html! {
                <Link<Route> to={detail.emit(id.into())} classes="hover:underline">
                    {record.title()}
                </Link<Route>>
            },
            None => html! { <span>{record.title()}</span> },
        };

        html! {
            <li key={id.to_string()} class="flex justify-between items-center py-2">
                {title}
                <button
                    onclick={on_delete}
                    disabled={remove.is_loading}
                    class="text-sm text-red-700 dark:text-red-400 disabled:opacity-50"
                >
                    {"Delete"}
                </button>
            </li>
        }
    });

    html! {
        <section class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md space-y-4">
            <div class="flex justify-between items-center">
                <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                    {&props.heading}
                </h2>
                <button
                    onclick={on_refresh}
                    disabled={records.is_loading}
                    class="text-sm text-neutral-600 dark:text-neutral-400 disabled:opacity-50"
                >
                    {if records.is_loading { "Loading..." } else { "Refresh" }}
                </button>
            </div>
            if let Some(message) = records.error_message() {
                <ErrorBanner message={message} />
            }
            if let Some(message) = remove.error_message() {
                <ErrorBanner message={message} />
            }
            <input
                type="search"
                placeholder="Search"
                value={(*search).clone()}
                oninput={on_search}
                class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                       rounded-md bg-white dark:bg-neutral-700
                       text-neutral-900 dark:text-neutral-100"
            />
            if records.data.is_empty() && !records.is_loading {
                <p class="text-neutral-600 dark:text-neutral-400">{"Nothing here yet"}</p>
            } else if shown.is_empty() && !records.is_loading {
                <p class="text-neutral-600 dark:text-neutral-400">{"No matches"}</p>
            }
            <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
                {for rows}
            </ul>
        </section>
    }
}
