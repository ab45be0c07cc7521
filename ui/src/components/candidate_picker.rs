use payloads::{CandidateId, Resource, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::ErrorBanner;
use crate::hooks::use_find;

/// `selected` with `id` added, or removed if it was already there.
pub fn toggle(selected: &[CandidateId], id: CandidateId) -> Vec<CandidateId> {
    if selected.contains(&id) {
        selected.iter().copied().filter(|other| *other != id).collect()
    } else {
        selected.iter().copied().chain([id]).collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct CandidatePickerProps {
    pub selected: Vec<CandidateId>,
    pub on_change: Callback<Vec<CandidateId>>,
}

/// Checkbox list of every candidate, with its own search box.
#[function_component]
pub fn CandidatePicker(props: &CandidatePickerProps) -> Html {
    let candidates = use_find::<responses::Candidate>();
    let search = use_state(String::new);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            search.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let options = candidates
        .data
        .iter()
        .filter(|candidate| candidate.matches(&search))
        .map(|candidate| {
            let id = candidate.id;
            let on_toggle = {
                let selected = props.selected.clone();
                let on_change = props.on_change.clone();
                Callback::from(move |_: Event| {
                    on_change.emit(toggle(&selected, id))
                })
            };
            html! {
                <li key={id.to_string()}>
                    <label class="flex items-center gap-2">
                        <input
                            type="checkbox"
                            checked={props.selected.contains(&id)}
                            onchange={on_toggle}
                        />
                        {candidate.full_name()}
                        <span class="text-sm text-neutral-500">
                            {&candidate.candidate_details.position}
                        </span>
                    </label>
                </li>
            }
        });

    html! {
        <fieldset class="space-y-2">
            <legend class="text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                {format!("Candidates ({} selected)", props.selected.len())}
            </legend>
            if let Some(message) = candidates.error_message() {
                <ErrorBanner message={message} />
            }
            <input
                type="search"
                placeholder="Search candidates"
                value={(*search).clone()}
                oninput={on_search}
                class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                       rounded-md bg-white dark:bg-neutral-700"
            />
            <ul class="max-h-48 overflow-y-auto space-y-1">{for options}</ul>
        </fieldset>
    }
}
