use payloads::{CandidateId, requests, responses};
use yew::prelude::*;

use super::ErrorBanner;
use super::candidate_picker::CandidatePicker;
use super::form_field::{FormField, SubmitButton, input_value};
use crate::hooks::{use_create, use_update};

/// The fields of `edited` that differ from `current`.
pub fn campaign_patch(
    current: &payloads::Campaign,
    edited: payloads::Campaign,
) -> requests::UpdateCampaign {
    fn changed<T: PartialEq>(new: T, old: &T) -> Option<T> {
        Some(new).filter(|new| new != old)
    }

    requests::UpdateCampaign {
        name: changed(edited.name, &current.name),
        description: changed(edited.description, &current.description),
        start_date: changed(edited.start_date, &current.start_date),
        end_date: changed(edited.end_date, &current.end_date),
        candidate_ids: changed(edited.candidate_ids, &current.candidate_ids),
    }
}

#[derive(Clone, PartialEq)]
struct CampaignRefs {
    name: NodeRef,
    description: NodeRef,
    start: NodeRef,
    end: NodeRef,
}

impl CampaignRefs {
    fn read(&self, candidate_ids: Vec<CandidateId>) -> payloads::Campaign {
        payloads::Campaign {
            name: input_value(&self.name),
            description: input_value(&self.description),
            start_date: input_value(&self.start),
            end_date: input_value(&self.end),
            candidate_ids,
        }
    }
}

#[hook]
fn use_campaign_refs() -> CampaignRefs {
    CampaignRefs {
        name: use_node_ref(),
        description: use_node_ref(),
        start: use_node_ref(),
        end: use_node_ref(),
    }
}

#[derive(Properties, PartialEq)]
pub struct CampaignFormProps {
    pub on_saved: Callback<()>,
}

#[function_component]
pub fn NewCampaignForm(props: &CampaignFormProps) -> Html {
    let create = use_create::<responses::Campaign>(props.on_saved.clone());
    let refs = use_campaign_refs();
    let selected = use_state(Vec::<CandidateId>::new);

    let on_submit = {
        let refs = refs.clone();
        let selected = selected.clone();
        let run = create.run.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            run.emit(refs.read((*selected).clone()));
        })
    };
    let on_pick = {
        let selected = selected.clone();
        Callback::from(move |ids| selected.set(ids))
    };

    html! {
        <form onsubmit={on_submit} class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md space-y-4">
            <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                {"New campaign"}
            </h2>
            if let Some(message) = create.error_message() {
                <ErrorBanner message={message} />
            }
            <FormField id="name" label="Name" node_ref={refs.name}
                error={create.field_error("name")} />
            <FormField id="description" label="Description" node_ref={refs.description}
                error={create.field_error("description")} />
            <FormField id="start_date" label="Start date" input_type="date"
                node_ref={refs.start} error={create.field_error("start_date")} />
            <FormField id="end_date" label="End date" input_type="date"
                node_ref={refs.end} error={create.field_error("end_date")} />
            <CandidatePicker selected={(*selected).clone()} on_change={on_pick} />
            if let Some(error) = create.field_error("candidate_ids") {
                <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
            }
            <SubmitButton text="Create" busy_text="Creating..."
                is_loading={create.is_loading} />
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct EditCampaignProps {
    pub campaign: responses::Campaign,
    pub on_saved: Callback<()>,
}

/// Edits every field of an existing campaign, candidates included. Only
/// fields that differ from the current values are sent.
#[function_component]
pub fn EditCampaignForm(props: &EditCampaignProps) -> Html {
    let update = use_update::<responses::Campaign>(props.on_saved.clone());
    let refs = use_campaign_refs();
    let selected = {
        let ids = props.campaign.campaign_details.candidate_ids.clone();
        use_state(move || ids)
    };

    let on_submit = {
        let refs = refs.clone();
        let selected = selected.clone();
        let current = props.campaign.clone();
        let run = update.run.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let edited = refs.read((*selected).clone());
            let patch = campaign_patch(&current.campaign_details, edited);
            run.emit((current.id, patch));
        })
    };
    let on_pick = {
        let selected = selected.clone();
        Callback::from(move |ids| selected.set(ids))
    };

    let details = &props.campaign.campaign_details;
    html! {
        <form onsubmit={on_submit} class="space-y-4">
            if let Some(message) = update.error_message() {
                <ErrorBanner message={message} />
            }
            <FormField id="name" label="Name" node_ref={refs.name}
                value={details.name.clone()}
                error={update.field_error("name")} />
            <FormField id="description" label="Description"
                node_ref={refs.description}
                value={details.description.clone()}
                error={update.field_error("description")} />
            <FormField id="start_date" label="Start date" input_type="date"
                node_ref={refs.start}
                value={details.start_date.clone()}
                error={update.field_error("start_date")} />
            <FormField id="end_date" label="End date" input_type="date"
                node_ref={refs.end}
                value={details.end_date.clone()}
                error={update.field_error("end_date")} />
            <CandidatePicker selected={(*selected).clone()} on_change={on_pick} />
            if let Some(error) = update.field_error("candidate_ids") {
                <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
            }
            <SubmitButton text="Save" busy_text="Saving..."
                is_loading={update.is_loading} />
        </form>
    }
}
