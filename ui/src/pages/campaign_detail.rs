use payloads::{CampaignId, responses};
use yew::prelude::*;

use crate::components::{EditCampaignForm, ErrorBanner};
use crate::hooks::use_find_one;

#[derive(Properties, PartialEq)]
pub struct CampaignDetailProps {
    pub id: i64,
}

#[function_component]
pub fn CampaignDetailPage(props: &CampaignDetailProps) -> Html {
    let campaign = use_find_one::<responses::Campaign>(CampaignId(props.id));
    let on_saved = {
        let refetch = campaign.run.clone();
        Callback::from(move |()| refetch.emit(()))
    };

    let body = match &campaign.data {
        Some(campaign) => campaign_details(campaign, on_saved),
        None if campaign.is_loading => html! {
            <p class="text-neutral-600 dark:text-neutral-400">{"Loading campaign..."}</p>
        },
        None => html! {},
    };

    html! {
        <div class="max-w-2xl space-y-6">
            if let Some(message) = campaign.error_message() {
                <ErrorBanner message={message} />
            }
            {body}
        </div>
    }
}

fn campaign_details(
    campaign: &responses::Campaign,
    on_saved: Callback<()>,
) -> Html {
    let details = &campaign.campaign_details;
    let candidates = campaign.candidates.iter().map(|candidate| {
        html! {
            <li key={candidate.id.to_string()}>
                {candidate.full_name()}{" - "}{&candidate.candidate_details.position}
            </li>
        }
    });

    html! {
        <>
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {&details.name}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!("{} to {}", details.start_date, details.end_date)}
                </p>
                <p class="mt-4">{&details.description}</p>
            </div>
            <section>
                <h2 class="text-lg font-semibold mb-2">{"Candidates"}</h2>
                if campaign.candidates.is_empty() {
                    <p class="text-neutral-600 dark:text-neutral-400">{"No candidates registered"}</p>
                } else {
                    <ul class="list-disc pl-6">{for candidates}</ul>
                }
            </section>
            <section class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md">
                <h2 class="text-lg font-semibold mb-4">{"Edit"}</h2>
                <EditCampaignForm campaign={campaign.clone()} {on_saved} />
            </section>
        </>
    }
}
