use payloads::responses;
use yew::prelude::*;

use crate::Route;
use crate::components::{
    CANDIDATE_FIELDS, NewCampaignForm, PARTY_FIELDS, ResourceForm,
    ResourceList,
};

fn campaign_route() -> Callback<i64, Route> {
    Callback::from(|id| Route::Campaign { id })
}

fn candidate_route() -> Callback<i64, Route> {
    Callback::from(|id| Route::Candidate { id })
}

fn party_route() -> Callback<i64, Route> {
    Callback::from(|id| Route::PoliticalParty { id })
}

/// Remounting the list refetches it; bump the revision after a save.
#[hook]
fn use_revision() -> (u32, Callback<()>) {
    let revision = use_state(|| 0u32);
    let bump = {
        let revision = revision.clone();
        Callback::from(move |()| revision.set(*revision + 1))
    };
    (*revision, bump)
}

/// All three resources side by side.
#[function_component]
pub fn HomePage() -> Html {
    html! {
        <div class="grid gap-6 lg:grid-cols-3">
            <ResourceList<responses::Campaign>
                heading="Campaigns"
                detail={campaign_route()}
            />
            <ResourceList<responses::Candidate>
                heading="Candidates"
                detail={candidate_route()}
            />
            <ResourceList<responses::PoliticalParty>
                heading="Political parties"
                detail={party_route()}
            />
        </div>
    }
}

#[function_component]
pub fn CampaignsPage() -> Html {
    let (revision, on_saved) = use_revision();

    html! {
        <div class="grid gap-6 lg:grid-cols-2">
            <ResourceList<responses::Campaign>
                key={revision}
                heading="Campaigns"
                detail={campaign_route()}
            />
            <NewCampaignForm {on_saved} />
        </div>
    }
}

#[function_component]
pub fn CandidatesPage() -> Html {
    let (revision, on_saved) = use_revision();

    html! {
        <div class="grid gap-6 lg:grid-cols-2">
            <ResourceList<responses::Candidate>
                key={revision}
                heading="Candidates"
                detail={candidate_route()}
            />
            <ResourceForm<responses::Candidate>
                heading="New candidate"
                fields={CANDIDATE_FIELDS}
                {on_saved}
            />
        </div>
    }
}

#[function_component]
pub fn PoliticalPartiesPage() -> Html {
    let (revision, on_saved) = use_revision();

    html! {
        <div class="grid gap-6 lg:grid-cols-2">
            <ResourceList<responses::PoliticalParty>
                key={revision}
                heading="Political parties"
                detail={party_route()}
            />
            <ResourceForm<responses::PoliticalParty>
                heading="New political party"
                fields={PARTY_FIELDS}
                {on_saved}
            />
        </div>
    }
}
