use payloads::{APIClient, responses};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod logs;
mod pages;
mod state;
mod storage;

use components::{CANDIDATE_FIELDS, PARTY_FIELDS, RequireAuth};
use components::layout::MainLayout;
use pages::{
    CampaignDetailPage, CampaignsPage, CandidatesPage, HomePage,
    NotFoundPage, PoliticalPartiesPage, RecordDetailPage, SignInPage,
    SignUpPage,
};

/// Client for the configured backend: `BACKEND_URL` at build time, or the
/// origin the page was served from.
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .or_else(|| web_sys::window()?.location().origin().ok())
        .unwrap_or_default();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth/sign-in")]
    SignIn,
    #[at("/auth/sign-up")]
    SignUp,
    #[at("/campaigns")]
    Campaigns,
    #[at("/campaigns/:id")]
    Campaign { id: i64 },
    #[at("/candidates")]
    Candidates,
    #[at("/candidates/:id")]
    Candidate { id: i64 },
    #[at("/political-parties")]
    PoliticalParties,
    #[at("/political-parties/:id")]
    PoliticalParty { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::SignIn => html! { <SignInPage /> },
        Route::SignUp => html! { <SignUpPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
        Route::Home => html! {
            <RequireAuth><HomePage /></RequireAuth>
        },
        Route::Campaigns => html! {
            <RequireAuth><CampaignsPage /></RequireAuth>
        },
        Route::Campaign { id } => html! {
            <RequireAuth><CampaignDetailPage {id} /></RequireAuth>
        },
        Route::Candidates => html! {
            <RequireAuth><CandidatesPage /></RequireAuth>
        },
        Route::Candidate { id } => html! {
            <RequireAuth>
                <RecordDetailPage<responses::Candidate>
                    {id}
                    fields={CANDIDATE_FIELDS}
                />
            </RequireAuth>
        },
        Route::PoliticalParties => html! {
            <RequireAuth><PoliticalPartiesPage /></RequireAuth>
        },
        Route::PoliticalParty { id } => html! {
            <RequireAuth>
                <RecordDetailPage<responses::PoliticalParty>
                    {id}
                    fields={PARTY_FIELDS}
                />
            </RequireAuth>
        },
    }
}
