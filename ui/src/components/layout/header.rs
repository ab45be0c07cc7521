use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{use_logout, use_require_auth};

#[function_component]
pub fn Header() -> Html {
    let user = use_require_auth();
    let on_logout = use_logout();

    let nav_link = |route: Route, label: &'static str| {
        html! {
            <Link<Route> to={route} classes="text-sm hover:underline">
                {label}
            </Link<Route>>
        }
    };

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-6">
                        <h1 class="text-xl font-semibold text-gray-900 dark:text-white">
                            {"Campaign Dashboard"}
                        </h1>
                        if user.is_some() {
                            {nav_link(Route::Home, "Overview")}
                            {nav_link(Route::Campaigns, "Campaigns")}
                            {nav_link(Route::Candidates, "Candidates")}
                            {nav_link(Route::PoliticalParties, "Parties")}
                        }
                    </div>
                    if let Some(user) = &user {
                        <div class="flex items-center space-x-4">
                            <span class="text-sm text-gray-600 dark:text-gray-300">
                                {&user.full_name}
                            </span>
                            <button onclick={on_logout} class="text-sm hover:underline">
                                {"Sign out"}
                            </button>
                        </div>
                    }
                </div>
            </div>
        </header>
    }
}
