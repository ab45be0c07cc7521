use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{SignInForm, SignUpForm};
use crate::hooks::use_require_auth;

#[derive(Properties, PartialEq)]
struct AuthCardProps {
    title: AttrValue,
    description: AttrValue,
    toggle_text: AttrValue,
    toggle_link_text: AttrValue,
    toggle_route: Route,
    children: Children,
}

#[function_component]
fn AuthCard(props: &AuthCardProps) -> Html {
    // already signed in, or just became so
    let user = use_require_auth();
    if user.is_some() {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-4">
                <div class="bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
                    <div class="mb-8 text-center">
                        <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                            {&props.title}
                        </h1>
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {&props.description}
                        </p>
                    </div>
                    {for props.children.iter()}
                </div>
                <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                    {&props.toggle_text}{" "}
                    <Link<Route>
                        to={props.toggle_route.clone()}
                        classes="text-neutral-900 dark:text-neutral-100 font-medium underline"
                    >
                        {&props.toggle_link_text}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[hook]
fn use_go_home() -> Callback<responses::User> {
    let navigator = use_navigator();
    Callback::from(move |_user: responses::User| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    })
}

#[function_component]
pub fn SignInPage() -> Html {
    let on_success = use_go_home();

    html! {
        <AuthCard
            title="Sign in"
            description="Enter your credentials to continue"
            toggle_text="Don't have an account?"
            toggle_link_text="Create one"
            toggle_route={Route::SignUp}
        >
            <SignInForm {on_success} />
        </AuthCard>
    }
}

#[function_component]
pub fn SignUpPage() -> Html {
    let on_success = use_go_home();

    html! {
        <AuthCard
            title="Create your account"
            description="Register to manage campaigns"
            toggle_text="Already have an account?"
            toggle_link_text="Sign in"
            toggle_route={Route::SignIn}
        >
            <SignUpForm {on_success} />
        </AuthCard>
    }
}
