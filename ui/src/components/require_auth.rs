use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_require_auth;

/// Renders its children only while a session exists, and sends everyone
/// else to the sign-in page. Hooks in the children therefore never run
/// without a token.
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let user = use_require_auth();
    if user.is_none() {
        return html! { <Redirect<Route> to={Route::SignIn} /> };
    }

    html! {
        <>
            {for props.children.iter()}
        </>
    }
}
