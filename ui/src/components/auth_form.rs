use payloads::{requests, responses};
use yew::prelude::*;

use super::form_field::{FormField, SubmitButton, input_value};
use super::ErrorBanner;
use crate::hooks::{use_login, use_register};

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub on_success: Callback<responses::User>,
}

#[function_component]
pub fn SignInForm(props: &AuthFormProps) -> Html {
    let login = use_login(props.on_success.clone());
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let run = login.run.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            run.emit(requests::Credentials {
                email: input_value(&email_ref),
                password: input_value(&password_ref),
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="space-y-6">
            if let Some(message) = login.error_message() {
                <ErrorBanner message={message} />
            }
            <FormField
                id="email"
                label="Email"
                input_type="email"
                autocomplete="email"
                node_ref={email_ref}
                error={login.field_error("email")}
            />
            <FormField
                id="password"
                label="Password"
                input_type="password"
                autocomplete="current-password"
                node_ref={password_ref}
                error={login.field_error("password")}
            />
            <SubmitButton
                text="Sign in"
                busy_text="Signing in..."
                is_loading={login.is_loading}
            />
        </form>
    }
}

#[function_component]
pub fn SignUpForm(props: &AuthFormProps) -> Html {
    let register = use_register(props.on_success.clone());
    let full_name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let full_name_ref = full_name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let run = register.run.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            run.emit(requests::NewAccount {
                email: input_value(&email_ref),
                password: input_value(&password_ref),
                full_name: input_value(&full_name_ref),
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="space-y-6">
            if let Some(message) = register.error_message() {
                <ErrorBanner message={message} />
            }
            <FormField
                id="full_name"
                label="Full name"
                autocomplete="name"
                node_ref={full_name_ref}
                error={register.field_error("full_name")}
            />
            <FormField
                id="email"
                label="Email"
                input_type="email"
                autocomplete="email"
                node_ref={email_ref}
                error={register.field_error("email")}
            />
            <FormField
                id="password"
                label="Password"
                input_type="password"
                autocomplete="new-password"
                node_ref={password_ref}
                error={register.field_error("password")}
            />
            <SubmitButton
                text="Create account"
                busy_text="Creating account..."
                is_loading={register.is_loading}
            />
        </form>
    }
}
