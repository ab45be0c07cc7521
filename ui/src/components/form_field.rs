use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Current value of the input or select behind `node`, or empty if it is
/// not mounted.
pub fn input_value(node: &NodeRef) -> String {
    if let Some(select) = node.cast::<HtmlSelectElement>() {
        return select.value();
    }
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub node_ref: NodeRef,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    /// Validation message returned by the backend for this field.
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component]
pub fn FormField(props: &FormFieldProps) -> Html {
    html! {
        <div>
            <label for={props.id.clone()} class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                {&props.label}
            </label>
            <input
                ref={props.node_ref.clone()}
                type={props.input_type.clone()}
                id={props.id.clone()}
                name={props.id.clone()}
                value={props.value.clone()}
                autocomplete={props.autocomplete.clone()}
                class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                       rounded-md shadow-sm bg-white dark:bg-neutral-700
                       text-neutral-900 dark:text-neutral-100
                       focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500"
            />
            if let Some(error) = &props.error {
                <p class="mt-1 text-sm text-red-700 dark:text-red-400">{error}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub text: AttrValue,
    pub busy_text: AttrValue,
    pub is_loading: bool,
}

#[function_component]
pub fn SubmitButton(props: &SubmitButtonProps) -> Html {
    html! {
        <button
            type="submit"
            disabled={props.is_loading}
            class="w-full flex justify-center py-2 px-4 border border-transparent
                   rounded-md shadow-sm text-sm font-medium text-white
                   bg-neutral-900 hover:bg-neutral-800
                   dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                   disabled:opacity-50 disabled:cursor-not-allowed
                   transition-colors duration-200"
        >
            if props.is_loading {
                {&props.busy_text}
            } else {
                {&props.text}
            }
        </button>
    }
}
