//! Create and edit forms for resources whose fields are all plain inputs.
//!
//! Inputs are gathered into a JSON object keyed by field name and decoded
//! as the resource's draft or patch, so a form is just a list of fields.

use payloads::{Resource, responses};
use serde_json::{Map, Value};
use yew::prelude::*;

use super::ErrorBanner;
use super::form_field::{FormField, SubmitButton, input_value};
use crate::hooks::{use_create, use_find, use_update};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Date,
    Url,
    /// Id of a political party, picked from a list.
    Party,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
) -> FieldDef {
    FieldDef { name, label, kind }
}

pub const CANDIDATE_FIELDS: &[FieldDef] = &[
    field("name", "First name", FieldKind::Text),
    field("last_name", "Last name", FieldKind::Text),
    field("identification", "Identification", FieldKind::Text),
    field("contact_info", "Contact", FieldKind::Text),
    field("photo", "Photo URL", FieldKind::Url),
    field("political_party_id", "Political party", FieldKind::Party),
    field("position", "Position", FieldKind::Text),
    field("experience", "Experience", FieldKind::Text),
    field("biography", "Biography", FieldKind::Text),
    field("education", "Education", FieldKind::Text),
    field("campaign_platform", "Platform", FieldKind::Text),
];

pub const PARTY_FIELDS: &[FieldDef] = &[
    field("name", "Name", FieldKind::Text),
    field("abbreviation", "Abbreviation", FieldKind::Text),
    field("foundation_date", "Founded", FieldKind::Date),
    field("ideology", "Ideology", FieldKind::Text),
    field("description", "Description", FieldKind::Text),
    field("logo", "Logo URL", FieldKind::Url),
];

/// Wire value of a field as typed. Party ids that don't parse become null
/// so decoding reports them.
fn field_value(kind: FieldKind, raw: String) -> Value {
    match kind {
        FieldKind::Party => {
            raw.trim().parse::<i64>().map_or(Value::Null, Value::from)
        }
        _ => Value::String(raw),
    }
}

/// Text to prefill an input with, from the record's wire form.
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Keep only the entries of `edited` that differ from `current`.
pub fn changed_fields(
    current: &Value,
    edited: Map<String, Value>,
) -> Map<String, Value> {
    edited
        .into_iter()
        .filter(|(name, value)| current.get(name) != Some(value))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ResourceFormProps<R: Resource> {
    pub heading: AttrValue,
    pub fields: &'static [FieldDef],
    /// The record to edit. Without one the form creates a new record.
    #[prop_or_default]
    pub record: Option<R>,
    pub on_saved: Callback<()>,
}

#[function_component]
pub fn ResourceForm<R>(props: &ResourceFormProps<R>) -> Html
where
    R: Resource,
{
    let create = use_create::<R>(props.on_saved.clone());
    let update = use_update::<R>(props.on_saved.clone());
    let refs = {
        let count = props.fields.len();
        use_memo((), move |_| {
            (0..count).map(|_| NodeRef::default()).collect::<Vec<_>>()
        })
    };
    let invalid = use_state(|| None::<String>);
    let current = props
        .record
        .as_ref()
        .and_then(|record| serde_json::to_value(record).ok());

    let on_submit = {
        let refs = refs.clone();
        let fields = props.fields;
        let record = props.record.clone();
        let current = current.clone();
        let invalid = invalid.clone();
        let create = create.run.clone();
        let update = update.run.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let values: Map<String, Value> = fields
                .iter()
                .zip(refs.iter())
                .map(|(def, node)| {
                    let value = field_value(def.kind, input_value(node));
                    (def.name.to_string(), value)
                })
                .collect();

            let sent = match (&record, &current) {
                (Some(record), Some(current)) => {
                    let changes = changed_fields(current, values);
                    serde_json::from_value::<R::Patch>(Value::Object(changes))
                        .map(|patch| update.emit((record.id(), patch)))
                }
                _ => {
                    let draft = Value::Object(values);
                    serde_json::from_value::<R::Draft>(draft)
                        .map(|draft| create.emit(draft))
                }
            };
            match sent {
                Ok(()) => invalid.set(None),
                Err(e) => {
                    tracing::debug!("Rejected {} form: {e}", R::NAME);
                    invalid.set(Some(format!("Please check the form: {e}")));
                }
            }
        })
    };

    let request = if props.record.is_some() {
        &update.error
    } else {
        &create.error
    };
    let is_loading = create.is_loading || update.is_loading;
    let inputs = props.fields.iter().zip(refs.iter()).map(|(def, node)| {
        let value = current
            .as_ref()
            .and_then(|current| current.get(def.name))
            .and_then(display_value);
        let error = request
            .as_ref()
            .and_then(|error| error.field(def.name))
            .map(str::to_string);
        let id = AttrValue::Static(def.name);
        let label = AttrValue::Static(def.label);
        match def.kind {
            FieldKind::Party => html! {
                <PartySelect {id} {label} node_ref={node.clone()}
                    value={value.map(AttrValue::from)} {error} />
            },
            kind => {
                let input_type = match kind {
                    FieldKind::Date => "date",
                    FieldKind::Url => "url",
                    _ => "text",
                };
                html! {
                    <FormField {id} {label} node_ref={node.clone()}
                        input_type={input_type}
                        value={value.map(AttrValue::from)} {error} />
                }
            }
        }
    });

    html! {
        <form onsubmit={on_submit} class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md space-y-4">
            <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                {&props.heading}
            </h2>
            if let Some(message) = (*invalid).clone() {
                <ErrorBanner message={message} />
            }
            if let Some(error) = request {
                <ErrorBanner message={error.to_string()} />
            }
            {for inputs}
            <SubmitButton
                text={if props.record.is_some() { "Save" } else { "Create" }}
                busy_text="Saving..."
                {is_loading}
            />
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct PartySelectProps {
    id: AttrValue,
    label: AttrValue,
    node_ref: NodeRef,
    #[prop_or_default]
    value: Option<AttrValue>,
    #[prop_or_default]
    error: Option<String>,
}

#[function_component]
fn PartySelect(props: &PartySelectProps) -> Html {
    let parties = use_find::<responses::PoliticalParty>();
    let error = props.error.clone().or(parties.error_message());
    let options = parties.data.iter().map(|party| {
        let id = party.id.to_string();
        let selected = props.value.as_deref() == Some(id.as_str());
        html! {
            <option key={id.clone()} value={id} {selected}>{party.title()}</option>
        }
    });

    html! {
        <div>
            <label for={props.id.clone()} class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                {&props.label}
            </label>
            <select
                ref={props.node_ref.clone()}
                id={props.id.clone()}
                name={props.id.clone()}
                class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                       rounded-md bg-white dark:bg-neutral-700"
            >
                <option value="" selected={props.value.is_none()}>
                    {if parties.is_loading { "Loading..." } else { "Choose a party" }}
                </option>
                {for options}
            </select>
            if let Some(error) = error {
                <p class="mt-1 text-sm text-red-700 dark:text-red-400">{error}</p>
            }
        </div>
    }
}
