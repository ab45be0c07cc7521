//! The error body every backend endpoint returns on a non-2xx response.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Message shown for failures that never produced a backend response, or
/// whose response could not be read.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Per-field validation messages plus optional top-level details.
///
/// Field keys are the names of the submitted entity's fields, e.g.
/// `{"email": "email must be an email", "statusCode": 400}`.
///
/// Decoding is lenient: a list of messages is joined, a status sent as a
/// string is parsed, and any other shape is kept as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpError {
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
    #[serde(
        rename = "statusCode",
        default,
        deserialize_with = "lenient_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_code: Option<u16>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl HttpError {
    /// Reads any JSON error body. Objects map field by field; a bare value
    /// becomes the message.
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(_) => serde_json::from_value(body.clone())
                .unwrap_or_else(|_| Self {
                    message: text_of(body),
                    ..Default::default()
                }),
            other => Self {
                message: text_of(other),
                ..Default::default()
            },
        }
    }

    /// The error synthesized locally for transport and decode failures.
    pub fn unexpected() -> Self {
        Self {
            status_code: Some(500),
            message: Some(UNEXPECTED_ERROR_MESSAGE.to_string()),
            ..Default::default()
        }
    }

    /// Error with a status and a banner message, as the backend would send.
    pub fn with_message(
        status_code: u16,
        error: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: Some(error.into()),
            status_code: Some(status_code),
            message: Some(message.into()),
            fields: BTreeMap::new(),
        }
    }

    /// Attach a validation message for a single field.
    pub fn field_message(
        mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.fields
            .insert(field.into(), serde_json::Value::String(message.into()));
        self
    }

    /// Validation message for the given field, if the backend sent one.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|value| value.as_str())
    }

    pub fn has_field_errors(&self) -> bool {
        self.fields.values().any(|value| value.is_string())
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code == Some(401)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.message {
            return write!(f, "{message}");
        }
        if let Some(error) = &self.error {
            return write!(f, "{error}");
        }
        if let Some((field, message)) = self
            .fields
            .iter()
            .find_map(|(field, value)| Some((field, value.as_str()?)))
        {
            return write!(f, "{field}: {message}");
        }
        match self.status_code {
            Some(code) => write!(f, "Request failed with status {code}"),
            None => write!(f, "Request failed"),
        }
    }
}

impl std::error::Error for HttpError {}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Array(items) => {
            let parts: Vec<String> =
                items.into_iter().filter_map(text_of).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(text_of))
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(code)) => {
            code.as_u64().and_then(|code| u16::try_from(code).ok())
        }
        Some(Value::String(code)) => code.trim().parse().ok(),
        _ => None,
    })
}
