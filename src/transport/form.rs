//! Multipart form encoding for endpoints that expect form fields.

use crate::{Error, ErrorContext, Result};
use reqwest::multipart::Form;
use serde_json::{Map, Value};

/// Flatten a JSON object into `(name, value)` form fields.
///
/// String values are written raw, every other value as its JSON text. Null
/// fields are omitted.
pub fn form_fields(payload: &Value) -> Result<Vec<(String, String)>> {
    let object: &Map<String, Value> = payload.as_object().ok_or_else(|| {
        Error::configuration_with_context(
            "multipart payload must be a JSON object",
            ErrorContext::new()
                .with_details(format!("got {}", kind(payload)))
                .with_source("form_encoder"),
        )
    })?;

    let mut fields = Vec::with_capacity(object.len());
    for (name, value) in object {
        match value {
            Value::Null => continue,
            Value::String(s) => fields.push((name.clone(), s.clone())),
            other => fields.push((name.clone(), serde_json::to_string(other)?)),
        }
    }
    Ok(fields)
}

pub(crate) fn to_form(payload: &Value) -> Result<Form> {
    let form = form_fields(payload)?
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));
    Ok(form)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
