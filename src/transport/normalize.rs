//! Normalization of platform error bodies.
//!
//! The platform reports failures in several shapes: a flat `error` string, a
//! `detail` string, or a map of field names to message lists. All of them
//! collapse into one [`ApiError`]. Rules are tried in order and only the first
//! match applies.

use serde_json::{Map, Value};
use std::fmt;

const UNKNOWN_ERROR: &str = "Unknown error";

/// A non-success response from the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    /// Opaque `payload` field from the error body, passed through uninterpreted.
    pub payload: Option<Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Build an [`ApiError`] from a failing response's status and raw body.
///
/// Never fails: an unparseable body still yields an error with the message
/// `"Unknown error"`.
pub fn normalize_error(status: u16, body: &[u8]) -> ApiError {
    let object = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => {
            return ApiError {
                message: UNKNOWN_ERROR.to_string(),
                status,
                payload: None,
            }
        }
    };

    let payload = object.get("payload").filter(|v| !v.is_null()).cloned();
    ApiError {
        message: error_message(&object),
        status,
        payload,
    }
}

fn error_message(object: &Map<String, Value>) -> String {
    if let Some(Value::String(error)) = object.get("error") {
        return error.clone();
    }
    if let Some(Value::String(detail)) = object.get("detail") {
        return detail.clone();
    }

    let segments: Vec<String> = object
        .iter()
        .filter(|(field, _)| field.as_str() != "payload")
        .map(|(field, value)| match value {
            Value::Array(messages) => {
                let joined: Vec<String> = messages.iter().map(display_value).collect();
                format!("{}: {}", field, joined.join(", "))
            }
            other => format!("{}: {}", field, display_value(other)),
        })
        .collect();

    if segments.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        segments.join("; ")
    }
}

// Strings render without quotes; everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
