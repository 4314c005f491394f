//! Small helpers shared by requests and the upload path.

use serde_json::{json, Value};

/// Random UUID-v4 string (`8-4-4-4-12` lowercase hex) from the OS RNG.
///
/// Usable as a collection id; also names uploaded byte streams.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// JSON schema for `T`, for the `json_schema` fields of query, categorize and
/// data extraction requests.
pub fn json_schema_for<T: schemars::JsonSchema>() -> Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(&schema).unwrap_or_else(|_| json!({}))
}
