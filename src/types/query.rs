//! Query and chat requests against a collection.

use super::message::Message;
use super::model::ChatModel;
use crate::validation::{not_blank, Validate, Validator};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Natural-language query against a collection.
///
/// `json_schema` shapes the response; when present, `json_schema_rules` must be
/// present too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub collection_id: String,
    pub request_query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ChatModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_schema: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_schema_rules: Option<Value>,
    #[serde(default)]
    pub stream: bool,
}

impl QueryRequest {
    pub fn new(collection_id: impl Into<String>, request_query: impl Into<String>) -> Self {
        Self {
            collection_id: collection_id.into(),
            request_query: request_query.into(),
            model: None,
            json_schema: None,
            json_schema_rules: None,
            stream: false,
        }
    }

    pub fn model(mut self, model: impl Into<ChatModel>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Shape the response with `schema`, constrained by `rules`.
    pub fn json_schema(mut self, schema: Value, rules: Value) -> Self {
        self.json_schema = Some(schema);
        self.json_schema_rules = Some(rules);
        self
    }

    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}

impl Validate for QueryRequest {
    fn check_fields(&self, v: &mut Validator) {
        v.check(
            not_blank(&self.collection_id),
            "collection_id",
            "collection_id must be provided",
        );
        v.check(
            self.json_schema.is_none() || self.json_schema_rules.is_some(),
            "json_schema_rules",
            "json_schema_rules must be provided when json_schema is set",
        );
    }
}

/// A conversational turn against a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub collection_id: String,
    pub message: String,
    #[serde(default)]
    pub chat_history: Vec<Message>,
    #[serde(default)]
    pub stream: bool,
}

impl ChatRequest {
    pub fn new(collection_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            collection_id: collection_id.into(),
            message: message.into(),
            chat_history: Vec::new(),
            stream: false,
        }
    }

    pub fn history(mut self, history: Vec<Message>) -> Self {
        self.chat_history = history;
        self
    }

    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}

impl Validate for ChatRequest {
    fn check_fields(&self, v: &mut Validator) {
        v.check(
            not_blank(&self.collection_id),
            "collection_id",
            "collection_id must be provided",
        );
    }
}

/// Response shape shared by query, chat and the tools endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardResponse {
    pub success: bool,
    #[serde(default)]
    pub tokens: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

impl StandardResponse {
    /// The response payload as text, when the platform returned a string.
    pub fn text(&self) -> Option<&str> {
        self.response.as_ref().and_then(Value::as_str)
    }
}
