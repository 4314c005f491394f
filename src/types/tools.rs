//! One-shot tool requests; none of these are tied to a collection.

use super::message::Message;
use super::model::ChatModel;
use super::resource::ResourceType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sort a resource into one of the given categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizeRequest {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub resource: String,
    pub json_schema: Value,
    pub categories: Vec<String>,
    pub prompt: String,
}

impl CategorizeRequest {
    pub fn new(
        resource_type: ResourceType,
        resource: impl Into<String>,
        categories: Vec<String>,
    ) -> Self {
        Self {
            resource_type,
            resource: resource.into(),
            json_schema: Value::Object(Default::default()),
            categories,
            prompt: String::new(),
        }
    }

    pub fn json_schema(mut self, schema: Value) -> Self {
        self.json_schema = schema;
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextGenerationRequest {
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ChatModel>,
}

impl TextGenerationRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            model: None,
        }
    }

    pub fn model(mut self, model: impl Into<ChatModel>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageToTextRequest {
    pub image_url: String,
    pub request_query: String,
}

impl ImageToTextRequest {
    pub fn new(image_url: impl Into<String>, request_query: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            request_query: request_query.into(),
        }
    }
}

/// Structured extraction from a web page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataExtractionRequest {
    pub website: String,
    pub json_schema: Value,
}

impl DataExtractionRequest {
    pub fn new(website: impl Into<String>, json_schema: Value) -> Self {
        Self {
            website: website.into(),
            json_schema,
        }
    }
}
