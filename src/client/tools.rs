//! AI utilities that are not tied to a collection.

use super::core::Client;
use super::endpoint::{CATEGORIZE, DATA_EXTRACTION, IMAGE_TO_TEXT, TEXT_GENERATION};
use crate::types::{
    CategorizeRequest, DataExtractionRequest, ImageToTextRequest, StandardResponse,
    TextGenerationRequest,
};
use crate::Result;

/// Obtain one with [`Client::tools`].
#[derive(Debug, Clone, Copy)]
pub struct ToolsClient<'a> {
    client: &'a Client,
}

impl<'a> ToolsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn categorize(&self, request: &CategorizeRequest) -> Result<StandardResponse> {
        self.client.call(&CATEGORIZE, &[], Some(request)).await
    }

    pub async fn generate_text(&self, request: &TextGenerationRequest) -> Result<StandardResponse> {
        self.client.call(&TEXT_GENERATION, &[], Some(request)).await
    }

    pub async fn image_to_text(&self, request: &ImageToTextRequest) -> Result<StandardResponse> {
        self.client.call(&IMAGE_TO_TEXT, &[], Some(request)).await
    }

    pub async fn extract_data(&self, request: &DataExtractionRequest) -> Result<StandardResponse> {
        self.client.call(&DATA_EXTRACTION, &[], Some(request)).await
    }
}
