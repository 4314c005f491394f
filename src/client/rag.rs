//! Collection, resource, query and chat operations.

use super::core::Client;
use super::endpoint::{
    CHAT_COLLECTION, CREATE_COLLECTION, DELETE_COLLECTION, GET_COLLECTION, INSERT_RESOURCE,
    LIST_COLLECTIONS, QUERY_COLLECTION, REMOVE_RESOURCE,
};
use crate::types::{
    ByteStream, ChatRequest, CollectionCreateResponse, CollectionRequest,
    DeleteCollectionResponse, GetCollectionResponse, InsertResourceRequest,
    ListCollectionResponse, QueryRequest, ResourceDeleteRequest, ResourceDeleteResponse,
    ResourceInsertPayload, ResourceInsertResponse, ResourceSource, ResourceType,
    StandardResponse,
};
use crate::validation::Validate;
use crate::Result;

/// Collection-scoped operations. Obtain one with [`Client::rag`].
#[derive(Debug, Clone, Copy)]
pub struct RagClient<'a> {
    client: &'a Client,
}

impl<'a> RagClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create_collection(&self, collection_id: &str) -> Result<CollectionCreateResponse> {
        let request = CollectionRequest::new(collection_id);
        request.validate()?;
        self.client
            .call(&CREATE_COLLECTION, &[], Some(&request))
            .await
    }

    pub async fn get_collection(&self, collection_id: &str) -> Result<GetCollectionResponse> {
        CollectionRequest::new(collection_id).validate()?;
        self.client
            .call::<(), _>(&GET_COLLECTION, &[collection_id], None)
            .await
    }

    pub async fn list_collections(&self) -> Result<ListCollectionResponse> {
        self.client
            .call::<(), _>(&LIST_COLLECTIONS, &[], None)
            .await
    }

    pub async fn query_collection(&self, request: &QueryRequest) -> Result<StandardResponse> {
        request.validate()?;
        self.client
            .call(&QUERY_COLLECTION, &[], Some(request))
            .await
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<StandardResponse> {
        request.validate()?;
        self.client.call(&CHAT_COLLECTION, &[], Some(request)).await
    }

    /// Insert a resource, staging local files and byte streams first.
    pub async fn insert_resource(
        &self,
        request: InsertResourceRequest,
    ) -> Result<ResourceInsertResponse> {
        request.validate()?;
        let InsertResourceRequest {
            collection_id,
            resource_type,
            source,
        } = request;

        let resource = match source {
            ResourceSource::RemoteUrl(value) | ResourceSource::Inline(value) => value,
            staged => self.client.uploader().stage(&collection_id, staged).await?,
        };

        let payload = ResourceInsertPayload {
            collection_id,
            resource_type,
            resource,
        };
        self.client
            .call(&INSERT_RESOURCE, &[], Some(&payload))
            .await
    }

    pub async fn insert_text(
        &self,
        collection_id: &str,
        text: impl Into<String>,
    ) -> Result<ResourceInsertResponse> {
        self.insert_inline(collection_id, ResourceType::Text, text.into())
            .await
    }

    /// Insert JSON content; `value` is serialized to its compact text form.
    pub async fn insert_json(
        &self,
        collection_id: &str,
        value: &serde_json::Value,
    ) -> Result<ResourceInsertResponse> {
        self.insert_inline(collection_id, ResourceType::Json, value.to_string())
            .await
    }

    pub async fn insert_web(&self, collection_id: &str, url: &str) -> Result<ResourceInsertResponse> {
        self.insert_classified(collection_id, ResourceType::Web, url)
            .await
    }

    /// Insert a file by URL or, for anything that is not an http(s) URL, by local path.
    pub async fn insert_file(
        &self,
        collection_id: &str,
        location: &str,
    ) -> Result<ResourceInsertResponse> {
        self.insert_classified(collection_id, ResourceType::File, location)
            .await
    }

    pub async fn insert_youtube(
        &self,
        collection_id: &str,
        url: &str,
    ) -> Result<ResourceInsertResponse> {
        self.insert_classified(collection_id, ResourceType::Youtube, url)
            .await
    }

    pub async fn insert_audio(
        &self,
        collection_id: &str,
        location: &str,
    ) -> Result<ResourceInsertResponse> {
        self.insert_classified(collection_id, ResourceType::Audio, location)
            .await
    }

    /// Upload in-memory bytes or a reader and insert the result.
    pub async fn insert_stream(
        &self,
        collection_id: &str,
        resource_type: ResourceType,
        stream: ByteStream,
    ) -> Result<ResourceInsertResponse> {
        self.insert_resource(InsertResourceRequest::new(
            collection_id,
            resource_type,
            stream,
        ))
        .await
    }

    pub async fn remove_resource(
        &self,
        request: &ResourceDeleteRequest,
    ) -> Result<ResourceDeleteResponse> {
        request.validate()?;
        self.client
            .call(&REMOVE_RESOURCE, &[], Some(request))
            .await
    }

    pub async fn delete_collection(&self, collection_id: &str) -> Result<DeleteCollectionResponse> {
        let request = CollectionRequest::new(collection_id);
        request.validate()?;
        self.client
            .call(&DELETE_COLLECTION, &[], Some(&request))
            .await
    }

    async fn insert_inline(
        &self,
        collection_id: &str,
        resource_type: ResourceType,
        content: String,
    ) -> Result<ResourceInsertResponse> {
        self.insert_resource(InsertResourceRequest::new(
            collection_id,
            resource_type,
            ResourceSource::Inline(content),
        ))
        .await
    }

    async fn insert_classified(
        &self,
        collection_id: &str,
        resource_type: ResourceType,
        value: &str,
    ) -> Result<ResourceInsertResponse> {
        self.insert_resource(InsertResourceRequest::classified(
            collection_id,
            resource_type,
            value,
        ))
        .await
    }
}
