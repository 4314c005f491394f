//! Resource types, sources and the insert/remove payloads.

use crate::utils::generate_id;
use crate::validation::{not_blank, Validate, Validator};
use bytes::Bytes;
use reqwest::multipart::Part;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::pin::Pin;
use tokio::io::AsyncRead;

/// Kind of content a resource carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Text,
    File,
    Json,
    Web,
    Youtube,
    Audio,
}

impl ResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Text => "text",
            ResourceType::File => "file",
            ResourceType::Json => "json",
            ResourceType::Web => "web",
            ResourceType::Youtube => "youtube",
            ResourceType::Audio => "audio",
        }
    }

    /// Text and JSON resources carry their content inline; every other type
    /// points at a URL.
    pub fn is_inline(self) -> bool {
        matches!(self, ResourceType::Text | ResourceType::Json)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a resource's content comes from.
///
/// Local paths and byte streams are staged through the upload service and
/// replaced by the URL it returns before the insert call is made.
#[derive(Debug)]
pub enum ResourceSource {
    LocalPath(PathBuf),
    RemoteUrl(String),
    ByteStream(ByteStream),
    Inline(String),
}

impl ResourceSource {
    /// Classify a raw string for the given resource type.
    ///
    /// Inline types keep the value verbatim as content. Otherwise the value is
    /// trimmed, then an `http://` or `https://` prefix marks a remote URL and
    /// anything else is a local path.
    pub fn classify(resource_type: ResourceType, value: impl Into<String>) -> Self {
        let value = value.into();
        if resource_type.is_inline() {
            return ResourceSource::Inline(value);
        }
        let value = value.trim();
        if is_remote_url(value) {
            ResourceSource::RemoteUrl(value.to_string())
        } else {
            ResourceSource::LocalPath(PathBuf::from(value))
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            ResourceSource::LocalPath(path) => path.as_os_str().is_empty(),
            ResourceSource::RemoteUrl(value) | ResourceSource::Inline(value) => !not_blank(value),
            ResourceSource::ByteStream(_) => false,
        }
    }
}

impl From<ByteStream> for ResourceSource {
    fn from(stream: ByteStream) -> Self {
        ResourceSource::ByteStream(stream)
    }
}

fn is_remote_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

enum ByteSource {
    Bytes(Bytes),
    Reader(Pin<Box<dyn AsyncRead + Send + Sync>>),
}

/// In-memory bytes or an async reader to be staged through the upload service.
pub struct ByteStream {
    source: ByteSource,
    file_name: Option<String>,
}

impl ByteStream {
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            source: ByteSource::Bytes(bytes.into()),
            file_name: None,
        }
    }

    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + Sync + 'static,
    {
        Self {
            source: ByteSource::Reader(Box::pin(reader)),
            file_name: None,
        }
    }

    /// Name the uploaded part. Without one a random UUID is used.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub(crate) fn into_part(self) -> Part {
        let file_name = self.file_name.unwrap_or_else(generate_id);
        let part = match self.source {
            ByteSource::Bytes(bytes) => Part::bytes(bytes.to_vec()),
            ByteSource::Reader(reader) => Part::stream(reqwest::Body::wrap_stream(
                tokio_util::io::ReaderStream::new(reader),
            )),
        };
        part.file_name(file_name)
    }
}

impl fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            ByteSource::Bytes(bytes) => format!("Bytes({} bytes)", bytes.len()),
            ByteSource::Reader(_) => "Reader".to_string(),
        };
        f.debug_struct("ByteStream")
            .field("source", &source)
            .field("file_name", &self.file_name)
            .finish()
    }
}

/// A resource to insert into a collection.
#[derive(Debug)]
pub struct InsertResourceRequest {
    pub collection_id: String,
    pub resource_type: ResourceType,
    pub source: ResourceSource,
}

impl InsertResourceRequest {
    pub fn new(
        collection_id: impl Into<String>,
        resource_type: ResourceType,
        source: impl Into<ResourceSource>,
    ) -> Self {
        Self {
            collection_id: collection_id.into(),
            resource_type,
            source: source.into(),
        }
    }

    /// Build a request from a raw string, classified with [`ResourceSource::classify`].
    pub fn classified(
        collection_id: impl Into<String>,
        resource_type: ResourceType,
        value: impl Into<String>,
    ) -> Self {
        Self::new(
            collection_id,
            resource_type,
            ResourceSource::classify(resource_type, value),
        )
    }
}

impl Validate for InsertResourceRequest {
    fn check_fields(&self, v: &mut Validator) {
        v.check(
            not_blank(&self.collection_id),
            "collection_id",
            "collection_id must be provided",
        );
        v.check(!self.source.is_empty(), "resource", "resource must be provided");
    }
}

/// Wire body of `POST resource/insert/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceInsertPayload {
    pub collection_id: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceInsertResponse {
    #[serde(default)]
    pub resource_id: String,
    pub success: bool,
    #[serde(default)]
    pub tokens: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDeleteRequest {
    pub collection_id: String,
    pub resource_id: String,
}

impl ResourceDeleteRequest {
    pub fn new(collection_id: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            collection_id: collection_id.into(),
            resource_id: resource_id.into(),
        }
    }
}

impl Validate for ResourceDeleteRequest {
    fn check_fields(&self, v: &mut Validator) {
        v.check(
            not_blank(&self.collection_id),
            "collection_id",
            "collection_id must be provided",
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDeleteResponse {
    pub success: bool,
}
