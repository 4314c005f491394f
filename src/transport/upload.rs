//! Side-channel upload service.
//!
//! Local files and byte streams cannot be sent to the main API directly. They
//! are posted to a separate upload host first, and the URL it hands back is
//! used as the resource source.

use super::TransportError;
use crate::types::{ByteStream, ResourceSource};
use crate::utils::generate_id;
use crate::{Error, ErrorContext, Result};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

pub const DEFAULT_UPLOAD_URL: &str = "https://file-upload-service-python.vercel.app/upload/";

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("File {} does not exist", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file upload failed (HTTP {status})")]
    Failed { status: u16 },

    #[error("no URL in response")]
    MissingUrl,
}

/// Client for the upload host. Sends no platform credentials.
#[derive(Debug, Clone)]
pub struct Uploader {
    client: reqwest::Client,
    upload_url: Url,
}

impl Uploader {
    pub fn new(client: reqwest::Client, upload_url: &str) -> Result<Self> {
        let upload_url = Url::parse(upload_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid upload url: {}", e),
                ErrorContext::new()
                    .with_field_path("upload_url")
                    .with_details(upload_url.to_string())
                    .with_source("uploader"),
            )
        })?;
        Ok(Self { client, upload_url })
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    /// Stage a local or in-memory source and return its public URL.
    ///
    /// Remote URLs and inline content have nothing to stage and are rejected.
    pub async fn stage(&self, collection_id: &str, source: ResourceSource) -> Result<String> {
        match source {
            ResourceSource::LocalPath(path) => self.upload_file(collection_id, path).await,
            ResourceSource::ByteStream(stream) => self.upload_stream(collection_id, stream).await,
            ResourceSource::RemoteUrl(_) | ResourceSource::Inline(_) => Err(
                UploadError::InvalidResource("only local files and byte streams can be uploaded".into())
                    .into(),
            ),
        }
    }

    /// Upload a file from disk; the part is named after the file.
    ///
    /// The file handle is owned by the request body and closed when the call
    /// returns, whichever way it returns.
    pub async fn upload_file(&self, collection_id: &str, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| io_error(path, e))?;
        if !metadata.is_file() {
            return Err(UploadError::InvalidResource(format!(
                "{} is not a regular file",
                path.display()
            ))
            .into());
        }

        let file = tokio::fs::File::open(path)
            .await
            .map_err(|e| io_error(path, e))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(generate_id);
        let body = reqwest::Body::wrap_stream(tokio_util::io::ReaderStream::new(file));
        let part = Part::stream_with_length(body, metadata.len()).file_name(file_name);

        self.upload(collection_id, part).await
    }

    /// Upload bytes or a reader; unnamed streams get a random UUID file name.
    pub async fn upload_stream(&self, collection_id: &str, stream: ByteStream) -> Result<String> {
        self.upload(collection_id, stream.into_part()).await
    }

    async fn upload(&self, collection_id: &str, file: Part) -> Result<String> {
        let form = Form::new()
            .text("collection_id", collection_id.to_string())
            .part("file", file);

        debug!(
            host = self.upload_url.host_str().unwrap_or_default(),
            collection_id, "staging upload"
        );
        let response = self
            .client
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(TransportError::Http)?;
        let status = response.status();
        let body = response.bytes().await.map_err(TransportError::Http)?;
        debug!(status = status.as_u16(), "upload finished");

        if !status.is_success() {
            return Err(UploadError::Failed {
                status: status.as_u16(),
            }
            .into());
        }

        let json: Value =
            serde_json::from_slice(&body).map_err(|e| Error::decode(status.as_u16(), e))?;
        json.get("url")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| UploadError::MissingUrl.into())
    }
}

fn io_error(path: &Path, err: std::io::Error) -> Error {
    if err.kind() == ErrorKind::NotFound {
        UploadError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into()
    } else {
        UploadError::Io {
            path: path.to_path_buf(),
            source: err,
        }
        .into()
    }
}
