//! HTTP transport: request encoding, authentication, error normalization and
//! the side-channel upload used to stage local payloads.

pub mod form;
pub mod http;
pub mod normalize;
pub mod upload;

pub use http::{ApiRequest, AuthScheme, HttpTransport, RequestBody, REFERRER, REFERRER_PARAM};
pub use normalize::{normalize_error, ApiError};
pub use upload::{UploadError, Uploader, DEFAULT_UPLOAD_URL};

use crate::Result;
use std::future::Future;
use tokio_util::sync::CancellationToken;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request cancelled")]
    Cancelled,
}

/// Race an operation against a cancellation token.
///
/// Resolves to [`TransportError::Cancelled`] as soon as `token` fires; the
/// in-flight request is dropped, which aborts it and releases any open file.
pub async fn with_cancellation<F, T>(token: &CancellationToken, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(TransportError::Cancelled.into()),
        result = operation => result,
    }
}
