use super::endpoint::Endpoint;
use super::rag::RagClient;
use super::tools::ToolsClient;
use crate::transport::{ApiRequest, HttpTransport, Uploader};
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// How request bodies are encoded for endpoints that accept either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireProtocol {
    /// Every body is a JSON object.
    #[default]
    Json,
    /// Collection creation, chat, resource removal, text generation and data
    /// extraction send multipart form fields; all other endpoints stay JSON.
    Multipart,
}

impl WireProtocol {
    pub(crate) fn uses_form(self, endpoint: &Endpoint) -> bool {
        self == WireProtocol::Multipart && endpoint.form_capable
    }
}

/// Entry point for the platform.
///
/// Cheap to clone; clones share the same connection pool and immutable
/// configuration, so one client can serve many concurrent tasks.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    transport: HttpTransport,
    uploader: Uploader,
    wire_protocol: WireProtocol,
}

impl Client {
    pub fn builder() -> super::ClientBuilder {
        super::ClientBuilder::new()
    }

    /// Client with default settings for `api_key`.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub(crate) fn from_parts(
        transport: HttpTransport,
        uploader: Uploader,
        wire_protocol: WireProtocol,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                uploader,
                wire_protocol,
            }),
        }
    }

    /// Collection, resource, query and chat operations.
    pub fn rag(&self) -> RagClient<'_> {
        RagClient::new(self)
    }

    /// Collection-independent AI utilities.
    pub fn tools(&self) -> ToolsClient<'_> {
        ToolsClient::new(self)
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.inner.transport
    }

    pub fn uploader(&self) -> &Uploader {
        &self.inner.uploader
    }

    pub fn wire_protocol(&self) -> WireProtocol {
        self.inner.wire_protocol
    }

    /// Build and send the request for `endpoint`, decoding the success body.
    pub(crate) async fn call<P, R>(
        &self,
        endpoint: &Endpoint,
        path_params: &[&str],
        payload: Option<&P>,
    ) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = ApiRequest::new(endpoint.method.clone(), endpoint.path);
        for param in path_params {
            request = request.path_param(*param);
        }
        if let Some(payload) = payload {
            request = if self.inner.wire_protocol.uses_form(endpoint) {
                request.form(payload)?
            } else {
                request.json(payload)?
            };
        }
        self.inner.transport.execute(request).await
    }
}
