use super::{form, normalize_error, TransportError};
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::debug;
use url::Url;

/// Query parameter identifying this SDK on every request.
pub const REFERRER_PARAM: &str = "referrer";
pub const REFERRER: &str = "RUST_SDK";

/// Scheme used in the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    /// `Authorization: Token <key>`
    #[default]
    Token,
    /// `Authorization: Bearer <key>`
    Bearer,
}

impl AuthScheme {
    pub fn header_value(self, api_key: &str) -> String {
        match self {
            AuthScheme::Token => format!("Token {}", api_key),
            AuthScheme::Bearer => format!("Bearer {}", api_key),
        }
    }
}

/// Body encodings understood by the platform.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Whole-body JSON (`Content-Type: application/json`).
    Json(Value),
    /// Multipart form; the value must be a JSON object, one field per key.
    Form(Value),
}

impl RequestBody {
    fn encoding(&self) -> &'static str {
        match self {
            RequestBody::Empty => "none",
            RequestBody::Json(_) => "json",
            RequestBody::Form(_) => "multipart",
        }
    }
}

/// One call against the versioned API root.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    path_params: Vec<String>,
    query: Vec<(String, String)>,
    body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            path_params: Vec::new(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a percent-encoded path segment (followed by a trailing slash).
    pub fn path_param(mut self, value: impl Into<String>) -> Self {
        self.path_params.push(value.into());
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    pub fn json<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self> {
        let value = serde_json::to_value(payload)?;
        Ok(self.body(RequestBody::Json(value)))
    }

    pub fn form<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self> {
        let value = serde_json::to_value(payload)?;
        Ok(self.body(RequestBody::Form(value)))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn request_body(&self) -> &RequestBody {
        &self.body
    }
}

/// Authenticated transport for the main API.
///
/// Holds no mutable state; share it freely across tasks.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    api_root: Url,
    api_key: String,
    auth_scheme: AuthScheme,
}

impl HttpTransport {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        api_version: &str,
        api_key: impl Into<String>,
        auth_scheme: AuthScheme,
    ) -> Result<Self> {
        Ok(Self {
            client,
            api_root: compose_api_root(base_url, api_version)?,
            api_key: api_key.into(),
            auth_scheme,
        })
    }

    /// `<base_url>/<api_version>/`, the root every endpoint path is joined onto.
    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    pub fn auth_scheme(&self) -> AuthScheme {
        self.auth_scheme
    }

    /// Resolve the full URL for a request, including the referrer tag.
    pub fn endpoint_url(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self
            .api_root
            .join(request.path.trim_start_matches('/'))
            .map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid endpoint path: {}", e),
                    ErrorContext::new()
                        .with_field_path(request.path.clone())
                        .with_source("transport"),
                )
            })?;

        if !request.path_params.is_empty() {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::configuration_with_context(
                    "API root cannot carry path segments",
                    ErrorContext::new().with_source("transport"),
                )
            })?;
            segments.pop_if_empty();
            segments.extend(request.path_params.iter().map(String::as_str));
            segments.push("");
        }

        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &request.query {
                pairs.append_pair(name, value);
            }
            // Caller-supplied keys win.
            if !request.query.iter().any(|(name, _)| name == REFERRER_PARAM) {
                pairs.append_pair(REFERRER_PARAM, REFERRER);
            }
        }

        Ok(url)
    }

    /// Send a request and return the fully drained body of a 2xx response.
    ///
    /// Any other status is decoded into an [`ApiError`](super::ApiError).
    /// Callers without a response destination use this directly; an empty
    /// 2xx body is a success.
    pub async fn send(&self, request: &ApiRequest) -> Result<(u16, Bytes)> {
        let url = self.endpoint_url(request)?;
        debug!(
            method = %request.method,
            path = url.path(),
            encoding = request.body.encoding(),
            "dispatching request"
        );

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .header(AUTHORIZATION, self.auth_scheme.header_value(&self.api_key));
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Form(value) => builder.multipart(form::to_form(value)?),
        };

        let response = builder.send().await.map_err(TransportError::Http)?;
        let status = response.status();
        let body = response.bytes().await.map_err(TransportError::Http)?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(normalize_error(status.as_u16(), &body).into());
        }
        Ok((status.as_u16(), body))
    }

    /// Send a request and decode the success body into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let (status, body) = self.send(&request).await?;
        serde_json::from_slice(&body).map_err(|e| Error::decode(status, e))
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("api_root", &self.api_root.as_str())
            .field("api_key", &"<redacted>")
            .field("auth_scheme", &self.auth_scheme)
            .finish()
    }
}

pub(crate) fn compose_api_root(base_url: &str, api_version: &str) -> Result<Url> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    let base = Url::parse(&base).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid base url: {}", e),
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details(base_url.to_string())
                .with_source("transport"),
        )
    })?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            format!("unsupported url scheme: {}", base.scheme()),
            ErrorContext::new()
                .with_field_path("base_url")
                .with_source("transport"),
        ));
    }

    let version = api_version.trim().trim_matches('/');
    if version.is_empty() {
        return Err(Error::configuration_with_context(
            "api version must be non-empty",
            ErrorContext::new()
                .with_field_path("api_version")
                .with_source("transport"),
        ));
    }

    base.join(&format!("{}/", version)).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid api version: {}", e),
            ErrorContext::new()
                .with_field_path("api_version")
                .with_source("transport"),
        )
    })
}
