use super::core::{Client, WireProtocol};
use crate::transport::{AuthScheme, HttpTransport, Uploader, DEFAULT_UPLOAD_URL};
use crate::{Error, ErrorContext, Result};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.wetrocloud.com/";
pub const DEFAULT_API_VERSION: &str = "v1";

/// Environment variables read by [`ClientBuilder::from_env`].
pub const ENV_API_KEY: &str = "WETROCLOUD_API_KEY";
pub const ENV_API_URL: &str = "WETROCLOUD_API_URL";
pub const ENV_API_VERSION: &str = "WETROCLOUD_API_VERSION";

/// Builder for [`Client`].
///
/// Every setting is independent of the others; call order does not matter.
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    api_version: String,
    auth_scheme: AuthScheme,
    wire_protocol: WireProtocol,
    upload_url: String,
    http_client: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            auth_scheme: AuthScheme::default(),
            wire_protocol: WireProtocol::default(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            http_client: None,
            timeout: None,
        }
    }

    /// Start from the environment:
    /// - `WETROCLOUD_API_KEY` (required at build time)
    /// - `WETROCLOUD_API_URL` (default `https://api.wetrocloud.com/`)
    /// - `WETROCLOUD_API_VERSION` (default `v1`)
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            builder.api_key = Some(key);
        }
        if let Ok(url) = std::env::var(ENV_API_URL) {
            builder.base_url = url;
        }
        if let Ok(version) = std::env::var(ENV_API_VERSION) {
            builder.api_version = version;
        }
        builder
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Root URL of the platform, without the version segment.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }

    pub fn wire_protocol(mut self, protocol: WireProtocol) -> Self {
        self.wire_protocol = protocol;
        self
    }

    /// Override the staging upload endpoint.
    pub fn upload_url(mut self, url: impl Into<String>) -> Self {
        self.upload_url = url.into();
        self
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, TLS).
    ///
    /// Takes precedence over [`timeout`](Self::timeout).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Whole-request timeout for the HTTP client the builder creates.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key required",
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_details(format!("set it explicitly or via {}", ENV_API_KEY))
                        .with_source("client_builder"),
                )
            })?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(|e| {
                    Error::configuration(format!("Failed to create HTTP client: {}", e))
                })?
            }
        };

        let transport = HttpTransport::new(
            http_client.clone(),
            &self.base_url,
            &self.api_version,
            api_key,
            self.auth_scheme,
        )?;
        let uploader = Uploader::new(http_client, &self.upload_url)?;

        Ok(Client::from_parts(transport, uploader, self.wire_protocol))
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("auth_scheme", &self.auth_scheme)
            .field("wire_protocol", &self.wire_protocol)
            .field("upload_url", &self.upload_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
