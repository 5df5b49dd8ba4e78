//! Network transport to the classification service
//!
//! One call per request, no retries. A transport only reports whether a
//! response arrived; [`send`] then classifies its status.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use super::media::MediaKind;
use super::request::{OutboundRequest, RequestBody};
use crate::config::ServiceConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No response was received (connect, DNS, timeout, aborted body)
    #[error("{kind} request did not reach the service: {detail}")]
    Unreachable { kind: MediaKind, detail: String },

    /// A response arrived with a non-success status
    #[error("{kind} request failed with HTTP {status}")]
    Status {
        kind: MediaKind,
        status: u16,
        body: String,
    },
}

impl TransportError {
    pub fn kind(&self) -> MediaKind {
        match self {
            TransportError::Unreachable { kind, .. } | TransportError::Status { kind, .. } => *kind,
        }
    }

    /// Short message suitable for showing to the user
    pub fn message(&self) -> String {
        match self {
            TransportError::Unreachable { kind, .. } => network_failure_message(*kind).to_string(),
            TransportError::Status { kind, body, .. } => {
                if body.is_empty() {
                    server_failure_message(*kind).to_string()
                } else {
                    body.clone()
                }
            }
        }
    }
}

pub fn network_failure_message(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Text => "Network error. Please try again.",
        MediaKind::Image => "Failed to upload image. Please try again.",
        MediaKind::Video => "Failed to upload video. Please try again.",
    }
}

pub fn server_failure_message(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Text => "Server error",
        MediaKind::Image => "Image analysis failed",
        MediaKind::Video => "Video analysis failed",
    }
}

/// Status and body of a received response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs one network exchange for a request
///
/// Returns `Ok` for any received response regardless of status, and
/// `Err(TransportError::Unreachable)` when nothing came back.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: OutboundRequest) -> Result<RawResponse, TransportError>;
}

/// Execute `request` and turn a non-success status into an error
pub async fn send(
    transport: &dyn Transport,
    request: OutboundRequest,
) -> Result<RawResponse, TransportError> {
    let kind = request.kind;
    let response = transport.execute(request).await?;

    if !response.is_success() {
        return Err(TransportError::Status {
            kind,
            status: response.status,
            body: response.text(),
        });
    }

    Ok(response)
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
            user_agent: format!("verdict/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl From<&ServiceConfig> for HttpConfig {
    fn from(service: &ServiceConfig) -> Self {
        Self {
            connect_timeout: Duration::from_millis(service.connect_timeout_ms),
            request_timeout: Duration::from_millis(service.request_timeout_ms),
            user_agent: service.user_agent.clone(),
        }
    }
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, config: HttpConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(service: &ServiceConfig) -> Result<Self, ClientError> {
        Self::new(&service.base_url, HttpConfig::from(service))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: OutboundRequest) -> Result<RawResponse, TransportError> {
        let kind = request.kind;
        let url = self.build_url(request.endpoint.path());
        let unreachable_err = |detail: String| TransportError::Unreachable { kind, detail };

        let builder = match request.body {
            RequestBody::Json(body) => self.client.post(&url).json(&body),
            RequestBody::Multipart(part) => {
                let mut file_part = Part::bytes(part.file.content.to_vec())
                    .file_name(part.file.name.clone());
                if let Some(content_type) = &part.content_type {
                    file_part = file_part
                        .mime_str(&content_type.to_string())
                        .map_err(|e| unreachable_err(e.to_string()))?;
                }
                self.client
                    .post(&url)
                    .multipart(Form::new().part(part.field, file_part))
            }
        };

        debug!(%kind, url = %url, "Sending classification request");

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                warn!(%kind, url = %url, "Classification request timed out");
            } else {
                warn!(%kind, url = %url, error = %e, "Classification request failed to connect");
            }
            unreachable_err(e.to_string())
        })?;

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            // A failed response is still reported; its message falls back to the default
            Err(e) if !status.is_success() => {
                warn!(%kind, url = %url, status = status.as_u16(), error = %e, "Failed to read error body");
                Bytes::new()
            }
            Err(e) => {
                warn!(%kind, url = %url, error = %e, "Failed to read response body");
                return Err(unreachable_err(format!("failed to read body: {}", e)));
            }
        };

        debug!(%kind, url = %url, status = status.as_u16(), size = body.len(), "Response received");

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}
