//! HTTP transport.
//!
//! The client talks to the API through the [`Transport`] trait so the HTTP
//! stack can be swapped (for a proxy-aware client, a recording stub in tests,
//! and so on). [`ReqwestTransport`] is the default implementation.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Options for a single request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra headers, added on top of the transport's defaults.
    pub headers: HeaderMap,
    /// JSON body.
    pub json: Option<serde_json::Value>,
}

impl RequestOptions {
    /// Options carrying only a JSON body.
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            headers: HeaderMap::new(),
            json: Some(body),
        }
    }
}

/// A raw HTTP response.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

/// A failure to obtain a response.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct TransportError {
    /// Human-readable error message.
    pub message: String,
    /// HTTP status code, for failures raised on an error status.
    pub status: Option<u16>,
    /// Underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Create an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            source: None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
            source: Some(Box::new(err)),
        }
    }
}

/// Capability to perform HTTP requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and wait for the response.
    async fn request(
        &self,
        method: Method,
        uri: &str,
        options: RequestOptions,
    ) -> std::result::Result<TransportResponse, TransportError>;
}

/// Default [`Transport`] built on `reqwest`.
///
/// Every request carries the API token, `Accept: application/json` and the
/// configured user agent. Error statuses (4xx and 5xx) are reported as
/// [`TransportError`] unless disabled with [`ReqwestTransport::http_errors`].
#[derive(Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    http_errors: bool,
}

impl ReqwestTransport {
    /// Build a transport authenticating with `token`.
    pub fn new(
        token: &str,
        timeout: Duration,
        user_agent: &str,
    ) -> std::result::Result<Self, TransportError> {
        let mut auth = HeaderValue::from_str(&format!("Token {}", token))
            .map_err(|_| TransportError::new("API token is not a valid header value"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            http_errors: true,
        })
    }

    /// Wrap an already configured `reqwest` client. Authentication headers
    /// must be part of its defaults.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self {
            http,
            http_errors: true,
        }
    }

    /// Whether error statuses are reported as failures (default: true).
    pub fn http_errors(mut self, enabled: bool) -> Self {
        self.http_errors = enabled;
        self
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(
        &self,
        method: Method,
        uri: &str,
        options: RequestOptions,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let mut request = self.http.request(method, uri).headers(options.headers);
        if let Some(body) = &options.json {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        debug!("{} from {}", status, uri);

        if self.http_errors && (status.is_client_error() || status.is_server_error()) {
            return Err(TransportError {
                message: status_error_message(status, uri, &body),
                status: Some(status.as_u16()),
                source: None,
            });
        }

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

fn status_error_message(status: StatusCode, uri: &str, body: &[u8]) -> String {
    let reason = status.canonical_reason().unwrap_or("Unknown status");
    let text = String::from_utf8_lossy(body);
    let text = text.trim();

    if text.is_empty() {
        format!("{} {} for {}", status.as_u16(), reason, uri)
    } else {
        format!("{} {} for {}: {}", status.as_u16(), reason, uri, text)
    }
}
