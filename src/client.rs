//! SignRequest API client.
//!
//! The main entry point for interacting with the SignRequest API.

use crate::documents::DocumentsClient;
use crate::error::{Result, SignRequestError};
use crate::request::{build_action_uri, build_base_url, DEFAULT_API_BASE_URL};
use crate::signrequests::SignRequestsClient;
use crate::teams::TeamsClient;
use crate::transport::{ReqwestTransport, RequestOptions, Transport, TransportError, TransportResponse};
use crate::types::JsonObject;
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Signer language used when neither the signer nor the configuration sets one.
pub const DEFAULT_LANGUAGE: &str = "nl";

const GLOBAL_CLIENT_REQUIRED: &str =
    "This request cannot be sent to a subdomain. Initialize the client without a subdomain.";

/// SignRequest API client.
///
/// A client is bound to one team (subdomain) or to the global API when no
/// subdomain is configured. Team management only works on a global client.
///
/// # Example
///
/// ```rust,no_run
/// use signrequest::{Client, ClientConfig, Signer};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::with_config("token", ClientConfig {
///         subdomain: Some("atane".to_string()),
///         ..Default::default()
///     })?;
///
///     let document = client
///         .documents()
///         .create_from_url("https://example.com/contract.pdf", "contract-42", None, Default::default())
///         .await?;
///
///     client
///         .sign_requests()
///         .send(&document.uuid, "sender@example.com", vec![Signer::new("jan@example.com")], None, true, Default::default())
///         .await?;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    subdomain: Option<String>,
    api_base_url: String,
    default_language: String,
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Team subdomain. `None` addresses the global API.
    pub subdomain: Option<String>,
    /// Base URL template (default: `https://[SUBDOMAIN]signrequest.com/api/v1`).
    pub base_url: Option<String>,
    /// Default signer language (default: `nl`).
    pub default_language: Option<String>,
    /// Request timeout (default: 30 seconds).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl Client {
    /// Create a global client with default configuration.
    ///
    /// ```rust,no_run
    /// use signrequest::Client;
    ///
    /// let client = Client::new("token").unwrap();
    /// assert!(client.subdomain().is_none());
    /// ```
    pub fn new(token: impl AsRef<str>) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    ///
    /// Fails with [`SignRequestError::Local`] if the token cannot be sent as a
    /// header or the HTTP client cannot be built.
    pub fn with_config(token: impl AsRef<str>, config: ClientConfig) -> Result<Self> {
        let timeout = config
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("signrequest-rust/{}", env!("CARGO_PKG_VERSION")));

        let transport = ReqwestTransport::new(token.as_ref(), timeout, &user_agent)
            .map_err(|e| SignRequestError::local(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            transport: Arc::new(transport),
            subdomain: config.subdomain,
            api_base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            default_language: config
                .default_language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        })
    }

    /// Team subdomain, if any.
    pub fn subdomain(&self) -> Option<&str> {
        self.subdomain.as_deref()
    }

    /// Base URL template.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Replace the base URL template.
    pub fn set_api_base_url(&mut self, url: impl Into<String>) {
        self.api_base_url = url.into();
    }

    /// Base URL with the subdomain filled in.
    pub fn base_url(&self) -> String {
        build_base_url(&self.api_base_url, self.subdomain())
    }

    /// Replace the HTTP transport.
    pub fn set_transport(&mut self, transport: impl Transport + 'static) {
        self.transport = Arc::new(transport);
    }

    /// Language given to signers that do not set one.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Change the language given to signers that do not set one.
    pub fn set_default_language(&mut self, language: impl Into<String>) {
        self.default_language = language.into();
    }

    /// Get the documents client.
    pub fn documents(&self) -> DocumentsClient {
        DocumentsClient::new(self.clone())
    }

    /// Get the sign requests client.
    pub fn sign_requests(&self) -> SignRequestsClient {
        SignRequestsClient::new(self.clone())
    }

    /// Get the teams client. Its calls require a client without subdomain.
    pub fn teams(&self) -> TeamsClient {
        TeamsClient::new(self.clone())
    }

    /// URI of an API action for this client's team.
    pub(crate) fn action_uri(&self, action: &str) -> String {
        build_action_uri(&self.base_url(), action)
    }

    /// Send a request for an action. Transport failures become
    /// [`SignRequestError::Remote`].
    pub(crate) async fn request(
        &self,
        method: Method,
        action: &str,
        options: RequestOptions,
    ) -> Result<TransportResponse> {
        let uri = self.action_uri(action);
        debug!(%method, %uri, "sending request");

        self.transport
            .request(method, &uri, options)
            .await
            .map_err(remote_error)
    }

    /// Send a request and decode the response body as a JSON object.
    pub(crate) async fn request_json(
        &self,
        method: Method,
        action: &str,
        options: RequestOptions,
    ) -> Result<JsonObject> {
        let response = self.request(method, action, options).await?;
        decode_json_object(&response)
    }

    /// Fail unless the client addresses the global API.
    pub(crate) fn assert_global_client(&self) -> Result<()> {
        match self.subdomain {
            Some(_) => Err(SignRequestError::local(GLOBAL_CLIENT_REQUIRED)),
            None => Ok(()),
        }
    }
}

pub(crate) fn decode_json_object(response: &TransportResponse) -> Result<JsonObject> {
    Ok(serde_json::from_slice(&response.body)?)
}

fn remote_error(err: TransportError) -> SignRequestError {
    debug!(error = %err, "request failed");
    SignRequestError::Remote {
        message: err.message.clone(),
        code: err.status,
        source: Some(Box::new(err)),
    }
}
