//! Sign request operations.
//!
//! This module provides the SignRequestsClient for asking signers to sign a
//! created document and for following up on those requests.

use crate::client::Client;
use crate::error::Result;
use crate::request::merge_settings;
use crate::transport::RequestOptions;
use crate::types::{JsonObject, Signer};
use reqwest::Method;
use serde_json::{json, Value};

/// Client for sign request operations.
///
/// Access via `client.sign_requests()`.
pub struct SignRequestsClient {
    client: Client,
}

impl SignRequestsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Send a sign request for a created document.
    ///
    /// Signers without a language get the client's default language. Text,
    /// attachment and date fields are disabled unless `settings` turns them
    /// back on (`disable_text`, `disable_attachments`, `disable_date`).
    /// `settings` cannot override the document, sender, message, signers or
    /// reminder fields.
    ///
    /// Remote failures are reported as
    /// [`SignRequestError::SendSignRequest`](crate::SignRequestError::SendSignRequest).
    ///
    /// # Arguments
    ///
    /// * `document_id` - UUID of a created document
    /// * `sender` - E-mail address of the sender
    /// * `signers` - Signers, in signing order
    /// * `message` - Optional message shown to the signers
    /// * `send_reminders` - Whether the API sends automatic reminders
    /// * `settings` - Additional sign request fields
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use signrequest::{Client, Signer};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("token")?;
    ///
    ///     let signers = vec![
    ///         Signer::new("jan@example.com"),
    ///         Signer::new("anne@example.com").with_language("en"),
    ///     ];
    ///     let response = client
    ///         .sign_requests()
    ///         .send("document-uuid", "sender@example.com", signers, Some("Please sign"), true, Default::default())
    ///         .await?;
    ///     println!("Sign request {}", response["uuid"]);
    ///     Ok(())
    /// }
    /// ```
    #[tracing::instrument(skip(self, sender, signers, message, settings), fields(signers = signers.len()))]
    pub async fn send(
        &self,
        document_id: &str,
        sender: &str,
        signers: Vec<Signer>,
        message: Option<&str>,
        send_reminders: bool,
        settings: JsonObject,
    ) -> Result<JsonObject> {
        let default_language = self.client.default_language();
        let signers: Vec<Signer> = signers
            .into_iter()
            .map(|signer| signer.with_default_language(default_language))
            .collect();

        let mut base = JsonObject::new();
        base.insert("disable_text".to_string(), Value::Bool(true));
        base.insert("disable_attachments".to_string(), Value::Bool(true));
        base.insert("disable_date".to_string(), Value::Bool(true));
        base.extend(settings);

        let body = merge_settings(
            base,
            [
                (
                    "document",
                    Some(json!(self.client.action_uri(&format!("documents/{}", document_id)))),
                ),
                ("from_email", Some(json!(sender))),
                ("message", message.map(Value::from)),
                ("signers", Some(serde_json::to_value(&signers)?)),
                ("send_reminders", Some(json!(send_reminders))),
            ],
        );

        self.client
            .request_json(Method::POST, "signrequests", RequestOptions::json(body))
            .await
            .map_err(|e| e.into_send_sign_request())
    }

    /// Send a reminder to all signers who have not signed yet.
    pub async fn remind(&self, sign_request_id: &str) -> Result<JsonObject> {
        self.client
            .request_json(
                Method::POST,
                &format!("signrequests/{}/resend_signrequest_email", sign_request_id),
                RequestOptions::default(),
            )
            .await
    }

    /// Cancel a sign request.
    pub async fn cancel(&self, sign_request_id: &str) -> Result<JsonObject> {
        self.client
            .request_json(
                Method::POST,
                &format!("signrequests/{}/cancel_signrequest", sign_request_id),
                RequestOptions::default(),
            )
            .await
    }

    /// Get the current state of a sign request.
    pub async fn status(&self, sign_request_id: &str) -> Result<JsonObject> {
        self.client
            .request_json(
                Method::GET,
                &format!("signrequests/{}", sign_request_id),
                RequestOptions::default(),
            )
            .await
    }
}
