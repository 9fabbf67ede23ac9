//! Document operations.
//!
//! This module provides the DocumentsClient for uploading documents to be
//! signed, attaching files to them, and reading documents and templates back.

use crate::client::Client;
use crate::error::Result;
use crate::request::{encode_file_contents, merge_settings};
use crate::transport::RequestOptions;
use crate::types::{decode_created_document, CreatedDocument, JsonObject};
use reqwest::Method;
use serde_json::{json, Value};
use std::path::Path;

/// Client for document operations.
///
/// Access via `client.documents()`.
///
/// Remote failures of the create and attachment calls are reported as
/// [`SignRequestError::SendSignRequest`](crate::SignRequestError::SendSignRequest).
pub struct DocumentsClient {
    client: Client,
}

impl DocumentsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Upload a local file as a new document.
    ///
    /// # Arguments
    ///
    /// * `path` - File to upload
    /// * `identifier` - Your own identifier, sent as `external_id`
    /// * `callback_url` - URL notified of document events
    /// * `filename` - Name shown to signers (default: the file's name)
    /// * `settings` - Additional document fields
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use signrequest::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("token")?;
    ///
    ///     let document = client
    ///         .documents()
    ///         .create_from_file("contract.pdf", "contract-42", None, None, Default::default())
    ///         .await?;
    ///     println!("Created {} ({})", document.uuid, document.url);
    ///     Ok(())
    /// }
    /// ```
    #[tracing::instrument(skip(self, path, settings), fields(path = %path.as_ref().display()))]
    pub async fn create_from_file(
        &self,
        path: impl AsRef<Path>,
        identifier: &str,
        callback_url: Option<&str>,
        filename: Option<&str>,
        settings: JsonObject,
    ) -> Result<CreatedDocument> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path).await?;
        let filename = filename
            .map(str::to_string)
            .unwrap_or_else(|| file_name(path));

        self.create_from_contents(&contents, identifier, callback_url, Some(&filename), settings)
            .await
    }

    /// Upload raw file contents as a new document.
    ///
    /// # Arguments
    ///
    /// * `contents` - Raw file bytes
    /// * `identifier` - Your own identifier, sent as `external_id`
    /// * `callback_url` - URL notified of document events
    /// * `filename` - Name shown to signers
    /// * `settings` - Additional document fields accepted by the API
    #[tracing::instrument(skip(self, contents, settings), fields(size = contents.len()))]
    pub async fn create_from_contents(
        &self,
        contents: &[u8],
        identifier: &str,
        callback_url: Option<&str>,
        filename: Option<&str>,
        settings: JsonObject,
    ) -> Result<CreatedDocument> {
        let body = merge_settings(
            settings,
            [
                ("file_from_content", Some(json!(encode_file_contents(contents)))),
                ("file_from_content_name", filename.map(Value::from)),
                ("external_id", Some(json!(identifier))),
                ("events_callback_url", callback_url.map(Value::from)),
            ],
        );

        self.create(body).await
    }

    /// Create a document from a file the API downloads from `url`.
    #[tracing::instrument(skip(self, settings))]
    pub async fn create_from_url(
        &self,
        url: &str,
        identifier: &str,
        callback_url: Option<&str>,
        settings: JsonObject,
    ) -> Result<CreatedDocument> {
        let body = merge_settings(
            settings,
            [
                ("file_from_url", Some(json!(url))),
                ("external_id", Some(json!(identifier))),
                ("events_callback_url", callback_url.map(Value::from)),
            ],
        );

        self.create(body).await
    }

    /// Create a document from a template.
    ///
    /// # Arguments
    ///
    /// * `template_url` - API URL of the template
    /// * `identifier` - Optional identifier, sent as `external_id`
    /// * `callback_url` - URL notified of document events
    /// * `settings` - Additional document fields
    #[tracing::instrument(skip(self, settings))]
    pub async fn create_from_template(
        &self,
        template_url: &str,
        identifier: Option<&str>,
        callback_url: Option<&str>,
        settings: JsonObject,
    ) -> Result<CreatedDocument> {
        let body = merge_settings(
            settings,
            [
                ("template", Some(json!(template_url))),
                ("external_id", identifier.map(Value::from)),
                ("events_callback_url", callback_url.map(Value::from)),
            ],
        );

        self.create(body).await
    }

    /// Attach a local file to a created document.
    ///
    /// `filename` defaults to the file's name.
    #[tracing::instrument(skip(self, path, document), fields(path = %path.as_ref().display(), document = %document.uuid))]
    pub async fn add_attachment_from_file(
        &self,
        path: impl AsRef<Path>,
        document: &CreatedDocument,
        filename: Option<&str>,
    ) -> Result<JsonObject> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path).await?;
        let filename = filename
            .map(str::to_string)
            .unwrap_or_else(|| file_name(path));

        self.add_attachment(&contents, document, &filename).await
    }

    /// Attach raw file contents to a created document.
    #[tracing::instrument(skip(self, contents, document), fields(size = contents.len(), document = %document.uuid))]
    pub async fn add_attachment(
        &self,
        contents: &[u8],
        document: &CreatedDocument,
        filename: &str,
    ) -> Result<JsonObject> {
        let body = json!({
            "file_from_content_name": filename,
            "file_from_content": encode_file_contents(contents),
            "document": document.url,
        });

        self.client
            .request_json(Method::POST, "document-attachments", RequestOptions::json(body))
            .await
            .map_err(|e| e.into_send_sign_request())
    }

    /// Get a document by UUID.
    pub async fn get(&self, document_id: &str) -> Result<JsonObject> {
        self.client
            .request_json(
                Method::GET,
                &format!("documents/{}", document_id),
                RequestOptions::default(),
            )
            .await
    }

    /// List the templates of the team.
    pub async fn templates(&self) -> Result<JsonObject> {
        self.client
            .request_json(Method::GET, "templates", RequestOptions::default())
            .await
    }

    async fn create(&self, body: Value) -> Result<CreatedDocument> {
        let response = self
            .client
            .request(Method::POST, "documents", RequestOptions::json(body))
            .await
            .map_err(|e| e.into_send_sign_request())?;

        decode_created_document(&response.body)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
