//! Team management operations.
//!
//! Teams are managed through the global API, so every call here fails with
//! [`SignRequestError::Local`](crate::SignRequestError::Local) on a client
//! configured with a subdomain.

use crate::client::Client;
use crate::error::Result;
use crate::transport::RequestOptions;
use crate::types::JsonObject;
use reqwest::Method;
use serde_json::{json, Value};

/// Client for team management operations.
///
/// Access via `client.teams()`.
pub struct TeamsClient {
    client: Client,
}

impl TeamsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a team and return its subdomain.
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
    ///     if let Some(subdomain) = client.teams().create("Atane", "atane").await? {
    ///         println!("Team available at {}", subdomain);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, name: &str, subdomain: &str) -> Result<Option<String>> {
        self.client.assert_global_client()?;

        let body = json!({
            "name": name,
            "subdomain": subdomain,
        });

        let response = self
            .client
            .request_json(Method::POST, "teams", RequestOptions::json(body))
            .await
            .map_err(|e| e.with_context(format!("Unable to create team {}", name)))?;

        Ok(response
            .get("subdomain")
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    /// Get a team by subdomain.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, subdomain: &str) -> Result<JsonObject> {
        self.client.assert_global_client()?;

        self.client
            .request_json(
                Method::GET,
                &format!("teams/{}", subdomain),
                RequestOptions::default(),
            )
            .await
            .map_err(|e| e.with_context(format!("Unable to get team {}", subdomain)))
    }

    /// Update a team.
    ///
    /// # Arguments
    ///
    /// * `subdomain` - Subdomain of the team
    /// * `params` - Fields to change, such as `name`, `logo`, `phone` or
    ///   `primary_color`. Sent as the request body.
    #[tracing::instrument(skip(self, params))]
    pub async fn update(&self, subdomain: &str, params: JsonObject) -> Result<JsonObject> {
        self.client.assert_global_client()?;

        self.client
            .request_json(
                Method::POST,
                &format!("teams/{}", subdomain),
                RequestOptions::json(Value::Object(params)),
            )
            .await
            .map_err(|e| e.with_context(format!("Unable to update team {}", subdomain)))
    }
}
