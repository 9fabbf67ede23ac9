//! # SignRequest Rust client
//!
//! Client for the [SignRequest](https://signrequest.com) document signing API.
//!
//! Upload a document, ask one or more signers to sign it and follow the
//! sign request until it is completed. Team management is available on
//! clients without a subdomain.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use signrequest::{Client, ClientConfig, Signer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Requests go to https://atane.signrequest.com/api/v1
//!     let client = Client::with_config("token", ClientConfig {
//!         subdomain: Some("atane".to_string()),
//!         ..Default::default()
//!     })?;
//!
//!     let document = client
//!         .documents()
//!         .create_from_file("contract.pdf", "contract-42", None, None, Default::default())
//!         .await?;
//!
//!     let sign_request = client
//!         .sign_requests()
//!         .send(
//!             &document.uuid,
//!             "sender@example.com",
//!             vec![Signer::new("jan@example.com")],
//!             Some("Please sign the contract"),
//!             true,
//!             Default::default(),
//!         )
//!         .await?;
//!
//!     println!("Sign request: {}", sign_request["uuid"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, SignRequestError>`:
//!
//! ```rust,no_run
//! use signrequest::{Client, SignRequestError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("token")?;
//!
//!     match client.documents().create_from_url("https://example.com/a.pdf", "a", None, Default::default()).await {
//!         Ok(document) => println!("Created {}", document.uuid),
//!         Err(SignRequestError::SendSignRequest { message, code, .. }) => {
//!             println!("Upload rejected ({:?}): {}", code, message)
//!         }
//!         Err(e) => println!("Error: {}", e),
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod documents;
pub mod error;
pub mod request;
pub mod signrequests;
pub mod teams;
pub mod transport;
pub mod types;

// Re-export main types at the crate root
pub use client::{Client, ClientConfig, DEFAULT_LANGUAGE};
pub use error::{Result, SignRequestError};
pub use transport::{ReqwestTransport, RequestOptions, Transport, TransportError, TransportResponse};
pub use types::{decode_created_document, CreatedDocument, JsonObject, Signer};
