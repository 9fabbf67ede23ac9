//! Basic usage example for the SignRequest client.
//!
//! This example demonstrates:
//! - Creating a team-scoped client
//! - Uploading a document
//! - Sending a sign request
//! - Checking the sign request status
//!
//! It lives in `demos/` rather than `examples/` and is registered as the
//! `basic` example in Cargo.toml.
//!
//! Run with:
//! ```bash
//! SIGNREQUEST_TOKEN=xxx SIGNREQUEST_SUBDOMAIN=atane SENDER=me@example.com SIGNER=you@example.com \
//!     cargo run --example basic -- contract.pdf
//! ```

use signrequest::{Client, ClientConfig, Signer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("SIGNREQUEST_TOKEN")
        .expect("SIGNREQUEST_TOKEN environment variable required");
    let sender = std::env::var("SENDER").expect("SENDER environment variable required");
    let signer = std::env::var("SIGNER").expect("SIGNER environment variable required");
    let file = std::env::args()
        .nth(1)
        .expect("usage: basic <file to sign>");

    println!("Creating SignRequest client...");
    let client = Client::with_config(
        token,
        ClientConfig {
            subdomain: std::env::var("SIGNREQUEST_SUBDOMAIN").ok(),
            default_language: Some("en".to_string()),
            ..Default::default()
        },
    )?;

    println!("\nUploading {}...", file);
    let document = client
        .documents()
        .create_from_file(&file, "basic-example", None, None, Default::default())
        .await?;

    println!("Created document:");
    println!("  UUID: {}", document.uuid);
    println!("  URL:  {}", document.url);

    println!("\nSending sign request to {}...", signer);
    let sign_request = client
        .sign_requests()
        .send(
            &document.uuid,
            &sender,
            vec![Signer::new(signer)],
            Some("Please sign this document"),
            true,
            Default::default(),
        )
        .await?;

    let id = sign_request
        .get("uuid")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    println!("Sign request: {}", id);

    let status = client.sign_requests().status(&id).await?;
    println!("Status: {}", status.get("status").unwrap_or(&serde_json::Value::Null));

    Ok(())
}
