//! Integration tests for team management.

use serde_json::{json, Value};
use signrequest::{Client, ClientConfig, JsonObject};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GLOBAL_CLIENT_REQUIRED: &str =
    "This request cannot be sent to a subdomain. Initialize the client without a subdomain.";

fn client_for(mock_server: &MockServer, subdomain: Option<&str>) -> Client {
    Client::with_config(
        "test_token",
        ClientConfig {
            subdomain: subdomain.map(str::to_string),
            base_url: Some(format!("{}/api/v1", mock_server.uri())),
            ..Default::default()
        },
    )
    .unwrap()
}

async fn mount_no_requests(mock_server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_get_team_without_subdomain() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/test/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "test"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let team = client_for(&mock_server, None).teams().get("test").await.unwrap();

    let mut expected = JsonObject::new();
    expected.insert("name".to_string(), json!("test"));
    assert_eq!(team, expected);
}

#[tokio::test]
async fn test_get_team_with_subdomain() {
    let mock_server = MockServer::start().await;
    mount_no_requests(&mock_server).await;

    let err = client_for(&mock_server, Some("test"))
        .teams()
        .get("test")
        .await
        .unwrap_err();

    assert!(err.is_local());
    assert_eq!(err.to_string(), GLOBAL_CLIENT_REQUIRED);
}

#[tokio::test]
async fn test_create_and_update_team_with_subdomain() {
    let mock_server = MockServer::start().await;
    mount_no_requests(&mock_server).await;

    let teams = client_for(&mock_server, Some("acme")).teams();

    assert!(teams.create("Acme", "acme").await.unwrap_err().is_local());
    assert!(teams
        .update("acme", JsonObject::new())
        .await
        .unwrap_err()
        .is_local());
}

#[tokio::test]
async fn test_create_team() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/teams/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "Acme",
            "subdomain": "acme",
            "url": "https://signrequest.com/api/v1/teams/acme/"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let subdomain = client_for(&mock_server, None)
        .teams()
        .create("Acme", "acme")
        .await
        .unwrap();
    assert_eq!(subdomain.as_deref(), Some("acme"));

    let requests = mock_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({"name": "Acme", "subdomain": "acme"}));
}

#[tokio::test]
async fn test_create_team_without_subdomain_in_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/teams/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"name": "Acme"})))
        .mount(&mock_server)
        .await;

    let subdomain = client_for(&mock_server, None)
        .teams()
        .create("Acme", "acme")
        .await
        .unwrap();
    assert_eq!(subdomain, None);
}

#[tokio::test]
async fn test_create_team_failure_has_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/teams/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "subdomain": ["This subdomain is taken."]
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server, None)
        .teams()
        .create("Acme", "acme")
        .await
        .unwrap_err();

    assert!(err.is_remote());
    assert_eq!(err.status_code(), Some(400));
    assert!(err.to_string().starts_with("Unable to create team Acme: "));
    assert!(err.to_string().contains("This subdomain is taken."));
}

#[tokio::test]
async fn test_get_team_failure_has_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/ghost/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server, None)
        .teams()
        .get("ghost")
        .await
        .unwrap_err();

    assert!(err.is_remote());
    assert!(err.to_string().starts_with("Unable to get team ghost: "));
}

#[tokio::test]
async fn test_update_team_sends_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/teams/acme/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Acme B.V.",
            "subdomain": "acme"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut params = JsonObject::new();
    params.insert("name".to_string(), json!("Acme B.V."));
    params.insert("primary_color".to_string(), json!("#ff6600"));

    let team = client_for(&mock_server, None)
        .teams()
        .update("acme", params)
        .await
        .unwrap();
    assert_eq!(team["name"], "Acme B.V.");

    let requests = mock_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({"name": "Acme B.V.", "primary_color": "#ff6600"}));
}

#[tokio::test]
async fn test_update_team_failure_has_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/teams/acme/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server, None)
        .teams()
        .update("acme", JsonObject::new())
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Unable to update team acme: "));
    assert_eq!(err.status_code(), Some(403));
}
