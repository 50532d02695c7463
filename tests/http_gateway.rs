//! Integration tests for ReqwestGateway and the full Credly pipeline over HTTP.
//!
//! Uses wiremock for HTTP mocking. The gateway is blocking, so every call
//! runs inside `spawn_blocking`.

use std::time::Duration;

use certmap::client::http::MAX_BODY_BYTES;
use certmap::crypto::digest::hash_identity;
use certmap::{build_client, CertmapConfig, CertmapError, HttpGateway, ReqwestGateway};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BADGE_ID: &str = "3fae1210-0000-4000-8000-000000000000";

fn test_config(mock_server: &MockServer) -> CertmapConfig {
    CertmapConfig::credly("glpi/11.0.0", "certmap-test")
        .with_api_base(format!("{}/v1/obi/v2/", mock_server.uri()))
        .with_timeout(Duration::from_secs(5))
}

async fn get_json(config: CertmapConfig, uri: String) -> Result<Value, CertmapError> {
    tokio::task::spawn_blocking(move || {
        let gateway = ReqwestGateway::new(&config).expect("failed to create gateway");
        gateway.get_json(&uri)
    })
    .await
    .expect("blocking task panicked")
}

#[tokio::test]
async fn test_get_json_relative_path_with_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/obi/v2/badge_assertions/abc"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let value = get_json(test_config(&mock_server), "badge_assertions/abc".to_string())
        .await
        .expect("request failed");
    assert_eq!(value, json!({ "ok": true }));

    let requests = mock_server.received_requests().await.unwrap();
    let ua = requests[0].headers.get("user-agent").unwrap().to_str().unwrap();
    assert!(ua.starts_with("certmap-test/certmap-"));
    assert!(ua.ends_with(" glpi/11.0.0"));
}

#[tokio::test]
async fn test_get_json_absolute_uri_bypasses_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/classes/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "x" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = format!("{}/classes/42", mock_server.uri());
    let value = get_json(test_config(&mock_server), uri).await.expect("request failed");
    assert_eq!(value["name"], "x");
}

#[tokio::test]
async fn test_get_json_not_found_is_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = get_json(test_config(&mock_server), "badge_assertions/missing".to_string()).await;
    match result {
        Err(CertmapError::TransportFailure { uri, .. }) => {
            assert!(uri.ends_with("/v1/obi/v2/badge_assertions/missing"));
        }
        other => panic!("expected TransportFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_json_server_error_is_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let result = get_json(test_config(&mock_server), "badge_assertions/x".to_string()).await;
    assert!(matches!(result, Err(CertmapError::TransportFailure { .. })));
}

#[tokio::test]
async fn test_get_json_html_body_is_unexpected_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Sign in</html>"))
        .mount(&mock_server)
        .await;

    let result = get_json(test_config(&mock_server), "badge_assertions/x".to_string()).await;
    match result {
        Err(CertmapError::UnexpectedResponseShape { message, .. }) => {
            assert!(message.contains("<html>Sign in</html>"));
        }
        other => panic!("expected UnexpectedResponseShape, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_json_empty_body_is_unexpected_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&mock_server)
        .await;

    let result = get_json(test_config(&mock_server), "badge_assertions/x".to_string()).await;
    assert!(
        matches!(result, Err(CertmapError::UnexpectedResponseShape { .. })),
        "got {:?}",
        result
    );
}

#[tokio::test]
async fn test_get_json_truncated_body_is_unexpected_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"issuedOn":"#))
        .mount(&mock_server)
        .await;

    let result = get_json(test_config(&mock_server), "badge_assertions/x".to_string()).await;
    match result {
        Err(CertmapError::UnexpectedResponseShape { message, .. }) => {
            assert!(message.contains("issuedOn"));
        }
        other => panic!("expected UnexpectedResponseShape, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_json_oversized_body_is_rejected() {
    let mock_server = MockServer::start().await;

    // Valid JSON, so only the size limit can reject it.
    let body = format!("\"{}\"", "a".repeat(MAX_BODY_BYTES as usize));
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let result = get_json(test_config(&mock_server), "badge_assertions/x".to_string()).await;
    match result {
        Err(CertmapError::UnexpectedResponseShape { message, .. }) => {
            assert!(message.contains("exceeds"));
        }
        other => panic!("expected UnexpectedResponseShape, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_json_timeout_is_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server).with_timeout(Duration::from_millis(200));
    let result = get_json(config, "badge_assertions/slow".to_string()).await;
    assert!(matches!(result, Err(CertmapError::TransportFailure { .. })));
}

#[tokio::test]
async fn test_get_json_connection_refused_is_transport_failure() {
    let config = CertmapConfig::credly("glpi/11.0.0", "certmap-test")
        .with_api_base("http://127.0.0.1:1/v1/obi/v2/")
        .with_timeout(Duration::from_secs(2));

    let result = get_json(config, "badge_assertions/x".to_string()).await;
    assert!(matches!(result, Err(CertmapError::TransportFailure { .. })));
}

async fn mount_badge(mock_server: &MockServer, recipient_email: &str, class_calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/obi/v2/badge_assertions/{}", BADGE_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issuedOn": "2024-01-01T00:00:00Z",
            "expires": "2027-01-01T00:00:00Z",
            "recipient": { "identity": hash_identity(recipient_email), "hashed": true },
            "badge": format!("{}/classes/42", mock_server.uri())
        })))
        .expect(1)
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/classes/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Cloud Practitioner",
            "issuer": { "name": "ExampleCorp" },
            "description": "...",
            "image": { "id": "img-1" },
            "tags": ["cloud", "entry-level"]
        })))
        .expect(class_calls)
        .mount(mock_server)
        .await;
}

async fn fetch(config: CertmapConfig, email: &'static str) -> Option<certmap::BadgeRecord> {
    tokio::task::spawn_blocking(move || {
        let client = build_client(&config).expect("failed to build client");
        let url = format!("https://www.credly.com/badges/{}/public_url", BADGE_ID);
        client.fetch_badge(&url, email)
    })
    .await
    .expect("blocking task panicked")
}

#[tokio::test]
async fn test_fetch_badge_over_http() {
    let mock_server = MockServer::start().await;
    mount_badge(&mock_server, "alice@example.com", 1).await;

    let record = fetch(test_config(&mock_server), "alice@example.com")
        .await
        .expect("expected a record");

    assert_eq!(record.name, "Cloud Practitioner");
    assert_eq!(record.issuer, "ExampleCorp");
    assert_eq!(record.external_id, BADGE_ID);
    assert_eq!(record.issued_at, "2024-01-01T00:00:00Z");
    assert_eq!(record.image_url.as_deref(), Some("img-1"));
    assert_eq!(record.tags, vec!["cloud", "entry-level"]);
    assert_eq!(record.expires_at.as_deref(), Some("2027-01-01T00:00:00Z"));
}

#[tokio::test]
async fn test_fetch_badge_wrong_email_never_requests_class() {
    let mock_server = MockServer::start().await;
    mount_badge(&mock_server, "alice@example.com", 0).await;

    let record = fetch(test_config(&mock_server), "mallory@example.com").await;
    assert!(record.is_none());
}
