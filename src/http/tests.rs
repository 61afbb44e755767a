//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use crate::config::SCC_ACCEPT;
use crate::error::Error;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{basic_auth, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_auth(config, AuthConfig::basic("SCC_1234", "hunter2")).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.base_url, "https://scc.suse.com/connect");
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("accept"),
        Some(&SCC_ACCEPT.to_string())
    );
    assert!(config.user_agent.starts_with("scc-inventory/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://scc.example.com/connect")
        .timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, "https://scc.example.com/connect");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_invalid_base_url() {
    let config = HttpClientConfig::builder().base_url("not a url").build();
    let err = HttpClient::with_config(config).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_build_url_concatenates() {
    let config = HttpClientConfig::builder()
        .base_url("https://scc.suse.com/connect/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(
        client.build_url("/organizations/products"),
        "https://scc.suse.com/connect/organizations/products"
    );
    assert_eq!(
        client.build_url("/organizations/products?page=2"),
        "https://scc.suse.com/connect/organizations/products?page=2"
    );
    assert_eq!(
        client.build_url("repositories/installer"),
        "https://scc.suse.com/connect/repositories/installer"
    );
}

#[tokio::test]
async fn test_fetch_sends_accept_and_basic_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/products"))
        .and(header("Accept", SCC_ACCEPT))
        .and(basic_auth("SCC_1234", "hunter2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "SLES", "identifier": "SLES", "version": "15.5"},
            {"id": 2, "name": "SLED"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.fetch("/organizations/products").await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.records[0].name, "SLES");
    assert_eq!(page.records[0].version, "15.5");
    assert_eq!(page.records[1].id, 2);
}

#[tokio::test]
async fn test_fetch_returns_headers() {
    let mock_server = MockServer::start().await;
    let link = format!(
        "<{}/organizations/systems?page=3>; rel=\"last\"",
        mock_server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/organizations/systems"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .insert_header("Link", link.as_str()),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.fetch("/organizations/systems").await.unwrap();

    assert!(page.is_empty());
    assert_eq!(page.headers.get("link").unwrap(), link.as_str());
}

#[tokio::test]
async fn test_fetch_passes_query_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/subscriptions"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 9}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .fetch("/organizations/subscriptions?page=2")
        .await
        .unwrap();

    assert_eq!(page.records[0].id, 9);
}

#[tokio::test]
async fn test_fetch_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/products"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch("/organizations/products").await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Invalid credentials");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch("/organizations/products").await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_fetch_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"id\": 1,"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch("/organizations/products").await.unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_fetch_object_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "nope"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch("/organizations/products").await.unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_fetch_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client.fetch("/organizations/products").await.unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_transport_trait_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repositories/installer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "url": "https://updates.suse.com/installer", "installer_updates": true}
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let transport: &dyn Transport = &client;
    let page = transport.fetch("/repositories/installer").await.unwrap();

    assert!(page.records[0].installer_updates);
    assert_eq!(page.records[0].url, "https://updates.suse.com/installer");
}
