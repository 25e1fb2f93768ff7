/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for blockfacts-adapter tests

#![allow(dead_code)]

use blockfacts_adapter::{ClientConfig, Credentials, RestClient};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// REST base URL on the mock server, keeping the production `/api/v1/` prefix
pub fn base_url(server: &MockServer) -> String {
    format!("{}/api/v1/", server.uri())
}

/// Facade client pointed at the mock server
pub fn rest_client(server: &MockServer, key: &str, secret: &str) -> RestClient {
    RestClient::with_config_and_base_url(
        ClientConfig::default(),
        Credentials::new(key, secret),
        &base_url(server),
    )
    .expect("client init")
}

/// Answer every GET with a small JSON body
pub async fn mount_ok(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .mount(server)
        .await;
}

/// Path and raw query string of every request the server has seen, in order
pub async fn request_targets(server: &MockServer) -> Vec<(String, Option<String>)> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .map(|request| {
            (
                request.url.path().to_string(),
                request.url.query().map(str::to_string),
            )
        })
        .collect()
}

/// Assert the single recorded request hit `path` with exactly `query`
pub async fn assert_single_request(server: &MockServer, path: &str, query: Option<&str>) {
    let targets = request_targets(server).await;
    assert_eq!(targets.len(), 1, "expected one request, saw {targets:?}");
    assert_eq!(targets[0].0, path);
    assert_eq!(targets[0].1.as_deref(), query);
}
