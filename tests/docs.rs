use std::sync::Arc;

use axum_test::TestServer;
use lingo::utils::clock::SystemClock;
use lingo::{Config, build_server_with_state, build_state};

fn server_with(config: &str) -> TestServer {
    let config = Config::from_slice(config.as_bytes()).unwrap();
    let state = build_state(&config, Arc::new(SystemClock)).unwrap();
    TestServer::new(build_server_with_state(state, &config)).unwrap()
}

#[tokio::test]
async fn openapi_served_when_enabled() {
    let server = server_with("[app]\ndocs = true\n");

    let resp = server.get("/api-doc/openapi.json").await;
    resp.assert_status_ok();
    let doc = resp.json::<serde_json::Value>();
    assert!(doc["paths"]["/api/complete-lesson"].is_object());
}

#[tokio::test]
async fn openapi_hidden_by_default() {
    let server = server_with("[app]\ndocs = false\n");

    server.get("/api-doc/openapi.json").await.assert_status_not_found();
}
