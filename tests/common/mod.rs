#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use partnerhub_backend::{app, config::AppConfig, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const SYNC_DELAY: Duration = Duration::from_millis(40);

pub fn setup_test_app() -> Router {
    let mut config = AppConfig::with_secret("test-secret");
    config.sync_delay = SYNC_DELAY;
    app(AppState::new(config))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let raw = body.map(|b| b.to_string());
    send_raw(app, method, uri, token, raw).await
}

pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<String>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(format!("/api/v1{uri}"))
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, value)
}

pub async fn login(app: &Router, role: &str) -> String {
    let (status, body) = send(app, "POST", "/auth/login", None, Some(json!({ "role": role }))).await;
    assert_eq!(status, StatusCode::OK, "login as {role} failed: {body}");
    body["access_token"].as_str().unwrap().to_string()
}

pub fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}
