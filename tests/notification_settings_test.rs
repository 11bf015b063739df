//! Bell-menu feed and the Partner Admin API settings.

mod common;

use axum::http::StatusCode;
use common::*;

#[tokio::test]
async fn test_feed_marks_read() {
    let app = setup_test_app();
    let token = login(&app, "O2 Admin").await;

    let (_, feed) = send(&app, "GET", "/notifications", Some(&token), None).await;
    assert_eq!(feed["unread_count"], 3);
    assert_eq!(feed["notifications"][0]["title"], "New Order Received");

    let first = feed["notifications"][0]["id"].as_str().unwrap().to_string();
    let (status, _) = send(&app, "POST", &format!("/notifications/{first}/read"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, feed) = send(&app, "GET", "/notifications", Some(&token), None).await;
    assert_eq!(feed["unread_count"], 2);
    assert_eq!(feed["notifications"][0]["is_read"], true);

    let (status, _) = send(&app, "POST", "/notifications/missing/read", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "POST", "/notifications/read-all", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, feed) = send(&app, "GET", "/notifications", Some(&token), None).await;
    assert_eq!(feed["unread_count"], 0);
    assert_eq!(feed["notifications"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_api_key_lifecycle() {
    let app = setup_test_app();
    let token = login(&app, "Partner Admin").await;

    let (_, settings) = send(&app, "GET", "/settings", Some(&token), None).await;
    assert!(settings["api_access"]["api_key"].is_null());
    assert_eq!(settings["api_access"]["activity"].as_array().unwrap().len(), 5);

    let (status, created) = send(&app, "POST", "/settings/api-key", Some(&token), None).await;
    assert_eq!(status, StatusCode::CREATED);
    let key = created["api_key"].as_str().unwrap().to_string();
    assert!(key.starts_with("pk_"));

    let (_, settings) = send(&app, "GET", "/settings", Some(&token), None).await;
    let masked = settings["api_access"]["api_key"].as_str().unwrap();
    assert_eq!(masked, format!("{}{}{}", &key[..8], "*".repeat(20), &key[key.len() - 4..]));

    let (status, _) = send(&app, "DELETE", "/settings/api-key", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", "/settings/api-key", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_o2_roles_have_no_api_access() {
    let app = setup_test_app();
    let token = login(&app, "O2 Admin").await;

    let (status, settings) = send(&app, "GET", "/settings", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings["profile"]["name"], "Sarah Johnson");
    assert!(settings.get("api_access").is_none());

    let (status, _) = send(&app, "POST", "/settings/api-key", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_api_docs_list_partner_endpoints() {
    let app = setup_test_app();
    let token = login(&app, "Partner Admin").await;

    let (status, docs) = send(&app, "GET", "/api-docs", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let endpoints = docs["endpoints"].as_array().unwrap();
    assert_eq!(endpoints.len(), 5);
    assert_eq!(endpoints[4]["method"], "PATCH");
}
