//! Order status edits and simulated BSS ingestion.

mod common;

use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_malformed_payload_is_rejected() {
    let app = setup_test_app();
    let token = login(&app, "O2 Admin").await;

    let (status, body) = send_raw(
        &app,
        "POST",
        "/orders/simulate",
        Some(&token),
        Some("{ \"customerId\": ".into()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON payload");

    let (_, orders) = send(&app, "GET", "/orders", Some(&token), None).await;
    assert_eq!(orders.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_simulated_order_starts_new() {
    let app = setup_test_app();
    let token = login(&app, "O2 Super Admin").await;

    let (status, order) = send(
        &app,
        "POST",
        "/orders/simulate",
        Some(&token),
        Some(json!({
            "customerId": "CUST-004",
            "customerName": "Innovation Corp",
            "productId": "PROD-001",
            "productName": "O2 Business Connect Pro",
            "quantity": 3,
            "totalAmount": 899.97,
            "fulfillmentData": { "installationDate": "2024-02-01" }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["id"], format!("ORD-{}-004", Utc::now().year()));
    assert_eq!(order["status"], "new");
    assert_eq!(order["customer_name"], "Innovation Corp");
    assert_eq!(order["quantity"], 3);
    assert_eq!(order["fulfillment_data"]["installationDate"], "2024-02-01");

    let (_, orders) = send(&app, "GET", "/orders", Some(&token), None).await;
    assert_eq!(orders[0]["id"], order["id"]);

    let (_, feed) = send(&app, "GET", "/notifications", Some(&token), None).await;
    assert_eq!(feed["notifications"][0]["title"], "New Order Received");
}

#[tokio::test]
async fn test_empty_payload_gets_defaults() {
    let app = setup_test_app();
    let token = login(&app, "O2 Admin").await;

    let (status, order) = send(&app, "POST", "/orders/simulate", Some(&token), Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["customer_id"], "CUST-NEW");
    assert_eq!(order["product_name"], "Default Product");
    assert_eq!(order["quantity"], 1);
    assert_eq!(order["total_amount"], 0.0);
}

#[tokio::test]
async fn test_only_o2_admins_simulate_orders() {
    let app = setup_test_app();
    for role in ["Partner Admin", "O2 Partner Manager"] {
        let token = login(&app, role).await;
        let (status, _) = send(&app, "POST", "/orders/simulate", Some(&token), Some(json!({}))).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{role}");
    }
}

#[tokio::test]
async fn test_status_edits_are_free_form() {
    let app = setup_test_app();
    let token = login(&app, "O2 Admin").await;

    for status in ["processing", "fulfilled", "new", "cancelled", "processing"] {
        let (code, order) = send(
            &app,
            "PATCH",
            "/orders/ORD-2024-001",
            Some(&token),
            Some(json!({ "status": status })),
        )
        .await;
        assert_eq!(code, StatusCode::OK);
        assert_eq!(order["status"], status);
    }

    let (code, _) = send(
        &app,
        "PATCH",
        "/orders/ORD-2024-001",
        Some(&token),
        Some(json!({ "status": "shipped" })),
    )
    .await;
    assert!(code.is_client_error());
}

#[tokio::test]
async fn test_fulfillment_notes_are_saved() {
    let app = setup_test_app();
    let token = login(&app, "O2 Admin").await;

    let (_, before) = send(&app, "GET", "/orders/ORD-2024-003", Some(&token), None).await;
    let (code, order) = send(
        &app,
        "PATCH",
        "/orders/ORD-2024-003",
        Some(&token),
        Some(json!({ "fulfillment_notes": "Engineer booked for Tuesday" })),
    )
    .await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(order["fulfillment_notes"], "Engineer booked for Tuesday");
    assert_eq!(order["status"], "new");
    assert_ne!(order["updated_at"], before["updated_at"]);

    let (code, _) = send(&app, "PATCH", "/orders/ORD-2024-003", Some(&token), Some(json!({}))).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_order_status_filter() {
    let app = setup_test_app();
    let token = login(&app, "O2 Partner Manager").await;

    let (_, body) = send(&app, "GET", "/orders?status=processing", Some(&token), None).await;
    assert_eq!(ids(&body), vec!["ORD-2024-002"]);
}

#[tokio::test]
async fn test_partner_admin_sees_orders_for_own_products() {
    let app = setup_test_app();
    let token = login(&app, "Partner Admin").await;

    let (_, body) = send(&app, "GET", "/orders", Some(&token), None).await;
    assert_eq!(ids(&body), vec!["ORD-2024-001"]);

    let (status, _) = send(&app, "GET", "/orders/ORD-2024-003", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "PATCH",
        "/orders/ORD-2024-003",
        Some(&token),
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
