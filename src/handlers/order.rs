use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::auth::roles::{Section, UserRole};
use crate::dtos::order::{OrderQuery, SimulatedOrder, UpdateOrderRequest};
use crate::dtos::parse_enum_filter;
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::notification::NotificationType;
use crate::models::order::{Order, OrderStatus};
use crate::state::AppState;
use crate::store::Store;

/// Partner Admins see orders placed for products their company sources.
pub(crate) fn visible_to(store: &Store, auth: &AuthContext, order: &Order) -> bool {
    auth.role != UserRole::PartnerAdmin
        || store.order_source_partner(order) == Some(auth.company_name.as_str())
}

// GET /orders
#[instrument(skip(state, auth))]
pub async fn get_orders(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<Vec<Order>>, AppError> {
    auth.require(Section::Orders)?;
    let status: Option<OrderStatus> = parse_enum_filter(query.status.as_deref(), "status")?;

    let store = state.store.read().await;
    let orders = store
        .orders
        .iter()
        .filter(|o| visible_to(&store, &auth, o))
        .filter(|o| status.map_or(true, |s| o.status == s))
        .cloned()
        .collect();

    Ok(Json(orders))
}

// GET /orders/:id
pub async fn get_order(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Order>, AppError> {
    auth.require(Section::Orders)?;

    let store = state.store.read().await;
    let order = store.order(&id)?;
    if !visible_to(&store, &auth, order) {
        return Err(AppError::not_found("Order not found"));
    }

    Ok(Json(order.clone()))
}

// PATCH /orders/:id - Change status and/or fulfillment notes
#[instrument(skip(state, auth, payload))]
pub async fn update_order(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<UpdateOrderRequest>,
) -> Result<Json<Order>, AppError> {
    auth.require(Section::Orders)?;
    if payload.status.is_none() && payload.fulfillment_notes.is_none() {
        return Err(AppError::validation("Nothing to update"));
    }

    let mut store = state.store.write().await;
    let visible = visible_to(&store, &auth, store.order(&id)?);
    if !visible {
        return Err(AppError::not_found("Order not found"));
    }

    let now = Utc::now();
    let order = store.order_mut(&id)?;
    if let Some(status) = payload.status {
        info!(order_id = %id, from = ?order.status, to = ?status, "Order status changed");
        order.set_status(status, now);
    }
    if let Some(notes) = payload.fulfillment_notes {
        order.set_notes(notes, now);
    }

    Ok(Json(order.clone()))
}

// POST /orders/simulate - Inject an order as if BSS had sent it
#[instrument(skip(state, auth, body))]
pub async fn simulate_order(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    body: String,
) -> Result<(StatusCode, Json<Order>), AppError> {
    auth.require(Section::Orders)?;
    auth.require_o2_admin("simulate order ingestion")?;

    let payload: Value = serde_json::from_str(&body).map_err(|e| {
        warn!(error = %e, "Rejected simulated order payload");
        AppError::validation("Invalid JSON payload")
    })?;
    let inbound = SimulatedOrder::from_value(&payload);

    let now = Utc::now();
    let mut store = state.store.write().await;
    let order = Order {
        id: store.next_order_id(now),
        customer_id: inbound.customer_id,
        customer_name: inbound.customer_name,
        product_id: inbound.product_id,
        product_name: inbound.product_name,
        quantity: inbound.quantity,
        total_amount: inbound.total_amount,
        status: OrderStatus::New,
        created_at: now,
        updated_at: now,
        fulfillment_data: inbound.fulfillment_data,
        fulfillment_notes: None,
        partner_id: None,
    };
    store.insert_order(order.clone());
    store.notifications.push(
        "New Order Received",
        format!("Order {} from {}", order.id, order.customer_name),
        NotificationType::Info,
    );

    info!(order_id = %order.id, "Simulated BSS order ingested");
    Ok((StatusCode::CREATED, Json(order)))
}
