use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers::order::{get_order, get_orders, simulate_order, update_order};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(get_orders))
        .route("/orders/simulate", post(simulate_order))
        .route("/orders/{id}", get(get_order).patch(update_order))
}
