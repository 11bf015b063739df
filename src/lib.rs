// src/lib.rs
pub mod auth;
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod sync;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const API_BASE_PATH: &str = "/api/v1";

/// Full application router, mounted under `/api/v1`.
pub fn app(state: AppState) -> Router {
    let api = routes::create_router(state.clone())
        .route("/", get(root))
        .route("/health", get(health_check));

    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Nesting only matches the bare prefix, so the trailing-slash form is routed explicitly.
    Router::new()
        .route(&format!("{API_BASE_PATH}/"), get(root))
        .nest(API_BASE_PATH, api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    "Partner Hub API"
}

async fn health_check() -> &'static str {
    "OK"
}
