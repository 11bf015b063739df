use axum::{routing::{get, post}, Router};
use crate::handlers::settings::{generate_api_key, get_api_docs, get_settings, revoke_api_key};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(get_settings))
        .route("/settings/api-key", post(generate_api_key).delete(revoke_api_key))
        .route("/api-docs", get(get_api_docs))
}
