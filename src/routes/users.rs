use axum::{Router, routing::{post, get}};
use crate::state::AppState;
use crate::handlers::user::{login_user, get_me};

pub fn open_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login_user))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(get_me))
}
