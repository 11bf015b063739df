use axum::{routing::get, Router};
use crate::handlers::partner::{
    get_partner, get_partners, get_sub_partners, onboard_partner, onboard_sub_partner,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/partners", get(get_partners).post(onboard_partner))
        .route("/partners/{id}", get(get_partner))
        .route("/sub-partners", get(get_sub_partners).post(onboard_sub_partner))
}
