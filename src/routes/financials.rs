use axum::{routing::{get, post}, Router};
use crate::handlers::financial::{get_financials, mark_payout_paid};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/financials", get(get_financials))
        .route("/financials/{partner_id}/mark-paid", post(mark_payout_paid))
}
