pub mod dashboard;
pub mod financials;
pub mod notifications;
pub mod orders;
pub mod partners;
pub mod products;
pub mod settings;
pub mod users;

use axum::{middleware, Router};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(users::routes())
        .merge(dashboard::routes())
        .merge(products::routes())
        .merge(orders::routes())
        .merge(partners::routes())
        .merge(financials::routes())
        .merge(notifications::routes())
        .merge(settings::routes())
        .layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .merge(users::open_routes())
        .merge(protected)
}
