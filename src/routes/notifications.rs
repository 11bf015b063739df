use axum::{routing::{get, post}, Router};
use crate::handlers::notification::{
    get_notifications, mark_all_notifications_read, mark_notification_read,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(get_notifications))
        .route("/notifications/read-all", post(mark_all_notifications_read))
        .route("/notifications/{id}/read", post(mark_notification_read))
}
