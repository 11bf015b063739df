use axum::{extract::{Path, State}, http::StatusCode, Json};

use crate::dtos::notification::NotificationListResponse;
use crate::error::AppError;
use crate::state::AppState;

// GET /notifications
pub async fn get_notifications(State(state): State<AppState>) -> Json<NotificationListResponse> {
    let store = state.store.read().await;
    Json(NotificationListResponse {
        unread_count: store.notifications.unread_count(),
        notifications: store.notifications.all().to_vec(),
    })
}

// POST /notifications/:id/read
pub async fn mark_notification_read(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.write().await;
    if !store.notifications.mark_read(&id) {
        return Err(AppError::not_found("Notification not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// POST /notifications/read-all
pub async fn mark_all_notifications_read(State(state): State<AppState>) -> StatusCode {
    state.store.write().await.notifications.mark_all_read();
    StatusCode::NO_CONTENT
}
