use serde::Serialize;

use crate::models::notification::Notification;

#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub unread_count: usize,
    pub notifications: Vec<Notification>,
}
