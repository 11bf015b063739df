use serde::Serialize;
use chrono::{DateTime, Utc};

use crate::auth::roles::MockUser;
use crate::models::settings::ApiActivity;

#[derive(Serialize)]
pub struct SettingsResponse {
    pub profile: MockUser,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_access: Option<ApiAccess>,
}

#[derive(Serialize)]
pub struct ApiAccess {
    /// Masked; the full key is only returned when it is generated.
    pub api_key: Option<String>,
    pub activity: Vec<ApiActivity>,
}

#[derive(Serialize)]
pub struct ApiKeyResponse {
    pub api_key: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ApiEndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub response: &'static str,
}

#[derive(Serialize)]
pub struct ApiDocsResponse {
    pub base_url: &'static str,
    pub authentication: &'static str,
    pub endpoints: Vec<ApiEndpointDoc>,
}
