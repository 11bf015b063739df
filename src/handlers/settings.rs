use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;
use tracing::info;

use crate::auth::roles::{mock_user, Section, UserRole};
use crate::dtos::settings::{
    ApiAccess, ApiDocsResponse, ApiEndpointDoc, ApiKeyResponse, SettingsResponse,
};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::settings::ApiKey;
use crate::state::AppState;

// GET /settings
pub async fn get_settings(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<SettingsResponse>, AppError> {
    auth.require(Section::Settings)?;

    let api_access = if auth.role == UserRole::PartnerAdmin {
        let store = state.store.read().await;
        Some(ApiAccess {
            api_key: store.api_keys.get(&auth.user_id).map(ApiKey::masked),
            activity: store.api_activity.clone(),
        })
    } else {
        None
    };

    Ok(Json(SettingsResponse { profile: mock_user(auth.role), api_access }))
}

// POST /settings/api-key - Replaces any existing key; the full key is shown once
pub async fn generate_api_key(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<(StatusCode, Json<ApiKeyResponse>), AppError> {
    auth.require(Section::ApiAutomation)?;

    let key = ApiKey::generate(Utc::now());
    let response = ApiKeyResponse { api_key: key.key.clone(), created_at: key.created_at };
    state.store.write().await.api_keys.insert(auth.user_id.clone(), key);

    info!(user_id = %auth.user_id, "API key generated");
    Ok((StatusCode::CREATED, Json(response)))
}

// DELETE /settings/api-key
pub async fn revoke_api_key(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<StatusCode, AppError> {
    auth.require(Section::ApiAutomation)?;

    if state.store.write().await.api_keys.remove(&auth.user_id).is_none() {
        return Err(AppError::not_found("No API key to revoke"));
    }

    info!(user_id = %auth.user_id, "API key revoked");
    Ok(StatusCode::NO_CONTENT)
}

// GET /api-docs - Static description of the Partner API
pub async fn get_api_docs(
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<ApiDocsResponse>, AppError> {
    auth.require(Section::ApiAutomation)?;

    Ok(Json(ApiDocsResponse {
        base_url: "https://api.o2business.com",
        authentication: "Authorization: Bearer <api key>",
        endpoints: vec![
            ApiEndpointDoc {
                method: "GET",
                path: "/api/v1/products",
                description: "Retrieve all products for your partner account",
                response: "Array of product objects",
            },
            ApiEndpointDoc {
                method: "POST",
                path: "/api/v1/products",
                description: "Create a new product",
                response: "Created product object",
            },
            ApiEndpointDoc {
                method: "GET",
                path: "/api/v1/orders",
                description: "Retrieve orders for your products",
                response: "Array of order objects",
            },
            ApiEndpointDoc {
                method: "POST",
                path: "/api/v1/orders",
                description: "Create a new order (for BSS integration)",
                response: "Created order object",
            },
            ApiEndpointDoc {
                method: "PATCH",
                path: "/api/v1/orders/{id}",
                description: "Update order status and fulfillment data",
                response: "Updated order object",
            },
        ],
    }))
}
