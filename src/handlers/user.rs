use axum::{extract::State, Json};
use axum::extract::Extension;
use tracing::{info, instrument};

use crate::auth::jwt::sign_token;
use crate::auth::roles::mock_user;
use crate::dtos::user::{LoginRequest, LoginResponse, MeResponse};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

// POST /auth/login - Sign in as the fixed user of the chosen role
#[instrument(skip(state, payload), fields(role = %payload.role))]
pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = mock_user(payload.role);
    let ttl_hours = state.config.token_ttl_hours;
    let token = sign_token(user.id, user.role, user.name, &state.config.jwt_secret, ttl_hours)?;

    info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "Bearer",
        expires_in_seconds: ttl_hours.saturating_mul(60 * 60),
        user,
    }))
}

// GET /auth/me - Profile of the caller plus the sections their role may open
pub async fn get_me(Extension(auth): Extension<AuthContext>) -> Json<MeResponse> {
    Json(MeResponse {
        user: mock_user(auth.role),
        navigation: auth.role.navigation(),
    })
}
