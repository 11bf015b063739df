use axum::{response::{Response, IntoResponse}};
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use http::header::AUTHORIZATION;
use serde::Serialize;

use crate::auth::jwt::verify_token;
use crate::auth::roles::{mock_user, Section, UserRole};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: String,
    pub role: UserRole,
    pub username: String,
    pub company_name: String,
    /// Set for Partner Admins: the umbrella partner they administer.
    pub partner_id: Option<String>,
}

impl AuthContext {
    pub fn require(&self, section: Section) -> Result<(), AppError> {
        if self.role.can_access(section) {
            Ok(())
        } else {
            tracing::warn!(role = %self.role, ?section, "Section access denied");
            Err(AppError::forbidden(format!("{} cannot access this section", self.role)))
        }
    }

    pub fn require_o2_admin(&self, action: &str) -> Result<(), AppError> {
        if self.role.is_o2_admin() {
            Ok(())
        } else {
            Err(AppError::forbidden(format!("Only O2 admins can {action}")))
        }
    }

    pub fn require_role(&self, role: UserRole, action: &str) -> Result<(), AppError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AppError::forbidden(format!("Only {role} users can {action}")))
        }
    }

    pub fn own_partner_id(&self) -> Result<&str, AppError> {
        self.partner_id
            .as_deref()
            .ok_or_else(|| AppError::forbidden("User is not linked to a partner"))
    }
}

#[derive(Serialize)]
struct ErrorBody { error: String, code: &'static str }

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth_header = match req.headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok()) {
        Some(h) => h,
        None => return unauthorized("Missing Authorization header"),
    };

    // Expect "Bearer <token>"
    let token = match auth_header.strip_prefix("Bearer ") {
        Some(t) => t,
        None => return unauthorized("Invalid Authorization format"),
    };

    let claims = match verify_token(token, &state.config.jwt_secret) {
        Ok(c) => c,
        Err(e) => return unauthorized(&e.to_string()),
    };

    let user = mock_user(claims.role);
    req.extensions_mut().insert(AuthContext {
        user_id: claims.sub,
        role: claims.role,
        username: claims.username,
        company_name: user.company_name.to_string(),
        partner_id: user.partner_id.map(str::to_string),
    });

    next.run(req).await
}

fn unauthorized(msg: &str) -> Response {
    let body = axum::Json(ErrorBody { error: msg.to_string(), code: "unauthorized" });
    (StatusCode::UNAUTHORIZED, body).into_response()
}
