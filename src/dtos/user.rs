use serde::{Deserialize, Serialize};

use crate::auth::roles::{MockUser, NavItem, UserRole};

/// Mock login: the caller picks a role and is signed in as that role's user.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub role: UserRole,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in_seconds: i64,
    pub user: MockUser,
}

#[derive(Serialize)]
pub struct MeResponse {
    pub user: MockUser,
    pub navigation: Vec<NavItem>,
}
