use chrono::{TimeDelta, Utc};
use jsonwebtoken::{encode, decode, Header, Validation, EncodingKey, DecodingKey, Algorithm};
use serde::{Serialize, Deserialize};
use crate::auth::roles::UserRole;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
    pub username: String,
}

pub fn sign_token(
    user_id: &str,
    role: UserRole,
    username: &str,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, AppError> {
    let now = Utc::now();
    let exp = TimeDelta::try_hours(ttl_hours)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| AppError::internal(format!("Token lifetime of {ttl_hours}h is out of range")))?;
    let claims = Claims {
        sub: user_id.to_string(),
        role,
        iat: now.timestamp() as usize,
        exp: exp.timestamp() as usize,
        username: username.to_string(),
    };
    encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AppError::internal(format!("Token signing failed: {e}")))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256)
    )
    .map(|d| d.claims)
    .map_err(|e| AppError::unauthorized(format!("Invalid or expired token: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_token_verifies_with_same_secret() {
        let token = sign_token("2", UserRole::PartnerAdmin, "Michael Chen", "secret", 8).unwrap();
        let claims = verify_token(&token, "secret").unwrap();
        assert_eq!(claims.sub, "2");
        assert_eq!(claims.role, UserRole::PartnerAdmin);
        assert_eq!(claims.username, "Michael Chen");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign_token("1", UserRole::O2Admin, "Sarah Johnson", "secret", 8).unwrap();
        assert!(matches!(verify_token(&token, "other"), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = sign_token("1", UserRole::O2Admin, "Sarah Johnson", "secret", -1).unwrap();
        assert!(verify_token(&token, "secret").is_err());
    }

    #[test]
    fn oversized_lifetime_is_an_error() {
        let result = sign_token("1", UserRole::O2Admin, "Sarah Johnson", "secret", 10_000_000_000_000);
        assert!(matches!(result, Err(AppError::Internal(_))));
        let result = sign_token("1", UserRole::O2Admin, "Sarah Johnson", "secret", i64::MAX);
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
