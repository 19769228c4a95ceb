use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::WebError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(username: &str, role: &str, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: username.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }
}

/// Token issuance/verification keys plus the configured admin credentials.
#[derive(Clone)]
pub struct AuthState {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
    admin_username: String,
    admin_password: String,
}

impl AuthState {
    pub fn new(
        secret: &str,
        expiration_hours: i64,
        admin_username: String,
        admin_password: String,
    ) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_hours,
            admin_username,
            admin_password,
        }
    }

    pub fn check_admin_credentials(&self, username: &str, password: &str) -> bool {
        username == self.admin_username && password == self.admin_password
    }

    pub fn issue_token(&self, username: &str) -> Result<String, WebError> {
        let claims = Claims::new(username, "admin", self.expiration_hours);
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| WebError::InternalServerError(e.to_string()))
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, WebError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| WebError::Unauthorized("Invalid or expired token".to_string()))
    }
}

/// Layer for admin-only routes: requires a valid bearer token and exposes
/// the claims to downstream handlers.
pub async fn require_auth(
    State(auth): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| WebError::Unauthorized("Missing bearer token".to_string()))?;

    let claims = auth.verify_token(token)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
