use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use storage::{Database, dto::player::DashboardResponse, services::phone::validate_whatsapp};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthState;

use super::services;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminUser {
    pub username: String,
    pub role: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: AdminUser,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserLoginRequest {
    #[validate(custom(function = "validate_whatsapp"))]
    pub whatsapp: String,

    pub date_of_birth: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserLoginResponse {
    pub success: bool,
    pub user: DashboardResponse,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Admin authenticated", body = LoginResponse),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(auth): State<AuthState>,
    Json(req): Json<AdminLoginRequest>,
) -> Result<Json<LoginResponse>, WebError> {
    req.validate()?;

    if !auth.check_admin_credentials(&req.username, &req.password) {
        tracing::warn!("Failed admin login attempt for {}", req.username);
        return Err(WebError::Unauthorized("Invalid credentials".to_string()));
    }

    let access_token = auth.issue_token(&req.username)?;

    Ok(Json(LoginResponse {
        access_token,
        user: AdminUser {
            username: req.username,
            role: "admin".to_string(),
        },
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/user-login",
    request_body = UserLoginRequest,
    responses(
        (status = 200, description = "Player found", body = UserLoginResponse),
        (status = 400, description = "Malformed WhatsApp number"),
        (status = 401, description = "No player matches the WhatsApp number and date of birth")
    ),
    tag = "auth"
)]
pub async fn user_login(
    State(db): State<Database>,
    Json(req): Json<UserLoginRequest>,
) -> Result<Json<UserLoginResponse>, WebError> {
    req.validate()?;

    let user = services::user_login(db.pool(), &req.whatsapp, req.date_of_birth)
        .await?
        .ok_or_else(|| {
            WebError::Unauthorized("Invalid WhatsApp number or date of birth".to_string())
        })?;

    Ok(Json(UserLoginResponse {
        success: true,
        user,
    }))
}
