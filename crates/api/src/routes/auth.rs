//! Account registration and login.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::user::UserProfile;
use serde::{Deserialize, Serialize};
use shared::validation::validate_not_blank;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::auth::{AuthService, Signup};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 1, max = 100, message = "First name must be 1-100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub first_name: String,

    #[validate(
        length(min = 1, max = 100, message = "Last name must be 1-100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Length policy is enforced by the auth service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(max = 64, message = "Telegram alias must be at most 64 characters"))]
    pub telegram_alias: Option<String>,

    #[validate(range(min = 1, max = 6, message = "Course must be between 1 and 6"))]
    pub course: i32,

    #[validate(length(min = 1, max = 50, message = "Group name is required"))]
    pub group_name: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserProfile,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user: UserProfile,
}

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    request.validate()?;

    let service = AuthService::new(state.pool.clone(), (*state.jwt).clone());
    let user = service
        .register(Signup {
            first_name: &request.first_name,
            last_name: &request.last_name,
            email: &request.email,
            password: &request.password,
            telegram_alias: request
                .telegram_alias
                .as_deref()
                .map(str::trim)
                .filter(|alias| !alias.is_empty()),
            course: request.course,
            group_name: &request.group_name,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse { user: user.into() }),
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let service = AuthService::new(state.pool.clone(), (*state.jwt).clone());
    let result = service.login(&request.email, &request.password).await?;

    Ok(Json(LoginResponse {
        access_token: result.access_token,
        token_type: "Bearer",
        expires_in: result.expires_in,
        user: result.profile,
    }))
}
