//! Bearer token authentication.
//!
//! The token only proves identity. Role and group are read from the
//! database on every request, so role changes and account deletion take
//! effect immediately.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use domain::models::{User, UserRole};
use domain::services::access_policy::ensure_can_manage_users;
use persistence::repositories::UserRepository;
use shared::jwt::{extract_user_id, JwtError};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// The authenticated caller, as seen by handlers.
#[derive(Debug, Clone)]
pub struct UserAuth {
    pub user_id: Uuid,
    pub role: UserRole,
    pub group_name: String,
    /// Token id, for log correlation.
    pub jti: String,
}

impl UserAuth {
    /// Validates `token` and loads the caller's current role and group.
    pub async fn resolve(state: &AppState, token: &str) -> Result<Self, ApiError> {
        let claims = state.jwt.validate_access_token(token).map_err(|e| {
            tracing::debug!("JWT validation failed: {}", e);
            match e {
                JwtError::TokenExpired => ApiError::Unauthorized("Token has expired".into()),
                _ => ApiError::Unauthorized("Invalid or expired token".into()),
            }
        })?;
        let user_id = extract_user_id(&claims)
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".into()))?;

        let user: User = UserRepository::new(state.pool.clone())
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Account no longer exists".into()))?
            .into();

        Ok(Self {
            user_id: user.id,
            role: user.role,
            group_name: user.group_name,
            jti: claims.jti,
        })
    }
}

/// Returns the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Rejects requests without a valid access token and stores [`UserAuth`]
/// in the request extensions.
pub async fn require_user_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(req.headers()) else {
        return ApiError::Unauthorized("Missing or invalid Authorization header".into())
            .into_response();
    };

    match UserAuth::resolve(&state, token).await {
        Ok(auth) => {
            req.extensions_mut().insert(auth);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

/// Admin-only guard. Must be layered inside [`require_user_auth`].
pub async fn require_admin(req: Request<Body>, next: Next) -> Response {
    let Some(auth) = req.extensions().get::<UserAuth>() else {
        return ApiError::Unauthorized("Authentication required".into()).into_response();
    };

    if let Err(e) = ensure_can_manage_users(auth.role) {
        tracing::warn!(user_id = %auth.user_id, role = %auth.role, "Admin route denied");
        return ApiError::from(e).into_response();
    }

    next.run(req).await
}
