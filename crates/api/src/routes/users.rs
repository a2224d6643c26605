//! User profiles.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::user::UserProfile;
use domain::models::User;
use persistence::repositories::UserRepository;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::UserAuth;

/// GET /api/v1/users/:user_id
///
/// Any authenticated user may view any profile.
pub async fn get_profile(
    State(state): State<AppState>,
    _auth: UserAuth,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserProfile>, ApiError> {
    let user: User = UserRepository::new(state.pool.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?
        .into();

    Ok(Json(user.into()))
}
