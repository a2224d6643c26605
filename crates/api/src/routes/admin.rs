//! Administration routes. Mounted behind `require_admin`.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::user::{AdminUserSummary, AssignRoleRequest, ListUsersResponse};
use domain::models::UserRole;
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::UserAuth;
use crate::services::UserAdminService;

#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub user_id: Uuid,
    pub events_deleted: usize,
    pub registrations_cancelled: u64,
    pub registrations_released: u64,
}

/// PUT /api/v1/admin/users/:user_id/role
pub async fn set_user_role(
    State(state): State<AppState>,
    admin: UserAuth,
    Path(user_id): Path<Uuid>,
    Json(request): Json<AssignRoleRequest>,
) -> Result<Json<AdminUserSummary>, ApiError> {
    request.validate()?;
    let role: UserRole = request.role.parse().map_err(ApiError::Validation)?;

    let user = UserAdminService::new(state.pool.clone())
        .set_role(user_id, role)
        .await?;

    tracing::info!(admin_id = %admin.user_id, user_id = %user_id, role = %role, "Role assigned");
    Ok(Json(user.into()))
}

/// GET /api/v1/admin/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<ListUsersResponse>, ApiError> {
    let users = UserAdminService::new(state.pool.clone()).list().await?;

    Ok(Json(ListUsersResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

/// DELETE /api/v1/admin/users/:user_id
///
/// Removes the user's events (with their slots and registrations) and frees
/// every slot the user held.
pub async fn delete_user(
    State(state): State<AppState>,
    admin: UserAuth,
    Path(user_id): Path<Uuid>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    let removal = UserAdminService::new(state.pool.clone())
        .delete(user_id, admin.user_id)
        .await?;

    Ok(Json(DeleteUserResponse {
        user_id,
        events_deleted: removal.events_deleted,
        registrations_cancelled: removal.registrations_cancelled,
        registrations_released: removal.registrations_released,
    }))
}
