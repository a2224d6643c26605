//! Student group listing.

use axum::{extract::State, Json};
use domain::models::group::ListGroupsResponse;
use persistence::repositories::GroupRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/v1/groups
pub async fn list_groups(State(state): State<AppState>) -> Result<Json<ListGroupsResponse>, ApiError> {
    let groups = GroupRepository::new(state.pool.clone()).list_all().await?;

    Ok(Json(ListGroupsResponse {
        groups: groups.into_iter().map(|g| g.name).collect(),
    }))
}
