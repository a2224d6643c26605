//! Slot claims and cancellations for the calling user.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::registration::{
    ClaimSlotRequest, ClaimSlotResponse, ListRegistrationsResponse,
};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::UserAuth;
use crate::services::SlotAllocationService;

/// POST /api/v1/registrations
///
/// Claims a slot for the caller. 409 `slot_unavailable` when someone else
/// holds it, 409 `duplicate_registration` when the caller already holds a
/// slot of this event.
pub async fn claim_slot(
    State(state): State<AppState>,
    auth: UserAuth,
    Json(request): Json<ClaimSlotRequest>,
) -> Result<(StatusCode, Json<ClaimSlotResponse>), ApiError> {
    let registration = SlotAllocationService::new(state.pool.clone())
        .claim(auth.user_id, request.event_id, request.time_slot_id)
        .await?;

    Ok((StatusCode::CREATED, Json(registration.into())))
}

/// GET /api/v1/registrations
pub async fn list_my_registrations(
    State(state): State<AppState>,
    auth: UserAuth,
) -> Result<Json<ListRegistrationsResponse>, ApiError> {
    let registrations = SlotAllocationService::new(state.pool.clone())
        .list_for_user(auth.user_id)
        .await?;

    Ok(Json(ListRegistrationsResponse { registrations }))
}

/// DELETE /api/v1/registrations/:registration_id
pub async fn cancel_registration(
    State(state): State<AppState>,
    auth: UserAuth,
    Path(registration_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    SlotAllocationService::new(state.pool.clone())
        .release(registration_id, auth.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
