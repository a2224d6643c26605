//! Event routes: creation, listings, editing and deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::event::{
    CreateEventResponse, EventDetailResponse, ListEventsResponse, UpdateEventResponse,
};
use domain::models::EventRequest;
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::UserAuth;
use crate::services::EventLifecycleService;

fn service(state: &AppState) -> EventLifecycleService {
    EventLifecycleService::new(
        state.pool.clone(),
        state.config.scheduling.slot_width_minutes,
    )
}

/// Body of a successful event deletion.
#[derive(Debug, Serialize)]
pub struct DeleteEventResponse {
    pub event_id: Uuid,
    pub cancelled_registrations: u64,
    pub removed_slots: u64,
}

/// POST /api/v1/events
///
/// The event belongs to the organizer's own group.
pub async fn create_event(
    State(state): State<AppState>,
    auth: UserAuth,
    Json(request): Json<EventRequest>,
) -> Result<(StatusCode, Json<CreateEventResponse>), ApiError> {
    request.validate()?;
    let draft = request.into_draft()?;

    let created = service(&state)
        .create(auth.user_id, auth.role, &auth.group_name, draft)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/events/group/:group_name
pub async fn list_group_events(
    State(state): State<AppState>,
    _auth: UserAuth,
    Path(group_name): Path<String>,
) -> Result<Json<ListEventsResponse>, ApiError> {
    let events = service(&state).list_for_group(&group_name).await?;
    Ok(Json(ListEventsResponse { events }))
}

/// GET /api/v1/events/organizer/:user_id
pub async fn list_organizer_events(
    State(state): State<AppState>,
    _auth: UserAuth,
    Path(organizer_id): Path<Uuid>,
) -> Result<Json<ListEventsResponse>, ApiError> {
    let events = service(&state).list_for_organizer(organizer_id).await?;
    Ok(Json(ListEventsResponse { events }))
}

/// GET /api/v1/events/:event_id
pub async fn get_event(
    State(state): State<AppState>,
    _auth: UserAuth,
    Path(event_id): Path<Uuid>,
) -> Result<Json<EventDetailResponse>, ApiError> {
    Ok(Json(service(&state).detail(event_id).await?))
}

/// PUT /api/v1/events/:event_id
///
/// Replaces every field and regenerates all slots. Existing registrations
/// are cancelled; the response reports how many.
pub async fn update_event(
    State(state): State<AppState>,
    auth: UserAuth,
    Path(event_id): Path<Uuid>,
    Json(request): Json<EventRequest>,
) -> Result<Json<UpdateEventResponse>, ApiError> {
    request.validate()?;
    let draft = request.into_draft()?;

    let updated = service(&state)
        .update(event_id, auth.user_id, draft)
        .await?;

    Ok(Json(updated))
}

/// DELETE /api/v1/events/:event_id
pub async fn delete_event(
    State(state): State<AppState>,
    auth: UserAuth,
    Path(event_id): Path<Uuid>,
) -> Result<Json<DeleteEventResponse>, ApiError> {
    let removal = service(&state).delete(event_id, auth.user_id).await?;

    Ok(Json(DeleteEventResponse {
        event_id,
        cancelled_registrations: removal.cancelled_registrations,
        removed_slots: removal.removed_slots,
    }))
}
