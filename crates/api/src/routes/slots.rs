//! Slot preview.

use axum::{
    extract::{Query, State},
    Json,
};
use domain::models::time_slot::{SlotPreviewQuery, SlotPreviewResponse};
use domain::services::generate_slot_labels;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::UserAuth;

/// GET /api/v1/slots/preview?start_time=HH:MM&end_time=HH:MM
///
/// Returns the slot labels an event with this window would get, using the
/// configured slot width. Nothing is stored.
pub async fn preview_slots(
    State(state): State<AppState>,
    _auth: UserAuth,
    Query(query): Query<SlotPreviewQuery>,
) -> Result<Json<SlotPreviewResponse>, ApiError> {
    let width = state.config.scheduling.slot_width_minutes;
    let slots = generate_slot_labels(&query.start_time, &query.end_time, width)?;

    Ok(Json(SlotPreviewResponse {
        slot_width_minutes: width,
        slots,
    }))
}
