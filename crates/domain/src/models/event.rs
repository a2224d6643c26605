//! Event domain models.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use shared::wall_clock::{hhmm, parse_wall_clock};
use uuid::Uuid;
use validator::Validate;

use super::time_slot::TimeSlot;
use crate::errors::SchedulingError;

/// Maximum advisory slot count accepted from organizers.
pub const MAX_DECLARED_SLOTS: i32 = 1000;

/// An event owned by an organizer, bookable in fixed-width slots.
///
/// `total_slots` is the organizer's declared count and is advisory only;
/// the bookable slots are always derived from the time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub total_slots: i32,
    pub group_name: String,
    pub organizer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating or replacing an event.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct EventRequest {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: String,

    #[validate(custom(function = "shared::validation::validate_wall_clock"))]
    pub start_time: String,

    #[validate(custom(function = "shared::validation::validate_wall_clock"))]
    pub end_time: String,

    #[validate(range(min = 0, max = 1000, message = "Total slots must be between 0 and 1000"))]
    pub total_slots: i32,
}

/// Parsed event fields handed to the lifecycle service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub total_slots: i32,
}

impl EventRequest {
    /// Parses the wall-clock fields. The time range itself is checked by the
    /// slot generator.
    pub fn into_draft(self) -> Result<EventDraft, SchedulingError> {
        let start_time = parse_wall_clock(&self.start_time)
            .map_err(|e| SchedulingError::Validation(e.to_string()))?;
        let end_time = parse_wall_clock(&self.end_time)
            .map_err(|e| SchedulingError::Validation(e.to_string()))?;

        if !(0..=MAX_DECLARED_SLOTS).contains(&self.total_slots) {
            return Err(SchedulingError::Validation(
                "Total slots must be between 0 and 1000".to_string(),
            ));
        }

        Ok(EventDraft {
            title: self.title.trim().to_string(),
            start_time,
            end_time,
            total_slots: self.total_slots,
        })
    }
}

/// Response for creating an event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateEventResponse {
    pub event_id: Uuid,
    pub slot_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Response for updating an event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UpdateEventResponse {
    pub event_id: Uuid,
    pub slot_count: usize,
    /// Registrations dropped by the full slot regeneration.
    pub cancelled_registrations: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Event with its slots ordered by time.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetailResponse {
    pub event: Event,
    pub slots: Vec<TimeSlot>,
}

/// Response for event listings.
#[derive(Debug, Clone, Serialize)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
}
