//! Registration domain models.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use shared::wall_clock::hhmm;
use uuid::Uuid;

/// A user's claim on one slot of one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Registration {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub time_slot_id: Uuid,
    pub registered_at: DateTime<Utc>,
}

/// Request payload for claiming a slot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClaimSlotRequest {
    pub event_id: Uuid,
    pub time_slot_id: Uuid,
}

/// Response for a successful claim.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ClaimSlotResponse {
    pub registration_id: Uuid,
    pub event_id: Uuid,
    pub time_slot_id: Uuid,
    pub registered_at: DateTime<Utc>,
}

impl From<Registration> for ClaimSlotResponse {
    fn from(registration: Registration) -> Self {
        Self {
            registration_id: registration.id,
            event_id: registration.event_id,
            time_slot_id: registration.time_slot_id,
            registered_at: registration.registered_at,
        }
    }
}

/// A registration joined with its event and slot, as shown to the student.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UserRegistration {
    pub id: Uuid,
    pub event_id: Uuid,
    pub title: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub slot_time: NaiveTime,
    pub time_slot_id: Uuid,
    pub group_name: String,
}

/// Response for listing a user's registrations.
#[derive(Debug, Clone, Serialize)]
pub struct ListRegistrationsResponse {
    pub registrations: Vec<UserRegistration>,
}
