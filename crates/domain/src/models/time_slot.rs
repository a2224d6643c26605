//! Time slot domain models.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use shared::wall_clock::hhmm;
use uuid::Uuid;

/// Availability of a slot. A slot is occupied exactly when a registration
/// references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Occupied,
}

impl SlotStatus {
    pub fn from_available(is_available: bool) -> Self {
        if is_available {
            SlotStatus::Available
        } else {
            SlotStatus::Occupied
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SlotStatus::Available)
    }
}

/// A bookable slot of an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimeSlot {
    pub id: Uuid,
    pub event_id: Uuid,
    /// Start of the slot; the slot lasts one slot width.
    #[serde(with = "hhmm")]
    pub slot_time: NaiveTime,
    pub status: SlotStatus,
}

/// Query for previewing the slots a window would produce.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SlotPreviewQuery {
    pub start_time: String,
    pub end_time: String,
}

/// Slot labels a window would produce.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SlotPreviewResponse {
    pub slot_width_minutes: u32,
    pub slots: Vec<String>,
}
