//! Time slot entity (database row mapping).

use chrono::NaiveTime;
use domain::models::SlotStatus;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the time_slots table.
#[derive(Debug, Clone, FromRow)]
pub struct TimeSlotEntity {
    pub id: Uuid,
    pub event_id: Uuid,
    pub slot_time: NaiveTime,
    pub is_available: bool,
}

impl From<TimeSlotEntity> for domain::models::TimeSlot {
    fn from(entity: TimeSlotEntity) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            slot_time: entity.slot_time,
            status: SlotStatus::from_available(entity.is_available),
        }
    }
}
