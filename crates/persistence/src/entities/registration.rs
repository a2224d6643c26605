//! Registration entities (database row mappings).

use chrono::{DateTime, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the registrations table.
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub time_slot_id: Uuid,
    pub registered_at: DateTime<Utc>,
}

impl From<RegistrationEntity> for domain::models::Registration {
    fn from(entity: RegistrationEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            event_id: entity.event_id,
            time_slot_id: entity.time_slot_id,
            registered_at: entity.registered_at,
        }
    }
}

/// Registration joined with its event and slot.
#[derive(Debug, Clone, FromRow)]
pub struct UserRegistrationEntity {
    pub id: Uuid,
    pub event_id: Uuid,
    pub title: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub slot_time: NaiveTime,
    pub time_slot_id: Uuid,
    pub group_name: String,
}

impl From<UserRegistrationEntity> for domain::models::registration::UserRegistration {
    fn from(entity: UserRegistrationEntity) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            title: entity.title,
            start_time: entity.start_time,
            end_time: entity.end_time,
            slot_time: entity.slot_time,
            time_slot_id: entity.time_slot_id,
            group_name: entity.group_name,
        }
    }
}
