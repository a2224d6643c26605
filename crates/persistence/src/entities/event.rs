//! Event entity (database row mapping).

use chrono::{DateTime, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the events table.
#[derive(Debug, Clone, FromRow)]
pub struct EventEntity {
    pub id: Uuid,
    pub title: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub total_slots: i32,
    pub group_name: String,
    pub organizer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EventEntity> for domain::models::Event {
    fn from(entity: EventEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            start_time: entity.start_time,
            end_time: entity.end_time,
            total_slots: entity.total_slots,
            group_name: entity.group_name,
            organizer_id: entity.organizer_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
