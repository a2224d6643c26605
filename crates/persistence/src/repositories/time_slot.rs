//! Time slot repository.
//!
//! Slots are only ever created or removed in bulk for a whole event.
//! Availability flips belong to [`super::RegistrationRepository`].

use chrono::NaiveTime;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::entities::TimeSlotEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct TimeSlotRepository {
    pool: PgPool,
}

impl TimeSlotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Slots of an event ordered by time.
    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<TimeSlotEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_slots_for_event");
        let result = sqlx::query_as::<_, TimeSlotEntity>(
            r#"
            SELECT id, event_id, slot_time, is_available
            FROM time_slots
            WHERE event_id = $1
            ORDER BY slot_time
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Inserts one available slot per time in a single statement.
    pub async fn insert_batch(
        conn: &mut PgConnection,
        event_id: Uuid,
        times: &[NaiveTime],
    ) -> Result<u64, sqlx::Error> {
        if times.is_empty() {
            return Ok(0);
        }

        let timer = QueryTimer::new("insert_slot_batch");
        let result = sqlx::query(
            r#"
            INSERT INTO time_slots (event_id, slot_time)
            SELECT $1, slot_time FROM UNNEST($2::time[]) AS slot_time
            "#,
        )
        .bind(event_id)
        .bind(times)
        .execute(conn)
        .await
        .map(|r| r.rows_affected());
        timer.record();
        result
    }

    /// Deletes every slot of an event. Registrations must already be gone.
    pub async fn delete_for_event(conn: &mut PgConnection, event_id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_slots_for_event");
        let result = sqlx::query("DELETE FROM time_slots WHERE event_id = $1")
            .bind(event_id)
            .execute(conn)
            .await
            .map(|r| r.rows_affected());
        timer.record();
        result
    }
}
