//! Event repository for database operations.
//!
//! Reads go through the pool. Writes are associated functions over a
//! `PgConnection` so the caller composes them into one transaction together
//! with slot and registration changes.

use chrono::NaiveTime;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::entities::EventEntity;
use crate::metrics::QueryTimer;

const EVENT_COLUMNS: &str =
    "id, title, start_time, end_time, total_slots, group_name, organizer_id, created_at, updated_at";

/// Editable event fields.
#[derive(Debug, Clone, Copy)]
pub struct EventFields<'a> {
    pub title: &'a str,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub total_slots: i32,
}

#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_event_by_id");
        let result = sqlx::query_as::<_, EventEntity>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Events of a group, newest first.
    pub async fn list_by_group(&self, group_name: &str) -> Result<Vec<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_events_by_group");
        let result = sqlx::query_as::<_, EventEntity>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE group_name = $1 ORDER BY created_at DESC"
        ))
        .bind(group_name)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Events organized by a user, newest first.
    pub async fn list_by_organizer(
        &self,
        organizer_id: Uuid,
    ) -> Result<Vec<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_events_by_organizer");
        let result = sqlx::query_as::<_, EventEntity>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE organizer_id = $1 ORDER BY created_at DESC"
        ))
        .bind(organizer_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn insert(
        conn: &mut PgConnection,
        fields: EventFields<'_>,
        group_name: &str,
        organizer_id: Uuid,
    ) -> Result<EventEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_event");
        let result = sqlx::query_as::<_, EventEntity>(&format!(
            r#"
            INSERT INTO events (title, start_time, end_time, total_slots, group_name, organizer_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(fields.title)
        .bind(fields.start_time)
        .bind(fields.end_time)
        .bind(fields.total_slots)
        .bind(group_name)
        .bind(organizer_id)
        .fetch_one(conn)
        .await;
        timer.record();
        result
    }

    /// Locks the event row until the transaction ends. Concurrent edits and
    /// deletes of the same event queue behind this lock.
    pub async fn lock_by_id(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("lock_event_by_id");
        let result = sqlx::query_as::<_, EventEntity>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(conn)
        .await;
        timer.record();
        result
    }

    pub async fn update_fields(
        conn: &mut PgConnection,
        id: Uuid,
        fields: EventFields<'_>,
    ) -> Result<EventEntity, sqlx::Error> {
        let timer = QueryTimer::new("update_event");
        let result = sqlx::query_as::<_, EventEntity>(&format!(
            r#"
            UPDATE events
            SET title = $2, start_time = $3, end_time = $4, total_slots = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(fields.title)
        .bind(fields.start_time)
        .bind(fields.end_time)
        .bind(fields.total_slots)
        .fetch_one(conn)
        .await;
        timer.record();
        result
    }

    /// Deletes the event row. Slots and registrations must already be gone.
    pub async fn delete(conn: &mut PgConnection, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_event");
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await
            .map(|r| r.rows_affected());
        timer.record();
        result
    }

    /// Locks and returns the ids of every event a user organizes.
    pub async fn lock_ids_by_organizer(
        conn: &mut PgConnection,
        organizer_id: Uuid,
    ) -> Result<Vec<Uuid>, sqlx::Error> {
        let timer = QueryTimer::new("lock_event_ids_by_organizer");
        let result = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM events WHERE organizer_id = $1 ORDER BY id FOR UPDATE",
        )
        .bind(organizer_id)
        .fetch_all(conn)
        .await;
        timer.record();
        result
    }
}
