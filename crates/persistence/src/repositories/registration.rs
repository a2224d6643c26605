//! Registration repository: atomic slot claims and releases.
//!
//! A slot is occupied exactly when a registration references it, so every
//! write to `registrations` and to `time_slots.is_available` happens here and
//! always in the same transaction.

use domain::models::Registration;
use domain::services::access_policy;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::entities::{RegistrationEntity, TimeSlotEntity, UserRegistrationEntity};
use crate::metrics::QueryTimer;

pub const REGISTRATIONS_USER_EVENT_KEY: &str = "registrations_user_event_key";
pub const REGISTRATIONS_TIME_SLOT_KEY: &str = "registrations_time_slot_key";

/// Result of a claim attempt. Every variant except `Claimed` left the
/// database untouched.
#[derive(Debug)]
pub enum ClaimOutcome {
    Claimed(RegistrationEntity),
    EventNotFound,
    /// No slot with this id belongs to the event.
    SlotNotFound,
    SlotUnavailable,
    AlreadyRegistered,
}

/// Result of a release attempt.
#[derive(Debug)]
pub enum ReleaseOutcome {
    Released(RegistrationEntity),
    NotFound,
    NotOwner,
}

#[derive(Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A user's registrations joined with event and slot, newest event first.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<UserRegistrationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_registrations_for_user");
        let result = sqlx::query_as::<_, UserRegistrationEntity>(
            r#"
            SELECT r.id, r.event_id, e.title, e.start_time, e.end_time,
                   ts.slot_time, r.time_slot_id, e.group_name
            FROM registrations r
            JOIN events e ON e.id = r.event_id
            JOIN time_slots ts ON ts.id = r.time_slot_id
            WHERE r.user_id = $1
            ORDER BY e.created_at DESC, ts.slot_time
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Binds a user to a slot of an event.
    ///
    /// Runs in one transaction:
    /// 1. share-lock the event row so a concurrent edit or delete cannot
    ///    interleave;
    /// 2. lock the slot row, filtered by both slot and event id;
    /// 3. check the one-registration-per-event rule, then availability;
    /// 4. insert the registration and mark the slot occupied.
    ///
    /// Concurrent claims on one slot serialize on the slot lock, so exactly
    /// one of them wins. A unique violation from a racing writer is mapped
    /// back to the matching outcome by constraint name.
    pub async fn claim(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        slot_id: Uuid,
    ) -> Result<ClaimOutcome, sqlx::Error> {
        let timer = QueryTimer::new("claim_slot");
        let result = self.claim_in_tx(user_id, event_id, slot_id).await;
        timer.record();
        result
    }

    async fn claim_in_tx(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        slot_id: Uuid,
    ) -> Result<ClaimOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let event_exists = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM events WHERE id = $1 FOR KEY SHARE",
        )
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await?
        .is_some();
        if !event_exists {
            return Ok(ClaimOutcome::EventNotFound);
        }

        let slot = sqlx::query_as::<_, TimeSlotEntity>(
            r#"
            SELECT id, event_id, slot_time, is_available
            FROM time_slots
            WHERE id = $1 AND event_id = $2
            FOR UPDATE
            "#,
        )
        .bind(slot_id)
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(slot) = slot else {
            return Ok(ClaimOutcome::SlotNotFound);
        };

        let already_registered = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM registrations WHERE user_id = $1 AND event_id = $2)",
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_one(&mut *tx)
        .await?;
        if already_registered {
            return Ok(ClaimOutcome::AlreadyRegistered);
        }

        if !slot.is_available {
            return Ok(ClaimOutcome::SlotUnavailable);
        }

        let inserted = sqlx::query_as::<_, RegistrationEntity>(
            r#"
            INSERT INTO registrations (user_id, event_id, time_slot_id)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, event_id, time_slot_id, registered_at
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .bind(slot.id)
        .fetch_one(&mut *tx)
        .await;

        let registration = match inserted {
            Ok(registration) => registration,
            Err(err) => {
                return match claim_conflict(&err) {
                    Some(outcome) => Ok(outcome),
                    None => Err(err),
                }
            }
        };

        sqlx::query("UPDATE time_slots SET is_available = FALSE WHERE id = $1")
            .bind(slot.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(ClaimOutcome::Claimed(registration))
    }

    /// Deletes a registration owned by `requester_id` and frees its slot.
    ///
    /// The ownership check runs against the locked row, before any write.
    pub async fn release(
        &self,
        registration_id: Uuid,
        requester_id: Uuid,
    ) -> Result<ReleaseOutcome, sqlx::Error> {
        let timer = QueryTimer::new("release_registration");
        let result = self.release_in_tx(registration_id, requester_id).await;
        timer.record();
        result
    }

    async fn release_in_tx(
        &self,
        registration_id: Uuid,
        requester_id: Uuid,
    ) -> Result<ReleaseOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let registration = sqlx::query_as::<_, RegistrationEntity>(
            r#"
            SELECT id, user_id, event_id, time_slot_id, registered_at
            FROM registrations
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(registration_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(registration) = registration else {
            return Ok(ReleaseOutcome::NotFound);
        };
        if !access_policy::can_cancel_registration(
            &Registration::from(registration.clone()),
            requester_id,
        ) {
            return Ok(ReleaseOutcome::NotOwner);
        }

        sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(registration.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE time_slots SET is_available = TRUE WHERE id = $1")
            .bind(registration.time_slot_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(ReleaseOutcome::Released(registration))
    }

    /// Deletes all registrations of an event without touching its slots.
    /// Only valid when the caller removes the slots in the same transaction.
    pub async fn delete_for_event(
        conn: &mut PgConnection,
        event_id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_registrations_for_event");
        let result = sqlx::query("DELETE FROM registrations WHERE event_id = $1")
            .bind(event_id)
            .execute(conn)
            .await
            .map(|r| r.rows_affected());
        timer.record();
        result
    }

    /// Releases every registration a user holds, freeing the slots.
    pub async fn release_all_for_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("release_registrations_for_user");

        let freed = sqlx::query_scalar::<_, Uuid>(
            "DELETE FROM registrations WHERE user_id = $1 RETURNING time_slot_id",
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await;

        let result = match freed {
            Ok(slot_ids) if slot_ids.is_empty() => Ok(0),
            Ok(slot_ids) => sqlx::query(
                "UPDATE time_slots SET is_available = TRUE WHERE id = ANY($1)",
            )
            .bind(&slot_ids)
            .execute(&mut *conn)
            .await
            .map(|_| slot_ids.len() as u64),
            Err(err) => Err(err),
        };

        timer.record();
        result
    }
}

/// Maps a unique violation raised while inserting a registration.
fn claim_conflict(err: &sqlx::Error) -> Option<ClaimOutcome> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    if db_err.code().as_deref() != Some("23505") {
        return None;
    }
    match db_err.constraint() {
        Some(REGISTRATIONS_USER_EVENT_KEY) => Some(ClaimOutcome::AlreadyRegistered),
        Some(REGISTRATIONS_TIME_SLOT_KEY) => Some(ClaimOutcome::SlotUnavailable),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_a_conflict() {
        assert!(claim_conflict(&sqlx::Error::RowNotFound).is_none());
        assert!(claim_conflict(&sqlx::Error::PoolTimedOut).is_none());
    }
}
