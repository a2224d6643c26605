//! Event creation, full-regeneration edits and cascading deletes.
//!
//! Slot identities are not stable across edits, so every edit drops all
//! registrations and slots of the event and regenerates the slots from the
//! (possibly unchanged) window. Organizers see the number of cancelled
//! registrations in the response.

use domain::models::event::{CreateEventResponse, EventDetailResponse, UpdateEventResponse};
use domain::models::{Event, EventDraft, UserRole};
use domain::services::access_policy::{ensure_can_create_event, ensure_can_modify_event};
use domain::services::{plan_slots, SlotPlan};
use domain::SchedulingError;
use metrics::counter;
use persistence::repositories::{
    EventFields, EventRepository, RegistrationRepository, TimeSlotRepository,
};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use super::ServiceError;

/// What a delete removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRemoval {
    pub cancelled_registrations: u64,
    pub removed_slots: u64,
}

pub struct EventLifecycleService {
    pool: PgPool,
    events: EventRepository,
    slots: TimeSlotRepository,
    slot_width_minutes: u32,
}

impl EventLifecycleService {
    pub fn new(pool: PgPool, slot_width_minutes: u32) -> Self {
        Self {
            events: EventRepository::new(pool.clone()),
            slots: TimeSlotRepository::new(pool.clone()),
            pool,
            slot_width_minutes,
        }
    }

    /// Creates an event in the organizer's group together with its slots.
    pub async fn create(
        &self,
        organizer_id: Uuid,
        organizer_role: UserRole,
        group_name: &str,
        draft: EventDraft,
    ) -> Result<CreateEventResponse, ServiceError> {
        ensure_can_create_event(organizer_role)?;
        let plan = self.plan(&draft)?;

        let mut tx = self.pool.begin().await?;
        let event =
            EventRepository::insert(&mut tx, fields(&draft), group_name, organizer_id).await?;
        TimeSlotRepository::insert_batch(&mut tx, event.id, &plan.times).await?;
        tx.commit().await?;

        info!(
            event_id = %event.id,
            organizer_id = %organizer_id,
            group = %group_name,
            slot_count = plan.slot_count(),
            "Event created"
        );
        log_warnings(event.id, &plan);

        Ok(CreateEventResponse {
            event_id: event.id,
            slot_count: plan.slot_count(),
            warnings: plan.warnings,
        })
    }

    /// Replaces the event fields and regenerates all slots.
    ///
    /// Runs under a row lock on the event; the organizer check happens on the
    /// locked row before anything is written.
    pub async fn update(
        &self,
        event_id: Uuid,
        requester_id: Uuid,
        draft: EventDraft,
    ) -> Result<UpdateEventResponse, ServiceError> {
        let mut tx = self.pool.begin().await?;

        let event: Event = EventRepository::lock_by_id(&mut tx, event_id)
            .await?
            .ok_or_else(|| SchedulingError::not_found("Event"))?
            .into();
        ensure_can_modify_event(&event, requester_id)?;
        let plan = self.plan(&draft)?;

        EventRepository::update_fields(&mut tx, event_id, fields(&draft)).await?;
        let cancelled = RegistrationRepository::delete_for_event(&mut tx, event_id).await?;
        TimeSlotRepository::delete_for_event(&mut tx, event_id).await?;
        TimeSlotRepository::insert_batch(&mut tx, event_id, &plan.times).await?;
        tx.commit().await?;

        counter!("events_regenerated_total").increment(1);
        info!(
            event_id = %event_id,
            organizer_id = %requester_id,
            slot_count = plan.slot_count(),
            cancelled_registrations = cancelled,
            "Event updated and slots regenerated"
        );
        log_warnings(event_id, &plan);

        Ok(UpdateEventResponse {
            event_id,
            slot_count: plan.slot_count(),
            cancelled_registrations: cancelled,
            warnings: plan.warnings,
        })
    }

    /// Deletes registrations, then slots, then the event.
    pub async fn delete(
        &self,
        event_id: Uuid,
        requester_id: Uuid,
    ) -> Result<EventRemoval, ServiceError> {
        let mut tx = self.pool.begin().await?;

        let event: Event = EventRepository::lock_by_id(&mut tx, event_id)
            .await?
            .ok_or_else(|| SchedulingError::not_found("Event"))?
            .into();
        ensure_can_modify_event(&event, requester_id)?;

        let removal = remove_event(&mut tx, event_id).await?;
        tx.commit().await?;

        info!(
            event_id = %event_id,
            organizer_id = %requester_id,
            cancelled_registrations = removal.cancelled_registrations,
            removed_slots = removal.removed_slots,
            "Event deleted"
        );
        Ok(removal)
    }

    /// Event with its slots ordered by time.
    pub async fn detail(&self, event_id: Uuid) -> Result<EventDetailResponse, ServiceError> {
        let event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| SchedulingError::not_found("Event"))?;
        let slots = self.slots.list_for_event(event_id).await?;

        Ok(EventDetailResponse {
            event: event.into(),
            slots: slots.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn list_for_group(&self, group_name: &str) -> Result<Vec<Event>, ServiceError> {
        let rows = self.events.list_by_group(group_name).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn list_for_organizer(&self, organizer_id: Uuid) -> Result<Vec<Event>, ServiceError> {
        let rows = self.events.list_by_organizer(organizer_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn plan(&self, draft: &EventDraft) -> Result<SlotPlan, SchedulingError> {
        plan_slots(
            draft.start_time,
            draft.end_time,
            self.slot_width_minutes,
            draft.total_slots,
        )
    }
}

/// Removes an event and everything that depends on it, in dependency order.
/// The caller must hold the event row lock and commit the transaction.
pub(crate) async fn remove_event(
    conn: &mut sqlx::PgConnection,
    event_id: Uuid,
) -> Result<EventRemoval, sqlx::Error> {
    let cancelled_registrations = RegistrationRepository::delete_for_event(conn, event_id).await?;
    let removed_slots = TimeSlotRepository::delete_for_event(conn, event_id).await?;
    EventRepository::delete(conn, event_id).await?;

    Ok(EventRemoval {
        cancelled_registrations,
        removed_slots,
    })
}

fn fields(draft: &EventDraft) -> EventFields<'_> {
    EventFields {
        title: &draft.title,
        start_time: draft.start_time,
        end_time: draft.end_time,
        total_slots: draft.total_slots,
    }
}

fn log_warnings(event_id: Uuid, plan: &SlotPlan) {
    for warning in &plan.warnings {
        warn!(event_id = %event_id, slot_count = plan.slot_count(), "{}", warning);
    }
}
