//! Slot claims and registration releases.

use domain::models::registration::UserRegistration;
use domain::models::Registration;
use domain::SchedulingError;
use metrics::counter;
use persistence::repositories::{ClaimOutcome, RegistrationRepository, ReleaseOutcome};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use super::ServiceError;

pub struct SlotAllocationService {
    registrations: RegistrationRepository,
}

impl SlotAllocationService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            registrations: RegistrationRepository::new(pool),
        }
    }

    /// Claims `slot_id` of `event_id` for `user_id`.
    pub async fn claim(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        slot_id: Uuid,
    ) -> Result<Registration, ServiceError> {
        let outcome = self.registrations.claim(user_id, event_id, slot_id).await?;
        counter!("slot_claims_total", "outcome" => claim_outcome_label(&outcome)).increment(1);

        match outcome {
            ClaimOutcome::Claimed(entity) => {
                info!(
                    registration_id = %entity.id,
                    user_id = %user_id,
                    event_id = %event_id,
                    slot_id = %slot_id,
                    "Slot claimed"
                );
                Ok(entity.into())
            }
            ClaimOutcome::EventNotFound => Err(SchedulingError::not_found("Event").into()),
            ClaimOutcome::SlotNotFound => Err(SchedulingError::not_found("Time slot").into()),
            ClaimOutcome::SlotUnavailable => {
                debug!(user_id = %user_id, slot_id = %slot_id, "Slot already taken");
                Err(SchedulingError::SlotUnavailable.into())
            }
            ClaimOutcome::AlreadyRegistered => {
                Err(SchedulingError::DuplicateRegistration.into())
            }
        }
    }

    /// Cancels a registration owned by `requester_id` and frees its slot.
    pub async fn release(
        &self,
        registration_id: Uuid,
        requester_id: Uuid,
    ) -> Result<Registration, ServiceError> {
        match self.registrations.release(registration_id, requester_id).await? {
            ReleaseOutcome::Released(entity) => {
                counter!("registrations_released_total").increment(1);
                info!(
                    registration_id = %entity.id,
                    user_id = %requester_id,
                    slot_id = %entity.time_slot_id,
                    "Registration released"
                );
                Ok(entity.into())
            }
            ReleaseOutcome::NotFound => Err(SchedulingError::not_found("Registration").into()),
            ReleaseOutcome::NotOwner => Err(SchedulingError::permission_denied(
                "You can only cancel your own registrations",
            )
            .into()),
        }
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserRegistration>, ServiceError> {
        let rows = self.registrations.list_for_user(user_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

fn claim_outcome_label(outcome: &ClaimOutcome) -> &'static str {
    match outcome {
        ClaimOutcome::Claimed(_) => "claimed",
        ClaimOutcome::EventNotFound | ClaimOutcome::SlotNotFound => "not_found",
        ClaimOutcome::SlotUnavailable => "unavailable",
        ClaimOutcome::AlreadyRegistered => "duplicate",
    }
}
