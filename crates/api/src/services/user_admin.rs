//! User administration: role changes, listing and cascading deletion.

use domain::models::{User, UserRole};
use domain::SchedulingError;
use persistence::repositories::{EventRepository, RegistrationRepository, UserRepository};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::event_lifecycle::remove_event;
use super::ServiceError;

/// What deleting a user removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserRemoval {
    pub events_deleted: usize,
    /// Other users' registrations dropped with the deleted user's events.
    pub registrations_cancelled: u64,
    /// The deleted user's own registrations; their slots became available.
    pub registrations_released: u64,
}

pub struct UserAdminService {
    pool: PgPool,
    users: UserRepository,
}

impl UserAdminService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        let rows = self.users.list_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn set_role(&self, user_id: Uuid, role: UserRole) -> Result<User, ServiceError> {
        let user: User = self
            .users
            .set_role(user_id, role)
            .await?
            .ok_or_else(|| SchedulingError::not_found("User"))?
            .into();

        info!(user_id = %user_id, role = %role, "User role changed");
        Ok(user)
    }

    /// Deletes a user in one transaction: every event they organize is
    /// removed with its slots and registrations, their own registrations are
    /// released, then the account row goes.
    pub async fn delete(&self, user_id: Uuid, admin_id: Uuid) -> Result<UserRemoval, ServiceError> {
        if user_id == admin_id {
            return Err(SchedulingError::permission_denied(
                "Admins cannot delete their own account",
            )
            .into());
        }

        let mut tx = self.pool.begin().await?;

        UserRepository::lock_by_id(&mut tx, user_id)
            .await?
            .ok_or_else(|| SchedulingError::not_found("User"))?;

        let mut removal = UserRemoval::default();
        for event_id in EventRepository::lock_ids_by_organizer(&mut tx, user_id).await? {
            let event = remove_event(&mut tx, event_id).await?;
            removal.events_deleted += 1;
            removal.registrations_cancelled += event.cancelled_registrations;
        }
        removal.registrations_released =
            RegistrationRepository::release_all_for_user(&mut tx, user_id).await?;
        UserRepository::delete(&mut tx, user_id).await?;

        tx.commit().await?;

        info!(
            user_id = %user_id,
            admin_id = %admin_id,
            events_deleted = removal.events_deleted,
            registrations_cancelled = removal.registrations_cancelled,
            registrations_released = removal.registrations_released,
            "User deleted"
        );
        Ok(removal)
    }
}
