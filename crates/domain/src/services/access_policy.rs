//! Access policy for scheduling mutations.
//!
//! Predicates are pure. The `ensure_*` variants turn a failed check into
//! `SchedulingError::PermissionDenied` and must run before any mutation.

use uuid::Uuid;

use crate::errors::SchedulingError;
use crate::models::{Event, Registration, UserRole};

/// Admins and group leaders may organize events.
pub fn can_create_event(role: UserRole) -> bool {
    matches!(role, UserRole::Admin | UserRole::Starosta)
}

/// Only the organizer may edit or delete an event. Admins get no override.
pub fn can_modify_event(event: &Event, user_id: Uuid) -> bool {
    event.organizer_id == user_id
}

pub fn can_cancel_registration(registration: &Registration, user_id: Uuid) -> bool {
    registration.user_id == user_id
}

pub fn can_manage_users(role: UserRole) -> bool {
    role.is_admin()
}

pub fn ensure_can_create_event(role: UserRole) -> Result<(), SchedulingError> {
    if can_create_event(role) {
        Ok(())
    } else {
        Err(SchedulingError::permission_denied(
            "Only admins and group leaders can create events",
        ))
    }
}

pub fn ensure_can_modify_event(event: &Event, user_id: Uuid) -> Result<(), SchedulingError> {
    if can_modify_event(event, user_id) {
        Ok(())
    } else {
        Err(SchedulingError::permission_denied(
            "Only the event organizer can modify this event",
        ))
    }
}

pub fn ensure_can_cancel_registration(
    registration: &Registration,
    user_id: Uuid,
) -> Result<(), SchedulingError> {
    if can_cancel_registration(registration, user_id) {
        Ok(())
    } else {
        Err(SchedulingError::permission_denied(
            "You can only cancel your own registrations",
        ))
    }
}

pub fn ensure_can_manage_users(role: UserRole) -> Result<(), SchedulingError> {
    if can_manage_users(role) {
        Ok(())
    } else {
        Err(SchedulingError::permission_denied("Admin access required"))
    }
}
