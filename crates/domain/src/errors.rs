//! Scheduling error taxonomy.

use thiserror::Error;

/// Errors reported by scheduling operations.
///
/// Every variant is terminal for the operation that raised it; nothing is
/// retried internally and no partial state is left behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    /// Malformed input. Nothing was changed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The event window is empty or inverted.
    #[error("Invalid time range: start {start} must be before end {end}")]
    InvalidTimeRange { start: String, end: String },

    /// Authenticated, but not allowed to do this.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Lost the race for a slot, or the slot was already taken.
    #[error("Time slot is no longer available")]
    SlotUnavailable,

    /// The user already holds a slot for this event.
    #[error("User is already registered for this event")]
    DuplicateRegistration,
}

impl SchedulingError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied(message.into())
    }
}
