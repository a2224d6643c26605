//! Application services.
//!
//! Services own the transactions: each public operation either commits all of
//! its writes or none of them.

pub mod admin_bootstrap;
pub mod auth;
pub mod event_lifecycle;
pub mod slot_allocation;
pub mod user_admin;

use domain::SchedulingError;
use thiserror::Error;

pub use auth::AuthService;
pub use event_lifecycle::EventLifecycleService;
pub use slot_allocation::SlotAllocationService;
pub use user_admin::UserAdminService;

/// Error returned by scheduling services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Scheduling(#[from] SchedulingError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
