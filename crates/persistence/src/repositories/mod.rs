//! Repository implementations for database operations.

pub mod event;
pub mod group;
pub mod registration;
pub mod time_slot;
pub mod user;

pub use event::{EventFields, EventRepository};
pub use group::GroupRepository;
pub use registration::{ClaimOutcome, RegistrationRepository, ReleaseOutcome};
pub use time_slot::TimeSlotRepository;
pub use user::{NewUser, UserRepository};
