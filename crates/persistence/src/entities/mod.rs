//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod event;
pub mod group;
pub mod registration;
pub mod time_slot;
pub mod user;

pub use event::EventEntity;
pub use group::StudentGroupEntity;
pub use registration::{RegistrationEntity, UserRegistrationEntity};
pub use time_slot::TimeSlotEntity;
pub use user::{UserEntity, UserRoleDb};
