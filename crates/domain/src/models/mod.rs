//! Domain models for Slotkeeper.

pub mod event;
pub mod group;
pub mod registration;
pub mod time_slot;
pub mod user;

pub use event::{Event, EventDraft, EventRequest};
pub use group::StudentGroup;
pub use registration::Registration;
pub use time_slot::{SlotStatus, TimeSlot};
pub use user::{User, UserRole};
