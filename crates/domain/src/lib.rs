//! Domain layer for the Slotkeeper backend.
//!
//! This crate contains:
//! - Domain models (Event, TimeSlot, Registration, User)
//! - Pure scheduling services (slot generation, access policy)
//! - The scheduling error taxonomy

pub mod errors;
pub mod models;
pub mod services;

pub use errors::SchedulingError;
