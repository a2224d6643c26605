//! Pure scheduling services.

pub mod access_policy;
pub mod slot_generator;

pub use slot_generator::{
    generate_slot_labels, generate_slots, parse_window, plan_slots, SlotPlan,
    DEFAULT_SLOT_WIDTH_MINUTES,
};
