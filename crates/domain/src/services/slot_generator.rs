//! Time-slot generation.
//!
//! An event's `[start, end)` window is cut into fixed-width slots starting at
//! `start`. Slots never overlap, never leave gaps, and never extend past
//! `end`; a trailing remainder shorter than one slot is dropped. Generation is
//! pure, so regenerating the same window always yields the same sequence.

use chrono::{Duration, NaiveTime};
use shared::wall_clock::{format_wall_clock, parse_wall_clock};

use crate::errors::SchedulingError;

/// Slot width used when none is configured.
pub const DEFAULT_SLOT_WIDTH_MINUTES: u32 = 30;

/// Generated slot times plus notes for the organizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPlan {
    pub times: Vec<NaiveTime>,
    pub warnings: Vec<String>,
}

impl SlotPlan {
    pub fn slot_count(&self) -> usize {
        self.times.len()
    }
}

/// Returns the ordered slot start times for `[start, end)`.
///
/// A window shorter than one slot produces no slots and is not an error.
pub fn generate_slots(
    start: NaiveTime,
    end: NaiveTime,
    width_minutes: u32,
) -> Result<Vec<NaiveTime>, SchedulingError> {
    if width_minutes == 0 {
        return Err(SchedulingError::Validation(
            "Slot width must be at least one minute".to_string(),
        ));
    }
    if start >= end {
        return Err(SchedulingError::InvalidTimeRange {
            start: format_wall_clock(&start),
            end: format_wall_clock(&end),
        });
    }

    let width = Duration::minutes(i64::from(width_minutes));
    let mut slots = Vec::new();
    let mut current = start;

    loop {
        let (next, wrapped) = current.overflowing_add_signed(width);
        if wrapped != 0 || next > end {
            break;
        }
        slots.push(current);
        current = next;
    }

    Ok(slots)
}

/// Parses both ends of a window given as `HH:MM` strings.
pub fn parse_window(start: &str, end: &str) -> Result<(NaiveTime, NaiveTime), SchedulingError> {
    let start = parse_wall_clock(start).map_err(|e| SchedulingError::Validation(e.to_string()))?;
    let end = parse_wall_clock(end).map_err(|e| SchedulingError::Validation(e.to_string()))?;
    Ok((start, end))
}

/// String-in, string-out variant of [`generate_slots`].
pub fn generate_slot_labels(
    start: &str,
    end: &str,
    width_minutes: u32,
) -> Result<Vec<String>, SchedulingError> {
    let (start, end) = parse_window(start, end)?;
    let slots = generate_slots(start, end, width_minutes)?;
    Ok(slots.iter().map(format_wall_clock).collect())
}

/// Generates slots for an event and collects warnings about likely organizer
/// mistakes. `declared_total` is the event's advisory slot count.
pub fn plan_slots(
    start: NaiveTime,
    end: NaiveTime,
    width_minutes: u32,
    declared_total: i32,
) -> Result<SlotPlan, SchedulingError> {
    let times = generate_slots(start, end, width_minutes)?;
    let mut warnings = Vec::new();

    if times.is_empty() {
        warnings.push(format!(
            "Window {}-{} is shorter than one {}-minute slot; no slots were created",
            format_wall_clock(&start),
            format_wall_clock(&end),
            width_minutes
        ));
    }

    if usize::try_from(declared_total).ok() != Some(times.len()) {
        warnings.push(format!(
            "Declared total_slots {} differs from the {} slots generated",
            declared_total,
            times.len()
        ));
    }

    Ok(SlotPlan { times, warnings })
}
