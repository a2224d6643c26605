//! Wall-clock times in strict `HH:MM` form.
//!
//! Event windows and slot labels are times of day without a date or zone.
//! They are stored as `TIME` columns and exchanged as two-digit `HH:MM`
//! strings.

use chrono::NaiveTime;
use thiserror::Error;

lazy_static::lazy_static! {
    static ref WALL_CLOCK_REGEX: regex::Regex = regex::Regex::new(r"^\d{2}:\d{2}$").unwrap();
}

const WALL_CLOCK_FORMAT: &str = "%H:%M";

/// Error returned for strings that are not a valid `HH:MM` time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid time '{0}', expected HH:MM")]
pub struct WallClockError(pub String);

/// Parses a strict `HH:MM` string (`"9:00"` and `"09:00:00"` are rejected).
pub fn parse_wall_clock(value: &str) -> Result<NaiveTime, WallClockError> {
    if !WALL_CLOCK_REGEX.is_match(value) {
        return Err(WallClockError(value.to_string()));
    }
    NaiveTime::parse_from_str(value, WALL_CLOCK_FORMAT).map_err(|_| WallClockError(value.to_string()))
}

/// Formats a time as `HH:MM`, dropping seconds.
pub fn format_wall_clock(time: &NaiveTime) -> String {
    time.format(WALL_CLOCK_FORMAT).to_string()
}

/// Serde adapter for `NaiveTime` fields exchanged as `HH:MM`.
///
/// ```ignore
/// #[serde(with = "shared::wall_clock::hhmm")]
/// pub start_time: NaiveTime,
/// ```
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_wall_clock(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_wall_clock(&raw).map_err(serde::de::Error::custom)
    }
}
