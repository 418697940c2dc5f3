//! Clock times and trip windows.
//!
//! # Time Model
//! All times are integer minutes since midnight of the run date.
//! A trip that runs past midnight simply carries a value above 1440
//! (rendered as `25:15`, not wrapped), so windows on the same run date
//! always compare correctly.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::FleetError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses an `HH:MM` clock string into minutes since midnight.
///
/// # Errors
/// Returns [`FleetError::InvalidClock`] if the text is not a valid 24-hour time.
pub fn parse_clock(text: &str) -> Result<i64, FleetError> {
    let time = NaiveTime::parse_from_str(text.trim(), "%H:%M")
        .map_err(|_| FleetError::InvalidClock(text.to_string()))?;
    Ok(i64::from(time.hour()) * 60 + i64::from(time.minute()))
}

/// Renders minutes since midnight as `HH:MM`.
///
/// Values past midnight are not wrapped: `1515` renders as `25:15`.
pub fn format_clock(minutes: i64) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    format!("{hours:02}:{mins:02}")
}

/// Serde adapter storing minute values as `HH:MM` strings.
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Departure {
///     #[serde(with = "u_fleet::models::hhmm")]
///     at_min: i64,
/// }
/// ```
pub mod hhmm {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes minutes as `HH:MM`.
    pub fn serialize<S: Serializer>(minutes: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_clock(*minutes))
    }

    /// Deserializes `HH:MM` into minutes.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_clock(&text).map_err(serde::de::Error::custom)
    }
}

/// A trip interval in minutes since midnight.
///
/// For an assignment, `start_min` is the departure and `end_min` the
/// projected return to the depot. Both endpoints count for [`contains`],
/// but a shared endpoint is a handover, not an overlap: see
/// [`conflicts_with`].
///
/// [`contains`]: TimeWindow::contains
/// [`conflicts_with`]: TimeWindow::conflicts_with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window start (minutes, inclusive).
    pub start_min: i64,
    /// Window end (minutes, inclusive).
    pub end_min: i64,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start_min: i64, end_min: i64) -> Self {
        Self { start_min, end_min }
    }

    /// Window starting at `start_min` and lasting `duration_min`.
    pub fn starting_at(start_min: i64, duration_min: i64) -> Self {
        Self::new(start_min, start_min + duration_min)
    }

    /// Duration of this window (minutes).
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.end_min - self.start_min
    }

    /// Whether a time falls within this window.
    #[inline]
    pub fn contains(&self, time_min: i64) -> bool {
        time_min >= self.start_min && time_min <= self.end_min
    }

    /// Whether two windows clash when at least `gap_min` must separate them.
    ///
    /// Windows clash unless one ends at least `gap_min` minutes before the
    /// other starts. With `gap_min = 0`, back-to-back windows (one ending
    /// exactly when the other starts) do not clash even though both contain
    /// the shared minute.
    pub fn conflicts_with(&self, other: &Self, gap_min: i64) -> bool {
        !(self.end_min + gap_min <= other.start_min || other.end_min + gap_min <= self.start_min)
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            format_clock(self.start_min),
            format_clock(self.end_min)
        )
    }
}
