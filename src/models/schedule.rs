//! Timetabled departure model.
//!
//! A schedule is one recurring departure on a route: "R001 leaves at 07:00
//! on weekdays". Each run of the engine serves a single date, so only the
//! schedules operating on that weekday are considered.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::clock::hhmm;

/// All seven days, Monday first.
pub const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A recurring departure on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Unique schedule identifier.
    pub id: String,
    /// Route served by this departure.
    pub route_id: String,
    /// Departure time (minutes since midnight, `HH:MM` on the wire).
    #[serde(with = "hhmm")]
    pub departure_min: i64,
    /// Days this departure runs. Empty = never.
    pub operating_days: Vec<Weekday>,
    /// Dispatch priority (higher = served first).
    pub priority: i32,
}

impl Schedule {
    /// Creates a daily departure with priority 0.
    pub fn new(id: impl Into<String>, route_id: impl Into<String>, departure_min: i64) -> Self {
        Self {
            id: id.into(),
            route_id: route_id.into(),
            departure_min,
            operating_days: ALL_DAYS.to_vec(),
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Restricts the departure to the given days.
    pub fn on_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.operating_days = days.into_iter().collect();
        self
    }

    /// Whether this departure runs on `day`.
    #[inline]
    pub fn operates_on(&self, day: Weekday) -> bool {
        self.operating_days.contains(&day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_defaults_to_daily() {
        let s = Schedule::new("S001", "R001", 360).with_priority(2);
        assert_eq!(s.route_id, "R001");
        assert_eq!(s.priority, 2);
        for day in ALL_DAYS {
            assert!(s.operates_on(day));
        }
    }

    #[test]
    fn test_operating_days() {
        let s = Schedule::new("S012", "R005", 480).on_days([Weekday::Sat, Weekday::Sun]);
        assert!(s.operates_on(Weekday::Sat));
        assert!(!s.operates_on(Weekday::Mon));

        let never = Schedule::new("S0", "R0", 0).on_days(Vec::new());
        assert!(!never.operates_on(Weekday::Mon));
    }

    #[test]
    fn test_departure_serialized_as_clock() {
        let s = Schedule::new("S001", "R001", 450).on_days([Weekday::Mon]);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"departure_min\":\"07:30\""));

        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back.departure_min, 450);
        assert_eq!(back.operating_days, vec![Weekday::Mon]);
    }
}
