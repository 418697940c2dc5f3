//! Daily plan (engine output) model.
//!
//! A plan is the complete result of one optimization run: the assignments
//! made and the schedules left unserved. Plans are produced wholesale by an
//! [`AssignmentStrategy`](crate::assignment::AssignmentStrategy) and never
//! updated incrementally; a new run replaces the previous plan.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::clock::{format_clock, TimeWindow};
use crate::constraints::ViolationKind;
use crate::scoring::ScoreBreakdown;

/// A unit committed to one scheduled departure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Run date.
    pub date: NaiveDate,
    /// Served schedule ID.
    pub schedule_id: String,
    /// Route of the schedule (denormalized for query convenience).
    pub route_id: String,
    /// Assigned unit ID.
    pub unit_id: String,
    /// Departure to projected return (minutes since midnight).
    pub window: TimeWindow,
    /// Scores that won the unit this departure.
    pub score: ScoreBreakdown,
    /// Round-trip fuel cost.
    pub fuel_cost: f64,
}

/// Notable strengths of an assignment, used to explain the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Highlight {
    /// Capacity score >= 0.9.
    BestFitCapacity,
    /// Distance score >= 0.9.
    ShortRoute,
    /// Cost score >= 0.8.
    CostEfficient,
}

/// A schedule no unit could serve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnservedSchedule {
    /// Schedule ID.
    pub schedule_id: String,
    /// Route of the schedule.
    pub route_id: String,
    /// Departure time (minutes since midnight).
    pub departure_min: i64,
    /// Distinct reasons units were rejected, sorted. Empty if there were no units.
    pub reasons: Vec<ViolationKind>,
}

/// Complete result of one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Run date.
    pub date: NaiveDate,
    /// Assignments in processing order.
    pub assignments: Vec<Assignment>,
    /// Schedules left unserved, in processing order.
    pub unserved: Vec<UnservedSchedule>,
}

impl Assignment {
    /// Departure time (minutes).
    #[inline]
    pub fn departure_min(&self) -> i64 {
        self.window.start_min
    }

    /// Projected return time (minutes).
    #[inline]
    pub fn return_min(&self) -> i64 {
        self.window.end_min
    }

    /// Cycle time of the trip (minutes).
    #[inline]
    pub fn cycle_time_min(&self) -> i64 {
        self.window.duration_min()
    }

    /// Strengths of this assignment.
    pub fn highlights(&self) -> Vec<Highlight> {
        let mut out = Vec::new();
        if self.score.capacity >= 0.9 {
            out.push(Highlight::BestFitCapacity);
        }
        if self.score.distance >= 0.9 {
            out.push(Highlight::ShortRoute);
        }
        if self.score.cost >= 0.8 {
            out.push(Highlight::CostEfficient);
        }
        out
    }

    /// One-line explanation of the choice.
    pub fn reason(&self) -> String {
        let highlights = self.highlights();
        if highlights.is_empty() {
            return format!("highest score {:.2}", self.score.composite);
        }
        let parts: Vec<&str> = highlights.iter().map(|h| h.label()).collect();
        format!(
            "highest score {:.2}: {}",
            self.score.composite,
            parts.join(", ")
        )
    }
}

impl Highlight {
    /// Short label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BestFitCapacity => "capacity fits",
            Self::ShortRoute => "short route",
            Self::CostEfficient => "cost efficient",
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({}) {} score={:.3}",
            self.schedule_id, self.unit_id, self.route_id, self.window, self.score.composite
        )
    }
}

impl std::fmt::Display for UnservedSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} at {}) unserved",
            self.schedule_id,
            self.route_id,
            format_clock(self.departure_min)
        )
    }
}

impl DailyPlan {
    /// Creates an empty plan for `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            assignments: Vec::new(),
            unserved: Vec::new(),
        }
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Records an unserved schedule.
    pub fn add_unserved(&mut self, unserved: UnservedSchedule) {
        self.unserved.push(unserved);
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether every schedule was served.
    pub fn is_fully_served(&self) -> bool {
        self.unserved.is_empty()
    }

    /// Finds the assignment for a schedule.
    pub fn assignment_for_schedule(&self, schedule_id: &str) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.schedule_id == schedule_id)
    }

    /// Returns all assignments of a unit.
    pub fn assignments_for_unit(&self, unit_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.unit_id == unit_id)
            .collect()
    }

    /// IDs of unserved schedules, in processing order.
    pub fn unserved_ids(&self) -> Vec<&str> {
        self.unserved.iter().map(|u| u.schedule_id.as_str()).collect()
    }

    /// Distinct units used.
    pub fn units_used(&self) -> BTreeSet<&str> {
        self.assignments.iter().map(|a| a.unit_id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 5, 15).unwrap()
    }

    fn score(capacity: f64, distance: f64, cost: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            capacity,
            distance,
            availability: 1.0,
            cost,
            composite: 0.75,
        }
    }

    fn assignment(schedule: &str, unit: &str, start: i64, end: i64) -> Assignment {
        Assignment {
            date: date(),
            schedule_id: schedule.into(),
            route_id: "R1".into(),
            unit_id: unit.into(),
            window: TimeWindow::new(start, end),
            score: score(0.5, 0.5, 0.5),
            fuel_cost: 100.0,
        }
    }

    fn sample_plan() -> DailyPlan {
        let mut p = DailyPlan::new(date());
        p.add_assignment(assignment("S1", "U1", 360, 480));
        p.add_assignment(assignment("S2", "U2", 400, 520));
        p.add_assignment(assignment("S3", "U1", 600, 720));
        p.add_unserved(UnservedSchedule {
            schedule_id: "S4".into(),
            route_id: "R2".into(),
            departure_min: 420,
            reasons: vec![ViolationKind::InsufficientCapacity],
        });
        p
    }

    #[test]
    fn test_plan_queries() {
        let p = sample_plan();
        assert_eq!(p.assignment_count(), 3);
        assert!(!p.is_fully_served());
        assert_eq!(p.assignment_for_schedule("S2").unwrap().unit_id, "U2");
        assert!(p.assignment_for_schedule("S4").is_none());
        assert_eq!(p.assignments_for_unit("U1").len(), 2);
        assert_eq!(p.unserved_ids(), vec!["S4"]);
        assert_eq!(p.units_used().into_iter().collect::<Vec<_>>(), vec!["U1", "U2"]);
    }

    #[test]
    fn test_assignment_times() {
        let a = assignment("S1", "U1", 360, 480);
        assert_eq!(a.departure_min(), 360);
        assert_eq!(a.return_min(), 480);
        assert_eq!(a.cycle_time_min(), 120);
    }

    #[test]
    fn test_highlights_and_reason() {
        let mut a = assignment("S1", "U1", 360, 480);
        assert!(a.highlights().is_empty());
        assert_eq!(a.reason(), "highest score 0.75");

        a.score = score(1.0, 0.95, 0.85);
        assert_eq!(
            a.highlights(),
            vec![
                Highlight::BestFitCapacity,
                Highlight::ShortRoute,
                Highlight::CostEfficient
            ]
        );
        assert_eq!(
            a.reason(),
            "highest score 0.75: capacity fits, short route, cost efficient"
        );
    }

    #[test]
    fn test_display() {
        let p = sample_plan();
        assert_eq!(
            p.assignments[0].to_string(),
            "S1 -> U1 (R1) 06:00-08:00 score=0.750"
        );
        assert_eq!(p.unserved[0].to_string(), "S4 (R2 at 07:00) unserved");
    }

    #[test]
    fn test_empty_plan() {
        let p = DailyPlan::new(date());
        assert_eq!(p.assignment_count(), 0);
        assert!(p.is_fully_served());
        assert!(p.units_used().is_empty());
    }
}
