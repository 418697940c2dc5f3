//! Assignment strategies.
//!
//! An [`AssignmentStrategy`] turns one day's units, routes and schedules into
//! a [`DailyPlan`]. Strategies share the constraint filter and the scoring
//! model; swapping the strategy (e.g. for an exact bipartite matcher) does not
//! touch either.
//!
//! # Algorithm
//!
//! [`GreedyAssignment`] is the default: schedules in priority order, each
//! taking the highest-scoring eligible unit, with no backtracking.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

mod greedy;

pub use greedy::GreedyAssignment;

use chrono::NaiveDate;

use crate::models::{DailyPlan, OperationalParameters, Route, Schedule, Unit};

/// Input of one assignment run, borrowed from the caller.
///
/// `schedules` holds only the departures to plan for `date`; day filtering
/// happens before a strategy sees them.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentProblem<'a> {
    /// Run date, stamped on every assignment.
    pub date: NaiveDate,
    /// Fleet.
    pub units: &'a [Unit],
    /// Route catalogue.
    pub routes: &'a [Route],
    /// Departures to serve.
    pub schedules: &'a [Schedule],
}

impl<'a> AssignmentProblem<'a> {
    /// Creates a problem.
    pub fn new(
        date: NaiveDate,
        units: &'a [Unit],
        routes: &'a [Route],
        schedules: &'a [Schedule],
    ) -> Self {
        Self {
            date,
            units,
            routes,
            schedules,
        }
    }

    /// Finds a route by ID.
    pub fn route(&self, route_id: &str) -> Option<&'a Route> {
        self.routes.iter().find(|r| r.id == route_id)
    }
}

/// Produces a daily plan from an assignment problem.
///
/// Implementations must be deterministic: the same problem and parameters
/// always give the same plan. Inputs are never modified.
pub trait AssignmentStrategy: Send + Sync + std::fmt::Debug {
    /// Strategy name (e.g., "GREEDY").
    fn name(&self) -> &'static str;

    /// Builds the plan. Parameters are assumed validated.
    fn assign(&self, problem: &AssignmentProblem<'_>, params: &OperationalParameters) -> DailyPlan;
}
