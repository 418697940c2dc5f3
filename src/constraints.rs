//! Hard-constraint filter.
//!
//! Decides whether a unit may serve a scheduled departure given the
//! commitments already made in the current run. A unit is eligible iff:
//! - its status is `Available`,
//! - the route is in its permitted set,
//! - its capacity covers the route's required capacity,
//! - the trip fits in what is left of its daily operating window,
//! - the trip does not clash with a committed trip (rest gap included),
//! - it has not reached the per-run trip cap, if one is set.
//!
//! Every check runs, so a rejection lists all reasons at once.
//! The filter is a pure predicate: it only reads the ledger.

use serde::{Deserialize, Serialize};

use crate::ledger::CommitmentLedger;
use crate::models::{format_clock, OperationalParameters, Route, Schedule, TimeWindow, Unit};

/// Why a unit was rejected for a departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Unit status is not `Available`.
    UnitUnavailable,
    /// Route is not in the unit's permitted set.
    RouteNotPermitted,
    /// Unit capacity is below the route's requirement.
    InsufficientCapacity,
    /// Trip would push the unit past its daily operating hours.
    OperatingHoursExceeded,
    /// Trip clashes with one the unit already serves.
    TimeConflict,
    /// Unit already has the maximum number of trips.
    TripLimitReached,
}

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Failed check.
    pub kind: ViolationKind,
    /// Rejected unit.
    pub unit_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Outcome of checking one unit against one departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    /// Checked unit.
    pub unit_id: String,
    /// Trip window the unit would occupy.
    pub window: TimeWindow,
    /// Failed checks. Empty = eligible.
    pub violations: Vec<Violation>,
}

impl Eligibility {
    /// Whether all checks passed.
    #[inline]
    pub fn is_eligible(&self) -> bool {
        self.violations.is_empty()
    }

    /// Kinds of the failed checks.
    pub fn kinds(&self) -> Vec<ViolationKind> {
        self.violations.iter().map(|v| v.kind).collect()
    }
}

/// Checks unit/departure pairs against the hard constraints.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintFilter<'a> {
    params: &'a OperationalParameters,
}

impl<'a> ConstraintFilter<'a> {
    /// Creates a filter for the given parameters.
    pub fn new(params: &'a OperationalParameters) -> Self {
        Self { params }
    }

    /// Trip window of a departure: departure to departure + cycle time.
    pub fn trip_window(&self, schedule: &Schedule, route: &Route) -> TimeWindow {
        TimeWindow::starting_at(
            schedule.departure_min,
            route.cycle_time_min(self.params.turnaround_minutes),
        )
    }

    /// Checks whether `unit` may serve `schedule` on `route`.
    pub fn check(
        &self,
        unit: &Unit,
        schedule: &Schedule,
        route: &Route,
        ledger: &CommitmentLedger,
    ) -> Eligibility {
        let window = self.trip_window(schedule, route);
        let mut violations = Vec::new();
        let mut reject = |kind, message: String| {
            violations.push(Violation {
                kind,
                unit_id: unit.id.clone(),
                message,
            })
        };

        if !unit.is_available() {
            reject(
                ViolationKind::UnitUnavailable,
                format!("Unit '{}' is {}", unit.id, unit.status),
            );
        }

        if !unit.is_permitted(&route.id) {
            reject(
                ViolationKind::RouteNotPermitted,
                format!("Unit '{}' is not permitted on route '{}'", unit.id, route.id),
            );
        }

        if unit.capacity < route.required_capacity {
            reject(
                ViolationKind::InsufficientCapacity,
                format!(
                    "Unit '{}' capacity {} is below required {}",
                    unit.id, unit.capacity, route.required_capacity
                ),
            );
        }

        let committed = ledger.committed_minutes(&unit.id);
        let limit = self.params.max_operating_minutes();
        if committed + window.duration_min() > limit {
            reject(
                ViolationKind::OperatingHoursExceeded,
                format!(
                    "Unit '{}' would operate {} min (limit {} min)",
                    unit.id,
                    committed + window.duration_min(),
                    limit
                ),
            );
        }

        if let Some(clash) =
            ledger.first_conflict(&unit.id, &window, self.params.minimum_rest_minutes)
        {
            reject(
                ViolationKind::TimeConflict,
                format!(
                    "Unit '{}' trip {} clashes with schedule '{}' ({})",
                    unit.id, window, clash.schedule_id, clash.window
                ),
            );
        }

        if let Some(max_trips) = self.params.max_trips_per_unit {
            let trips = ledger.trip_count(&unit.id);
            if trips >= max_trips as usize {
                reject(
                    ViolationKind::TripLimitReached,
                    format!(
                        "Unit '{}' already has {} trip(s) before {}",
                        unit.id,
                        trips,
                        format_clock(schedule.departure_min)
                    ),
                );
            }
        }

        Eligibility {
            unit_id: unit.id.clone(),
            window,
            violations,
        }
    }
}
