//! Greedy priority-driven assignment.
//!
//! # Algorithm
//!
//! 1. Sort schedules by priority (descending), then schedule ID (ascending).
//! 2. For each schedule, run the constraint filter on every unit.
//! 3. Score the eligible units. Among those within `SCORE_EPSILON` of the
//!    best composite, the lowest unit ID wins, whatever the unit order.
//! 4. Commit the winner's trip window to the run ledger.
//! 5. A schedule with no eligible unit is recorded as unserved, together
//!    with the distinct rejection reasons.
//!
//! Commitments are final. A later schedule never displaces an earlier one,
//! even when reshuffling would serve more departures.
//!
//! # Complexity
//! O(s log s + s * u * k) where s=schedules, u=units, k=trips per unit.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info, trace, warn};

use super::{AssignmentProblem, AssignmentStrategy};
use crate::constraints::{ConstraintFilter, ViolationKind};
use crate::ledger::CommitmentLedger;
use crate::models::{
    Assignment, DailyPlan, OperationalParameters, Route, Schedule, TimeWindow, Unit,
    UnservedSchedule,
};
use crate::scoring::{ScoreBreakdown, ScoringContext, ScoringModel};

/// Composite scores closer than this are treated as equal.
const SCORE_EPSILON: f64 = 1e-9;

/// Greedy, non-backtracking assignment.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_fleet::assignment::{AssignmentProblem, AssignmentStrategy, GreedyAssignment};
/// use u_fleet::models::{OperationalParameters, Route, Schedule, Unit};
///
/// let units = vec![Unit::new("U1").with_capacity(45).permit_route("R1")];
/// let routes = vec![Route::new("R1", 25.0, 45).with_required_capacity(40)];
/// let schedules = vec![Schedule::new("S1", "R1", 7 * 60)];
/// let date = NaiveDate::from_ymd_opt(2023, 5, 15).unwrap();
///
/// let problem = AssignmentProblem::new(date, &units, &routes, &schedules);
/// let plan = GreedyAssignment::new().assign(&problem, &OperationalParameters::default());
/// assert_eq!(plan.assignment_count(), 1);
/// assert_eq!(plan.assignments[0].unit_id, "U1");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAssignment;

/// An eligible unit for a schedule.
struct Candidate<'a> {
    unit: &'a Unit,
    window: TimeWindow,
    score: ScoreBreakdown,
}

/// Picks the lowest-ID candidate among those within `SCORE_EPSILON` of the
/// top composite.
fn select_winner(candidates: Vec<Candidate<'_>>) -> Option<Candidate<'_>> {
    let top = candidates
        .iter()
        .map(|c| c.score.composite)
        .fold(f64::NEG_INFINITY, f64::max);
    candidates
        .into_iter()
        .filter(|c| top - c.score.composite <= SCORE_EPSILON)
        .min_by(|a, b| a.unit.id.cmp(&b.unit.id))
}

impl GreedyAssignment {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }

    /// Schedules in processing order.
    pub fn processing_order(schedules: &[Schedule]) -> Vec<&Schedule> {
        let mut order: Vec<&Schedule> = schedules.iter().collect();
        order.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.id.cmp(&b.id)));
        order
    }

    fn unserved(schedule: &Schedule, reasons: Vec<ViolationKind>) -> UnservedSchedule {
        UnservedSchedule {
            schedule_id: schedule.id.clone(),
            route_id: schedule.route_id.clone(),
            departure_min: schedule.departure_min,
            reasons,
        }
    }
}

impl AssignmentStrategy for GreedyAssignment {
    fn name(&self) -> &'static str {
        "GREEDY"
    }

    fn assign(&self, problem: &AssignmentProblem<'_>, params: &OperationalParameters) -> DailyPlan {
        info!(
            date = %problem.date,
            units = problem.units.len(),
            schedules = problem.schedules.len(),
            "starting greedy assignment"
        );

        let filter = ConstraintFilter::new(params);
        let model = ScoringModel::from_params(params);
        let context = ScoringContext::from_routes(problem.routes);
        let routes: HashMap<&str, &Route> =
            problem.routes.iter().map(|r| (r.id.as_str(), r)).collect();

        let mut ledger = CommitmentLedger::new();
        let mut plan = DailyPlan::new(problem.date);

        for schedule in Self::processing_order(problem.schedules) {
            let Some(route) = routes.get(schedule.route_id.as_str()).copied() else {
                warn!(
                    schedule = %schedule.id,
                    route = %schedule.route_id,
                    "schedule references unknown route"
                );
                plan.add_unserved(Self::unserved(schedule, Vec::new()));
                continue;
            };

            let mut candidates = Vec::new();
            let mut reasons = BTreeSet::new();

            for unit in problem.units {
                let eligibility = filter.check(unit, schedule, route, &ledger);
                if !eligibility.is_eligible() {
                    for violation in &eligibility.violations {
                        trace!(
                            schedule = %schedule.id,
                            unit = %unit.id,
                            kind = ?violation.kind,
                            "{}",
                            violation.message
                        );
                        reasons.insert(violation.kind);
                    }
                    continue;
                }

                candidates.push(Candidate {
                    unit,
                    window: eligibility.window,
                    score: model.score(unit, route, &context),
                });
            }

            match select_winner(candidates) {
                Some(winner) => {
                    ledger.commit(&winner.unit.id, &schedule.id, winner.window);
                    let assignment = Assignment {
                        date: problem.date,
                        schedule_id: schedule.id.clone(),
                        route_id: route.id.clone(),
                        unit_id: winner.unit.id.clone(),
                        window: winner.window,
                        score: winner.score,
                        fuel_cost: params
                            .fuel_cost(route.distance_km, winner.unit.fuel_efficiency),
                    };
                    debug!(%assignment, reason = %assignment.reason(), "assigned");
                    plan.add_assignment(assignment);
                }
                None => {
                    let unserved = Self::unserved(schedule, reasons.into_iter().collect());
                    debug!(%unserved, reasons = ?unserved.reasons, "no eligible unit");
                    plan.add_unserved(unserved);
                }
            }
        }

        info!(
            date = %problem.date,
            assigned = plan.assignment_count(),
            unserved = plan.unserved.len(),
            units_used = ledger.committed_unit_count(),
            "greedy assignment finished"
        );
        plan
    }
}
