//! Optimization entry point.
//!
//! [`FleetOptimizer`] validates a request, runs the configured
//! [`AssignmentStrategy`] and computes [`FleetMetrics`] for the result.
//! Either validation fails up front and nothing is produced, or a complete
//! (possibly partially unserved) plan is returned.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use u_fleet::engine::{FleetOptimizer, OptimizationRequest};
//! use u_fleet::models::{Route, Schedule, Unit};
//!
//! let date = NaiveDate::from_ymd_opt(2023, 5, 15).unwrap();
//! let request = OptimizationRequest::new(
//!     date,
//!     vec![Unit::new("U1").with_capacity(45).permit_route("R1")],
//!     vec![Route::new("R1", 25.0, 45).with_required_capacity(40)],
//!     vec![Schedule::new("S1", "R1", 7 * 60)],
//! );
//!
//! let outcome = FleetOptimizer::new().optimize(&request).unwrap();
//! assert_eq!(outcome.plan.assignment_count(), 1);
//! assert!((outcome.metrics.coverage_rate - 100.0).abs() < 1e-10);
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assignment::{AssignmentProblem, AssignmentStrategy, GreedyAssignment};
use crate::error::FleetError;
use crate::metrics::{Alert, AlertThresholds, FleetMetrics};
use crate::models::{DailyPlan, OperationalParameters, Route, Schedule, Unit};
use crate::validation::validate_input;

/// Input container for one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    /// Run date.
    pub date: NaiveDate,
    /// Fleet.
    pub units: Vec<Unit>,
    /// Route catalogue.
    pub routes: Vec<Route>,
    /// Departures.
    pub schedules: Vec<Schedule>,
    /// Run parameters.
    #[serde(default)]
    pub params: OperationalParameters,
}

impl OptimizationRequest {
    /// Creates a request with default parameters.
    pub fn new(
        date: NaiveDate,
        units: Vec<Unit>,
        routes: Vec<Route>,
        schedules: Vec<Schedule>,
    ) -> Self {
        Self {
            date,
            units,
            routes,
            schedules,
            params: OperationalParameters::default(),
        }
    }

    /// Sets the run parameters.
    pub fn with_params(mut self, params: OperationalParameters) -> Self {
        self.params = params;
        self
    }
}

/// Result of one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationOutcome {
    /// Strategy that built the plan.
    pub strategy: String,
    /// Assignments and unserved schedules.
    pub plan: DailyPlan,
    /// Plan quality.
    pub metrics: FleetMetrics,
}

impl OptimizationOutcome {
    /// IDs of schedules left unserved.
    pub fn unserved_ids(&self) -> Vec<&str> {
        self.plan.unserved_ids()
    }

    /// Threshold alerts for this outcome.
    pub fn alerts(&self, thresholds: &AlertThresholds) -> Vec<Alert> {
        self.metrics.alerts(thresholds)
    }
}

/// Runs assignment strategies over validated requests.
#[derive(Debug)]
pub struct FleetOptimizer {
    strategy: Box<dyn AssignmentStrategy>,
}

impl FleetOptimizer {
    /// Creates an optimizer using [`GreedyAssignment`].
    pub fn new() -> Self {
        Self {
            strategy: Box::new(GreedyAssignment::new()),
        }
    }

    /// Replaces the assignment strategy.
    pub fn with_strategy(mut self, strategy: impl AssignmentStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Name of the active strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Optimizes a request whose schedules are already those of the run date.
    ///
    /// # Errors
    ///
    /// [`FleetError::Configuration`] with every detected issue if the
    /// parameters or records are invalid. No plan is produced in that case.
    pub fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationOutcome, FleetError> {
        self.validate(request)?;
        Ok(self.run(request, &request.schedules))
    }

    /// Optimizes only the schedules operating on the request date's weekday.
    ///
    /// Validation covers the full request; metrics count the filtered
    /// schedules only.
    pub fn optimize_for_date(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationOutcome, FleetError> {
        self.validate(request)?;
        let weekday = request.date.weekday();
        let todays: Vec<Schedule> = request
            .schedules
            .iter()
            .filter(|s| s.operates_on(weekday))
            .cloned()
            .collect();
        info!(
            date = %request.date,
            %weekday,
            operating = todays.len(),
            total = request.schedules.len(),
            "filtered schedules by operating day"
        );
        Ok(self.run(request, &todays))
    }

    fn validate(&self, request: &OptimizationRequest) -> Result<(), FleetError> {
        validate_input(
            &request.units,
            &request.routes,
            &request.schedules,
            &request.params,
        )
        .map_err(|issues| {
            for issue in &issues {
                warn!(kind = ?issue.kind, "{}", issue.message);
            }
            warn!(
                date = %request.date,
                issues = issues.len(),
                "rejected optimization request"
            );
            FleetError::Configuration(issues)
        })
    }

    fn run(&self, request: &OptimizationRequest, schedules: &[Schedule]) -> OptimizationOutcome {
        let problem =
            AssignmentProblem::new(request.date, &request.units, &request.routes, schedules);
        let plan = self.strategy.assign(&problem, &request.params);
        let metrics = FleetMetrics::calculate(
            &plan,
            &request.units,
            &request.routes,
            schedules,
            &request.params,
        );

        info!(
            strategy = self.strategy.name(),
            coverage = format_args!("{:.1}%", metrics.coverage_rate),
            utilization = format_args!("{:.1}%", metrics.utilization_rate),
            average_score = format_args!("{:.3}", metrics.average_score),
            fuel_cost = format_args!("{:.2}", metrics.total_fuel_cost),
            "optimization finished"
        );

        OptimizationOutcome {
            strategy: self.strategy.name().to_string(),
            plan,
            metrics,
        }
    }
}

impl Default for FleetOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
