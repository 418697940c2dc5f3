//! Plan quality metrics and threshold alerts.
//!
//! Computes fleet performance indicators from a completed [`DailyPlan`]
//! and the inputs it was built from. All values are read-only aggregations.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Coverage Rate | served schedules / total schedules * 100 |
//! | Utilization Rate | distinct units used / total units * 100 |
//! | Average Score | mean composite score over assignments |
//! | Total Fuel Cost | sum of round-trip fuel cost |
//! | Idle Time | max operating minutes - working minutes, per unit |
//!
//! Rates over an empty denominator are 0.
//!
//! # Reference
//! Ceder (2016), "Public Transit Planning and Operation": Vehicle Scheduling

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::{DailyPlan, OperationalParameters, Route, Schedule, Unit};

/// Fleet performance indicators for one plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetMetrics {
    /// Departures to serve.
    pub total_schedules: usize,
    /// Departures with an assigned unit.
    pub served_schedules: usize,
    /// Served / total * 100 (0..=100).
    pub coverage_rate: f64,
    /// Fleet size.
    pub units_total: usize,
    /// Distinct units with at least one assignment.
    pub units_used: usize,
    /// Units with status `Available`.
    pub units_available: usize,
    /// Used / total * 100 (0..=100).
    pub utilization_rate: f64,
    /// Mean composite score of the assignments (0 if none).
    pub average_score: f64,
    /// Sum of round-trip fuel cost.
    pub total_fuel_cost: f64,
    /// Sum of round-trip distance (km).
    pub total_distance_km: f64,
    /// Sum of round-trip fuel volume (litres).
    pub total_fuel_volume: f64,
    /// Fuel cost per assignment (0 if none).
    pub average_fuel_cost: f64,
    /// Fuel cost per driven km (0 if nothing driven).
    pub fuel_cost_per_km: f64,
    /// Cycle minutes per unit.
    pub working_minutes: BTreeMap<String, i64>,
    /// Unused operating minutes per unit, never negative.
    pub idle_minutes: BTreeMap<String, i64>,
    /// Sum of idle minutes.
    pub total_idle_minutes: i64,
    /// Mean idle minutes over all units, used or not (0 if no units).
    pub average_idle_minutes: f64,
}

impl FleetMetrics {
    /// Computes metrics from a plan and its inputs.
    ///
    /// # Arguments
    /// * `plan` - The completed plan.
    /// * `units` - The whole fleet, including units left idle.
    /// * `routes` - Route catalogue (for distances).
    /// * `schedules` - Departures the plan was built for.
    /// * `params` - Parameters of the run (for the operating window).
    pub fn calculate(
        plan: &DailyPlan,
        units: &[Unit],
        routes: &[Route],
        schedules: &[Schedule],
        params: &OperationalParameters,
    ) -> Self {
        let routes: HashMap<&str, &Route> = routes.iter().map(|r| (r.id.as_str(), r)).collect();
        let fleet: HashMap<&str, &Unit> = units.iter().map(|u| (u.id.as_str(), u)).collect();

        let total_schedules = schedules.len();
        let served_schedules = plan.assignment_count();
        let units_total = units.len();
        let units_used = plan.units_used().len();
        let units_available = units.iter().filter(|u| u.is_available()).count();

        let mut total_fuel_cost = 0.0;
        let mut total_distance_km = 0.0;
        let mut total_fuel_volume = 0.0;
        let mut score_sum = 0.0;
        let mut working_minutes: BTreeMap<String, i64> =
            units.iter().map(|u| (u.id.clone(), 0)).collect();

        for assignment in &plan.assignments {
            total_fuel_cost += assignment.fuel_cost;
            score_sum += assignment.score.composite;
            *working_minutes
                .entry(assignment.unit_id.clone())
                .or_insert(0) += assignment.cycle_time_min().max(0);

            if let Some(route) = routes.get(assignment.route_id.as_str()) {
                total_distance_km += route.round_trip_km();
                if let Some(unit) = fleet.get(assignment.unit_id.as_str()) {
                    total_fuel_volume += unit.round_trip_fuel(route.distance_km);
                }
            }
        }

        let max_minutes = params.max_operating_minutes();
        let idle_minutes: BTreeMap<String, i64> = units
            .iter()
            .map(|u| {
                let worked = working_minutes.get(&u.id).copied().unwrap_or(0);
                (u.id.clone(), (max_minutes - worked).max(0))
            })
            .collect();
        let total_idle_minutes: i64 = idle_minutes.values().sum();

        Self {
            total_schedules,
            served_schedules,
            coverage_rate: percent(served_schedules, total_schedules),
            units_total,
            units_used,
            units_available,
            utilization_rate: percent(units_used, units_total),
            average_score: ratio(score_sum, served_schedules as f64),
            total_fuel_cost,
            total_distance_km,
            total_fuel_volume,
            average_fuel_cost: ratio(total_fuel_cost, served_schedules as f64),
            fuel_cost_per_km: ratio(total_fuel_cost, total_distance_km),
            working_minutes,
            idle_minutes,
            total_idle_minutes,
            average_idle_minutes: ratio(total_idle_minutes as f64, units_total as f64),
        }
    }

    /// Whether the plan meets every threshold.
    pub fn meets_thresholds(&self, thresholds: &AlertThresholds) -> bool {
        self.alerts(thresholds).is_empty()
    }

    /// Alerts for every threshold the plan falls short of.
    pub fn alerts(&self, thresholds: &AlertThresholds) -> Vec<Alert> {
        let mut alerts = Vec::new();
        if self.coverage_rate < thresholds.min_coverage_rate {
            alerts.push(Alert {
                kind: AlertKind::LowCoverage,
                severity: Severity::Warning,
                message: format!(
                    "Coverage rate {:.1}% is below the minimum {:.1}%",
                    self.coverage_rate, thresholds.min_coverage_rate
                ),
            });
        }
        if self.utilization_rate < thresholds.min_utilization_rate {
            alerts.push(Alert {
                kind: AlertKind::LowUtilization,
                severity: Severity::Info,
                message: format!(
                    "Utilization rate {:.1}% is below the target {:.1}%",
                    self.utilization_rate, thresholds.min_utilization_rate
                ),
            });
        }
        if self.average_score < thresholds.min_average_score {
            alerts.push(Alert {
                kind: AlertKind::LowScore,
                severity: Severity::Warning,
                message: format!(
                    "Average score {:.2} is below the minimum {:.2}",
                    self.average_score, thresholds.min_average_score
                ),
            });
        }
        alerts
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    ratio(part as f64 * 100.0, whole as f64)
}

/// Minimum acceptable plan quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    /// Minimum coverage rate (%).
    pub min_coverage_rate: f64,
    /// Minimum utilization rate (%).
    pub min_utilization_rate: f64,
    /// Minimum average composite score.
    pub min_average_score: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            min_coverage_rate: 80.0,
            min_utilization_rate: 60.0,
            min_average_score: 0.6,
        }
    }
}

/// Which threshold an alert refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertKind {
    /// Too few schedules served.
    LowCoverage,
    /// Too few units in use.
    LowUtilization,
    /// Assignments are poor matches on average.
    LowScore,
}

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational.
    Info,
    /// Needs attention.
    Warning,
}

/// A threshold the plan falls short of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Threshold concerned.
    pub kind: AlertKind,
    /// Severity.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.severity, self.message)
    }
}
