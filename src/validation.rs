//! Input validation for optimization runs.
//!
//! Checks parameters and input records before any scoring happens.
//! Detects:
//! - Scoring weights that are negative or do not sum to 1.0
//! - Non-positive or negative numeric fields (fuel efficiency, distance, hours, ...)
//! - Duplicate IDs
//! - Schedules referencing unknown routes
//! - Departures outside the run day
//!
//! All issues are collected so the caller sees every problem at once.
//! Weights are never renormalized here: a mismatched sum is the caller's
//! configuration error.

use crate::models::{OperationalParameters, Route, Schedule, Unit, MINUTES_PER_DAY};
use std::collections::HashSet;

/// Tolerance for the weight-sum check.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Upper bound for daily operating hours.
pub const MAX_DAILY_HOURS: f64 = 24.0;

/// Upper bound for travel, turnaround and rest durations (minutes).
pub const MAX_DURATION_MIN: i64 = MINUTES_PER_DAY;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Scoring weights do not sum to 1.0.
    WeightSum,
    /// A scoring weight is negative.
    NegativeWeight,
    /// A field that must be strictly positive is zero, negative, or NaN.
    NonPositiveValue,
    /// A field that must be non-negative is negative or NaN.
    NegativeValue,
    /// A value lies outside its allowed range.
    OutOfRange,
    /// Two entities share the same ID.
    DuplicateId,
    /// A schedule references a route that doesn't exist.
    UnknownRoute,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates operational parameters.
///
/// Checks:
/// 1. Every weight is >= 0
/// 2. Weights sum to 1.0 (within [`WEIGHT_SUM_TOLERANCE`])
/// 3. Turnaround and rest times are in [0, [`MAX_DURATION_MIN`]]
/// 4. Max daily operating hours in (0, [`MAX_DAILY_HOURS`]]
/// 5. Fuel price >= 0 and finite
/// 6. Trip cap, if set, is > 0
pub fn validate_parameters(params: &OperationalParameters) -> ValidationResult {
    let mut errors = Vec::new();
    check_parameters(params, &mut errors);
    into_result(errors)
}

/// Validates a complete run input.
///
/// Checks everything [`validate_parameters`] does, plus:
/// 1. No duplicate unit, route, or schedule IDs
/// 2. Unit fuel efficiency > 0 and cost per km >= 0, both finite
/// 3. Route distance > 0 and finite, travel time in [0, [`MAX_DURATION_MIN`]]
/// 4. Every schedule references an existing route
/// 5. Every departure lies within the run day
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    units: &[Unit],
    routes: &[Route],
    schedules: &[Schedule],
    params: &OperationalParameters,
) -> ValidationResult {
    let mut errors = Vec::new();
    check_parameters(params, &mut errors);

    let mut unit_ids = HashSet::new();
    for u in units {
        if !unit_ids.insert(u.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate unit ID: {}", u.id),
            ));
        }
        if !(u.fuel_efficiency > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!(
                    "Unit '{}' fuel efficiency must be > 0 (got {})",
                    u.id, u.fuel_efficiency
                ),
            ));
        } else if !u.fuel_efficiency.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("Unit '{}' fuel efficiency must be finite", u.id),
            ));
        }
        if !(u.operational_cost_per_km >= 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeValue,
                format!(
                    "Unit '{}' cost per km must be >= 0 (got {})",
                    u.id, u.operational_cost_per_km
                ),
            ));
        } else if !u.operational_cost_per_km.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("Unit '{}' cost per km must be finite", u.id),
            ));
        }
    }

    let mut route_ids = HashSet::new();
    for r in routes {
        if !route_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate route ID: {}", r.id),
            ));
        }
        if !(r.distance_km > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("Route '{}' distance must be > 0 (got {})", r.id, r.distance_km),
            ));
        } else if !r.distance_km.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("Route '{}' distance must be finite", r.id),
            ));
        }
        if r.travel_time_min < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeValue,
                format!(
                    "Route '{}' travel time must be >= 0 (got {})",
                    r.id, r.travel_time_min
                ),
            ));
        } else if r.travel_time_min > MAX_DURATION_MIN {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!(
                    "Route '{}' travel time must be <= {MAX_DURATION_MIN} min (got {})",
                    r.id, r.travel_time_min
                ),
            ));
        }
    }

    let mut schedule_ids = HashSet::new();
    for s in schedules {
        if !schedule_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate schedule ID: {}", s.id),
            ));
        }
        if !route_ids.contains(s.route_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownRoute,
                format!(
                    "Schedule '{}' references unknown route '{}'",
                    s.id, s.route_id
                ),
            ));
        }
        if !(0..MINUTES_PER_DAY).contains(&s.departure_min) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!(
                    "Schedule '{}' departure {} is outside the day",
                    s.id, s.departure_min
                ),
            ));
        }
    }

    into_result(errors)
}

fn check_parameters(params: &OperationalParameters, errors: &mut Vec<ValidationError>) {
    let w = &params.weights;
    let named = [
        ("capacity", w.capacity),
        ("distance", w.distance),
        ("availability", w.availability),
        ("cost", w.cost),
    ];
    for (name, value) in named {
        if !(value >= 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeWeight,
                format!("Weight '{name}' must be >= 0 (got {value})"),
            ));
        }
    }

    let sum = w.sum();
    if !((sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE) {
        errors.push(ValidationError::new(
            ValidationErrorKind::WeightSum,
            format!("Scoring weights must sum to 1.0 (got {sum})"),
        ));
    }

    if params.turnaround_minutes < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeValue,
            format!(
                "Turnaround time must be >= 0 (got {})",
                params.turnaround_minutes
            ),
        ));
    } else if params.turnaround_minutes > MAX_DURATION_MIN {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!(
                "Turnaround time must be <= {MAX_DURATION_MIN} min (got {})",
                params.turnaround_minutes
            ),
        ));
    }
    if params.minimum_rest_minutes < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeValue,
            format!(
                "Minimum rest time must be >= 0 (got {})",
                params.minimum_rest_minutes
            ),
        ));
    } else if params.minimum_rest_minutes > MAX_DURATION_MIN {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!(
                "Minimum rest time must be <= {MAX_DURATION_MIN} min (got {})",
                params.minimum_rest_minutes
            ),
        ));
    }
    if !(params.max_daily_operating_hours > 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveValue,
            format!(
                "Max daily operating hours must be > 0 (got {})",
                params.max_daily_operating_hours
            ),
        ));
    } else if !(params.max_daily_operating_hours <= MAX_DAILY_HOURS) {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!(
                "Max daily operating hours must be <= {MAX_DAILY_HOURS} (got {})",
                params.max_daily_operating_hours
            ),
        ));
    }
    if !(params.fuel_price_per_liter >= 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeValue,
            format!(
                "Fuel price must be >= 0 (got {})",
                params.fuel_price_per_liter
            ),
        ));
    } else if !params.fuel_price_per_liter.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            "Fuel price must be finite",
        ));
    }
    if params.max_trips_per_unit == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveValue,
            "Max trips per unit must be > 0 when set",
        ));
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoringWeights;

    fn sample_units() -> Vec<Unit> {
        vec![
            Unit::new("U1").with_capacity(45).with_fuel_efficiency(4.5),
            Unit::new("U2").with_capacity(55).with_fuel_efficiency(3.8),
        ]
    }

    fn sample_routes() -> Vec<Route> {
        vec![Route::new("R1", 25.5, 45), Route::new("R2", 15.0, 35)]
    }

    fn sample_schedules() -> Vec<Schedule> {
        vec![
            Schedule::new("S1", "R1", 360),
            Schedule::new("S2", "R2", 480),
        ]
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn test_valid_input() {
        let params = OperationalParameters::default();
        assert!(validate_input(
            &sample_units(),
            &sample_routes(),
            &sample_schedules(),
            &params
        )
        .is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        let params = OperationalParameters::default();
        assert!(validate_input(&[], &[], &[], &params).is_ok());
    }

    #[test]
    fn test_weight_sum_mismatch() {
        let params =
            OperationalParameters::new().with_weights(ScoringWeights::new(0.25, 0.20, 0.30, 0.24));
        let errors = validate_parameters(&params).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::WeightSum]);
        assert!(errors[0].message.contains("sum to 1.0"));
    }

    #[test]
    fn test_weight_sum_within_tolerance() {
        // 0.1 + 0.2 is not exactly 0.3 in binary floating point
        let params =
            OperationalParameters::new().with_weights(ScoringWeights::new(0.1, 0.2, 0.3, 0.4));
        assert!(validate_parameters(&params).is_ok());
    }

    #[test]
    fn test_negative_weight() {
        let params =
            OperationalParameters::new().with_weights(ScoringWeights::new(1.2, -0.2, 0.0, 0.0));
        let errors = validate_parameters(&params).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NegativeWeight]);
    }

    #[test]
    fn test_nan_weight_rejected() {
        let params = OperationalParameters::new()
            .with_weights(ScoringWeights::new(f64::NAN, 0.25, 0.25, 0.25));
        let errors = validate_parameters(&params).unwrap_err();
        let k = kinds(&errors);
        assert!(k.contains(&ValidationErrorKind::NegativeWeight));
        assert!(k.contains(&ValidationErrorKind::WeightSum));
    }

    #[test]
    fn test_invalid_parameters() {
        let mut params = OperationalParameters::new()
            .with_turnaround(-5)
            .with_minimum_rest(-1)
            .with_max_daily_hours(0.0)
            .with_fuel_price(-1.0);
        params.max_trips_per_unit = Some(0);

        let errors = validate_parameters(&params).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveValue
                && e.message.contains("hours")));
    }

    #[test]
    fn test_zero_fuel_efficiency() {
        let units = vec![Unit::new("U1").with_fuel_efficiency(0.0)];
        let params = OperationalParameters::default();
        let errors = validate_input(&units, &sample_routes(), &[], &params).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NonPositiveValue]);
        assert!(errors[0].message.contains("U1"));
    }

    #[test]
    fn test_negative_cost_and_route_values() {
        let units = vec![Unit::new("U1").with_cost_per_km(-1.0)];
        let routes = vec![Route::new("R1", 0.0, -10)];
        let params = OperationalParameters::default();
        let errors = validate_input(&units, &routes, &[], &params).unwrap_err();
        let k = kinds(&errors);
        assert_eq!(
            k.iter()
                .filter(|k| **k == ValidationErrorKind::NegativeValue)
                .count(),
            2
        );
        assert!(k.contains(&ValidationErrorKind::NonPositiveValue));
    }

    #[test]
    fn test_duplicate_ids() {
        let units = vec![Unit::new("U1"), Unit::new("U1")];
        let routes = vec![Route::new("R1", 10.0, 30), Route::new("R1", 12.0, 30)];
        let schedules = vec![
            Schedule::new("S1", "R1", 360),
            Schedule::new("S1", "R1", 420),
        ];
        let params = OperationalParameters::default();

        let errors = validate_input(&units, &routes, &schedules, &params).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::DuplicateId));
        assert!(errors.iter().any(|e| e.message.contains("route")));
    }

    #[test]
    fn test_unknown_route_reference() {
        let schedules = vec![Schedule::new("S1", "NONEXISTENT", 360)];
        let params = OperationalParameters::default();
        let errors =
            validate_input(&sample_units(), &sample_routes(), &schedules, &params).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::UnknownRoute]);
    }

    #[test]
    fn test_departure_out_of_range() {
        let schedules = vec![
            Schedule::new("S1", "R1", -1),
            Schedule::new("S2", "R1", 1440),
            Schedule::new("S3", "R1", 1439),
        ];
        let params = OperationalParameters::default();
        let errors =
            validate_input(&sample_units(), &sample_routes(), &schedules, &params).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::OutOfRange));
    }

    #[test]
    fn test_operating_hours_bounds() {
        let full_day = OperationalParameters::new().with_max_daily_hours(24.0);
        assert!(validate_parameters(&full_day).is_ok());

        for hours in [24.5, 1e300, f64::INFINITY] {
            let params = OperationalParameters::new().with_max_daily_hours(hours);
            let errors = validate_parameters(&params).unwrap_err();
            assert_eq!(kinds(&errors), vec![ValidationErrorKind::OutOfRange]);
        }
    }

    #[test]
    fn test_duration_bounds() {
        let at_limit = OperationalParameters::new()
            .with_turnaround(MAX_DURATION_MIN)
            .with_minimum_rest(MAX_DURATION_MIN);
        assert!(validate_parameters(&at_limit).is_ok());

        let params = OperationalParameters::new()
            .with_turnaround(MAX_DURATION_MIN + 1)
            .with_minimum_rest(i64::MAX);
        let errors = validate_parameters(&params).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![ValidationErrorKind::OutOfRange, ValidationErrorKind::OutOfRange]
        );

        let routes = vec![
            Route::new("R1", 10.0, MAX_DURATION_MIN),
            Route::new("R2", 10.0, i64::MAX),
        ];
        let errors =
            validate_input(&[], &routes, &[], &OperationalParameters::default()).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::OutOfRange]);
        assert!(errors[0].message.contains("R2"));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let units = vec![
            Unit::new("U1").with_fuel_efficiency(f64::INFINITY),
            Unit::new("U2").with_cost_per_km(f64::INFINITY),
        ];
        let routes = vec![Route::new("R1", f64::INFINITY, 30)];
        let params = OperationalParameters::new().with_fuel_price(f64::INFINITY);

        let errors = validate_input(&units, &routes, &[], &params).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::OutOfRange));
    }

    #[test]
    fn test_multiple_errors() {
        let params =
            OperationalParameters::new().with_weights(ScoringWeights::new(0.5, 0.5, 0.5, 0.5));
        let units = vec![Unit::new("U1").with_fuel_efficiency(-2.0)];
        let schedules = vec![Schedule::new("S1", "UNKNOWN", 360)];

        let errors = validate_input(&units, &[], &schedules, &params).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
