//! Built-in scoring criteria.
//!
//! | Criterion | Score |
//! |-----------|-------|
//! | CAPACITY | min(1, capacity / required), 1 if nothing required |
//! | DISTANCE | 1 - distance / max distance in run, 1 if max is 0 |
//! | AVAILABILITY | 1 if status is Available, else 0 |
//! | COST | 1 / (1 + cost per km) |
//!
//! # Score Convention
//! All criteria return higher scores for better matches, within [0, 1].

use super::{CriterionScore, ScoringContext, ScoringCriterion};
use crate::models::{Route, Unit};

/// Capacity fit.
///
/// Ratio of unit capacity to the route requirement, capped at 1.0.
/// A route that requires nothing is fully satisfied by any unit.
#[derive(Debug, Clone, Copy)]
pub struct CapacityFit;

impl ScoringCriterion for CapacityFit {
    fn name(&self) -> &'static str {
        "CAPACITY"
    }

    fn evaluate(&self, unit: &Unit, route: &Route, _context: &ScoringContext) -> CriterionScore {
        if route.required_capacity == 0 {
            return 1.0;
        }
        (f64::from(unit.capacity) / f64::from(route.required_capacity)).min(1.0)
    }

    fn description(&self) -> &'static str {
        "Capacity relative to route requirement"
    }
}

/// Route distance.
///
/// Shorter routes score higher, relative to the longest route in the run.
#[derive(Debug, Clone, Copy)]
pub struct RouteDistance;

impl ScoringCriterion for RouteDistance {
    fn name(&self) -> &'static str {
        "DISTANCE"
    }

    fn evaluate(&self, _unit: &Unit, route: &Route, context: &ScoringContext) -> CriterionScore {
        let max = context.max_route_distance_km;
        if max <= 0.0 {
            return 1.0;
        }
        (1.0 - route.distance_km / max).clamp(0.0, 1.0)
    }

    fn description(&self) -> &'static str {
        "Route length relative to the longest route in the run"
    }
}

/// Availability.
///
/// Always 1.0 after constraint filtering; kept as a component so reports
/// show the full breakdown.
#[derive(Debug, Clone, Copy)]
pub struct Availability;

impl ScoringCriterion for Availability {
    fn name(&self) -> &'static str {
        "AVAILABILITY"
    }

    fn evaluate(&self, unit: &Unit, _route: &Route, _context: &ScoringContext) -> CriterionScore {
        if unit.is_available() {
            1.0
        } else {
            0.0
        }
    }

    fn description(&self) -> &'static str {
        "Unit status is Available"
    }
}

/// Operating cost efficiency.
///
/// `1 / (1 + cost_per_km)`: free units score 1.0, expensive ones approach 0.
#[derive(Debug, Clone, Copy)]
pub struct CostEfficiency;

impl ScoringCriterion for CostEfficiency {
    fn name(&self) -> &'static str {
        "COST"
    }

    fn evaluate(&self, unit: &Unit, _route: &Route, _context: &ScoringContext) -> CriterionScore {
        1.0 / (1.0 + unit.operational_cost_per_km.max(0.0))
    }

    fn description(&self) -> &'static str {
        "Inverse operating cost per km"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnitStatus;

    fn ctx() -> ScoringContext {
        ScoringContext::new(100.0)
    }

    #[test]
    fn test_capacity_fit() {
        let route = Route::new("R1", 10.0, 30).with_required_capacity(50);
        let small = Unit::new("small").with_capacity(30);
        let exact = Unit::new("exact").with_capacity(50);
        let large = Unit::new("large").with_capacity(80);

        assert!((CapacityFit.evaluate(&small, &route, &ctx()) - 0.6).abs() < 1e-10);
        assert!((CapacityFit.evaluate(&exact, &route, &ctx()) - 1.0).abs() < 1e-10);
        // Capped at 1.0
        assert!((CapacityFit.evaluate(&large, &route, &ctx()) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_capacity_zero_requirement() {
        let route = Route::new("R1", 10.0, 30);
        let u = Unit::new("U1").with_capacity(0);
        assert!((CapacityFit.evaluate(&u, &route, &ctx()) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_distance() {
        let u = Unit::new("U1");
        let near = Route::new("near", 25.0, 30);
        let far = Route::new("far", 100.0, 90);

        assert!((RouteDistance.evaluate(&u, &near, &ctx()) - 0.75).abs() < 1e-10);
        assert!((RouteDistance.evaluate(&u, &far, &ctx()) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_distance_zero_max() {
        let u = Unit::new("U1");
        let r = Route::new("R1", 10.0, 30);
        let score = RouteDistance.evaluate(&u, &r, &ScoringContext::new(0.0));
        assert!((score - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_distance_outside_run_clamped() {
        let u = Unit::new("U1");
        let r = Route::new("R1", 150.0, 30);
        assert!((RouteDistance.evaluate(&u, &r, &ctx()) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_availability() {
        let r = Route::new("R1", 10.0, 30);
        let ok = Unit::new("ok");
        let down = Unit::new("down").with_status(UnitStatus::Maintenance);
        assert!((Availability.evaluate(&ok, &r, &ctx()) - 1.0).abs() < 1e-10);
        assert!((Availability.evaluate(&down, &r, &ctx()) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_cost_efficiency() {
        let r = Route::new("R1", 10.0, 30);
        let free = Unit::new("free");
        let cheap = Unit::new("cheap").with_cost_per_km(1.0);
        let pricey = Unit::new("pricey").with_cost_per_km(2500.0);

        assert!((CostEfficiency.evaluate(&free, &r, &ctx()) - 1.0).abs() < 1e-10);
        assert!((CostEfficiency.evaluate(&cheap, &r, &ctx()) - 0.5).abs() < 1e-10);
        assert!(CostEfficiency.evaluate(&pricey, &r, &ctx()) < 0.001);
    }

    #[test]
    fn test_names() {
        assert_eq!(CapacityFit.name(), "CAPACITY");
        assert_eq!(RouteDistance.name(), "DISTANCE");
        assert_eq!(Availability.name(), "AVAILABILITY");
        assert_eq!(CostEfficiency.name(), "COST");
        assert_eq!(CostEfficiency.description(), "Inverse operating cost per km");
    }
}
