//! Weighted composite scoring.
//!
//! Combines the four built-in criteria with the run's [`ScoringWeights`].
//! Weights are used as given: a set that does not sum to 1.0 is rejected
//! by validation before scoring, never silently renormalized.

use serde::{Deserialize, Serialize};

use super::criteria::{Availability, CapacityFit, CostEfficiency, RouteDistance};
use super::{ScoringContext, ScoringCriterion};
use crate::models::{OperationalParameters, Route, ScoringWeights, Unit};

/// Per-criterion scores and their weighted composite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Capacity fit score.
    pub capacity: f64,
    /// Route distance score.
    pub distance: f64,
    /// Availability score.
    pub availability: f64,
    /// Cost efficiency score.
    pub cost: f64,
    /// Weighted sum of the four scores.
    pub composite: f64,
}

/// Scores eligible unit/route pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringModel {
    weights: ScoringWeights,
}

impl ScoringModel {
    /// Creates a model with the given weights.
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Creates a model from the run parameters.
    pub fn from_params(params: &OperationalParameters) -> Self {
        Self::new(params.weights)
    }

    /// Weights in use.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Criteria with their weights, in breakdown order.
    pub fn criteria(&self) -> [(&'static dyn ScoringCriterion, f64); 4] {
        [
            (&CapacityFit, self.weights.capacity),
            (&RouteDistance, self.weights.distance),
            (&Availability, self.weights.availability),
            (&CostEfficiency, self.weights.cost),
        ]
    }

    /// Scores `unit` for `route`.
    pub fn score(&self, unit: &Unit, route: &Route, context: &ScoringContext) -> ScoreBreakdown {
        let criteria = self.criteria();
        let values = criteria.map(|(criterion, _)| criterion.evaluate(unit, route, context));
        let composite = criteria
            .iter()
            .zip(values.iter())
            .map(|((_, weight), value)| weight * value)
            .sum();

        let [capacity, distance, availability, cost] = values;
        ScoreBreakdown {
            capacity,
            distance,
            availability,
            cost,
            composite,
        }
    }
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}
