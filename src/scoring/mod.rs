//! Multi-criteria scoring of unit/route pairs.
//!
//! Each eligible unit is rated on four normalized criteria (capacity fit,
//! route distance, availability, operating cost), combined into a weighted
//! composite by [`ScoringModel`].
//!
//! # Score Convention
//! **Higher score = better match.** Every criterion returns a value in
//! [0, 1]; with weights summing to 1.0 the composite is also in [0, 1].
//!
//! # Usage
//!
//! ```
//! use u_fleet::models::{Route, ScoringWeights, Unit};
//! use u_fleet::scoring::{ScoringContext, ScoringModel};
//!
//! let routes = vec![Route::new("R1", 50.0, 60).with_required_capacity(40)];
//! let unit = Unit::new("U1").with_capacity(40).permit_route("R1");
//!
//! let model = ScoringModel::new(ScoringWeights::default());
//! let ctx = ScoringContext::from_routes(&routes);
//! let score = model.score(&unit, &routes[0], &ctx);
//! assert!(score.composite > 0.0 && score.composite <= 1.0);
//! ```

mod context;
pub mod criteria;
mod model;

pub use context::ScoringContext;
pub use model::{ScoreBreakdown, ScoringModel};

use crate::models::{Route, Unit};
use std::fmt::Debug;

/// Score returned by a criterion, in [0, 1].
pub type CriterionScore = f64;

/// A scoring criterion that rates how well a unit suits a route.
///
/// # Score Convention
/// **Higher score = better.** Implementations must stay within [0, 1].
pub trait ScoringCriterion: Send + Sync + Debug {
    /// Criterion name (e.g., "CAPACITY").
    fn name(&self) -> &'static str;

    /// Rates `unit` for `route` in the current run.
    fn evaluate(&self, unit: &Unit, route: &Route, context: &ScoringContext) -> CriterionScore;

    /// Criterion description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
