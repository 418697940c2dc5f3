//! Run-wide context for criterion evaluation.

use crate::models::Route;

/// Run-wide values criteria normalize against.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoringContext {
    /// Longest one-way route distance among the routes in the run (km).
    pub max_route_distance_km: f64,
}

impl ScoringContext {
    /// Creates a context with an explicit maximum distance.
    pub fn new(max_route_distance_km: f64) -> Self {
        Self {
            max_route_distance_km,
        }
    }

    /// Derives the context from the routes considered in a run.
    ///
    /// An empty route list yields a maximum distance of 0.
    pub fn from_routes<'a>(routes: impl IntoIterator<Item = &'a Route>) -> Self {
        let max = routes
            .into_iter()
            .map(|r| r.distance_km)
            .fold(0.0_f64, f64::max);
        Self::new(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_routes() {
        let routes = vec![
            Route::new("R1", 25.5, 45),
            Route::new("R2", 35.0, 60),
            Route::new("R3", 15.0, 35),
        ];
        let ctx = ScoringContext::from_routes(&routes);
        assert!((ctx.max_route_distance_km - 35.0).abs() < 1e-10);
    }

    #[test]
    fn test_from_no_routes() {
        let ctx = ScoringContext::from_routes(&Vec::<Route>::new());
        assert!((ctx.max_route_distance_km - 0.0).abs() < 1e-10);
    }
}
