//! Operational parameters and scoring weights.
//!
//! Process-wide configuration for one optimization run. Parameters are
//! passed explicitly into every component; nothing reads ambient state.
//!
//! # Loading
//!
//! ```
//! use u_fleet::models::OperationalParameters;
//!
//! let params = OperationalParameters::from_toml_str(r#"
//!     turnaround_minutes = 20
//!     fuel_price_per_liter = 15.0
//!
//!     [weights]
//!     capacity = 0.4
//!     distance = 0.2
//!     availability = 0.2
//!     cost = 0.2
//! "#).unwrap();
//!
//! assert_eq!(params.turnaround_minutes, 20);
//! assert_eq!(params.minimum_rest_minutes, 60); // default
//! ```
//!
//! Parsing does not validate; [`crate::validation::validate_parameters`]
//! runs before any scoring.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FleetError;

/// Weights of the four scoring criteria.
///
/// Must sum to 1.0 (checked by validation, never renormalized).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight of the capacity fit score.
    pub capacity: f64,
    /// Weight of the route distance score.
    pub distance: f64,
    /// Weight of the availability score.
    pub availability: f64,
    /// Weight of the operating cost score.
    pub cost: f64,
}

impl ScoringWeights {
    /// Creates a weight set.
    pub fn new(capacity: f64, distance: f64, availability: f64, cost: f64) -> Self {
        Self {
            capacity,
            distance,
            availability,
            cost,
        }
    }

    /// Sum of all four weights.
    pub fn sum(&self) -> f64 {
        self.capacity + self.distance + self.availability + self.cost
    }

    /// Weights in criterion order: capacity, distance, availability, cost.
    pub fn as_array(&self) -> [f64; 4] {
        [self.capacity, self.distance, self.availability, self.cost]
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::new(0.25, 0.20, 0.30, 0.25)
    }
}

/// Operational rules and prices for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationalParameters {
    /// Turnaround at the far terminal (minutes).
    pub turnaround_minutes: i64,
    /// Minimum rest between two trips of the same unit (minutes).
    pub minimum_rest_minutes: i64,
    /// Maximum operating hours per unit per day.
    pub max_daily_operating_hours: f64,
    /// Fuel price per fuel unit (litre).
    pub fuel_price_per_liter: f64,
    /// Cap on trips per unit per run. `None` = limited only by time.
    pub max_trips_per_unit: Option<u32>,
    /// Scoring weights.
    pub weights: ScoringWeights,
}

impl Default for OperationalParameters {
    fn default() -> Self {
        Self {
            turnaround_minutes: 30,
            minimum_rest_minutes: 60,
            max_daily_operating_hours: 12.0,
            fuel_price_per_liter: 12_500.0,
            max_trips_per_unit: None,
            weights: ScoringWeights::default(),
        }
    }
}

impl OperationalParameters {
    /// Creates the default parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads parameters from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FleetError> {
        Self::from_toml_file(path)
    }

    /// Loads parameters from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, FleetError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses parameters from a TOML string. Missing keys take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, FleetError> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the turnaround time.
    pub fn with_turnaround(mut self, minutes: i64) -> Self {
        self.turnaround_minutes = minutes;
        self
    }

    /// Sets the minimum rest between trips.
    pub fn with_minimum_rest(mut self, minutes: i64) -> Self {
        self.minimum_rest_minutes = minutes;
        self
    }

    /// Sets the daily operating-hours cap.
    pub fn with_max_daily_hours(mut self, hours: f64) -> Self {
        self.max_daily_operating_hours = hours;
        self
    }

    /// Sets the fuel price.
    pub fn with_fuel_price(mut self, price_per_liter: f64) -> Self {
        self.fuel_price_per_liter = price_per_liter;
        self
    }

    /// Caps the number of trips a unit may take in one run.
    pub fn with_max_trips_per_unit(mut self, trips: u32) -> Self {
        self.max_trips_per_unit = Some(trips);
        self
    }

    /// Sets the scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Daily operating window per unit (minutes).
    pub fn max_operating_minutes(&self) -> i64 {
        (self.max_daily_operating_hours * 60.0).round() as i64
    }

    /// Fuel cost of a round trip of `one_way_km` with the given efficiency.
    pub fn fuel_cost(&self, one_way_km: f64, fuel_efficiency: f64) -> f64 {
        one_way_km * 2.0 / fuel_efficiency * self.fuel_price_per_liter
    }
}
