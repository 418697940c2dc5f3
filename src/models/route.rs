//! Route model.

use serde::{Deserialize, Serialize};

/// A service route between two locations.
///
/// Distances are one-way kilometres; the engine doubles them for the
/// round trip when computing fuel and distance totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Unique route identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Departure location.
    pub origin: String,
    /// Arrival location.
    pub destination: String,
    /// One-way distance (km, must be > 0).
    pub distance_km: f64,
    /// One-way travel time (minutes).
    pub travel_time_min: i64,
    /// Free-form classification (e.g. "Express", "Regular", "Tourism").
    pub route_type: String,
    /// Minimum unit capacity required to serve the route.
    pub required_capacity: u32,
}

impl Route {
    /// Creates a route with the given distance and travel time.
    pub fn new(id: impl Into<String>, distance_km: f64, travel_time_min: i64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            origin: String::new(),
            destination: String::new(),
            distance_km,
            travel_time_min,
            route_type: String::new(),
            required_capacity: 0,
        }
    }

    /// Sets the route name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets origin and destination.
    pub fn between(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin = origin.into();
        self.destination = destination.into();
        self
    }

    /// Sets the route type.
    pub fn with_type(mut self, route_type: impl Into<String>) -> Self {
        self.route_type = route_type.into();
        self
    }

    /// Sets the required capacity.
    pub fn with_required_capacity(mut self, capacity: u32) -> Self {
        self.required_capacity = capacity;
        self
    }

    /// Round-trip distance (km).
    #[inline]
    pub fn round_trip_km(&self) -> f64 {
        self.distance_km * 2.0
    }

    /// Round-trip cycle time: out, back, and turnaround at the terminal (minutes).
    #[inline]
    pub fn cycle_time_min(&self, turnaround_min: i64) -> i64 {
        self.travel_time_min * 2 + turnaround_min
    }
}
