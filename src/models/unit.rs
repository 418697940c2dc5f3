//! Transport unit (vehicle) model.
//!
//! Units are the resources the engine assigns to scheduled departures:
//! buses, vans, trucks. A unit is read-only during an optimization run;
//! per-run commitments live in [`CommitmentLedger`](crate::ledger::CommitmentLedger).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A vehicle that can serve scheduled routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique unit identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Passenger/load capacity.
    pub capacity: u32,
    /// Fuel efficiency (km per fuel unit, must be > 0).
    pub fuel_efficiency: f64,
    /// Operational cost per km (>= 0).
    pub operational_cost_per_km: f64,
    /// Operational status.
    pub status: UnitStatus,
    /// Route IDs this unit may serve.
    pub permitted_routes: BTreeSet<String>,
}

/// Operational status of a unit.
///
/// Only [`UnitStatus::Available`] units are eligible for assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitStatus {
    /// Ready for service.
    Available,
    /// In the workshop.
    Maintenance,
    /// Temporarily withdrawn (breakdown, inspection, no driver).
    OutOfService,
    /// Operator-defined status.
    Custom(String),
}

impl Unit {
    /// Creates an available unit with no capacity and no permitted routes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
            fuel_efficiency: 1.0,
            operational_cost_per_km: 0.0,
            status: UnitStatus::Available,
            permitted_routes: BTreeSet::new(),
        }
    }

    /// Sets the unit name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the fuel efficiency (km per fuel unit).
    pub fn with_fuel_efficiency(mut self, km_per_unit: f64) -> Self {
        self.fuel_efficiency = km_per_unit;
        self
    }

    /// Sets the operational cost per km.
    pub fn with_cost_per_km(mut self, cost: f64) -> Self {
        self.operational_cost_per_km = cost;
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: UnitStatus) -> Self {
        self.status = status;
        self
    }

    /// Permits a route.
    pub fn permit_route(mut self, route_id: impl Into<String>) -> Self {
        self.permitted_routes.insert(route_id.into());
        self
    }

    /// Permits several routes.
    pub fn permit_routes<I, S>(mut self, route_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permitted_routes
            .extend(route_ids.into_iter().map(Into::into));
        self
    }

    /// Whether the unit can be dispatched at all.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == UnitStatus::Available
    }

    /// Whether the unit may serve the given route.
    #[inline]
    pub fn is_permitted(&self, route_id: &str) -> bool {
        self.permitted_routes.contains(route_id)
    }

    /// Fuel consumed by a round trip of `one_way_km`.
    pub fn round_trip_fuel(&self, one_way_km: f64) -> f64 {
        one_way_km * 2.0 / self.fuel_efficiency
    }
}

impl std::fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => f.write_str("Available"),
            Self::Maintenance => f.write_str("Maintenance"),
            Self::OutOfService => f.write_str("OutOfService"),
            Self::Custom(s) => f.write_str(s),
        }
    }
}
