//! Daily fleet-to-route assignment engine.
//!
//! Given a fleet of transport units, a route catalogue and the day's
//! timetabled departures, assigns at most one unit to each departure and
//! reports how good the resulting plan is.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Unit`, `Route`, `Schedule`,
//!   `OperationalParameters`, `Assignment`, `DailyPlan`, `TimeWindow`
//! - **`validation`**: Input integrity checks (weights, positivity, bounds, duplicate IDs, route refs)
//! - **`constraints`**: Hard-constraint filter deciding unit eligibility
//! - **`ledger`**: Run-scoped record of committed trip windows per unit
//! - **`scoring`**: Weighted multi-criteria scoring of unit/route pairs
//! - **`assignment`**: `AssignmentStrategy` trait and the greedy strategy
//! - **`metrics`**: Coverage, utilization, fuel and idle-time KPIs, threshold alerts
//! - **`engine`**: `FleetOptimizer`, the validate/assign/measure entry point
//!
//! # Architecture
//!
//! Runs are single-threaded and pure over their inputs: units, routes and
//! schedules are never modified, and all per-run state lives in a
//! [`ledger::CommitmentLedger`] owned by the strategy. Parameters are passed
//! explicitly; nothing reads global state. The crate emits `tracing` events
//! but never installs a subscriber.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Ceder (2016), "Public Transit Planning and Operation"

pub mod assignment;
pub mod constraints;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod metrics;
pub mod models;
pub mod scoring;
pub mod validation;

pub use engine::{FleetOptimizer, OptimizationOutcome, OptimizationRequest};
pub use error::FleetError;
