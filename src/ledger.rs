//! Run-scoped commitment ledger.
//!
//! Tracks which time windows each unit has been committed to during one
//! optimization run. Unit records stay untouched: all per-run state lives
//! here, owned by the assignment strategy and lent read-only to the
//! constraint filter. A fresh ledger is created for every run.

use std::collections::HashMap;

use crate::models::TimeWindow;

/// A unit's commitment to one departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commitment {
    /// Schedule the unit serves.
    pub schedule_id: String,
    /// Departure to projected return.
    pub window: TimeWindow,
}

/// Committed windows per unit for a single run.
#[derive(Debug, Clone, Default)]
pub struct CommitmentLedger {
    by_unit: HashMap<String, Vec<Commitment>>,
}

impl CommitmentLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `unit_id` serves `schedule_id` during `window`.
    pub fn commit(
        &mut self,
        unit_id: impl Into<String>,
        schedule_id: impl Into<String>,
        window: TimeWindow,
    ) {
        self.by_unit
            .entry(unit_id.into())
            .or_default()
            .push(Commitment {
                schedule_id: schedule_id.into(),
                window,
            });
    }

    /// Commitments of a unit, in commit order.
    pub fn commitments(&self, unit_id: &str) -> &[Commitment] {
        self.by_unit.get(unit_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of trips committed for a unit.
    pub fn trip_count(&self, unit_id: &str) -> usize {
        self.commitments(unit_id).len()
    }

    /// Total committed time of a unit (minutes).
    pub fn committed_minutes(&self, unit_id: &str) -> i64 {
        self.commitments(unit_id)
            .iter()
            .map(|c| c.window.duration_min())
            .sum()
    }

    /// First commitment of `unit_id` that clashes with `window`,
    /// given a required gap of `rest_min` between trips.
    pub fn first_conflict(
        &self,
        unit_id: &str,
        window: &TimeWindow,
        rest_min: i64,
    ) -> Option<&Commitment> {
        self.commitments(unit_id)
            .iter()
            .find(|c| c.window.conflicts_with(window, rest_min))
    }

    /// Number of units with at least one commitment.
    pub fn committed_unit_count(&self) -> usize {
        self.by_unit.len()
    }

    /// Whether nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.by_unit.is_empty()
    }
}
