// --- File: crates/staysync_reconciler/src/report.rs ---
//! Outcome of one reconciliation cycle.
//!
//! Every cycle produces a report regardless of how much of it succeeded;
//! per-entity failures are collected in `errors` instead of aborting the
//! cycle. The agent publishes the last report on its status surface.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleReport {
    /// The instant the cycle's status decisions were evaluated against.
    pub started_at: DateTime<Utc>,
    /// Set once the cycle has run to the end.
    pub finished_at: Option<DateTime<Utc>>,
    pub reservations_examined: usize,
    pub reservations_activated: usize,
    pub reservations_completed: usize,
    pub rooms_examined: usize,
    pub rooms_updated: usize,
    pub errors: Vec<String>,
}

impl CycleReport {
    pub fn begin(now: DateTime<Utc>) -> Self {
        Self {
            started_at: now,
            finished_at: None,
            reservations_examined: 0,
            reservations_activated: 0,
            reservations_completed: 0,
            rooms_examined: 0,
            rooms_updated: 0,
            errors: Vec::new(),
        }
    }

    pub fn record_error(&mut self, error: impl fmt::Display) {
        self.errors.push(error.to_string());
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_for_the_status_surface() {
        let mut report = CycleReport::begin(Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap());
        report.reservations_examined = 3;
        report.reservations_activated = 1;
        report.record_error("reservation 7: update rejected");

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["reservationsExamined"], 3);
        assert_eq!(value["errors"][0], "reservation 7: update rejected");
        assert!(value["finishedAt"].is_null());
    }
}
