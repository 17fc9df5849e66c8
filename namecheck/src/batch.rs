//! Batch Runner
//!
//! Checks every input name with a bounded number of names in flight, then
//! orders the results for reporting: most available first, lower score first
//! within a status. The sort is stable, so ties keep their input order.

use crate::orchestrator::NameChecker;
use crate::types::NameResult;
use futures::stream::{self, StreamExt};
use std::cmp::Ordering;
use std::time::Instant;
use tracing::info;

pub struct BatchRunner {
    checker: NameChecker,
    max_names_in_flight: usize,
}

impl BatchRunner {
    pub fn new(checker: NameChecker, max_names_in_flight: usize) -> Self {
        Self {
            checker,
            max_names_in_flight: max_names_in_flight.max(1),
        }
    }

    pub fn checker(&self) -> &NameChecker {
        &self.checker
    }

    /// Check all names and return the sorted results
    ///
    /// Results are collected in input order before sorting, which keeps the
    /// final order stable for equal `(status, score)` keys.
    pub async fn run(&self, names: &[String]) -> Vec<NameResult> {
        let started = Instant::now();
        info!(
            names = names.len(),
            max_in_flight = self.max_names_in_flight,
            "Starting batch"
        );

        let mut results: Vec<NameResult> = stream::iter(names)
            .map(|name| self.checker.check(name))
            .buffered(self.max_names_in_flight)
            .collect()
            .await;

        sort_results(&mut results);

        info!(
            names = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Batch complete"
        );

        results
    }
}

/// Report ordering: status rank ascending, then score ascending
pub fn compare_results(a: &NameResult, b: &NameResult) -> Ordering {
    a.status
        .rank()
        .cmp(&b.status.rank())
        .then_with(|| a.score.total_cmp(&b.score))
}

/// Stable in-place sort by [`compare_results`]
pub fn sort_results(results: &mut [NameResult]) {
    results.sort_by(compare_results);
}
