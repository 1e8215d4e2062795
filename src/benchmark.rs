//! Benchmark harness: runs every (algorithm, key) pair over one record collection.
//!
//! Each run gets its own copy of the records, so in-place algorithms never see each
//! other's output. A failing run is recorded in the report and the sweep carries on
//! with the next pair; nothing is retried, since a sort would fail the same way again.

use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tracing::{info, warn};

use crate::algo::{Algorithm, Sorter};
use crate::config::SortConfig;
use crate::core::NamedKey;
use crate::error::SortResult;

/// Result of one timed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Completed { elapsed_ms: f64 },
    Failed { reason: String },
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Completed { elapsed_ms } => write!(f, "{elapsed_ms:.2} ms"),
            RunOutcome::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

/// One line of a [`BenchmarkReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRow {
    pub algorithm: Algorithm,
    pub key: String,
    pub outcome: RunOutcome,
}

/// Table of `{algorithm, key, elapsed time or failure reason}` rows, in run order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BenchmarkReport {
    rows: Vec<BenchmarkRow>,
}

impl BenchmarkReport {
    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Elapsed milliseconds of every completed run for `key`.
    pub fn timings_for(&self, key: &str) -> Vec<(Algorithm, f64)> {
        self.rows_for(key)
            .filter_map(|row| match row.outcome {
                RunOutcome::Completed { elapsed_ms } => Some((row.algorithm, elapsed_ms)),
                RunOutcome::Failed { .. } => None,
            })
            .collect()
    }

    /// Failure reason of every failed run for `key`.
    pub fn failures_for(&self, key: &str) -> Vec<(Algorithm, &str)> {
        self.rows_for(key)
            .filter_map(|row| match &row.outcome {
                RunOutcome::Failed { reason } => Some((row.algorithm, reason.as_str())),
                RunOutcome::Completed { .. } => None,
            })
            .collect()
    }

    /// Fastest completed run for `key`.
    pub fn fastest_for(&self, key: &str) -> Option<(Algorithm, f64)> {
        self.timings_for(key)
            .into_iter()
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    fn rows_for<'a, 'k>(
        &'a self,
        key: &'k str,
    ) -> impl Iterator<Item = &'a BenchmarkRow> + use<'a, 'k> {
        self.rows.iter().filter(move |row| row.key == key)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<18} {:<22} result", "key", "algorithm")?;
        for row in &self.rows {
            writeln!(f, "{:<18} {:<22} {}", row.key, row.algorithm.name(), row.outcome)?;
        }
        Ok(())
    }
}

/// Times a set of algorithms over a set of keys.
#[derive(Debug, Clone)]
pub struct BenchmarkHarness {
    sorter: Sorter,
    algorithms: Vec<Algorithm>,
    search_term: Option<String>,
}

/// Runs every algorithm with [`SortConfig::benchmark`], so each run times the full
/// algorithm even on presorted input.
impl Default for BenchmarkHarness {
    fn default() -> Self {
        Self {
            sorter: Sorter::benchmark(),
            algorithms: Algorithm::ALL.to_vec(),
            search_term: None,
        }
    }
}

impl BenchmarkHarness {
    /// Creates a harness running every algorithm with `config`.
    pub fn new(config: SortConfig) -> SortResult<Self> {
        Ok(Self {
            sorter: Sorter::new(config)?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn config(&self) -> &SortConfig {
        self.sorter.config()
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    /// Runs every configured algorithm over `records` once per key.
    pub fn run<R: Clone>(&self, records: &[R], keys: &[NamedKey<R>]) -> BenchmarkReport {
        let mut report = BenchmarkReport::default();

        for key in keys {
            info!(key = key.name(), records = records.len(), "sorting by key");

            for &algorithm in &self.algorithms {
                let input = records.to_vec();
                let started = Instant::now();
                let result = self
                    .sorter
                    .sort(algorithm, input, key, self.search_term.as_deref());
                let elapsed = started.elapsed();

                let outcome = match result {
                    Ok(_) => {
                        info!(
                            algorithm = %algorithm,
                            key = key.name(),
                            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                            "sort completed"
                        );
                        RunOutcome::Completed {
                            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
                        }
                    }
                    Err(failure) => {
                        warn!(
                            algorithm = %algorithm,
                            key = key.name(),
                            error = %failure.reason,
                            "sort failed"
                        );
                        RunOutcome::Failed {
                            reason: failure.reason.to_string(),
                        }
                    }
                };

                report.rows.push(BenchmarkRow {
                    algorithm,
                    key: key.name().to_string(),
                    outcome,
                });
            }
        }

        report
    }
}
