//! Tuning constants for the sort engine.
//!
//! [`SortConfig`] is immutable data: it is built (or deserialized) once, validated, and
//! then only read by the algorithms.

use serde::{Deserialize, Serialize};

use crate::error::{SortError, SortResult};

/// Default run length of the hybrid merge/insertion sort.
pub const DEFAULT_MIN_RUN: usize = 32;

/// Default gap shrink factor of comb sort.
pub const DEFAULT_COMB_SHRINK: f64 = 1.3;

/// Default epsilon added to the bucket sort range so that equal keys never divide by zero.
pub const DEFAULT_BUCKET_EPSILON: f64 = 1e-9;

/// Engine configuration.
///
/// # Examples
///
/// ```
/// use bibsort::config::SortConfig;
///
/// let config = SortConfig::default().with_min_run(16);
/// assert!(config.validate().is_ok());
/// assert!(SortConfig::default().with_min_run(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Run length of the hybrid merge/insertion sort.
    pub min_run: usize,
    /// Factor the comb sort gap is divided by after every pass.
    pub comb_shrink: f64,
    /// Added to `max - min` when bucket sort normalizes keys.
    pub bucket_epsilon: f64,
    /// Return already-sorted input untouched instead of running a comparison sort on it.
    pub presorted_fast_path: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            min_run: DEFAULT_MIN_RUN,
            comb_shrink: DEFAULT_COMB_SHRINK,
            bucket_epsilon: DEFAULT_BUCKET_EPSILON,
            presorted_fast_path: true,
        }
    }
}

impl SortConfig {
    /// Configuration for timing runs: every invocation runs its algorithm in full.
    #[must_use]
    pub fn benchmark() -> Self {
        Self {
            presorted_fast_path: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_min_run(mut self, min_run: usize) -> Self {
        self.min_run = min_run;
        self
    }

    #[must_use]
    pub fn with_comb_shrink(mut self, comb_shrink: f64) -> Self {
        self.comb_shrink = comb_shrink;
        self
    }

    #[must_use]
    pub fn with_bucket_epsilon(mut self, bucket_epsilon: f64) -> Self {
        self.bucket_epsilon = bucket_epsilon;
        self
    }

    #[must_use]
    pub fn with_presorted_fast_path(mut self, enabled: bool) -> Self {
        self.presorted_fast_path = enabled;
        self
    }

    /// Checks every field against its valid domain.
    pub fn validate(&self) -> SortResult<()> {
        if self.min_run == 0 {
            return Err(SortError::InvalidConfig {
                field: "min_run",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.comb_shrink.is_finite() && self.comb_shrink > 1.0) {
            return Err(SortError::InvalidConfig {
                field: "comb_shrink",
                reason: format!("must be a finite number above 1.0, got {}", self.comb_shrink),
            });
        }
        if !(self.bucket_epsilon.is_finite() && self.bucket_epsilon > 0.0) {
            return Err(SortError::InvalidConfig {
                field: "bucket_epsilon",
                reason: format!(
                    "must be a finite positive number, got {}",
                    self.bucket_epsilon
                ),
            });
        }
        Ok(())
    }
}
