//! Error types for sort invocations.

use thiserror::Error;

use crate::algo::Algorithm;
use crate::core::KeyKind;

/// Result alias used by the sort kernels.
pub type SortResult<T> = Result<T, SortError>;

/// Why a sort invocation was rejected.
///
/// Algorithms never coerce or drop malformed records; they fail the whole invocation.
/// Empty input is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Two keys produced by the same extractor cannot be ordered.
    #[error("record {index} has a {found} key, which cannot be ordered against {expected} keys")]
    IncomparableKey {
        /// Original position of the offending record
        index: usize,
        /// Shape of the first record's key
        expected: KeyKind,
        /// Shape of the offending key
        found: KeyKind,
    },

    /// A distribution sort received a key that does not resolve to an integer.
    #[error("record {index} has a {kind} key; distribution sorts need integer or date keys")]
    NonNumericKey { index: usize, kind: KeyKind },

    /// Radix sort received a negative key.
    #[error("record {index} has negative key {value}; radix sort needs non-negative keys")]
    NegativeKey { index: usize, value: i64 },

    /// A numeric range whose upper bound lies below its lower bound.
    #[error("malformed range: max {max} is below min {min}")]
    MalformedRange { min: i64, max: i64 },

    /// A numeric range too wide to hold one bucket per value.
    #[error("range {min}..={max} is too wide to allocate one bucket per value")]
    RangeOverflow { min: i64, max: i64 },

    /// A configuration value outside its valid domain.
    #[error("invalid config value for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

/// Failure descriptor naming the algorithm that rejected an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{algorithm} failed: {reason}")]
pub struct SortFailure {
    pub algorithm: Algorithm,
    #[source]
    pub reason: SortError,
}

impl SortFailure {
    #[must_use]
    pub fn new(algorithm: Algorithm, reason: SortError) -> Self {
        Self { algorithm, reason }
    }
}
