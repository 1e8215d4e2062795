//! # bibsort
//!
//! `bibsort` is the ranking engine of a bibliometric pipeline: it reorders collections of
//! records (articles scraped from bibliographic databases) by any key the caller can
//! extract, using a library of general- and special-purpose sort algorithms.
//!
//! ## Key Features
//!
//! - **One engine, any record**: Algorithms never inspect records. They sort
//!   [`SortEntry`] pointers carrying the record's position and its [`Key`], which comes
//!   from a [`KeyExtractor`] (any `Fn(&R) -> impl Into<Key>` qualifies).
//! - **Search priority**: An optional search term moves records whose key mentions it
//!   to the front, while keeping the key order inside both groups.
//! - **Two families**: Comparison sorts (TimSort-style hybrid, comb, selection, bubble,
//!   gnome, binary insertion, quicksort, heapsort, bitonic, tree sort) and distribution
//!   sorts (pigeonhole, bucket, radix) that need integer-resolvable keys.
//! - **Typed failures**: Incomparable or non-numeric keys fail the invocation with a
//!   [`SortFailure`] naming the algorithm, never a silent coercion.
//!
//! ## Usage
//!
//! ```rust
//! use bibsort::Algorithm;
//!
//! let titles = vec!["Rust for science", "A survey", "Borrow checking"];
//! let sorted = Algorithm::TimSort
//!     .sort(titles, &|t: &&str| t.to_string(), None)
//!     .unwrap();
//!
//! assert_eq!(sorted, vec!["A survey", "Borrow checking", "Rust for science"]);
//! ```
//!
//! ### Search priority
//!
//! ```rust
//! use bibsort::Algorithm;
//!
//! let titles = vec!["Graph theory", "Rust in HPC", "Algebra", "Safe Rust"];
//! let sorted = Algorithm::QuickSort
//!     .sort(titles, &|t: &&str| t.to_string(), Some("Rust"))
//!     .unwrap();
//!
//! assert_eq!(sorted, vec!["Rust in HPC", "Safe Rust", "Algebra", "Graph theory"]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - Keys are extracted once per record, so key adaptation never changes an algorithm's
//!   comparison count.
//! - **Memory Overhead**: One [`SortEntry`] per record plus whatever auxiliary buffers the
//!   chosen algorithm uses.

pub mod algo;
pub mod benchmark;
pub mod comparison;
pub mod config;
pub mod core;
pub mod distribution;
pub mod error;
pub mod priority;
pub mod record;

pub use crate::algo::{Algorithm, Family, SortRequest, Sorter};
pub use crate::config::SortConfig;
pub use crate::core::{Key, KeyExtractor, KeyKind, NamedKey, SortEntry};
pub use crate::error::{SortError, SortFailure, SortResult};

pub mod prelude {
    pub use crate::algo::{Algorithm, Family, SortRequest, Sorter};
    pub use crate::benchmark::{BenchmarkHarness, BenchmarkReport, RunOutcome};
    pub use crate::config::SortConfig;
    pub use crate::core::{Key, KeyExtractor, KeyKind, NamedKey, SortEntry};
    pub use crate::error::{SortError, SortFailure, SortResult};
    pub use crate::record::{Article, article_keys};
}
