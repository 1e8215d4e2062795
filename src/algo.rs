//! Algorithm catalogue and the sort engine.
//!
//! [`Algorithm`] names every strategy of the two families and exposes one entry point
//! per algorithm with the same signature, so callers (like the benchmark harness) can
//! iterate over them generically. [`Sorter`] does the work behind that entry point:
//!
//! 1. Applies the search priority adapter to the caller's extractor.
//! 2. Computes every effective key once and checks that all keys can be ordered.
//! 3. Runs the algorithm over the keyed entries.
//! 4. Applies the resulting order to the records.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::comparison;
use crate::config::SortConfig;
use crate::core::{KeyExtractor, SortEntry, apply_permutation, decorate, is_sorted};
use crate::distribution;
use crate::error::{SortFailure, SortResult};
use crate::priority;

/// Which family an algorithm belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Needs only a total order on the effective key.
    Comparison,
    /// Needs the effective key to resolve to an integer.
    Distribution,
}

/// Every sort strategy the engine provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    TimSort,
    CombSort,
    SelectionSort,
    TreeSort,
    PigeonholeSort,
    BucketSort,
    QuickSort,
    HeapSort,
    BitonicSort,
    GnomeSort,
    BinaryInsertionSort,
    RadixSort,
    BubbleSort,
}

impl Algorithm {
    /// All algorithms, in the order the benchmark sweep runs them.
    pub const ALL: [Algorithm; 13] = [
        Algorithm::TimSort,
        Algorithm::CombSort,
        Algorithm::SelectionSort,
        Algorithm::TreeSort,
        Algorithm::PigeonholeSort,
        Algorithm::BucketSort,
        Algorithm::QuickSort,
        Algorithm::HeapSort,
        Algorithm::BitonicSort,
        Algorithm::GnomeSort,
        Algorithm::BinaryInsertionSort,
        Algorithm::RadixSort,
        Algorithm::BubbleSort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::TimSort => "TimSort",
            Algorithm::CombSort => "Comb Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::TreeSort => "Tree Sort",
            Algorithm::PigeonholeSort => "Pigeonhole Sort",
            Algorithm::BucketSort => "Bucket Sort",
            Algorithm::QuickSort => "QuickSort",
            Algorithm::HeapSort => "HeapSort",
            Algorithm::BitonicSort => "Bitonic Sort",
            Algorithm::GnomeSort => "Gnome Sort",
            Algorithm::BinaryInsertionSort => "Binary Insertion Sort",
            Algorithm::RadixSort => "Radix Sort",
            Algorithm::BubbleSort => "Bubble Sort",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Algorithm::PigeonholeSort | Algorithm::BucketSort | Algorithm::RadixSort => {
                Family::Distribution
            }
            _ => Family::Comparison,
        }
    }

    /// Whether records with equal effective keys keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::TimSort
                | Algorithm::BubbleSort
                | Algorithm::GnomeSort
                | Algorithm::BinaryInsertionSort
                | Algorithm::TreeSort
                | Algorithm::PigeonholeSort
                | Algorithm::BucketSort
                | Algorithm::RadixSort
        )
    }

    /// Sorts `records` with this algorithm and the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibsort::Algorithm;
    ///
    /// let years: Vec<i64> = vec![2021, 1999, 2010];
    /// let sorted = Algorithm::RadixSort.sort(years, &|y: &i64| *y, None).unwrap();
    /// assert_eq!(sorted, vec![1999, 2010, 2021]);
    /// ```
    pub fn sort<R, E>(
        self,
        records: Vec<R>,
        extractor: &E,
        search_term: Option<&str>,
    ) -> Result<Vec<R>, SortFailure>
    where
        E: KeyExtractor<R> + ?Sized,
    {
        Sorter::default().sort(self, records, extractor, search_term)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One sort invocation: the records, how to key them, and an optional search term.
#[derive(Debug)]
pub struct SortRequest<'a, R, E: ?Sized> {
    records: Vec<R>,
    extractor: &'a E,
    search_term: Option<&'a str>,
}

impl<'a, R, E: KeyExtractor<R> + ?Sized> SortRequest<'a, R, E> {
    pub fn new(records: Vec<R>, extractor: &'a E) -> Self {
        Self {
            records,
            extractor,
            search_term: None,
        }
    }

    #[must_use]
    pub fn with_search_term(mut self, term: Option<&'a str>) -> Self {
        self.search_term = term;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The sort engine: a validated [`SortConfig`] plus dispatch to the algorithms.
#[derive(Debug, Clone, Default)]
pub struct Sorter {
    config: SortConfig,
}

impl Sorter {
    /// Creates an engine, rejecting invalid configuration.
    pub fn new(config: SortConfig) -> SortResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine with [`SortConfig::benchmark`], which always validates.
    pub fn benchmark() -> Self {
        Self {
            config: SortConfig::benchmark(),
        }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sorts `records` by `extractor`, optionally favouring `search_term` matches.
    pub fn sort<R, E>(
        &self,
        algorithm: Algorithm,
        records: Vec<R>,
        extractor: &E,
        search_term: Option<&str>,
    ) -> Result<Vec<R>, SortFailure>
    where
        E: KeyExtractor<R> + ?Sized,
    {
        self.execute(
            algorithm,
            SortRequest::new(records, extractor).with_search_term(search_term),
        )
    }

    /// Runs one [`SortRequest`]. The request is consumed; the records come back in
    /// their new order.
    pub fn execute<R, E>(
        &self,
        algorithm: Algorithm,
        request: SortRequest<'_, R, E>,
    ) -> Result<Vec<R>, SortFailure>
    where
        E: KeyExtractor<R> + ?Sized,
    {
        let SortRequest {
            mut records,
            extractor,
            search_term,
        } = request;

        debug!(
            algorithm = %algorithm,
            records = records.len(),
            search_term = ?search_term,
            "sorting"
        );

        let effective = priority::adapt(extractor, search_term);
        let entries = decorate(&records, &effective)
            .map_err(|reason| SortFailure::new(algorithm, reason))?;

        if self.config.presorted_fast_path
            && algorithm.family() == Family::Comparison
            && is_sorted(&entries)
        {
            debug!(algorithm = %algorithm, "input already sorted");
            return Ok(records);
        }

        let ordered = self
            .dispatch(algorithm, entries)
            .map_err(|reason| SortFailure::new(algorithm, reason))?;

        let order: Vec<usize> = ordered.into_iter().map(|e| e.index).collect();
        apply_permutation(&mut records, order);
        Ok(records)
    }

    /// Runs `algorithm` directly over keyed entries.
    pub fn dispatch(
        &self,
        algorithm: Algorithm,
        mut entries: Vec<SortEntry>,
    ) -> SortResult<Vec<SortEntry>> {
        let sorted = match algorithm {
            Algorithm::TimSort => comparison::tim_sort(entries, self.config.min_run),
            Algorithm::TreeSort => comparison::tree_sort(entries),
            Algorithm::PigeonholeSort => distribution::pigeonhole_sort(entries)?,
            Algorithm::BucketSort => {
                distribution::bucket_sort(entries, self.config.bucket_epsilon)?
            }
            Algorithm::RadixSort => distribution::radix_sort(entries)?,
            Algorithm::CombSort => {
                comparison::comb_sort(&mut entries, self.config.comb_shrink);
                entries
            }
            Algorithm::SelectionSort => in_place(entries, comparison::selection_sort),
            Algorithm::QuickSort => in_place(entries, comparison::quick_sort),
            Algorithm::HeapSort => in_place(entries, comparison::heap_sort),
            Algorithm::BitonicSort => in_place(entries, comparison::bitonic_sort),
            Algorithm::GnomeSort => in_place(entries, comparison::gnome_sort),
            Algorithm::BinaryInsertionSort => in_place(entries, comparison::binary_insertion_sort),
            Algorithm::BubbleSort => in_place(entries, comparison::bubble_sort),
        };
        Ok(sorted)
    }
}

fn in_place(mut entries: Vec<SortEntry>, sort: fn(&mut [SortEntry])) -> Vec<SortEntry> {
    sort(&mut entries);
    entries
}
