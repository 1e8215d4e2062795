//! Distribution sorts (pigeonhole, bucket, LSD radix).
//!
//! These kernels place entries by a numeric view of the key instead of comparing
//! pairs. The key must resolve to an integer: [`Key::Int`] as is, [`Key::Date`] as its
//! day number, and a [`Key::Prioritized`] key through its inner key. Anything else
//! fails the invocation with [`SortError::NonNumericKey`].
//!
//! Search priority is honored: entries are first split (stably) into priority classes
//! and each class is distributed on its own, matches first. Every kernel returns a new
//! sequence built from auxiliary buckets and keeps equal keys in input order.

use cuneiform::cuneiform;
use std::collections::BTreeMap;

use crate::core::{Key, SortEntry};
use crate::error::{SortError, SortResult};

/// Number of buckets for radix sort (decimal digits).
const RADIX: usize = 10;

// Cache-aligned counts struct.
#[cuneiform]
struct DigitCounts {
    data: [usize; RADIX],
}

/// Inclusive integer range spanned by a set of resolved keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericRange {
    min: i64,
    max: i64,
}

impl NumericRange {
    /// Fails with [`SortError::MalformedRange`] if `max < min`.
    pub fn new(min: i64, max: i64) -> SortResult<Self> {
        if max < min {
            return Err(SortError::MalformedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Smallest range holding every value, or `None` for no values.
    pub fn spanning(values: impl IntoIterator<Item = i64>) -> Option<Self> {
        values.into_iter().fold(None, |range, value| match range {
            None => Some(Self {
                min: value,
                max: value,
            }),
            Some(Self { min, max }) => Some(Self {
                min: min.min(value),
                max: max.max(value),
            }),
        })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// `max - min`, computed without overflow.
    pub fn width(&self) -> u64 {
        (i128::from(self.max) - i128::from(self.min)) as u64
    }

    /// Number of distinct values in the range, if it fits in `usize`.
    pub fn value_count(&self) -> SortResult<usize> {
        u128::from(self.width())
            .checked_add(1)
            .and_then(|count| usize::try_from(count).ok())
            .ok_or(SortError::RangeOverflow {
                min: self.min,
                max: self.max,
            })
    }

    /// Distance of `value` from `min`. `value` must lie inside the range.
    fn offset(&self, value: i64) -> usize {
        (i128::from(value) - i128::from(self.min)) as usize
    }
}

/// Pigeonhole sort: one hole per value in `min..=max`, filled in input order and
/// concatenated. Stable.
///
/// The hole count follows the key range, not the input length; a very wide range is
/// the caller's responsibility.
pub fn pigeonhole_sort(entries: Vec<SortEntry>) -> SortResult<Vec<SortEntry>> {
    distribute_by_class(entries, |members| {
        let Some(range) = NumericRange::spanning(members.iter().map(|(value, _)| *value)) else {
            return Ok(Vec::new());
        };

        let mut holes: Vec<Vec<SortEntry>> =
            (0..range.value_count()?).map(|_| Vec::new()).collect();
        for (value, entry) in members {
            holes[range.offset(value)].push(entry);
        }
        Ok(holes.into_iter().flatten().collect())
    })
}

/// Bucket sort with one bucket per entry.
///
/// Each key is normalized to a bucket index with
/// `(key - min) / (max - min + epsilon) * (n - 1)`, truncated. Buckets are insertion
/// sorted on the effective key and concatenated. With a single distinct key every entry
/// lands in bucket 0.
pub fn bucket_sort(entries: Vec<SortEntry>, epsilon: f64) -> SortResult<Vec<SortEntry>> {
    distribute_by_class(entries, |members| {
        let Some(range) = NumericRange::spanning(members.iter().map(|(value, _)| *value)) else {
            return Ok(Vec::new());
        };

        let last = members.len() - 1;
        let width = range.width() as f64 + epsilon;
        let mut buckets: Vec<Vec<SortEntry>> = (0..members.len()).map(|_| Vec::new()).collect();
        for (value, entry) in members {
            let ratio = range.offset(value) as f64 / width;
            let slot = ((ratio * last as f64) as usize).min(last);
            buckets[slot].push(entry);
        }

        Ok(buckets
            .into_iter()
            .flat_map(|mut bucket| {
                insertion_sort(&mut bucket);
                bucket
            })
            .collect())
    })
}

/// LSD radix sort over decimal digits.
///
/// Runs one stable counting pass per digit, for exponents `10^d` up to the largest key.
/// Negative keys fail with [`SortError::NegativeKey`].
pub fn radix_sort(entries: Vec<SortEntry>) -> SortResult<Vec<SortEntry>> {
    distribute_by_class(entries, |members| {
        let mut digits: Vec<(u64, SortEntry)> = members
            .into_iter()
            .map(|(value, entry)| match u64::try_from(value) {
                Ok(unsigned) => Ok((unsigned, entry)),
                Err(_) => Err(SortError::NegativeKey {
                    index: entry.index,
                    value,
                }),
            })
            .collect::<SortResult<_>>()?;

        let max = digits.iter().map(|(value, _)| *value).max().unwrap_or(0);
        let mut exp: u64 = 1;
        while exp <= max {
            digits = counting_pass(digits, exp);
            match exp.checked_mul(RADIX as u64) {
                Some(next) => exp = next,
                None => break,
            }
        }

        Ok(digits.into_iter().map(|(_, entry)| entry).collect())
    })
}

/// One stable counting-sort pass on the digit at `exp`.
///
/// 1. Counts how many keys carry each digit.
/// 2. Computes prefix sums to find where each digit's run starts.
/// 3. Places every item at its digit's next free slot, in input order.
fn counting_pass(items: Vec<(u64, SortEntry)>, exp: u64) -> Vec<(u64, SortEntry)> {
    let digit = |value: u64| ((value / exp) % RADIX as u64) as usize;

    let mut counts = DigitCounts { data: [0; RADIX] };
    let counts = &mut counts.data;
    items.iter().for_each(|(value, _)| counts[digit(*value)] += 1);

    let mut offsets = [0usize; RADIX];
    let mut sum = 0;
    offsets
        .iter_mut()
        .zip(counts.iter())
        .for_each(|(offset, &count)| {
            *offset = sum;
            sum += count;
        });

    let mut placed: Vec<Option<(u64, SortEntry)>> = (0..items.len()).map(|_| None).collect();
    items.into_iter().for_each(|item| {
        let d = digit(item.0);
        placed[offsets[d]] = Some(item);
        offsets[d] += 1;
    });

    placed.into_iter().flatten().collect()
}

/// Resolves every entry to `(priority class, integer)`, splits the entries stably by
/// class, and hands each class (lowest first) to `sort_class`.
fn distribute_by_class<F>(entries: Vec<SortEntry>, mut sort_class: F) -> SortResult<Vec<SortEntry>>
where
    F: FnMut(Vec<(i64, SortEntry)>) -> SortResult<Vec<SortEntry>>,
{
    let len = entries.len();
    let mut classes: BTreeMap<u8, Vec<(i64, SortEntry)>> = BTreeMap::new();
    for entry in entries {
        let (class, value) = resolve(&entry)?;
        classes.entry(class).or_default().push((value, entry));
    }

    let mut out = Vec::with_capacity(len);
    for members in classes.into_values() {
        out.extend(sort_class(members)?);
    }
    Ok(out)
}

fn resolve(entry: &SortEntry) -> SortResult<(u8, i64)> {
    let (class, key) = match &entry.key {
        Key::Prioritized { priority, key } => (*priority, key.as_ref()),
        plain => (0, plain),
    };

    key.as_integer()
        .map(|value| (class, value))
        .ok_or_else(|| SortError::NonNumericKey {
            index: entry.index,
            kind: entry.key.kind(),
        })
}

/// Stable insertion sort on the effective key, used per bucket.
fn insertion_sort(bucket: &mut [SortEntry]) {
    for i in 1..bucket.len() {
        let mut j = i;
        while j > 0 && bucket[j - 1].key > bucket[j].key {
            bucket.swap(j - 1, j);
            j -= 1;
        }
    }
}
