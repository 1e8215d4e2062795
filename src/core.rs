//! Core traits and types for bibsort.
//!
//! This module defines:
//! - [`Key`]: The orderable value a record is projected to.
//! - [`KeyExtractor`]: The trait callers implement (or pass a closure for) to sort their records.
//! - [`SortEntry`]: Keyed pointer to a record; every algorithm reorders these, never the records.
//! - [`NamedKey`]: An extractor with a display name, used when sweeping several keys.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::{SortError, SortResult};

/// The orderable value produced for a record.
///
/// Ordering is lexicographic for [`Key::Tuple`] and [`Key::Prioritized`]. Keys of
/// different shapes still have a (variant based) order so that `Key` can implement
/// [`Ord`], but the engine refuses to sort a collection whose keys do not all share
/// one shape, so that fallback never decides the order of a real invocation.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Int(i64),
    Text(String),
    Date(NaiveDate),
    Tuple(Vec<Key>),
    /// Key wrapped by the search priority adapter. `priority` is `0` for a match.
    Prioritized { priority: u8, key: Box<Key> },
}

impl Key {
    /// Returns the shape of this key.
    pub fn kind(&self) -> KeyKind {
        match self {
            Key::Int(_) => KeyKind::Int,
            Key::Text(_) => KeyKind::Text,
            Key::Date(_) => KeyKind::Date,
            Key::Tuple(items) => KeyKind::Tuple(items.iter().map(Key::kind).collect()),
            Key::Prioritized { key, .. } => KeyKind::Prioritized(Box::new(key.kind())),
        }
    }

    /// Returns `true` if both keys have the same shape and can therefore be ordered
    /// against each other without falling back to the variant order.
    pub fn same_shape(&self, other: &Key) -> bool {
        match (self, other) {
            (Key::Int(_), Key::Int(_))
            | (Key::Text(_), Key::Text(_))
            | (Key::Date(_), Key::Date(_)) => true,
            (Key::Tuple(a), Key::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_shape(y))
            }
            (Key::Prioritized { key: a, .. }, Key::Prioritized { key: b, .. }) => a.same_shape(b),
            _ => false,
        }
    }

    /// Lossless integer view of a scalar key.
    ///
    /// Dates resolve to their day number counted from the common era.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Key::Int(value) => Some(*value),
            Key::Date(date) => Some(i64::from(date.num_days_from_ce())),
            _ => None,
        }
    }
}

/// Natural string form of a key; this is what search terms are matched against.
///
/// Tuple members are joined as `(a, b)` with text printed bare, without quotes, so a
/// search term containing a quote character never matches inside a tuple key.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(value) => write!(f, "{value}"),
            Key::Text(text) => f.write_str(text),
            Key::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Key::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Key::Prioritized { priority, key } => write!(f, "({priority}, {key})"),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

impl From<NaiveDate> for Key {
    fn from(value: NaiveDate) -> Self {
        Key::Date(value)
    }
}

impl<A: Into<Key>, B: Into<Key>> From<(A, B)> for Key {
    fn from((a, b): (A, B)) -> Self {
        Key::Tuple(vec![a.into(), b.into()])
    }
}

/// Shape of a [`Key`], used to report incomparable keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Int,
    Text,
    Date,
    Tuple(Vec<KeyKind>),
    Prioritized(Box<KeyKind>),
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Int => f.write_str("integer"),
            KeyKind::Text => f.write_str("text"),
            KeyKind::Date => f.write_str("date"),
            KeyKind::Tuple(items) => {
                f.write_str("tuple(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            KeyKind::Prioritized(inner) => write!(f, "prioritized({inner})"),
        }
    }
}

/// A trait for projecting a record to its sort [`Key`].
///
/// Any closure `Fn(&R) -> K` where `K: Into<Key>` is an extractor, so most callers
/// never implement this trait by hand.
///
/// # Examples
///
/// Implementing for a reusable extractor:
///
/// ```
/// use bibsort::core::{Key, KeyExtractor};
///
/// struct Paper {
///     year: i64,
/// }
///
/// struct ByYear;
///
/// impl KeyExtractor<Paper> for ByYear {
///     fn extract_key(&self, record: &Paper) -> Key {
///         Key::Int(record.year)
///     }
/// }
///
/// assert_eq!(ByYear.extract_key(&Paper { year: 2021 }), Key::Int(2021));
/// ```
pub trait KeyExtractor<R: ?Sized> {
    /// Returns the key of `record`.
    fn extract_key(&self, record: &R) -> Key;
}

impl<R: ?Sized, K, F> KeyExtractor<R> for F
where
    F: Fn(&R) -> K,
    K: Into<Key>,
{
    fn extract_key(&self, record: &R) -> Key {
        self(record).into()
    }
}

/// A key extractor with a name, e.g. the record field it reads.
pub struct NamedKey<R> {
    name: String,
    extractor: Box<dyn KeyExtractor<R> + Send + Sync>,
}

impl<R> NamedKey<R> {
    pub fn new(
        name: impl Into<String>,
        extractor: impl KeyExtractor<R> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            extractor: Box::new(extractor),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<R> KeyExtractor<R> for NamedKey<R> {
    fn extract_key(&self, record: &R) -> Key {
        self.extractor.extract_key(record)
    }
}

impl<R> fmt::Debug for NamedKey<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedKey").field("name", &self.name).finish()
    }
}

/// Pointer to a record, storing its original position and its effective key.
///
/// Comparisons between entries only ever look at `key`; `index` is carried along so
/// the final order can be applied to the records afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortEntry {
    pub index: usize,
    pub key: Key,
}

impl SortEntry {
    pub fn new(index: usize, key: impl Into<Key>) -> Self {
        Self {
            index,
            key: key.into(),
        }
    }
}

/// Builds one [`SortEntry`] per record and checks that all keys share one shape.
pub(crate) fn decorate<R, E>(records: &[R], extractor: &E) -> SortResult<Vec<SortEntry>>
where
    E: KeyExtractor<R> + ?Sized,
{
    let entries: Vec<SortEntry> = records
        .iter()
        .enumerate()
        .map(|(index, record)| SortEntry {
            index,
            key: extractor.extract_key(record),
        })
        .collect();

    check_comparable(&entries)?;
    Ok(entries)
}

/// Fails with [`SortError::IncomparableKey`] on the first entry whose key shape
/// differs from the first entry's.
pub fn check_comparable(entries: &[SortEntry]) -> SortResult<()> {
    let Some(first) = entries.first() else {
        return Ok(());
    };

    match entries.iter().find(|e| !e.key.same_shape(&first.key)) {
        Some(entry) => Err(SortError::IncomparableKey {
            index: entry.index,
            expected: first.key.kind(),
            found: entry.key.kind(),
        }),
        None => Ok(()),
    }
}

/// Returns `true` if `entries` is non-decreasing under the effective key.
pub fn is_sorted(entries: &[SortEntry]) -> bool {
    entries.is_sorted_by(|a, b| a.key <= b.key)
}

/// Reorders `data` so that position `i` receives the element previously at `indices[i]`.
///
/// `indices` must be a permutation of `0..data.len()`.
pub(crate) fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as visited/placed
            current = next;
        }
        indices[current] = current;
    }
}
