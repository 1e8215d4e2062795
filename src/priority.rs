//! Search priority adapter.
//!
//! Wraps a [`KeyExtractor`] so that records whose key mentions a search term sort
//! ahead of the rest. The adapted key is `(priority, original_key)`, compared
//! lexicographically, so the order inside each priority class is exactly the order the
//! original key induces.

use crate::core::{Key, KeyExtractor};

/// Priority given to keys that contain the search term.
pub const MATCH: u8 = 0;

/// Priority given to keys that do not contain the search term.
pub const NO_MATCH: u8 = 1;

/// Extractor produced by [`adapt`].
#[derive(Debug)]
pub struct SearchPriority<'a, E: ?Sized> {
    inner: &'a E,
    term: Option<&'a str>,
}

/// Wraps `extractor` with an optional search term.
///
/// Without a term the adapter returns the original key unchanged.
///
/// # Examples
///
/// ```
/// use bibsort::core::{Key, KeyExtractor};
/// use bibsort::priority::adapt;
///
/// let title = |t: &&str| t.to_string();
/// let adapted = adapt(&title, Some("Rust"));
///
/// assert_eq!(
///     adapted.extract_key(&"Rust in Science"),
///     Key::Prioritized { priority: 0, key: Box::new(Key::from("Rust in Science")) },
/// );
/// assert_eq!(adapt(&title, None).extract_key(&"Go"), Key::from("Go"));
/// ```
pub fn adapt<'a, E: ?Sized>(extractor: &'a E, term: Option<&'a str>) -> SearchPriority<'a, E> {
    SearchPriority {
        inner: extractor,
        term,
    }
}

impl<E: ?Sized> SearchPriority<'_, E> {
    pub fn term(&self) -> Option<&str> {
        self.term
    }
}

impl<R: ?Sized, E: KeyExtractor<R> + ?Sized> KeyExtractor<R> for SearchPriority<'_, E> {
    fn extract_key(&self, record: &R) -> Key {
        let base = self.inner.extract_key(record);
        match self.term {
            Some(term) => prioritize(base, term),
            None => base,
        }
    }
}

/// Tags `base` with [`MATCH`] if its string form contains `term` (case-sensitive),
/// else with [`NO_MATCH`].
pub fn prioritize(base: Key, term: &str) -> Key {
    let priority = if base.to_string().contains(term) {
        MATCH
    } else {
        NO_MATCH
    };

    Key::Prioritized {
        priority,
        key: Box::new(base),
    }
}
