//! Bibliographic article record and its standard sort keys.
//!
//! The engine itself never looks at these fields; they only matter through the
//! extractors returned by [`article_keys`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::NamedKey;

/// An article as delivered by the scrapers and consumed by the exporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    /// Author names as one display string, e.g. `"Doe, J.; Roe, R."`.
    pub authors: String,
    pub publication_date: NaiveDate,
    /// Name of the bibliographic database the article came from.
    pub source: String,
    pub link: String,
}

/// Named extractors for every article field, in the order the benchmark sweeps them:
/// `title`, `publication_date`, `source`, `authors`, `id`, `link`.
pub fn article_keys() -> Vec<NamedKey<Article>> {
    vec![
        NamedKey::new("title", |a: &Article| a.title.clone()),
        NamedKey::new("publication_date", |a: &Article| a.publication_date),
        NamedKey::new("source", |a: &Article| a.source.clone()),
        NamedKey::new("authors", |a: &Article| a.authors.clone()),
        NamedKey::new("id", |a: &Article| a.id),
        NamedKey::new("link", |a: &Article| a.link.clone()),
    ]
}

/// Looks up one of the [`article_keys`] by name.
pub fn article_key(name: &str) -> Option<NamedKey<Article>> {
    article_keys().into_iter().find(|key| key.name() == name)
}
