// src/domain/filter.rs
//
// Filter Engine
//
// A pure projection of the catalog. Recomputed on every call, never cached.

use serde::{Deserialize, Serialize};

use crate::domain::movie::Movie;

/// Transient search state. Lives only for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub query: String,
    pub genre: String,
}

impl Filter {
    pub fn new(query: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            genre: genre.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.genre.trim().is_empty()
    }

    pub fn apply<'a>(&self, catalog: &'a [Movie]) -> Vec<&'a Movie> {
        filter_movies(catalog, &self.query, &self.genre)
    }
}

/// Returns the movies matching both the text query and the genre, in catalog order.
///
/// - `query` is trimmed and lower-cased; empty means no text constraint.
///   A movie matches when its title, year or genre contains it.
/// - `genre` is trimmed; empty means no genre constraint, otherwise exact match.
pub fn filter_movies<'a>(catalog: &'a [Movie], query: &str, genre: &str) -> Vec<&'a Movie> {
    let needle = query.trim().to_lowercase();
    let genre = genre.trim();

    catalog
        .iter()
        .filter(|movie| needle.is_empty() || movie.matches_query(&needle))
        .filter(|movie| genre.is_empty() || movie.genre == genre)
        .collect()
}
