use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Stable identifier (IMDb ids for seeded titles, `id_<hex>` for user additions)
    pub id: String,

    pub title: String,

    /// Release year
    pub year: i32,

    pub genre: String,

    /// Runtime in minutes
    pub runtime: u32,
}

impl Movie {
    /// Create a movie with a freshly generated identifier
    pub fn new(title: String, year: i32, genre: String, runtime: u32) -> Self {
        Self {
            id: Self::generate_id(),
            title,
            year,
            genre,
            runtime,
        }
    }

    /// Create a movie with a known identifier
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        runtime: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            genre: genre.into(),
            runtime,
        }
    }

    /// Random identifier for user-added movies.
    /// v4 UUIDs make collisions negligible without any coordination.
    pub fn generate_id() -> String {
        format!("id_{}", Uuid::new_v4().simple())
    }

    /// Human-readable label used in the selected summary
    pub fn summary_label(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }

    /// Case-insensitive text match against title, year and genre.
    /// `needle` must already be lower-cased.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.year.to_string().contains(needle)
            || self.genre.to_lowercase().contains(needle)
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
