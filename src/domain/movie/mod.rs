//! Critical Movie Invariants:
//!
//! 1. Identity (id) is unique within the catalog
//! 2. Duplicated ids are collapsed, the last written record wins
//! 3. Title cannot be empty
//! 4. Year is a non-zero integer
//! 5. Genre is never empty ("Other" when not given)
//! 6. Runtime is positive minutes (90 when not given)

pub mod entity;
pub mod invariants;
pub mod seed;

pub use entity::Movie;
pub use invariants::{
    normalize_genre, normalize_runtime, parse_title, parse_year, validate_movie, DEFAULT_GENRE,
    DEFAULT_RUNTIME,
};
pub use seed::seed_movies;
