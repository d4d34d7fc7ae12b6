// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod filter;
pub mod movie;
pub mod preferences;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{
    normalize_genre, normalize_runtime, parse_title, parse_year, seed_movies, validate_movie,
    Movie, DEFAULT_GENRE, DEFAULT_RUNTIME,
};

// Preferences Domain
pub use preferences::{Preferences, Theme};

// Filter (transient, never persisted)
pub use filter::{filter_movies, Filter};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
