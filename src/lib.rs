// src/lib.rs
// MovieClub - Local-first movie club selection manager
//
// Architecture:
// - Domain-centric: movie, preference and filter rules live in `domain`
// - Owned state: each service owns exactly one persisted document
// - One-way data flow: UI events -> controller -> service -> recomputed views
// - Event-driven: every mutation is published on the event bus
// - Local-first: state lives in a local key-value store

pub mod application;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    filter_movies, seed_movies, validate_movie, DomainError, Filter, Movie, Preferences, Theme,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    DomainEvent, EventBus, EventLogEntry, FilterApplied, MovieAdded, PreferencesChanged,
    SelectionChange, SelectionChanged, SelectionExported,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{
    create_connection_pool, create_connection_pool_at, initialize_database, ConnectionPool,
};

pub use repositories::{InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore, StorageKeys};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    export_csv, AddMovieRequest, CatalogService, CheckboxState, ExportService, FilteredListView,
    MovieRow, PreferenceService, SelectedEntry, SelectedSummaryView, SelectionService,
    SelectionSet, ViewSnapshot, ViewSynchronizer, CSV_HEADER, EXPORT_FILENAME, EXPORT_MIME_TYPE,
};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{DirectoryDownloader, FileDownloader};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{
    ActionResult, AddMovieDto, AppState, ErrorResponse, ErrorType, MovieClubController,
    UserAction,
};
