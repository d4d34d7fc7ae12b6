// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    // Catalog
    MovieAdded,
    // Selection
    SelectionChange,
    SelectionChanged,
    SelectionExported,
    // Filter
    FilterApplied,
    // Preferences
    PreferencesChanged,
};

pub use bus::{EventBus, EventLogEntry};
