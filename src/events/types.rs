// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Filter, Preferences};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($event:ty, $name:literal) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { $name }
        }
    };
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

/// Emitted after a movie was appended to the catalog and persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: String,
    pub title: String,
    pub catalog_size: usize,
}

impl MovieAdded {
    pub fn new(movie_id: String, title: String, catalog_size: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            title,
            catalog_size,
        }
    }
}

impl_domain_event!(MovieAdded, "MovieAdded");

// ============================================================================
// SELECTION EVENTS
// ============================================================================

/// What happened to the selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SelectionChange {
    Selected { movie_id: String },
    Deselected { movie_id: String },
    BulkSelected { added: usize },
    Cleared,
}

/// Emitted after the selection set was mutated and persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub change: SelectionChange,
    pub selected_count: usize,
}

impl SelectionChanged {
    pub fn new(change: SelectionChange, selected_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            change,
            selected_count,
        }
    }
}

impl_domain_event!(SelectionChanged, "SelectionChanged");

/// Emitted after the selection was handed to the download collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionExported {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub filename: String,
    pub row_count: usize,
}

impl SelectionExported {
    pub fn new(filename: String, row_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            filename,
            row_count,
        }
    }
}

impl_domain_event!(SelectionExported, "SelectionExported");

// ============================================================================
// FILTER EVENTS
// ============================================================================

/// Emitted when the user submits a search or resets the filters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterApplied {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub filter: Filter,
    pub result_count: usize,
}

impl FilterApplied {
    pub fn new(filter: Filter, result_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            filter,
            result_count,
        }
    }
}

impl_domain_event!(FilterApplied, "FilterApplied");

// ============================================================================
// PREFERENCE EVENTS
// ============================================================================

/// Emitted after a preference toggle was persisted.
/// Hosts subscribe to this to apply the theme and motion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub preferences: Preferences,
}

impl PreferencesChanged {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            preferences,
        }
    }
}

impl_domain_event!(PreferencesChanged, "PreferencesChanged");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        let added = MovieAdded::new("id_1".to_string(), "Heat".to_string(), 16);
        assert_eq!(added.event_type(), "MovieAdded");

        let changed = SelectionChanged::new(SelectionChange::Cleared, 0);
        assert_eq!(changed.event_type(), "SelectionChanged");
    }

    #[test]
    fn test_event_ids_are_unique() {
        let a = PreferencesChanged::new(Preferences::default());
        let b = PreferencesChanged::new(Preferences::default());
        assert_ne!(a.event_id(), b.event_id());
    }

    #[test]
    fn test_selection_change_serialization() {
        let change = SelectionChange::Selected {
            movie_id: "tt0133093".to_string(),
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["kind"], "selected");
        assert_eq!(json["movie_id"], "tt0133093");
    }
}
