// src/services/preference_service.rs
use std::sync::Arc;

use crate::domain::Preferences;
use crate::error::AppResult;
use crate::events::{EventBus, PreferencesChanged};
use crate::repositories::{load_json, save_json, KeyValueStore};

pub struct PreferenceService {
    preferences: Preferences,
    store: Arc<dyn KeyValueStore>,
    key: String,
    event_bus: Arc<EventBus>,
}

impl PreferenceService {
    /// Loads stored preferences, `{dark, false}` when absent or malformed
    pub fn load(store: Arc<dyn KeyValueStore>, key: &str, event_bus: Arc<EventBus>) -> Self {
        let preferences = load_json::<Preferences>(store.as_ref(), key).unwrap_or_default();

        Self {
            preferences,
            store,
            key: key.to_string(),
            event_bus,
        }
    }

    pub fn current(&self) -> Preferences {
        self.preferences
    }

    /// Flips light <-> dark
    pub fn toggle_theme(&mut self) -> AppResult<Preferences> {
        let mut next = self.preferences;
        next.theme = next.theme.toggled();
        self.commit(next)
    }

    pub fn toggle_reduce_motion(&mut self) -> AppResult<Preferences> {
        let mut next = self.preferences;
        next.reduce_motion = !next.reduce_motion;
        self.commit(next)
    }

    fn commit(&mut self, next: Preferences) -> AppResult<Preferences> {
        save_json(self.store.as_ref(), &self.key, &next)?;
        self.preferences = next;

        self.event_bus.emit(PreferencesChanged::new(next));
        Ok(next)
    }
}
