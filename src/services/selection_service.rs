// src/services/selection_service.rs
//
// Selection Set - the ids marked for the club session

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::AppResult;
use crate::events::{EventBus, SelectionChange, SelectionChanged};
use crate::repositories::{load_json, save_json, KeyValueStore};

/// Selected movie ids. Ordered only to keep the stored document stable.
pub type SelectionSet = BTreeSet<String>;

pub struct SelectionService {
    selected: SelectionSet,
    store: Arc<dyn KeyValueStore>,
    key: String,
    event_bus: Arc<EventBus>,
}

impl SelectionService {
    /// Loads the persisted selection; absent or malformed data yields an empty set
    pub fn load(store: Arc<dyn KeyValueStore>, key: &str, event_bus: Arc<EventBus>) -> Self {
        let selected = load_json::<Vec<String>>(store.as_ref(), key)
            .map(|ids| ids.into_iter().collect())
            .unwrap_or_default();

        Self {
            selected,
            store,
            key: key.to_string(),
            event_bus,
        }
    }

    /// Read-only view for queries and export.
    /// All mutation goes through the methods below.
    pub fn snapshot(&self) -> &SelectionSet {
        &self.selected
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Adds `id` if absent, removes it if present. Returns the new membership.
    pub fn toggle(&mut self, id: &str) -> AppResult<bool> {
        let checked = !self.selected.contains(id);
        self.set_selected(id, checked)?;
        Ok(checked)
    }

    /// Applies a checkbox change. Returns whether the set changed.
    pub fn set_selected(&mut self, id: &str, checked: bool) -> AppResult<bool> {
        let mut next = self.selected.clone();
        let changed = if checked {
            next.insert(id.to_string())
        } else {
            next.remove(id)
        };

        self.commit(next)?;

        if changed {
            let change = if checked {
                SelectionChange::Selected {
                    movie_id: id.to_string(),
                }
            } else {
                SelectionChange::Deselected {
                    movie_id: id.to_string(),
                }
            };
            self.event_bus.emit(SelectionChanged::new(change, self.selected.len()));
        }
        Ok(changed)
    }

    /// Adds every id in the batch and persists once. Returns how many were new.
    pub fn select_all<I, S>(&mut self, ids: I) -> AppResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.selected.clone();
        let mut added = 0;
        for id in ids {
            if next.insert(id.into()) {
                added += 1;
            }
        }

        self.commit(next)?;

        self.event_bus.emit(SelectionChanged::new(
            SelectionChange::BulkSelected { added },
            self.selected.len(),
        ));
        Ok(added)
    }

    /// Empties the selection and persists
    pub fn clear(&mut self) -> AppResult<()> {
        self.commit(SelectionSet::new())?;

        self.event_bus.emit(SelectionChanged::new(SelectionChange::Cleared, 0));
        Ok(())
    }

    fn commit(&mut self, next: SelectionSet) -> AppResult<()> {
        let ids: Vec<&String> = next.iter().collect();
        save_json(self.store.as_ref(), &self.key, &ids)?;
        self.selected = next;
        Ok(())
    }
}
