// src/application/state.rs
//
// Owned application state. The controller is the only mutator;
// renderers see it only through computed views.

use std::sync::Arc;

use crate::db::create_connection_pool;
use crate::domain::Filter;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{DirectoryDownloader, FileDownloader};
use crate::repositories::{KeyValueStore, SqliteKeyValueStore, StorageKeys};
use crate::services::{
    CatalogService, ExportService, PreferenceService, SelectionService, ViewSnapshot,
    ViewSynchronizer,
};

pub struct AppState {
    pub(crate) event_bus: Arc<EventBus>,
    pub(crate) catalog: CatalogService,
    pub(crate) selection: SelectionService,
    pub(crate) preferences: PreferenceService,
    pub(crate) exporter: ExportService,
    /// Transient, never persisted
    pub(crate) filter: Filter,
}

impl AppState {
    /// Loads every owner from `store`. Never fails: missing or malformed
    /// documents fall back to their defaults.
    pub fn load(
        store: Arc<dyn KeyValueStore>,
        downloader: Arc<dyn FileDownloader>,
        event_bus: Arc<EventBus>,
        keys: &StorageKeys,
    ) -> Self {
        let catalog =
            CatalogService::load(Arc::clone(&store), &keys.catalog, Arc::clone(&event_bus));
        let selection =
            SelectionService::load(Arc::clone(&store), &keys.selection, Arc::clone(&event_bus));
        let preferences =
            PreferenceService::load(Arc::clone(&store), &keys.preferences, Arc::clone(&event_bus));
        let exporter = ExportService::new(downloader, Arc::clone(&event_bus));

        log::debug!(
            "Loaded state: {} movies, {} selected",
            catalog.len(),
            selection.len()
        );

        Self {
            event_bus,
            catalog,
            selection,
            preferences,
            exporter,
            filter: Filter::default(),
        }
    }

    /// SQLite store in the user data directory, exports to the download directory
    pub fn open_default() -> AppResult<Self> {
        let pool = Arc::new(create_connection_pool()?);
        let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::open(pool)?);
        let downloader: Arc<dyn FileDownloader> = Arc::new(DirectoryDownloader::user_downloads()?);

        Ok(Self::load(
            store,
            downloader,
            Arc::new(EventBus::new()),
            &StorageKeys::default(),
        ))
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionService {
        &self.selection
    }

    pub fn preferences(&self) -> &PreferenceService {
        &self.preferences
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Full recompute of every view
    pub fn view(&self) -> ViewSnapshot {
        ViewSynchronizer::compute(
            self.catalog.movies(),
            self.selection.snapshot(),
            &self.filter,
            self.preferences.current(),
        )
    }
}
