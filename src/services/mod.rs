// src/services/mod.rs
//
// Services Module - state owners and pure projections

pub mod catalog_service;
pub mod export_service;
pub mod preference_service;
pub mod selection_service;
pub mod view_service;

pub use catalog_service::{dedup_by_id, distinct_genres, AddMovieRequest, CatalogService};

pub use export_service::{
    export_csv, ExportService, CSV_HEADER, EXPORT_FILENAME, EXPORT_MIME_TYPE,
};

pub use preference_service::PreferenceService;

pub use selection_service::{SelectionService, SelectionSet};

pub use view_service::{
    CheckboxState, FilteredListView, MovieRow, SelectedEntry, SelectedSummaryView, ViewSnapshot,
    ViewSynchronizer,
};
