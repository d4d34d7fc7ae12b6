// src/application/controller.rs
//
// Controller
//
// Every UI event goes through `dispatch`, which runs exactly one command
// and then recomputes all views before returning. Checkbox visuals only
// ever change through that recompute.

use std::sync::Arc;

use crate::application::commands;
use crate::application::dto::{ActionResult, UserAction};
use crate::application::error_handling::ErrorResponse;
use crate::application::state::AppState;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::FileDownloader;
use crate::repositories::{KeyValueStore, StorageKeys};
use crate::services::ViewSnapshot;

pub struct MovieClubController {
    state: AppState,
}

impl MovieClubController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn with_store(
        store: Arc<dyn KeyValueStore>,
        downloader: Arc<dyn FileDownloader>,
    ) -> Self {
        Self::new(AppState::load(
            store,
            downloader,
            Arc::new(EventBus::new()),
            &StorageKeys::default(),
        ))
    }

    /// Persistent controller on the default SQLite database
    pub fn open_default() -> AppResult<Self> {
        Ok(Self::new(AppState::open_default()?))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Subscribe here to observe state changes
    pub fn event_bus(&self) -> &Arc<EventBus> {
        self.state.event_bus()
    }

    /// Current views without performing any action (initial render)
    pub fn view(&self) -> ViewSnapshot {
        self.state.view()
    }

    /// Processes one UI event to completion and returns the recomputed views
    pub fn dispatch(&mut self, action: UserAction) -> ActionResult {
        log::debug!("Dispatching {:?}", action);

        match self.run(action) {
            Ok(notice) => {
                let view = self.state.view();
                ActionResult {
                    view: match notice {
                        Some(notice) => view.with_notice(notice),
                        None => view,
                    },
                    error: None,
                }
            }
            Err(e) => ActionResult {
                view: self.state.view(),
                error: Some(ErrorResponse::from_app_error(e)),
            },
        }
    }

    /// Runs the command; `Some` carries a status notice for the renderer
    fn run(&mut self, action: UserAction) -> AppResult<Option<String>> {
        let state = &mut self.state;

        match action {
            UserAction::Search { query, genre } => commands::search(state, query, genre),
            UserAction::ResetFilters => commands::reset_filters(state),
            UserAction::ToggleSelection { id } => {
                commands::toggle_selection(state, &id)?;
            }
            UserAction::CheckboxChanged { id, checked } => {
                commands::change_checkbox(state, &id, checked)?;
            }
            UserAction::SelectAllVisible => {
                commands::select_all_visible(state)?;
            }
            UserAction::ClearSelection => commands::clear_selection(state)?,
            UserAction::AddMovie(dto) => {
                let movie = commands::add_movie(state, dto)?;
                return Ok(Some(format!("Added “{}”", movie.title)));
            }
            UserAction::Export => {
                commands::export_selection(state)?;
            }
            UserAction::ToggleTheme => {
                commands::toggle_theme(state)?;
            }
            UserAction::ToggleReduceMotion => {
                commands::toggle_reduce_motion(state)?;
            }
        }

        Ok(None)
    }
}
