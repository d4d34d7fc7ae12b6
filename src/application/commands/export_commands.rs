// src/application/commands/export_commands.rs

use crate::application::state::AppState;
use crate::error::AppResult;

/// Hand the selection to the download collaborator as CSV
pub fn export_selection(state: &AppState) -> AppResult<usize> {
    state
        .exporter
        .export(state.catalog.movies(), state.selection.snapshot())
}
