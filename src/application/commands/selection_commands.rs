// src/application/commands/selection_commands.rs

use crate::application::state::AppState;
use crate::error::AppResult;

pub fn toggle_selection(state: &mut AppState, id: &str) -> AppResult<bool> {
    state.selection.toggle(id)
}

/// A checkbox reported its new checked state
pub fn change_checkbox(state: &mut AppState, id: &str, checked: bool) -> AppResult<bool> {
    state.selection.set_selected(id, checked)
}

/// Select every row shown under the current filter
pub fn select_all_visible(state: &mut AppState) -> AppResult<usize> {
    let visible: Vec<String> = state
        .filter
        .apply(state.catalog.movies())
        .into_iter()
        .map(|movie| movie.id.clone())
        .collect();

    state.selection.select_all(visible)
}

pub fn clear_selection(state: &mut AppState) -> AppResult<()> {
    state.selection.clear()
}
