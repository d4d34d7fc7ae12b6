// src/application/commands/preference_commands.rs

use crate::application::state::AppState;
use crate::domain::Preferences;
use crate::error::AppResult;

pub fn toggle_theme(state: &mut AppState) -> AppResult<Preferences> {
    state.preferences.toggle_theme()
}

pub fn toggle_reduce_motion(state: &mut AppState) -> AppResult<Preferences> {
    state.preferences.toggle_reduce_motion()
}
