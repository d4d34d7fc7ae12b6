// src/application/commands/catalog_commands.rs

use crate::application::dto::AddMovieDto;
use crate::application::state::AppState;
use crate::domain::Movie;
use crate::error::AppResult;

/// Add a movie from the add-movie form
pub fn add_movie(state: &mut AppState, dto: AddMovieDto) -> AppResult<Movie> {
    state.catalog.add_movie(dto.into())
}
