// src/application/commands/filter_commands.rs

use crate::application::state::AppState;
use crate::domain::Filter;
use crate::events::FilterApplied;

/// Search form submitted
pub fn search(state: &mut AppState, query: String, genre: String) {
    apply_filter(state, Filter::new(query, genre));
}

/// Back to the unfiltered catalog
pub fn reset_filters(state: &mut AppState) {
    apply_filter(state, Filter::default());
}

fn apply_filter(state: &mut AppState, filter: Filter) {
    let result_count = filter.apply(state.catalog.movies()).len();
    state.filter = filter.clone();
    state
        .event_bus
        .emit(FilterApplied::new(filter, result_count));
}
