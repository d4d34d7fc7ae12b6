// src/services/view_service.rs
//
// View Synchronizer
//
// Derives every render-ready projection from (catalog, selection, filter).
// Checkbox state is never stored separately: it is read off the selection
// on each recompute, so the rendered checkboxes cannot drift from it.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::{filter_movies, Filter, Movie, Preferences};
use crate::services::catalog_service::distinct_genres;

/// One row of the filtered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieRow {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub runtime_label: String,
    pub aria_label: String,
    pub selected: bool,
}

impl MovieRow {
    fn new(movie: &Movie, selected: bool) -> Self {
        Self {
            id: movie.id.clone(),
            title: movie.title.clone(),
            year: movie.year,
            genre: movie.genre.clone(),
            runtime_label: format!("{} min", movie.runtime),
            aria_label: format!("Select {}", movie.title),
            selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredListView {
    pub rows: Vec<MovieRow>,
    pub result_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedEntry {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedSummaryView {
    pub entries: Vec<SelectedEntry>,
    pub count_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxState {
    pub id: String,
    pub checked: bool,
}

/// Everything the renderer needs after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub list: FilteredListView,
    pub summary: SelectedSummaryView,
    pub checkboxes: Vec<CheckboxState>,
    pub genre_options: Vec<String>,
    pub filter: Filter,
    pub preferences: Preferences,
    /// One-off status message that replaces the result label, e.g. after adding a movie
    pub notice: Option<String>,
}

impl ViewSnapshot {
    /// Text for the status line
    pub fn status_line(&self) -> &str {
        self.notice.as_deref().unwrap_or(&self.list.result_label)
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

pub struct ViewSynchronizer;

impl ViewSynchronizer {
    /// Full recompute of every projection
    pub fn compute(
        catalog: &[Movie],
        selection: &BTreeSet<String>,
        filter: &Filter,
        preferences: Preferences,
    ) -> ViewSnapshot {
        let list = Self::filtered_list(catalog, selection, filter);
        let checkboxes = list
            .rows
            .iter()
            .map(|row| CheckboxState {
                id: row.id.clone(),
                checked: row.selected,
            })
            .collect();

        log::debug!(
            "Recomputed views: {} rows, {} selected",
            list.rows.len(),
            selection.len()
        );

        ViewSnapshot {
            summary: Self::selected_summary(catalog, selection),
            list,
            checkboxes,
            genre_options: distinct_genres(catalog),
            filter: filter.clone(),
            preferences,
            notice: None,
        }
    }

    pub fn filtered_list(
        catalog: &[Movie],
        selection: &BTreeSet<String>,
        filter: &Filter,
    ) -> FilteredListView {
        let rows: Vec<MovieRow> = filter_movies(catalog, &filter.query, &filter.genre)
            .into_iter()
            .map(|movie| MovieRow::new(movie, selection.contains(&movie.id)))
            .collect();

        FilteredListView {
            result_label: result_label(rows.len()),
            rows,
        }
    }

    /// Selected catalog movies sorted by title. Ids missing from the catalog are skipped.
    pub fn selected_summary(
        catalog: &[Movie],
        selection: &BTreeSet<String>,
    ) -> SelectedSummaryView {
        let mut selected: Vec<&Movie> = catalog
            .iter()
            .filter(|movie| selection.contains(&movie.id))
            .collect();
        selected.sort_by(|a, b| compare_titles(&a.title, &b.title));

        SelectedSummaryView {
            count_label: format!("{} selected", selected.len()),
            entries: selected
                .into_iter()
                .map(|movie| SelectedEntry {
                    id: movie.id.clone(),
                    label: movie.summary_label(),
                })
                .collect(),
        }
    }
}

/// "1 result" / "N results"
pub fn result_label(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", count)
    }
}

/// Accent- and case-insensitive ordering with a case-insensitive then byte-wise tie-break
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// NFD with combining marks stripped, lowercased: "Élite" sorts as "elite"
fn collation_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
