// src/services/export_service.rs
//
// Export Function - selection to CSV, handed to the download collaborator

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::Movie;
use crate::error::AppResult;
use crate::events::{EventBus, SelectionExported};
use crate::integrations::FileDownloader;

pub const CSV_HEADER: &str = "Title,Year,Genre,Runtime(min)";
pub const EXPORT_FILENAME: &str = "movie-club-selections.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Header plus one row per selected movie, in catalog order.
/// Lines are joined with `\n` and there is no trailing newline.
/// Selected ids missing from the catalog produce no row.
pub fn export_csv(catalog: &[Movie], selection: &BTreeSet<String>) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(
        catalog
            .iter()
            .filter(|movie| selection.contains(&movie.id))
            .map(csv_row),
    );
    lines.join("\n")
}

fn csv_row(movie: &Movie) -> String {
    [
        csv_escape(&movie.title),
        movie.year.to_string(),
        csv_escape(&movie.genre),
        movie.runtime.to_string(),
    ]
    .join(",")
}

/// Quotes a field only when it would otherwise break the row
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

pub struct ExportService {
    downloader: Arc<dyn FileDownloader>,
    event_bus: Arc<EventBus>,
}

impl ExportService {
    pub fn new(downloader: Arc<dyn FileDownloader>, event_bus: Arc<EventBus>) -> Self {
        Self {
            downloader,
            event_bus,
        }
    }

    /// Builds the CSV and delivers it. Returns the number of data rows.
    pub fn export(&self, catalog: &[Movie], selection: &BTreeSet<String>) -> AppResult<usize> {
        let csv = export_csv(catalog, selection);
        let row_count = catalog
            .iter()
            .filter(|movie| selection.contains(&movie.id))
            .count();

        self.downloader
            .download(EXPORT_FILENAME, EXPORT_MIME_TYPE, &csv)?;

        log::info!("Exported {} selected movies", row_count);
        self.event_bus
            .emit(SelectionExported::new(EXPORT_FILENAME.to_string(), row_count));
        Ok(row_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed_movies;
    use crate::error::AppError;
    use crate::integrations::MockFileDownloader;

    fn selection(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_selection() {
        let csv = export_csv(&seed_movies(), &selection(&["tt0133093"]));
        assert_eq!(csv, "Title,Year,Genre,Runtime(min)\nThe Matrix,1999,Sci-Fi,136");
    }

    #[test]
    fn test_empty_selection_is_header_only() {
        assert_eq!(export_csv(&seed_movies(), &BTreeSet::new()), CSV_HEADER);
    }

    #[test]
    fn test_rows_follow_catalog_order() {
        let csv = export_csv(&seed_movies(), &selection(&["tt6751668", "tt0111161", "tt1049413"]));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                CSV_HEADER,
                "The Shawshank Redemption,1994,Drama,142",
                "Up,2009,Animation,96",
                "Parasite,2019,Thriller,132",
            ]
        );
    }

    #[test]
    fn test_one_row_per_selected_id() {
        let catalog = seed_movies();
        let ids: Vec<&str> = catalog.iter().step_by(2).map(|m| m.id.as_str()).collect();
        let csv = export_csv(&catalog, &selection(&ids));

        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), ids.len());
    }

    #[test]
    fn test_stale_ids_are_skipped() {
        let csv = export_csv(&seed_movies(), &selection(&["tt0133093", "id_gone"]));
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let catalog = vec![Movie::with_id(
            "x",
            "Crouching Tiger, Hidden Dragon",
            2000,
            "Action",
            120,
        )];
        let csv = export_csv(&catalog, &selection(&["x"]));
        assert_eq!(
            csv.lines().nth(1),
            Some("\"Crouching Tiger, Hidden Dragon\",2000,Action,120")
        );

        assert_eq!(csv_escape("Say \"hi\""), "\"Say \"\"hi\"\"\"");
        assert_eq!(csv_escape("Plain"), "Plain");
    }

    #[test]
    fn test_export_hands_csv_to_downloader() {
        let mut downloader = MockFileDownloader::new();
        downloader
            .expect_download()
            .withf(|filename, mime, content| {
                filename.to_string() == EXPORT_FILENAME
                    && mime.to_string() == EXPORT_MIME_TYPE
                    && content.to_string()
                        == "Title,Year,Genre,Runtime(min)\nThe Matrix,1999,Sci-Fi,136"
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let bus = Arc::new(EventBus::new());
        let service = ExportService::new(Arc::new(downloader), Arc::clone(&bus));

        let rows = service
            .export(&seed_movies(), &selection(&["tt0133093"]))
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(bus.get_event_log()[0].event_type, "SelectionExported");
    }

    #[test]
    fn test_download_failure_propagates() {
        let mut downloader = MockFileDownloader::new();
        downloader.expect_download().returning(|filename, _, _| {
            Err(AppError::Download {
                filename: filename.to_string(),
                reason: "cancelled".to_string(),
            })
        });

        let bus = Arc::new(EventBus::new());
        let service = ExportService::new(Arc::new(downloader), Arc::clone(&bus));

        assert!(service.export(&seed_movies(), &BTreeSet::new()).is_err());
        assert!(bus.get_event_log().is_empty());
    }
}
