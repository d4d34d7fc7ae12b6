// src/services/catalog_service.rs
//
// Catalog Repository - owns the movie list and its persistence

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{
    normalize_genre, normalize_runtime, parse_title, parse_year, seed_movies, validate_movie,
    Movie,
};
use crate::error::AppResult;
use crate::events::{EventBus, MovieAdded};
use crate::repositories::{load_json, save_json, KeyValueStore};

/// Raw values of the add-movie form, exactly as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddMovieRequest {
    pub title: String,
    pub year: String,
    pub genre: String,
    pub runtime: String,
}

impl AddMovieRequest {
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        runtime: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            genre: genre.into(),
            runtime: runtime.into(),
        }
    }
}

pub struct CatalogService {
    movies: Vec<Movie>,
    store: Arc<dyn KeyValueStore>,
    key: String,
    event_bus: Arc<EventBus>,
}

impl CatalogService {
    /// Loads the persisted catalog, falling back to the seed list
    /// when the key is absent or malformed. Never fails.
    pub fn load(store: Arc<dyn KeyValueStore>, key: &str, event_bus: Arc<EventBus>) -> Self {
        let movies = match load_json::<Vec<Movie>>(store.as_ref(), key) {
            Some(movies) => dedup_by_id(movies),
            None => {
                log::debug!("No stored catalog at {}, using seed list", key);
                seed_movies()
            }
        };

        Self {
            movies,
            store,
            key: key.to_string(),
            event_bus,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Distinct genres, sorted ascending
    pub fn genres(&self) -> Vec<String> {
        distinct_genres(&self.movies)
    }

    /// Validates the form values and appends a new movie with a fresh id.
    ///
    /// Empty title or non-numeric year is rejected with
    /// `DomainError::InvalidInput` and leaves the catalog untouched.
    pub fn add_movie(&mut self, request: AddMovieRequest) -> AppResult<Movie> {
        let title = parse_title(&request.title)?;
        let year = parse_year(&request.year)?;
        let genre = normalize_genre(&request.genre);
        let runtime = normalize_runtime(&request.runtime);

        let movie = Movie::new(title, year, genre, runtime);
        self.insert(movie.clone())?;

        log::info!("Added \"{}\" ({}) as {}", movie.title, movie.year, movie.id);
        Ok(movie)
    }

    /// Appends `movie`, deduplicates by id and persists.
    /// A movie reusing an existing id replaces that record's values in place.
    pub fn insert(&mut self, movie: Movie) -> AppResult<()> {
        validate_movie(&movie)?;

        let mut next = self.movies.clone();
        next.push(movie.clone());
        let next = dedup_by_id(next);

        save_json(self.store.as_ref(), &self.key, &next)?;
        self.movies = next;

        self.event_bus
            .emit(MovieAdded::new(movie.id, movie.title, self.movies.len()));
        Ok(())
    }
}

/// Distinct genres of `movies`, sorted ascending
pub fn distinct_genres(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .map(|m| m.genre.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Collapses records sharing an id.
///
/// The survivor keeps the position of the first occurrence and the
/// field values of the last one.
pub fn dedup_by_id(movies: Vec<Movie>) -> Vec<Movie> {
    let mut position: HashMap<String, usize> = HashMap::with_capacity(movies.len());
    let mut unique: Vec<Movie> = Vec::with_capacity(movies.len());

    for movie in movies {
        match position.get(&movie.id) {
            Some(&idx) => unique[idx] = movie,
            None => {
                position.insert(movie.id.clone(), unique.len());
                unique.push(movie);
            }
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::error::AppError;
    use crate::repositories::{InMemoryKeyValueStore, MockKeyValueStore};

    const KEY: &str = "movie-club-movies-v1";

    fn service(store: &InMemoryKeyValueStore) -> CatalogService {
        CatalogService::load(Arc::new(store.clone()), KEY, Arc::new(EventBus::new()))
    }

    #[test]
    fn test_load_without_storage_uses_seed() {
        let store = InMemoryKeyValueStore::new();
        let catalog = service(&store);
        assert_eq!(catalog.movies(), seed_movies().as_slice());
        // Loading alone writes nothing
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_malformed_uses_seed() {
        let store = InMemoryKeyValueStore::new();
        store.set_value(KEY, "[{\"id\": 1}").unwrap();
        assert_eq!(service(&store).len(), 15);
    }

    #[test]
    fn test_load_reads_persisted_catalog() {
        let store = InMemoryKeyValueStore::new();
        let stored = vec![Movie::with_id("a", "Alien", 1979, "Horror", 117)];
        save_json(&store, KEY, &stored).unwrap();

        let catalog = service(&store);
        assert_eq!(catalog.movies(), stored.as_slice());
    }

    #[test]
    fn test_add_movie_appends_and_persists() {
        let store = InMemoryKeyValueStore::new();
        let mut catalog = service(&store);

        let movie = catalog
            .add_movie(AddMovieRequest::new("  Heat ", "1995", "", "abc"))
            .unwrap();

        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.year, 1995);
        assert_eq!(movie.genre, "Other");
        assert_eq!(movie.runtime, 90);
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.movies().last(), Some(&movie));

        let persisted: Vec<Movie> = load_json(&store, KEY).unwrap();
        assert_eq!(persisted, catalog.movies());
    }

    #[test]
    fn test_add_movie_rejects_empty_title() {
        let store = InMemoryKeyValueStore::new();
        let mut catalog = service(&store);

        let err = catalog
            .add_movie(AddMovieRequest::new("   ", "1995", "Crime", "170"))
            .unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::InvalidInput(_))));
        assert_eq!(catalog.movies(), seed_movies().as_slice());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_movie_rejects_bad_year() {
        let store = InMemoryKeyValueStore::new();
        let mut catalog = service(&store);

        for year in ["", "soon", "0"] {
            assert!(catalog
                .add_movie(AddMovieRequest::new("Heat", year, "Crime", "170"))
                .is_err());
        }
        assert_eq!(catalog.len(), 15);
    }

    #[test]
    fn test_insert_duplicate_id_keeps_length_and_later_values() {
        let store = InMemoryKeyValueStore::new();
        let mut catalog = service(&store);

        let replacement = Movie::with_id("tt0133093", "The Matrix (4K)", 1999, "Sci-Fi", 138);
        catalog.insert(replacement.clone()).unwrap();

        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.get("tt0133093"), Some(&replacement));
        // Keeps its original position
        assert_eq!(catalog.movies()[2], replacement);
    }

    #[test]
    fn test_dedup_by_id() {
        let movies = vec![
            Movie::with_id("a", "First", 2000, "Drama", 100),
            Movie::with_id("b", "Other", 2001, "Drama", 100),
            Movie::with_id("a", "Second", 2002, "Drama", 100),
        ];
        let unique = dedup_by_id(movies);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].title, "Second");
        assert_eq!(unique[1].title, "Other");
    }

    #[test]
    fn test_genres_sorted_and_distinct() {
        let store = InMemoryKeyValueStore::new();
        let mut catalog = service(&store);
        assert_eq!(
            catalog.genres(),
            vec![
                "Action", "Adventure", "Animation", "Comedy", "Crime", "Drama", "Fantasy",
                "Sci-Fi", "Thriller"
            ]
        );

        catalog
            .add_movie(AddMovieRequest::new("Heat", "1995", "", ""))
            .unwrap();
        assert!(catalog.genres().contains(&"Other".to_string()));
    }

    #[test]
    fn test_failed_write_leaves_catalog_untouched() {
        let mut store = MockKeyValueStore::new();
        store.expect_get_value().returning(|_| Ok(None));
        store
            .expect_set_value()
            .returning(|_, _| Err(AppError::Other("read-only".to_string())));

        let mut catalog = CatalogService::load(Arc::new(store), KEY, Arc::new(EventBus::new()));
        assert!(catalog
            .add_movie(AddMovieRequest::new("Heat", "1995", "Crime", "170"))
            .is_err());
        assert_eq!(catalog.len(), 15);
    }

    #[test]
    fn test_add_emits_event() {
        let store = InMemoryKeyValueStore::new();
        let bus = Arc::new(EventBus::new());
        let mut catalog = CatalogService::load(Arc::new(store), KEY, Arc::clone(&bus));

        catalog
            .add_movie(AddMovieRequest::new("Heat", "1995", "Crime", "170"))
            .unwrap();

        let log = bus.get_event_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event_type, "MovieAdded");
    }
}
