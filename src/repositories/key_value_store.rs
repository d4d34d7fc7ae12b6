// src/repositories/key_value_store.rs
//
// Persistent Store - durable string key -> JSON text storage

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::{get_connection, initialize_database, ConnectionPool};
use crate::error::{AppError, AppResult};

/// Key names for each owner of persisted state.
/// Every component writes only its own key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub catalog: String,
    pub selection: String,
    pub preferences: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            catalog: "movie-club-movies-v1".to_string(),
            selection: "movie-club-selections-v1".to_string(),
            preferences: "movie-club-prefs-v1".to_string(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Raw value stored under `key`, `None` when absent
    fn get_value(&self, key: &str) -> AppResult<Option<String>>;
    fn set_value(&self, key: &str, raw: &str) -> AppResult<()>;
}

// ============================================================================
// JSON HELPERS
// ============================================================================

/// Reads and decodes the JSON document at `key`.
///
/// Absent keys, JSON `null`, malformed documents and read failures all
/// yield `None`; callers substitute their own default.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get_value(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Failed to read {}: {}; using default", key, e);
            return None;
        }
    };

    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Malformed data at {}: {}; using default", key, e);
            None
        }
    }
}

/// Encodes `value` as JSON and writes it under `key`
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set_value(key, &raw)
}

// ============================================================================
// SQLITE STORE
// ============================================================================

pub struct SqliteKeyValueStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeyValueStore {
    /// Wraps a pool, creating the schema if needed
    pub fn open(pool: Arc<ConnectionPool>) -> AppResult<Self> {
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }
        Ok(Self { pool })
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get_value(&self, key: &str) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;

        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set_value(&self, key: &str, raw: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            params![key, raw, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// Volatile store for tests and hosts without a data directory
#[derive(Debug, Default, Clone)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written so far
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get_value(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::Other("In-memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set_value(&self, key: &str, raw: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::Other("In-memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_connection_pool_at;
    use crate::domain::{seed_movies, Movie, Preferences, Theme};

    fn sqlite_store(dir: &tempfile::TempDir) -> SqliteKeyValueStore {
        let pool = create_connection_pool_at(&dir.path().join("store.db")).unwrap();
        SqliteKeyValueStore::open(Arc::new(pool)).unwrap()
    }

    #[test]
    fn test_sqlite_get_absent_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = sqlite_store(&dir);
        assert_eq!(store.get_value("missing").unwrap(), None);
    }

    #[test]
    fn test_sqlite_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = sqlite_store(&dir);

        store.set_value("k", "1").unwrap();
        store.set_value("k", "2").unwrap();
        assert_eq!(store.get_value("k").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_sqlite_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = sqlite_store(&dir);
            save_json(&store, "movies", &seed_movies()).unwrap();
        }

        let store = sqlite_store(&dir);
        let movies: Vec<Movie> = load_json(&store, "movies").unwrap();
        assert_eq!(movies, seed_movies());
    }

    #[test]
    fn test_round_trip_for_each_document() {
        let store = InMemoryKeyValueStore::new();

        let catalog = seed_movies();
        save_json(&store, "catalog", &catalog).unwrap();
        assert_eq!(load_json::<Vec<Movie>>(&store, "catalog"), Some(catalog));

        let selection = vec!["tt0133093".to_string(), "tt1049413".to_string()];
        save_json(&store, "selection", &selection).unwrap();
        assert_eq!(load_json::<Vec<String>>(&store, "selection"), Some(selection));

        let prefs = Preferences {
            theme: Theme::Light,
            reduce_motion: true,
        };
        save_json(&store, "prefs", &prefs).unwrap();
        assert_eq!(load_json::<Preferences>(&store, "prefs"), Some(prefs));
    }

    #[test]
    fn test_malformed_and_null_documents_load_as_none() {
        let store = InMemoryKeyValueStore::new();
        store.set_value("broken", "{not json").unwrap();
        store.set_value("null", "null").unwrap();
        store.set_value("wrong_shape", "42").unwrap();

        assert_eq!(load_json::<Vec<String>>(&store, "broken"), None);
        assert_eq!(load_json::<Vec<String>>(&store, "null"), None);
        assert_eq!(load_json::<Vec<String>>(&store, "wrong_shape"), None);
        assert_eq!(load_json::<Vec<String>>(&store, "absent"), None);
    }

    #[test]
    fn test_read_failure_loads_as_none() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get_value()
            .returning(|_| Err(AppError::Other("disk on fire".to_string())));

        assert_eq!(load_json::<Vec<String>>(&store, "anything"), None);
    }

    #[test]
    fn test_default_keys_match_legacy_names() {
        let keys = StorageKeys::default();
        assert_eq!(keys.catalog, "movie-club-movies-v1");
        assert_eq!(keys.selection, "movie-club-selections-v1");
        assert_eq!(keys.preferences, "movie-club-prefs-v1");
    }
}
