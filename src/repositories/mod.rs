// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB storage
// - NO business logic
// - Each owner writes only its own key

pub mod key_value_store;

pub use key_value_store::{
    load_json, save_json, InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore, StorageKeys,
};

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
