//! Key-value store abstraction the panel state is persisted through

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// A string key-value store, e.g. the `app_state` table or browser local storage
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Set a value (insert or update)
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// All keys starting with `prefix`, sorted
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError>;
}
