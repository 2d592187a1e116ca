//! Debug panel state persisted through a [`KeyValueStore`]

use crate::panel::{self, PanelState};

use super::store::{KeyValueStore, StoreError};

/// Ties key derivation and save/load to a concrete store
#[derive(Debug, Clone)]
pub struct DebugStateStore<S> {
    store: S,
}

impl<S: KeyValueStore> DebugStateStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Persist the open flag and active tab of `state` for `view_id`
    pub fn persist(&self, state: &PanelState, view_id: Option<&str>) -> Result<(), StoreError> {
        let saved = panel::save_state(state, view_id);
        self.store.set(&saved.key, &saved.value)?;
        tracing::debug!(key = %saved.key, "Persisted debug panel state");
        Ok(())
    }

    /// Restore saved preferences for `view_id` on top of `current`.
    ///
    /// Never fails: a store that cannot be read behaves like an empty one.
    pub fn restore(&self, view_id: Option<&str>, current: PanelState) -> PanelState {
        let key = panel::storage_key(view_id);
        let stored = match self.store.get(&key) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read debug panel state");
                None
            }
        };
        panel::load_state(stored.as_deref(), current)
    }

    /// Drop saved state for `view_id`
    pub fn forget(&self, view_id: Option<&str>) -> Result<(), StoreError> {
        let key = panel::storage_key(view_id);
        self.store.remove(&key)?;
        tracing::debug!(key = %key, "Removed debug panel state");
        Ok(())
    }

    /// Scopes that currently have saved state, sorted
    pub fn views(&self) -> Result<Vec<String>, StoreError> {
        let prefix = format!("{}:", panel::STORAGE_NAMESPACE);
        let keys = self.store.keys_with_prefix(&prefix)?;
        Ok(keys
            .iter()
            .filter_map(|key| panel::scope_of(key))
            .map(str::to_string)
            .collect())
    }
}
