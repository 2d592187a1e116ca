//! Persistence of djust debug panel UI state.
//!
//! The [`panel`] module holds the pure core: storage key derivation, projection
//! of a [`PanelState`] to its persisted preferences, and tolerant restoration.
//! [`data`] provides stores to keep those values in.

pub mod cli;
pub mod config;
pub mod data;
pub mod panel;
pub mod util;

pub use config::Config;
pub use data::{
    AppStateStore, Database, DatabaseError, DebugStateStore, KeyValueStore, MemoryStore,
    StoreError,
};
pub use panel::{
    load_state, save_state, storage_key, PanelState, SavedState, DEFAULT_ACTIVE_TAB,
};
