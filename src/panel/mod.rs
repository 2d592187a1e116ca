//! Debug panel UI state persistence
//!
//! Pure functions that derive storage keys, project the panel state down to the
//! persisted preferences, and merge stored preferences back into a live state.
//! None of them touch a store; see [`crate::data::DebugStateStore`] for that.

mod key;
mod persist;
mod state;

pub(crate) use key::scope_of;
pub use key::{storage_key, GLOBAL_SCOPE, STORAGE_NAMESPACE};
pub use persist::{load_state, save_state, SavedState};
pub use state::{PanelState, DEFAULT_ACTIVE_TAB};
