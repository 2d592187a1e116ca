//! Data persistence layer
//!
//! A [`KeyValueStore`] abstraction with SQLite and in-memory implementations,
//! and the [`DebugStateStore`] facade that keeps debug panel state in one.

mod app_state;
mod database;
mod debug_state;
mod memory;
mod migrations;
mod store;

pub use app_state::AppStateStore;
pub use database::{Database, DatabaseError};
pub use debug_state::DebugStateStore;
pub use memory::MemoryStore;
pub use store::{KeyValueStore, StoreError};
