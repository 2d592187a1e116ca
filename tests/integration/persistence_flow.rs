//! Integration tests for saving and restoring panel state through SQLite

use super::common::TestDataDir;
use debug_state::{
    load_state, save_state, storage_key, Database, KeyValueStore, PanelState, DEFAULT_ACTIVE_TAB,
};
use debug_state::{AppStateStore, DebugStateStore};
use serde_json::json;

fn panel_with_filters() -> PanelState {
    PanelState::default()
        .with_extra("searchQuery", json!("increment"))
        .with_extra("filters", json!({"types": ["click"], "errorsOnly": false}))
}

/// The saver's output can be written by hand and read back by the loader
#[test]
fn test_manual_round_trip_through_store() {
    let data = TestDataDir::new();
    let store = data.store();

    let state = panel_with_filters().with_open(true).with_active_tab("patches");
    let saved = save_state(&state, Some("myapp.views.CounterView"));
    store.set(&saved.key, &saved.value).unwrap();

    let raw = store
        .get(&storage_key(Some("myapp.views.CounterView")))
        .unwrap();
    let restored = load_state(raw.as_deref(), panel_with_filters());

    assert!(restored.is_open);
    assert_eq!(restored.active_tab, "patches");
    assert_eq!(restored.extra, panel_with_filters().extra);
}

/// Saved state survives reopening the database
#[test]
fn test_state_survives_reopen() {
    let data = TestDataDir::new();
    let path = data.db.path.clone();
    data.states()
        .persist(&PanelState::default().with_open(true).with_active_tab("network"), None)
        .unwrap();

    let db = Database::open(path).unwrap();
    let states = DebugStateStore::new(AppStateStore::new(db.connection()));
    let restored = states.restore(None, PanelState::default());

    assert!(restored.is_open);
    assert_eq!(restored.active_tab, "network");
}

/// A corrupt row degrades to the caller's defaults
#[test]
fn test_corrupt_row_falls_back_to_defaults() {
    let data = TestDataDir::new();
    data.store()
        .set(&storage_key(Some("BrokenView")), "{\"isOpen\": tru")
        .unwrap();

    let current = panel_with_filters();
    assert_eq!(
        data.states().restore(Some("BrokenView"), current.clone()),
        current
    );
}

/// Saving never leaks transient fields into the store
#[test]
fn test_only_preferences_are_stored() {
    let data = TestDataDir::new();
    data.states()
        .persist(&panel_with_filters().with_active_tab("handlers"), Some("V"))
        .unwrap();

    let raw = data.store().get("djust-debug-state:V").unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, json!({"isOpen": false, "activeTab": "handlers"}));
}

/// Views, forget, and the global scope work together
#[test]
fn test_views_and_forget() {
    let data = TestDataDir::new();
    let states = data.states();

    states.persist(&PanelState::default(), Some("b")).unwrap();
    states.persist(&PanelState::default(), Some("a")).unwrap();
    states.persist(&PanelState::default(), Some("")).unwrap();
    assert_eq!(states.views().unwrap(), vec!["a", "b", "global"]);

    states.forget(Some("a")).unwrap();
    states.forget(None).unwrap();
    assert_eq!(states.views().unwrap(), vec!["b"]);

    let restored = states.restore(None, PanelState::default().with_active_tab("x"));
    assert_eq!(restored.active_tab, "x");
}

/// An empty active tab in storage falls back to the default tab
#[test]
fn test_empty_tab_falls_back() {
    let data = TestDataDir::new();
    data.states()
        .persist(&PanelState::default().with_active_tab(""), None)
        .unwrap();

    let restored = data
        .states()
        .restore(None, PanelState::default().with_active_tab("handlers"));
    assert_eq!(restored.active_tab, DEFAULT_ACTIVE_TAB);
}
