//! Saving and restoring the persisted panel preferences

use serde_json::{json, Map, Value};

use super::key::storage_key;
use super::state::{PanelState, ACTIVE_TAB_FIELD, DEFAULT_ACTIVE_TAB, IS_OPEN_FIELD};

/// A key/value pair ready to be written to a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedState {
    pub key: String,
    pub value: String,
}

/// Project `state` down to its persisted preferences and pair them with the
/// storage key for `view_id`. Nothing is written anywhere.
pub fn save_state(state: &PanelState, view_id: Option<&str>) -> SavedState {
    let value = json!({
        IS_OPEN_FIELD: state.is_open,
        ACTIVE_TAB_FIELD: state.active_tab,
    });

    SavedState {
        key: storage_key(view_id),
        value: value.to_string(),
    }
}

/// Merge a stored value back into `current`.
///
/// Absent, empty or malformed input returns `current` untouched. A stored
/// object only ever replaces `is_open` and `active_tab`; `extra` is kept as is.
/// Valid JSON that is not an object (`42`, `"x"`, `[..]`) counts as malformed
/// instead of merging the `false`/`"events"` fallbacks.
///
/// Both fields fall back on falsiness, so a stored `"isOpen": false` and a
/// missing `isOpen` are indistinguishable, and an empty `activeTab` resolves
/// to [`DEFAULT_ACTIVE_TAB`].
pub fn load_state(stored: Option<&str>, current: PanelState) -> PanelState {
    let Some(raw) = stored.filter(|raw| !raw.is_empty()) else {
        return current;
    };

    match serde_json::from_str::<Map<String, Value>>(raw) {
        Ok(fields) => PanelState {
            is_open: is_truthy(fields.get(IS_OPEN_FIELD)),
            active_tab: match fields.get(ACTIVE_TAB_FIELD) {
                Some(Value::String(tab)) if !tab.is_empty() => tab.clone(),
                _ => DEFAULT_ACTIVE_TAB.to_string(),
            },
            ..current
        },
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring malformed debug panel state");
            current
        }
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
