//! Panel state types

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Tab shown when nothing else has been selected
pub const DEFAULT_ACTIVE_TAB: &str = "events";

/// JSON names of the persisted fields; `extra` may not shadow them
pub(crate) const IS_OPEN_FIELD: &str = "isOpen";
pub(crate) const ACTIVE_TAB_FIELD: &str = "activeTab";

/// Full in-memory state of the debug panel.
///
/// Only the open flag and the active tab survive a reload. Anything else
/// (search queries, filters, ...) lives in `extra` and is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub is_open: bool,
    pub active_tab: String,
    pub extra: Map<String, Value>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            is_open: false,
            active_tab: DEFAULT_ACTIVE_TAB.to_string(),
            extra: Map::new(),
        }
    }
}

impl PanelState {
    pub fn with_open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn with_active_tab(mut self, tab: impl Into<String>) -> Self {
        self.active_tab = tab.into();
        self
    }

    /// Attach a transient field that is kept in memory only.
    ///
    /// `isOpen` and `activeTab` name the persisted fields and are ignored here.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if is_reserved(&key) {
            tracing::debug!(key = %key, "Ignoring extra field that shadows a panel field");
        } else {
            self.extra.insert(key, value);
        }
        self
    }
}

fn is_reserved(key: &str) -> bool {
    key == IS_OPEN_FIELD || key == ACTIVE_TAB_FIELD
}

impl Serialize for PanelState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = self.extra.iter().filter(|(key, _)| !is_reserved(key));
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(IS_OPEN_FIELD, &self.is_open)?;
        map.serialize_entry(ACTIVE_TAB_FIELD, &self.active_tab)?;
        for (key, value) in extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
