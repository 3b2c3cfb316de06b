//! Versioned client-side preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The selected area survives reloads through a small key/value store
//! (`localStorage` in the browser). The current format is a JSON envelope
//! under [`AREA_PREFERENCE_KEY`]; older pages wrote two bare keys, which are
//! still written on save and migrated on load so mixed deployments agree.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const AREA_PREFERENCE_KEY: &str = "selectedArea";
pub const LEGACY_AREA_ID_KEY: &str = "selectedAreaId";
pub const LEGACY_AREA_NAME_KEY: &str = "selectedAreaName";
pub const AREA_PREFERENCE_VERSION: u32 = 1;

/// Minimal string key/value store.
///
/// Writes are best-effort: a full or disabled store silently keeps the old
/// value, matching browser storage semantics.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store used by tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// The viewer's chosen area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaSelection {
    pub area_id: String,
    pub area_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct AreaEnvelope {
    version: u32,
    area_id: String,
    area_name: String,
}

/// Load the stored area selection.
///
/// Reads the current envelope first. An envelope from an unknown version or a
/// corrupt value falls back to the legacy keys; a legacy-only selection is
/// rewritten in the current format before returning.
pub fn load_area_selection(store: &dyn PreferenceStore) -> Option<AreaSelection> {
    if let Some(raw) = store.get(AREA_PREFERENCE_KEY) {
        if let Ok(envelope) = serde_json::from_str::<AreaEnvelope>(&raw) {
            if envelope.version == AREA_PREFERENCE_VERSION {
                return Some(AreaSelection {
                    area_id: envelope.area_id,
                    area_name: envelope.area_name,
                });
            }
        }
    }

    let area_id = store.get(LEGACY_AREA_ID_KEY).filter(|v| !v.is_empty())?;
    let area_name = store.get(LEGACY_AREA_NAME_KEY).filter(|v| !v.is_empty())?;
    let selection = AreaSelection { area_id, area_name };
    save_area_selection(store, &selection);
    Some(selection)
}

/// Persist `selection` in the current format plus the legacy keys.
pub fn save_area_selection(store: &dyn PreferenceStore, selection: &AreaSelection) {
    let envelope = AreaEnvelope {
        version: AREA_PREFERENCE_VERSION,
        area_id: selection.area_id.clone(),
        area_name: selection.area_name.clone(),
    };
    if let Ok(raw) = serde_json::to_string(&envelope) {
        store.set(AREA_PREFERENCE_KEY, &raw);
    }
    store.set(LEGACY_AREA_ID_KEY, &selection.area_id);
    store.set(LEGACY_AREA_NAME_KEY, &selection.area_name);
}
