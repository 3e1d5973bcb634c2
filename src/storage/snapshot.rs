use super::{KeyValueStore, StorageError, StorageResult};
use crate::constants::SNAPSHOT_VERSION;
use crate::entities::{AppState, Collections, View};
use serde::{Deserialize, Serialize};

/// Persisted shape of the planner. Transient UI state (active view, item being
/// edited) is not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub items: Collections,
}

impl Snapshot {
    pub fn new(items: Collections) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            items,
        }
    }

    /// Serialize to the stored string form
    pub fn encode(&self) -> StorageResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a stored blob
    pub fn decode(raw: &str) -> StorageResult<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let found = value
            .get("version")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| StorageError::Invalid("missing snapshot version".to_string()))?;
        if found != u64::from(SNAPSHOT_VERSION) {
            return Err(StorageError::UnsupportedVersion {
                found: u32::try_from(found).unwrap_or(u32::MAX),
                expected: SNAPSHOT_VERSION,
            });
        }

        let snapshot: Snapshot = serde_json::from_value(value)?;
        snapshot.items.validate().map_err(StorageError::Invalid)?;
        Ok(snapshot)
    }
}

/// Read the stored items, treating anything unreadable as "no saved state".
pub fn load_items<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> StorageResult<Option<Collections>> {
    match store.get(key)? {
        Some(raw) => Snapshot::decode(&raw).map(|snapshot| Some(snapshot.items)),
        None => Ok(None),
    }
}

/// Load the planner state. Missing, corrupt or incompatible data yields the
/// default state; the problem is logged rather than propagated into the UI.
pub fn load_state<S: KeyValueStore + ?Sized>(store: &S, key: &str, initial_view: View) -> AppState {
    let items = match load_items(store, key) {
        Ok(Some(items)) => {
            log::info!("Storage: loaded {} items from '{}'", items.len(), key);
            items
        }
        Ok(None) => {
            log::info!("Storage: no saved state under '{}', starting empty", key);
            Collections::default()
        }
        Err(e) => {
            log::warn!("Storage: ignoring saved state under '{}': {}", key, e);
            Collections::default()
        }
    };
    AppState::with_items(items, initial_view)
}

/// Serialize the whole state and overwrite the stored value.
pub fn save_state<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, state: &AppState) -> StorageResult<()> {
    let raw = Snapshot::new(state.items.clone()).encode()?;
    store.set(key, &raw)
}
