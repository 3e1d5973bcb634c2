//! Local persistence for the planner state
//!
//! The whole state is stored as one serialized blob under a single key of a
//! [`KeyValueStore`]. Writes always overwrite the full value.
//!
//! - [`file`] - Directory-backed store, one JSON file per key
//! - [`memory`] - In-memory store for tests and ephemeral sessions
//! - [`snapshot`] - Versioned schema, load and save of the planner state

pub mod file;
pub mod memory;
pub mod snapshot;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use snapshot::{load_items, load_state, save_state, Snapshot};

/// Errors raised by the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Invalid stored state: {0}")]
    Invalid(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Minimal string key-value store with whole-value overwrite semantics.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove the value stored under `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}
