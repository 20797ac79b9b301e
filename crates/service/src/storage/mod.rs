//! Record store abstraction and backends.
//!
//! A record store is a flat string-to-string key space, like browser local
//! storage: every value is a JSON document kept as text. Typed access goes
//! through [`read_collection`] and [`write_collection`]; collections whose
//! entries may not all match the current schema go through [`decode_entries`].

pub mod file_store;
pub mod memory_store;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::errors::ServiceError;

pub use file_store::JsonFileStore;
pub use memory_store::MemoryRecordStore;

/// Raw key-value persistence. Implementations can be in-memory or file-backed.
pub trait RecordStore: Send + Sync {
    /// Raw JSON text stored under `key`, or `None` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, ServiceError>;
    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: String) -> Result<(), ServiceError>;
}

/// Read and decode the collection stored under `key`.
///
/// Never fails: an absent key, a backend read failure, or text that does not
/// decode as `T` all yield `T::default()`. Failures are logged.
pub fn read_collection<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: RecordStore + ?Sized,
{
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(%key, "key absent; using empty collection");
            return T::default();
        }
        Err(e) => {
            warn!(%key, error = %e, "record store read failed; using empty collection");
            return T::default();
        }
    };
    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            warn!(%key, error = %e, "malformed stored data; using empty collection");
            T::default()
        }
    }
}

/// Decode each stored entry on its own, skipping the ones that do not match `T`.
///
/// One off-shape element never hides the rest of the collection.
pub fn decode_entries<T, I>(key: &str, entries: I) -> Vec<T>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = serde_json::Value>,
{
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                debug!(%key, index, error = %e, "skipping off-shape entry");
                None
            }
        })
        .collect()
}

/// Encode `value` as JSON and persist it under `key`, overwriting the old value.
pub fn write_collection<T, S>(store: &S, key: &str, value: &T) -> Result<(), ServiceError>
where
    T: Serialize + ?Sized,
    S: RecordStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| ServiceError::Storage(e.to_string()))?;
    store.set_item(key, raw)
}
