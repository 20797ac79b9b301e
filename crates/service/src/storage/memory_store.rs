use std::collections::HashMap;
use std::sync::RwLock;

use super::RecordStore;
use crate::errors::ServiceError;

/// In-memory record store for tests and embedding.
#[derive(Default)]
pub struct MemoryRecordStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self { Self::default() }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.items.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl RecordStore for MemoryRecordStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ServiceError> {
        let items = self.items.read().map_err(|_| ServiceError::Storage("record store lock poisoned".into()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: String) -> Result<(), ServiceError> {
        let mut items = self.items.write().map_err(|_| ServiceError::Storage("record store lock poisoned".into()))?;
        items.insert(key.to_string(), value);
        Ok(())
    }
}
