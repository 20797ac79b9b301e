use std::{collections::BTreeMap, fs, io, path::PathBuf, sync::RwLock};

use tracing::{debug, warn};

use super::RecordStore;
use crate::errors::ServiceError;

/// JSON file-backed record store.
///
/// The whole key space lives in one JSON object on disk, each key mapped to
/// the JSON text stored under it. The file is read once on open and rewritten
/// in full after every `set_item`.
pub struct JsonFileStore {
    inner: RwLock<BTreeMap<String, String>>,
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `path`. Creates the file with an empty object if missing;
    /// an unreadable or malformed file opens as an empty store and is left as is
    /// until the first write.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "cannot create record store directory");
            }
        }

        let map: BTreeMap<String, String> = match fs::read(&file_path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(path = %file_path.display(), error = %e, "malformed record store file; starting empty");
                BTreeMap::new()
            }),
            Err(e) if e.kind() != io::ErrorKind::NotFound => {
                warn!(path = %file_path.display(), error = %e, "cannot read record store file; starting empty");
                BTreeMap::new()
            }
            Err(_) => {
                let empty: BTreeMap<String, String> = BTreeMap::new();
                fs::write(&file_path, serde_json::to_vec(&empty).map_err(|e| ServiceError::Storage(e.to_string()))?)
                    .map_err(|e| ServiceError::Storage(e.to_string()))?;
                empty
            }
        };
        debug!(path = %file_path.display(), keys = map.len(), "record store opened");

        Ok(Self { inner: RwLock::new(map), file_path })
    }

    pub fn path(&self) -> &std::path::Path { &self.file_path }

    fn save(&self, map: &BTreeMap<String, String>) -> Result<(), ServiceError> {
        let data = serde_json::to_vec(map).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data).map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ServiceError> {
        let map = self.inner.read().map_err(|_| ServiceError::Storage("record store lock poisoned".into()))?;
        Ok(map.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: String) -> Result<(), ServiceError> {
        let mut map = self.inner.write().map_err(|_| ServiceError::Storage("record store lock poisoned".into()))?;
        map.insert(key.to_string(), value);
        self.save(&map)
    }
}
