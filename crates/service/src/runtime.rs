//! Runtime bootstrap
//!
//! Builds the configured record store and a ready [`PharmacyService`] for a
//! presentation layer, after preparing logging and the environment.

use std::path::Path;
use std::sync::Arc;

use configs::{AppConfig, LogFormat, StorageBackend, StorageConfig};
use tracing::info;

use crate::pharmacy::PharmacyService;
use crate::storage::{JsonFileStore, MemoryRecordStore, RecordStore};

/// Open the record store selected by `cfg.backend`.
pub fn open_store(cfg: &StorageConfig) -> anyhow::Result<Arc<dyn RecordStore>> {
    match cfg.backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryRecordStore::new())),
        StorageBackend::File => {
            let path = Path::new(&cfg.path);
            common::env::ensure_data_dir(path)?;
            let store = JsonFileStore::open(path)?;
            Ok(Arc::new(store))
        }
    }
}

/// Load `.env`, initialize logging, validate `cfg` and build the service.
pub fn bootstrap(mut cfg: AppConfig) -> anyhow::Result<PharmacyService<dyn RecordStore>> {
    common::env::load_dotenv();
    match cfg.logging.format {
        LogFormat::Compact => common::utils::logging::init_logging_default(),
        LogFormat::Json => common::utils::logging::init_logging_json(),
    }
    cfg.normalize_and_validate()?;
    let store = open_store(&cfg.storage)?;
    info!(backend = ?cfg.storage.backend, path = %cfg.storage.path, "pharmacy record store ready");
    Ok(PharmacyService::new(store, cfg.dashboard))
}
