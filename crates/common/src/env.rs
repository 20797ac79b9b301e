//! Environment/runtime helpers
//!
//! Loads `.env` overrides and makes sure the storage directory exists before a
//! file-backed store is opened.

use std::path::Path;
use tracing::{debug, warn};

/// Load variables from a `.env` file in the working directory, if present.
/// Variables already set in the process environment win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "ignoring unreadable .env file"),
    }
}

/// Ensure the parent directory of a storage file exists.
pub fn ensure_data_dir(file_path: &Path) -> anyhow::Result<()> {
    let Some(parent) = file_path.parent() else { return Ok(()) };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(parent)
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    Ok(())
}
