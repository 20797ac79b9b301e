use anyhow::Result;
use anyhow::anyhow;
use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backend: StorageBackend::Memory, path: default_storage_path() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// How many prescriptions the doctor view shows after a patient lookup.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// strftime pattern for the date stamped on new prescriptions.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { recent_limit: default_recent_limit(), date_format: default_date_format() }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_storage_path() -> String { "data/local_storage.json".to_string() }
fn default_recent_limit() -> usize { 5 }
fn default_date_format() -> String { "%-m/%-d/%Y".to_string() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    AppConfig::from_toml_str(&content)
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(content)?;
        Ok(cfg)
    }

    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.storage.normalize_from_env();
        self.storage.validate()?;
        self.dashboard.validate()?;
        Ok(())
    }
}

impl StorageConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(path) = std::env::var("PHARMACY_STORAGE_PATH") {
            if !path.trim().is_empty() {
                self.path = path;
            }
        }
        if self.path.trim().is_empty() {
            self.path = default_storage_path();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend == StorageBackend::File && self.path.ends_with('/') {
            return Err(anyhow!("storage.path must name a file, got directory {}", self.path));
        }
        Ok(())
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.recent_limit == 0 {
            return Err(anyhow!("dashboard.recent_limit must be >= 1"));
        }
        if self.date_format.trim().is_empty() {
            return Err(anyhow!("dashboard.date_format is empty"));
        }
        // Patterns must render a calendar date alone; time fields like %H fail here.
        let sample = NaiveDate::from_ymd_opt(2000, 1, 31).ok_or_else(|| anyhow!("invalid sample date"))?;
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(&self.date_format)).is_err() {
            return Err(anyhow!("dashboard.date_format cannot format a calendar date: {}", self.date_format));
        }
        Ok(())
    }
}
