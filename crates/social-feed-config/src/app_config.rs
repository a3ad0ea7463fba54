//! Application configuration
//!
//! Configuration loaded from .social-feed.toml file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the feed categories are persisted
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per category in the data directory
    #[default]
    File,
    /// Nothing survives the process
    Memory,
}

/// Application configuration loaded from .social-feed.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Override for the persisted data directory
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Persistence backend
    #[serde(default)]
    pub storage: StorageBackend,

    /// How many "people you may know" entries to show
    #[serde(default = "default_suggested_friends_limit")]
    pub suggested_friends_limit: usize,
}

fn default_suggested_friends_limit() -> usize {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage: StorageBackend::default(),
            suggested_friends_limit: default_suggested_friends_limit(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Resolve the data directory: configured override, else the platform default
    pub fn resolve_data_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => crate::paths::data_dir(),
        }
    }
}
