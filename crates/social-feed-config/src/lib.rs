//! Configuration and path management for social-feed
//!
//! This crate provides:
//! - Platform directories for config, cache and persisted feed data
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, StorageBackend};
pub use config_file::{config_candidates, load_config_file};
pub use paths::{app_config_path, cache_dir, data_dir};
