//! Where social-feed keeps its files on each platform
//!
//! | purpose      | Linux                                  | macOS                                       |
//! |--------------|----------------------------------------|---------------------------------------------|
//! | config file  | `~/.config/social-feed/config.toml`    | `~/Library/Application Support/social-feed/` |
//! | release logs | `~/.cache/social-feed/`                | `~/Library/Caches/social-feed/`             |
//! | feed data    | `~/.local/share/social-feed/`          | `~/Library/Application Support/social-feed/` |

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "social-feed";

/// Directory for release-build log files, created on demand
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the directory holding the persisted feed categories
///
/// Not created here; the file storage creates it on first write.
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    Ok(base.join(APP_NAME))
}

/// Path of the platform-wide config file, searched after the local ones
///
/// Only read, so the directory is not created.
pub fn app_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join("config.toml"))
}
