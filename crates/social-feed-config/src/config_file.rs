//! Config file discovery

use std::path::PathBuf;

const LOCAL_CONFIG_FILE: &str = ".social-feed.toml";

/// Locations searched for a config file, most specific first:
/// the working directory, the home directory, then the platform config
/// directory (`~/.config/social-feed/config.toml` on Linux).
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(LOCAL_CONFIG_FILE));
    }
    match crate::paths::app_config_path() {
        Ok(path) => candidates.push(path),
        Err(e) => log::debug!("No platform config location: {}", e),
    }
    candidates
}

/// Content of the first config file found among [`config_candidates`]
pub fn load_config_file() -> Option<String> {
    read_first(&config_candidates())
}

/// Content of the first readable file in `candidates`
pub fn read_first(candidates: &[PathBuf]) -> Option<String> {
    candidates.iter().find_map(|path| {
        let content = std::fs::read_to_string(path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_config_is_searched_last() {
        let candidates = config_candidates();
        assert_eq!(candidates[0], PathBuf::from(LOCAL_CONFIG_FILE));
        assert_eq!(
            candidates.last(),
            Some(&crate::paths::app_config_path().unwrap())
        );
    }

    #[test]
    fn test_read_first_skips_missing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let local = tmp.path().join(LOCAL_CONFIG_FILE);
        let platform = tmp.path().join("config.toml");
        std::fs::write(&platform, "storage = \"memory\"").unwrap();

        let found = read_first(&[local.clone(), platform.clone()]);
        assert_eq!(found.as_deref(), Some("storage = \"memory\""));

        std::fs::write(&local, "suggested_friends_limit = 2").unwrap();
        let found = read_first(&[local, platform]);
        assert_eq!(found.as_deref(), Some("suggested_friends_limit = 2"));
    }

    #[test]
    fn test_read_first_without_any_file() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(read_first(&[tmp.path().join("nope.toml")]), None);
    }
}
