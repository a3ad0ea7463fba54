//! File-backed storage
//!
//! Each key becomes `<dir>/<key>.json`. The directory is created lazily on
//! the first write.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::KeyValueStorage;

/// Errors from the file-backed storage
#[derive(Debug, Error)]
pub enum StorageError {
    /// Keys end up as file names, so path separators and dots are refused.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Storage writing one file per key into a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Read a key, distinguishing "absent" (`Ok(None)`) from failures
    pub fn try_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    pub fn try_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(&path, value).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        log::trace!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("FileStorage: {}", e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.try_set(key, value) {
            log::warn!("FileStorage: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path().join("nested").join("data"));

        assert_eq!(storage.get("social_posts"), None);
        storage.set("social_posts", "[]");

        assert_eq!(storage.get("social_posts").as_deref(), Some("[]"));
        assert!(storage.dir().join("social_posts.json").exists());
    }

    #[test]
    fn test_invalid_keys_are_refused() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path());

        assert!(matches!(
            storage.try_set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            storage.try_get(""),
            Err(StorageError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_set_failure_is_swallowed() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where the directory should be makes every write fail
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let mut storage = FileStorage::new(&blocker);
        storage.set("social_user", "{}");
        assert_eq!(storage.get("social_user"), None);
    }
}
