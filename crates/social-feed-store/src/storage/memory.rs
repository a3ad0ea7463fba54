use std::collections::HashMap;

use super::KeyValueStorage;

/// In-memory storage, used by tests and by the `memory` backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut storage = MemoryStorage::new();
        storage.set("k", "one");
        storage.set("k", "two");
        assert_eq!(storage.get("k").as_deref(), Some("two"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_missing_key() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.get("nope"), None);
    }
}
