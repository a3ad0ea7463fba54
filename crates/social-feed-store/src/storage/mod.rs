//! Key-value persistence capability
//!
//! The store mirrors each state category into a string-keyed, string-valued
//! storage. Reads that fail look the same as absent keys and writes are
//! fire-and-forget, so implementations log their own failures.

mod file;
mod memory;

pub use file::{FileStorage, StorageError};
pub use memory::MemoryStorage;

/// Synchronous string key to string value storage.
///
/// # Example
///
/// ```
/// use social_feed_store::storage::{KeyValueStorage, MemoryStorage};
///
/// let mut storage = MemoryStorage::new();
/// storage.set("social_darkmode", "true");
/// assert_eq!(storage.get("social_darkmode").as_deref(), Some("true"));
/// assert_eq!(storage.get("social_posts"), None);
/// ```
pub trait KeyValueStorage {
    /// Read the value stored under `key`; `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}
