//! In-process store.

use crate::{CacheError, Store};
use std::collections::HashMap;
use std::sync::RwLock;

/// Key-value store held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> CacheError {
    CacheError::StoreError("memory store lock poisoned".to_string())
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_replaces_value() {
        let store = MemoryStore::new();
        store.set("k", b"one").unwrap();
        store.set("k", b"two").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"two".to_vec()));
    }

    #[test]
    fn test_delete_missing_key_is_ok() {
        let store = MemoryStore::new();
        store.delete("nope").unwrap();
        assert!(!store.exists("nope").unwrap());
    }

    #[test]
    fn test_keys_are_sorted() {
        let store = MemoryStore::new();
        store.set("b", b"2").unwrap();
        store.set("a", b"1").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }
}
