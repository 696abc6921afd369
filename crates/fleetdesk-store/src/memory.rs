//! [`MemoryStore`] -- in-memory implementation of [`KvStore`] for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, StoreError};
use crate::kv::KvStore;

/// A mutex-protected map of key to JSON text.
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let map = self
            .map
            .lock()
            .map_err(|e| StoreError::Internal(format!("mutex poisoned: {e}")))?;
        Ok(map.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        let mut map = self
            .map
            .lock()
            .map_err(|e| StoreError::Internal(format!("mutex poisoned: {e}")))?;
        map.insert(key.to_owned(), payload.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.read("drivers").unwrap(), None);
        store.write("drivers", "[]").unwrap();
        assert_eq!(store.read("drivers").unwrap().as_deref(), Some("[]"));
    }
}
