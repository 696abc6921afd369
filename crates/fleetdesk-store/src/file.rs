//! [`FileStore`] -- file-backed implementation of [`KvStore`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::kv::KvStore;

/// One `<key>.json` file per key inside the data directory.
///
/// Writes go through a temp file and a rename so a crash mid-write never
/// leaves a half-written document behind. There is no cross-key atomicity.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens the store, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        info!(?dir, "opening data directory");
        fs::create_dir_all(&dir).map_err(|e| {
            StoreError::data_dir(format!("failed to create {}: {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, payload).map_err(|e| StoreError::io(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(key, e))?;
        debug!(key, bytes = payload.len(), "wrote document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.read("routes").unwrap(), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.write("routes", "[1,2,3]").unwrap();
        assert_eq!(store.read("routes").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn write_replaces_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.write("buses", "[]").unwrap();
        store.write("buses", "[{\"plate\":\"29A-12345\"}]").unwrap();
        let payload = store.read("buses").unwrap().unwrap();
        assert!(payload.contains("29A-12345"));
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.write("tickets", "[]").unwrap();
        assert!(!dir.path().join("tickets.json.tmp").exists());
        assert!(dir.path().join("tickets.json").exists());
    }

    #[test]
    fn open_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        store.write("routes", "[]").unwrap();
        assert!(nested.join("routes.json").exists());
    }
}
