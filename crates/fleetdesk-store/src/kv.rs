//! The key-value trait every backend implements.

use crate::error::Result;

/// A string-keyed document store.
///
/// Keys are the fixed names in [`crate::keys`]; payloads are JSON text. A
/// missing key reads as `None`, never as an error.
pub trait KvStore: Send + Sync {
    /// Reads the document under `key`, or `None` if it was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes (replaces) the document under `key`.
    fn write(&self, key: &str, payload: &str) -> Result<()>;
}

/// Shared handles work anywhere an owned store does.
impl<S: KvStore + ?Sized> KvStore for std::sync::Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        (**self).write(key, payload)
    }
}
