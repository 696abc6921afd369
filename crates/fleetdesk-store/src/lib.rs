//! Key-value storage shim for the fleetdesk system.
//!
//! Every entity collection and the derived status map live as independent
//! JSON documents under fixed string keys ([`keys`]). Mutations rewrite the
//! whole document; there are no transactions and no cross-key integrity.
//!
//! [`FileStore`] keeps one `<key>.json` file per key in the data directory;
//! [`MemoryStore`] backs unit tests. [`Catalog`] is the typed façade both
//! sides of the CLI and the status monitor go through.

pub mod catalog;
pub mod error;
pub mod file;
pub mod keys;
pub mod kv;
pub mod memory;

pub use catalog::Catalog;
pub use error::{Result, StoreError};
pub use file::FileStore;
pub use kv::KvStore;
pub use memory::MemoryStore;
