//! Storage error types.

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The data directory could not be used.
    #[error("data directory unusable: {reason}")]
    DataDir {
        /// Why the directory is considered unusable.
        reason: String,
    },

    /// The requested record was not found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of record (e.g. "route", "bus").
        entity: String,
        /// The business code that was looked up.
        id: String,
    },

    /// Reading or writing a document failed.
    #[error("i/o error on key {key}: {source}")]
    Io {
        /// The storage key being accessed.
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catch-all for unexpected internal errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience alias used throughout the storage crate.
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    // -- Constructors --------------------------------------------------------

    /// Creates a [`StoreError::NotFound`] for the given record kind and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a [`StoreError::Io`] for the given key.
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    /// Creates a [`StoreError::DataDir`] with the given reason.
    pub fn data_dir(reason: impl Into<String>) -> Self {
        Self::DataDir {
            reason: reason.into(),
        }
    }

    // -- Predicates ----------------------------------------------------------

    /// Returns `true` if this is a [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
