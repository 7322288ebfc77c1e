//! Error types for notifeed-core

use thiserror::Error;

use crate::config::ConfigError;
use crate::source::Collection;

/// Result type alias for notifeed operations
pub type Result<T> = std::result::Result<T, NotifeedError>;

/// Main error type for notifeed operations
///
/// Resolving and read-state changes never fail; only setup paths
/// (configuration, strict loading) surface these.
#[derive(Error, Debug)]
pub enum NotifeedError {
    /// Collection loading errors
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while reading a single collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The collection could not be read
    #[error("IO error reading {collection}: {message}")]
    Io {
        collection: Collection,
        message: String,
    },

    /// The collection was read but is not a valid JSON array of records
    #[error("Parse error in {collection}: {message}")]
    Parse {
        collection: Collection,
        message: String,
    },

    /// The source has no data for the collection
    #[error("Collection not available: {0}")]
    Missing(Collection),
}

impl LoadError {
    /// The collection this error concerns.
    pub fn collection(&self) -> Collection {
        match self {
            LoadError::Io { collection, .. } | LoadError::Parse { collection, .. } => *collection,
            LoadError::Missing(collection) => *collection,
        }
    }
}
