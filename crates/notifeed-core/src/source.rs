//! Where collections come from.
//!
//! A [`CollectionSource`] hands back the raw JSON text of one collection.
//! Sources know nothing about record shapes; parsing happens in
//! [`crate::snapshot`].

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// The five externally supplied collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Users,
    Posts,
    Groups,
    Messages,
    Notifications,
}

impl Collection {
    /// File name of the collection inside a data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Users => "users.json",
            Collection::Posts => "posts.json",
            Collection::Groups => "groups.json",
            Collection::Messages => "messages.json",
            Collection::Notifications => "notifications.json",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Posts => "posts",
            Collection::Groups => "groups",
            Collection::Messages => "messages",
            Collection::Notifications => "notifications",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supplies the raw JSON text of a collection.
pub trait CollectionSource {
    fn read(&self, collection: Collection) -> Result<String, LoadError>;
}

/// Reads collections from `<dir>/<collection>.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_of(&self, collection: Collection) -> PathBuf {
        self.dir.join(collection.file_name())
    }
}

impl CollectionSource for DirectorySource {
    fn read(&self, collection: Collection) -> Result<String, LoadError> {
        let path = self.path_of(collection);
        std::fs::read_to_string(&path).map_err(|e| LoadError::Io {
            collection,
            message: format!("{}: {}", path.display(), e),
        })
    }
}

/// In-memory collections, keyed by collection.
///
/// Collections never inserted read as [`LoadError::Missing`].
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    collections: HashMap<Collection, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, collection: Collection, json: impl Into<String>) -> Self {
        self.insert(collection, json);
        self
    }

    pub fn insert(&mut self, collection: Collection, json: impl Into<String>) {
        self.collections.insert(collection, json.into());
    }
}

impl CollectionSource for MemorySource {
    fn read(&self, collection: Collection) -> Result<String, LoadError> {
        self.collections
            .get(&collection)
            .cloned()
            .ok_or(LoadError::Missing(collection))
    }
}
