//! Load-once startup snapshot.
//!
//! Every collection is read and parsed on its own. A collection that fails
//! to load is replaced by an empty one, so later lookups behave exactly
//! like misses.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::model::{Group, Message, Notification, Post, User};
use crate::source::{Collection, CollectionSource};

/// Immutable reference collections used for joins.
///
/// The default value is the "nothing loaded yet" state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub groups: Vec<Group>,
    pub messages: Vec<Message>,
}

impl ReferenceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_groups(mut self, groups: Vec<Group>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.posts.is_empty()
            && self.groups.is_empty()
            && self.messages.is_empty()
    }
}

/// Everything the feed needs, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub reference: Arc<ReferenceData>,
    pub notifications: Vec<Notification>,
}

/// Result of loading a snapshot: the data plus per-collection failures.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub snapshot: Snapshot,
    pub failures: Vec<LoadError>,
}

impl LoadOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Whether a given collection failed to load.
    pub fn failed(&self, collection: Collection) -> bool {
        self.failures.iter().any(|f| f.collection() == collection)
    }
}

impl Snapshot {
    pub fn new(reference: ReferenceData, notifications: Vec<Notification>) -> Self {
        Self {
            reference: Arc::new(reference),
            notifications,
        }
    }

    /// Load all collections from a source.
    ///
    /// Never fails as a whole. Failed collections come back empty and are
    /// listed in [`LoadOutcome::failures`].
    pub fn load(source: &impl CollectionSource) -> LoadOutcome {
        let mut failures = Vec::new();

        let users = load_collection(source, Collection::Users, &mut failures);
        let posts = load_collection(source, Collection::Posts, &mut failures);
        let groups = load_collection(source, Collection::Groups, &mut failures);
        let messages = load_collection(source, Collection::Messages, &mut failures);
        let notifications = load_collection(source, Collection::Notifications, &mut failures);

        let reference = ReferenceData {
            users,
            posts,
            groups,
            messages,
        };

        tracing::info!(
            users = reference.users.len(),
            posts = reference.posts.len(),
            groups = reference.groups.len(),
            messages = reference.messages.len(),
            notifications = notifications.len(),
            failed = failures.len(),
            "Loaded feed snapshot"
        );

        LoadOutcome {
            snapshot: Snapshot::new(reference, notifications),
            failures,
        }
    }
}

/// Parse one collection's JSON text.
pub fn parse_collection<T: DeserializeOwned>(
    collection: Collection,
    json: &str,
) -> Result<Vec<T>, LoadError> {
    serde_json::from_str(json).map_err(|e| LoadError::Parse {
        collection,
        message: e.to_string(),
    })
}

fn load_collection<T: DeserializeOwned>(
    source: &impl CollectionSource,
    collection: Collection,
    failures: &mut Vec<LoadError>,
) -> Vec<T> {
    match source
        .read(collection)
        .and_then(|json| parse_collection(collection, &json))
    {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("Failed to load {}: {}, using empty collection", collection, e);
            failures.push(e);
            Vec::new()
        }
    }
}
