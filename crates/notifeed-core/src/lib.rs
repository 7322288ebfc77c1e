//! notifeed-core: a read-only notification feed over pre-fetched collections.
//!
//! - **Model**: users, posts, groups, messages and notifications as loaded
//!   from JSON collections
//! - **Source/Snapshot**: load every collection once, independently, into an
//!   immutable snapshot; failed collections degrade to empty
//! - **Resolve**: join a notification's `username` and `target` against the
//!   reference collections (first match wins, misses are empty)
//! - **Feed**: the notification list with one-way `unread → read` state
//! - **Render**: display-ready items for front ends
//!
//! # Data flow
//!
//! ```text
//! collections → Snapshot → Resolver (per item) → FeedPage
//!                   └──── Feed (read state) ─────┘
//! ```

pub mod avatar;
pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod render;
pub mod resolve;
pub mod snapshot;
pub mod source;
pub mod target;

pub use avatar::avatar_key;
pub use config::{ConfigError, DataConfig, DisplayConfig, FeedConfig};
pub use error::{LoadError, NotifeedError, Result};
pub use feed::Feed;
pub use model::{Group, Message, Notification, NotificationId, Post, ReadStatus, User};
pub use render::{render_feed, FeedItem, FeedPage, LinkedText, PreviewStyle, TargetLink, Thumbnail};
pub use resolve::{
    resolve_group_preview, resolve_message_preview, resolve_post_preview, resolve_user,
    FeedEntry, Resolver,
};
pub use snapshot::{LoadOutcome, ReferenceData, Snapshot};
pub use source::{Collection, CollectionSource, DirectorySource, MemorySource};
pub use target::{classify, GroupPreview, PostPreview, ResolvedTarget, TargetKind};

/// Load a snapshot from the configured data directory.
pub fn load_snapshot(config: &FeedConfig) -> LoadOutcome {
    Snapshot::load(&DirectorySource::new(&config.data.dir))
}

/// Load a snapshot, failing on the first collection that does not load.
pub fn load_snapshot_strict(config: &FeedConfig) -> Result<Snapshot> {
    let outcome = load_snapshot(config);
    match outcome.failures.into_iter().next() {
        Some(failure) => Err(failure.into()),
        None => Ok(outcome.snapshot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_mark_read() {
        let reference = ReferenceData::new().with_posts(vec![Post::new("p42", "Hello")]);
        let resolver = Resolver::new(&reference);
        let display = DisplayConfig::default();
        let mut feed = Feed::new(vec![Notification::new(1, "bob", "liked").with_target("p42")]);

        let page = render_feed(&feed, &resolver, &display);
        assert_eq!(page.items[0].target_text(), "Hello");
        assert!(page.items[0].unread);
        let unread_before = page.unread_count;

        assert!(feed.mark_one_read(&NotificationId::from(1)));

        let page = render_feed(&feed, &resolver, &display);
        assert!(!page.items[0].unread);
        assert_eq!(page.unread_count, unread_before - 1);
    }

    #[test]
    fn test_strict_load_reports_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = FeedConfig::default();
        config.data.dir = dir.path().join("absent");

        assert!(load_snapshot(&config).snapshot.notifications.is_empty());
        assert!(matches!(
            load_snapshot_strict(&config),
            Err(NotifeedError::Load(LoadError::Io {
                collection: Collection::Users,
                ..
            }))
        ));
    }
}
