//! Joins notifications against the reference collections.
//!
//! Every lookup is a linear scan where the first match wins. A miss yields
//! an empty value and never an error.

use serde::{Deserialize, Serialize};

use crate::avatar::avatar_key;
use crate::model::{Group, Message, Notification, NotificationId, Post, ReadStatus, User};
use crate::snapshot::ReferenceData;
use crate::target::{classify, GroupPreview, PostPreview, ResolvedTarget, TargetKind};

/// Full name of the first user with `username`, or `""`.
pub fn resolve_user(username: &str, users: &[User]) -> String {
    users
        .iter()
        .find(|u| u.username == username)
        .map(|u| u.full_name.clone())
        .unwrap_or_default()
}

/// Title and picture of the first post with id `target`, or an empty preview.
pub fn resolve_post_preview(target: &str, posts: &[Post]) -> PostPreview {
    posts
        .iter()
        .find(|p| p.id == target)
        .map(|p| PostPreview {
            title: p.title.clone(),
            picture: p.picture().map(str::to_string),
        })
        .unwrap_or_default()
}

/// Name of the first group with id `target`, or `""`.
pub fn resolve_group_preview(target: &str, groups: &[Group]) -> String {
    groups
        .iter()
        .find(|g| g.id == target)
        .map(|g| g.name.clone())
        .unwrap_or_default()
}

/// Text of the first message with id `target`, or `""`.
pub fn resolve_message_preview(target: &str, messages: &[Message]) -> String {
    messages
        .iter()
        .find(|m| m.id == target)
        .map(|m| m.text.clone())
        .unwrap_or_default()
}

/// A notification joined with everything needed to display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub id: NotificationId,
    pub username: String,
    /// Resolved full name; empty when the user is unknown.
    pub full_name: String,
    pub avatar_key: String,
    pub event: String,
    pub target: ResolvedTarget,
    /// Raw target reference, used for links.
    pub target_ref: Option<String>,
    /// Message text found under the target id, if any.
    pub message: Option<String>,
    pub status: ReadStatus,
    pub time: String,
}

impl FeedEntry {
    pub fn is_unread(&self) -> bool {
        self.status.is_unread()
    }
}

/// Resolves notifications against one set of reference collections.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    data: &'a ReferenceData,
}

impl<'a> Resolver<'a> {
    pub fn new(data: &'a ReferenceData) -> Self {
        Self { data }
    }

    /// Classify and resolve a target reference.
    pub fn resolve_target(&self, target: Option<&str>) -> ResolvedTarget {
        match (classify(target), target) {
            (TargetKind::Post, Some(id)) => ResolvedTarget::Post {
                id: id.to_string(),
                preview: resolve_post_preview(id, &self.data.posts),
            },
            (TargetKind::Group, Some(id)) => ResolvedTarget::Group {
                id: id.to_string(),
                preview: GroupPreview {
                    name: resolve_group_preview(id, &self.data.groups),
                },
            },
            _ => ResolvedTarget::None,
        }
    }

    /// Message preview for a target.
    ///
    /// Looked up for every non-empty target, whatever its kind, so a post or
    /// group id that also names a message shows both.
    pub fn resolve_message(&self, target: Option<&str>) -> Option<String> {
        let text = resolve_message_preview(target?, &self.data.messages);
        (!text.is_empty()).then_some(text)
    }

    /// Join one notification.
    pub fn resolve(&self, notification: &Notification) -> FeedEntry {
        let target_ref = notification.target();
        let full_name = resolve_user(&notification.username, &self.data.users);
        let target = self.resolve_target(target_ref);
        let message = self.resolve_message(target_ref);

        if message.is_some() && target.kind() != TargetKind::Untyped {
            tracing::debug!(
                "Target {:?} of notification {} resolves to both a {:?} and a message",
                target_ref,
                notification.id,
                target.kind()
            );
        }

        FeedEntry {
            id: notification.id.clone(),
            username: notification.username.clone(),
            avatar_key: avatar_key(&full_name),
            full_name,
            event: notification.event.clone(),
            target,
            target_ref: target_ref.map(str::to_string),
            message,
            status: notification.status,
            time: notification.time.clone(),
        }
    }

    /// Join a list of notifications, preserving order.
    pub fn resolve_all(&self, notifications: &[Notification]) -> Vec<FeedEntry> {
        notifications.iter().map(|n| self.resolve(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> ReferenceData {
        ReferenceData::new()
            .with_users(vec![
                User::new("alice", "Alice Smith"),
                User::new("bob", "Bob Stone"),
                User::new("alice", "Second Alice"),
            ])
            .with_posts(vec![
                Post::new("p42", "Hello"),
                Post::new("p7", "Pictured").with_picture("chess.webp"),
            ])
            .with_groups(vec![Group::new("g1", "Chess Club")])
            .with_messages(vec![Message::new("m1", "Thanks for the invite")])
    }

    #[test]
    fn test_resolve_user() {
        let users = vec![User::new("alice", "Alice Smith")];
        assert_eq!(resolve_user("alice", &users), "Alice Smith");
        assert_eq!(resolve_user("missing", &users), "");
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(resolve_user("alice", &data().users), "Alice Smith");
    }

    #[test]
    fn test_post_preview_picture() {
        let d = data();
        assert_eq!(
            resolve_post_preview("p7", &d.posts),
            PostPreview {
                title: "Pictured".to_string(),
                picture: Some("chess.webp".to_string()),
            }
        );
        assert_eq!(resolve_post_preview("p42", &d.posts).picture, None);
        assert_eq!(resolve_post_preview("p0", &d.posts), PostPreview::default());
    }

    #[test]
    fn test_group_and_message_previews() {
        let d = data();
        assert_eq!(resolve_group_preview("g1", &d.groups), "Chess Club");
        assert_eq!(resolve_group_preview("g9", &d.groups), "");
        assert_eq!(resolve_message_preview("m1", &d.messages), "Thanks for the invite");
        assert_eq!(resolve_message_preview("m2", &d.messages), "");
    }

    #[test]
    fn test_resolve_post_notification() {
        let d = data();
        let resolver = Resolver::new(&d);
        let n = Notification::new(1, "bob", "reacted to your recent post").with_target("p42");

        let entry = resolver.resolve(&n);
        assert_eq!(entry.full_name, "Bob Stone");
        assert_eq!(entry.avatar_key, "bob-stone");
        assert_eq!(entry.target.kind(), TargetKind::Post);
        assert_eq!(entry.target.preview_text(), "Hello");
        assert_eq!(entry.message, None);
        assert!(entry.is_unread());
    }

    #[test]
    fn test_resolve_message_target_is_untyped() {
        let d = data();
        let resolver = Resolver::new(&d);
        let n = Notification::new(2, "alice", "sent you a private message").with_target("m1");

        let entry = resolver.resolve(&n);
        assert_eq!(entry.target, ResolvedTarget::None);
        assert_eq!(entry.message.as_deref(), Some("Thanks for the invite"));
    }

    #[test]
    fn test_resolve_without_target() {
        let d = data();
        let resolver = Resolver::new(&d);
        let n = Notification::new(3, "alice", "followed you").with_target("");

        let entry = resolver.resolve(&n);
        assert_eq!(entry.target, ResolvedTarget::None);
        assert_eq!(entry.target_ref, None);
        assert_eq!(entry.message, None);
    }

    #[test]
    fn test_unknown_references_fall_back_to_empty() {
        let d = data();
        let resolver = Resolver::new(&d);
        let n = Notification::new(4, "ghost", "joined your group").with_target("g404");

        let entry = resolver.resolve(&n);
        assert_eq!(entry.full_name, "");
        assert_eq!(entry.avatar_key, "");
        assert_eq!(entry.target.kind(), TargetKind::Group);
        assert_eq!(entry.target.preview_text(), "");
    }

    #[test]
    fn test_pending_data_behaves_like_misses() {
        let empty = ReferenceData::default();
        let resolver = Resolver::new(&empty);
        let n = Notification::new(5, "bob", "liked").with_target("p42");

        let entry = resolver.resolve(&n);
        assert_eq!(entry.full_name, "");
        assert_eq!(entry.target.preview_text(), "");
        assert_eq!(entry.message, None);
    }

    #[test]
    fn test_colliding_ids_show_message_on_post() {
        // Ids are expected to be unique across collections; when they are
        // not, the message block appears alongside the post preview.
        let d = data().with_messages(vec![Message::new("p42", "stray message")]);
        let resolver = Resolver::new(&d);
        let n = Notification::new(6, "bob", "liked").with_target("p42");

        let entry = resolver.resolve(&n);
        assert_eq!(entry.target.preview_text(), "Hello");
        assert_eq!(entry.message.as_deref(), Some("stray message"));
    }
}
