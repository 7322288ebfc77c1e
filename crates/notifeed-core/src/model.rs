//! Record types for the five feed collections.
//!
//! Field names follow the JSON collections (`fullName`, `picture`, ...).
//! Everything except [`Notification::status`] is treated as read-only.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A user profile referenced by notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub full_name: String,
}

impl User {
    pub fn new(username: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            full_name: full_name.into(),
        }
    }
}

/// A post, keyed by a `p`-prefixed id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl Post {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            picture: None,
        }
    }

    /// Attach a picture to the post.
    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    /// The picture, if present and non-empty.
    pub fn picture(&self) -> Option<&str> {
        self.picture.as_deref().filter(|p| !p.is_empty())
    }
}

/// A group, keyed by a `g`-prefixed id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A private message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
}

impl Message {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Identifier of a notification.
///
/// Collections carry numeric ids (`1`) or string ids (`"n1"`); both are
/// held as text so `1` and `"1"` name the same notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NotificationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for NotificationId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for NotificationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => NotificationId::from(n),
            RawId::Text(s) => NotificationId(s),
        })
    }
}

/// Read state of a notification.
///
/// ```text
/// Unread → Read
/// ```
///
/// `Read` is terminal. Collections may carry any status string; only
/// `"unread"` counts as unread, so a missing or `null` status is `Read`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ReadStatus {
    Unread,
    #[default]
    Read,
}

impl ReadStatus {
    /// Whether moving to `target` respects the one-way `Unread → Read` rule.
    pub fn can_transition_to(&self, target: &ReadStatus) -> bool {
        match (self, target) {
            (ReadStatus::Unread, ReadStatus::Read) => true,
            // Staying put is always allowed
            (a, b) if a == b => true,
            _ => false,
        }
    }

    pub fn is_unread(&self) -> bool {
        matches!(self, ReadStatus::Unread)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadStatus::Unread => "unread",
            ReadStatus::Read => "read",
        }
    }
}

impl From<Option<String>> for ReadStatus {
    fn from(status: Option<String>) -> Self {
        match status.as_deref() {
            Some("unread") => ReadStatus::Unread,
            _ => ReadStatus::Read,
        }
    }
}

impl From<ReadStatus> for String {
    fn from(status: ReadStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read a string field where `null` means empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single feed event.
///
/// Null text fields read as empty, so one sparse record does not fail the
/// whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    /// Free text such as "reacted to your recent post".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub event: String,
    /// Reference to a post, group or message; absent and `""` mean none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default)]
    pub status: ReadStatus,
    /// Elapsed time as supplied, e.g. `"1m"` or `"2 weeks"`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,
}

impl Notification {
    pub fn new(
        id: impl Into<NotificationId>,
        username: impl Into<String>,
        event: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            event: event.into(),
            target: None,
            status: ReadStatus::Unread,
            time: String::new(),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_status(mut self, status: ReadStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// The target reference, with empty strings treated as absent.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_unread(&self) -> bool {
        self.status.is_unread()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_uses_camel_case_fields() {
        let user: User =
            serde_json::from_str(r#"{"username":"alice","fullName":"Alice Smith"}"#).unwrap();
        assert_eq!(user, User::new("alice", "Alice Smith"));
    }

    #[test]
    fn test_numeric_and_string_ids_agree() {
        let numeric: Notification =
            serde_json::from_str(r#"{"id":1,"username":"bob","status":"unread"}"#).unwrap();
        let text: Notification =
            serde_json::from_str(r#"{"id":"1","username":"bob","status":"unread"}"#).unwrap();
        assert_eq!(numeric.id, text.id);
        assert_eq!(numeric.id, NotificationId::from(1));
    }

    #[test]
    fn test_unknown_status_counts_as_read() {
        let n: Notification =
            serde_json::from_str(r#"{"id":2,"username":"bob","status":"seen"}"#).unwrap();
        assert_eq!(n.status, ReadStatus::Read);
        assert_eq!(serde_json::to_value(n.status).unwrap(), "read");
    }

    #[test]
    fn test_missing_or_null_status_counts_as_read() {
        let missing: Notification = serde_json::from_str(r#"{"id":5,"username":"bob"}"#).unwrap();
        assert_eq!(missing.status, ReadStatus::Read);
        let null: Notification =
            serde_json::from_str(r#"{"id":6,"username":"bob","status":null}"#).unwrap();
        assert_eq!(null.status, ReadStatus::Read);
        assert!(Notification::new(7, "bob", "liked").is_unread());
    }

    #[test]
    fn test_null_text_fields_read_as_empty() {
        let n: Notification = serde_json::from_str(
            r#"{"id":8,"username":null,"event":null,"time":null,"status":"unread"}"#,
        )
        .unwrap();
        assert_eq!(n.username, "");
        assert_eq!(n.event, "");
        assert_eq!(n.time, "");
        assert!(n.is_unread());
    }

    #[test]
    fn test_empty_target_is_absent() {
        let n: Notification =
            serde_json::from_str(r#"{"id":3,"username":"bob","target":""}"#).unwrap();
        assert_eq!(n.target(), None);
        let n: Notification = serde_json::from_str(r#"{"id":4,"username":"bob"}"#).unwrap();
        assert_eq!(n.target(), None);
    }

    #[test]
    fn test_empty_picture_is_absent() {
        let post: Post = serde_json::from_str(r#"{"id":"p1","title":"x","picture":""}"#).unwrap();
        assert_eq!(post.picture(), None);
        assert_eq!(Post::new("p2", "y").with_picture("a.webp").picture(), Some("a.webp"));
    }

    #[test]
    fn test_status_transitions() {
        assert!(ReadStatus::Unread.can_transition_to(&ReadStatus::Read));
        assert!(ReadStatus::Read.can_transition_to(&ReadStatus::Read));
        assert!(!ReadStatus::Read.can_transition_to(&ReadStatus::Unread));
    }
}
