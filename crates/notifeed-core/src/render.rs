//! Presentation model for the feed.
//!
//! Turns joined entries into display-ready items: labels, links, avatar
//! paths and which optional blocks to show. Front ends only decide how
//! these look.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::feed::Feed;
use crate::model::NotificationId;
use crate::resolve::{FeedEntry, Resolver};
use crate::target::ResolvedTarget;

pub const PAGE_TITLE: &str = "Notifications";
pub const MARK_ALL_LABEL: &str = "Mark all as read";

/// How a target preview is emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewStyle {
    /// Post titles: de-emphasised link.
    Muted,
    /// Group names: emphasised.
    Emphasized,
}

/// Link to the notification target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetLink {
    pub href: String,
    pub text: String,
    pub style: PreviewStyle,
}

/// Linked block of text, used for message previews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedText {
    pub href: String,
    pub text: String,
}

/// Post picture thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub href: String,
    pub src: String,
}

/// One rendered notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: NotificationId,
    pub avatar: String,
    pub profile_href: String,
    pub display_name: String,
    pub event: String,
    pub target_link: Option<TargetLink>,
    /// Unread indicator dot and highlighted row.
    pub unread: bool,
    pub time_label: String,
    pub message: Option<LinkedText>,
    pub thumbnail: Option<Thumbnail>,
}

impl FeedItem {
    pub fn from_entry(entry: &FeedEntry, display: &DisplayConfig) -> Self {
        let href = entry.target_ref.clone().unwrap_or_default();

        let target_link = match &entry.target {
            ResolvedTarget::Post { preview, .. } => Some(TargetLink {
                href: href.clone(),
                text: preview.title.clone(),
                style: PreviewStyle::Muted,
            }),
            ResolvedTarget::Group { preview, .. } => Some(TargetLink {
                href: href.clone(),
                text: preview.name.clone(),
                style: PreviewStyle::Emphasized,
            }),
            ResolvedTarget::None => None,
        };

        let message = entry.message.as_ref().map(|text| LinkedText {
            href: href.clone(),
            text: text.clone(),
        });

        let thumbnail = entry.target.picture().map(|src| Thumbnail {
            href: href.clone(),
            src: src.to_string(),
        });

        Self {
            id: entry.id.clone(),
            avatar: display.avatar_path(&entry.avatar_key),
            profile_href: entry.username.clone(),
            display_name: entry.full_name.clone(),
            event: entry.event.clone(),
            target_link,
            unread: entry.is_unread(),
            time_label: display.time_label(&entry.time),
            message,
            thumbnail,
        }
    }

    /// Target preview text, empty without a target.
    pub fn target_text(&self) -> &str {
        self.target_link
            .as_ref()
            .map(|l| l.text.as_str())
            .unwrap_or("")
    }
}

/// A full rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPage {
    pub title: String,
    pub unread_count: usize,
    pub mark_all_label: String,
    pub items: Vec<FeedItem>,
}

impl FeedPage {
    pub fn item(&self, id: &NotificationId) -> Option<&FeedItem> {
        self.items.iter().find(|i| &i.id == id)
    }
}

/// Render the current feed state.
pub fn render_feed(feed: &Feed, resolver: &Resolver<'_>, display: &DisplayConfig) -> FeedPage {
    let items = resolver
        .resolve_all(feed.notifications())
        .iter()
        .map(|entry| FeedItem::from_entry(entry, display))
        .collect();

    FeedPage {
        title: PAGE_TITLE.to_string(),
        unread_count: feed.unread_count(),
        mark_all_label: MARK_ALL_LABEL.to_string(),
        items,
    }
}

impl fmt::Display for FeedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.unread { "●" } else { " " };
        write!(f, "{} [{}] {} {}", marker, self.id, self.display_name, self.event)?;
        if let Some(link) = &self.target_link {
            match link.style {
                PreviewStyle::Muted => write!(f, " \"{}\"", link.text)?,
                PreviewStyle::Emphasized => write!(f, " *{}*", link.text)?,
            }
        }
        write!(f, "\n      {}", self.time_label)?;
        if let Some(message) = &self.message {
            write!(f, "\n      > {}", message.text)?;
        }
        if let Some(thumbnail) = &self.thumbnail {
            write!(f, "\n      [image: {}]", thumbnail.src)?;
        }
        Ok(())
    }
}

impl fmt::Display for FeedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})    {}", self.title, self.unread_count, self.mark_all_label)?;
        for item in &self.items {
            writeln!(f)?;
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}
