//! Target classification.
//!
//! The first character of a target id names the collection it belongs to:
//! `p` for posts, `g` for groups. Classification happens once, when a
//! notification is joined, and the result is carried as [`ResolvedTarget`]
//! from then on.

use serde::{Deserialize, Serialize};

/// Which collection a target id points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    Post,
    Group,
    /// No target, an empty target, or an unrecognised prefix.
    Untyped,
}

impl TargetKind {
    pub fn from_char(c: char) -> Self {
        match c {
            'p' => TargetKind::Post,
            'g' => TargetKind::Group,
            _ => TargetKind::Untyped,
        }
    }
}

/// Classify a target id by its first character.
///
/// Missing and empty targets are [`TargetKind::Untyped`].
pub fn classify(target: Option<&str>) -> TargetKind {
    target
        .and_then(|t| t.chars().next())
        .map(TargetKind::from_char)
        .unwrap_or(TargetKind::Untyped)
}

/// Preview of a post target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPreview {
    pub title: String,
    pub picture: Option<String>,
}

/// Preview of a group target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPreview {
    pub name: String,
}

/// A notification target after the join.
///
/// A post or group target whose id is not found still keeps its kind, with
/// an empty preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResolvedTarget {
    Post { id: String, preview: PostPreview },
    Group { id: String, preview: GroupPreview },
    None,
}

impl ResolvedTarget {
    pub fn kind(&self) -> TargetKind {
        match self {
            ResolvedTarget::Post { .. } => TargetKind::Post,
            ResolvedTarget::Group { .. } => TargetKind::Group,
            ResolvedTarget::None => TargetKind::Untyped,
        }
    }

    /// The target id, if typed.
    pub fn id(&self) -> Option<&str> {
        match self {
            ResolvedTarget::Post { id, .. } | ResolvedTarget::Group { id, .. } => Some(id.as_str()),
            ResolvedTarget::None => None,
        }
    }

    /// Text shown for the target: post title or group name.
    pub fn preview_text(&self) -> &str {
        match self {
            ResolvedTarget::Post { preview, .. } => &preview.title,
            ResolvedTarget::Group { preview, .. } => &preview.name,
            ResolvedTarget::None => "",
        }
    }

    /// Post picture, if this is a post target that has one.
    pub fn picture(&self) -> Option<&str> {
        match self {
            ResolvedTarget::Post { preview, .. } => preview.picture.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prefixes() {
        assert_eq!(classify(Some("p42")), TargetKind::Post);
        assert_eq!(classify(Some("g1")), TargetKind::Group);
        assert_eq!(classify(Some("m1")), TargetKind::Untyped);
    }

    #[test]
    fn test_classify_empty_and_missing() {
        assert_eq!(classify(Some("")), TargetKind::Untyped);
        assert_eq!(classify(None), TargetKind::Untyped);
    }

    #[test]
    fn test_classify_multibyte_first_char() {
        assert_eq!(classify(Some("ñ1")), TargetKind::Untyped);
    }

    #[test]
    fn test_resolved_target_accessors() {
        let target = ResolvedTarget::Post {
            id: "p1".to_string(),
            preview: PostPreview {
                title: "Hello".to_string(),
                picture: Some("a.webp".to_string()),
            },
        };
        assert_eq!(target.kind(), TargetKind::Post);
        assert_eq!(target.preview_text(), "Hello");
        assert_eq!(target.picture(), Some("a.webp"));
        assert_eq!(ResolvedTarget::None.preview_text(), "");
        assert_eq!(ResolvedTarget::None.id(), None);
    }
}
