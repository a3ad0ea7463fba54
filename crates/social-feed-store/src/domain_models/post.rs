//! Post model
//!
//! A feed entry with reaction counters, comments and attached media.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::User;

/// Audience of a post
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Privacy {
    #[default]
    Public,
    Friends,
    Private,
}

/// Kind of an attached media item
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

/// An image or video attached to a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Media {
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Media {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            media_type: MediaType::Image,
            url: url.into(),
            caption: None,
        }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self {
            media_type: MediaType::Video,
            url: url.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// The six reaction counters every post carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Love,
    Haha,
    Wow,
    Sad,
    Fire,
}

/// A comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub author: User,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
}

impl Comment {
    pub fn new(
        id: impl Into<String>,
        author: User,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            author,
            content: content.into(),
            timestamp,
            likes: 0,
        }
    }
}

/// Caller supplied part of a post about to be created
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub content: String,
    pub privacy: Privacy,
    pub media: Vec<Media>,
    pub tags: Vec<String>,
}

impl NewPost {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// True when there is neither text nor media. The store accepts blank
    /// posts; UIs are expected to refuse them before calling it.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty() && self.media.is_empty()
    }
}

/// A feed entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: User,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub loves: u32,
    #[serde(default)]
    pub hahas: u32,
    #[serde(default)]
    pub wows: u32,
    #[serde(default)]
    pub sads: u32,
    #[serde(default)]
    pub fires: u32,
    /// Newest first
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub shares: u32,
    /// Whether the viewer liked this post
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default)]
    pub privacy: Privacy,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_media")]
    pub media: Vec<Media>,
}

impl Post {
    /// Build a fresh post: zero counters, no comments, nothing liked or bookmarked
    pub fn new(
        id: impl Into<String>,
        author: User,
        draft: NewPost,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            author,
            content: draft.content,
            timestamp,
            likes: 0,
            loves: 0,
            hahas: 0,
            wows: 0,
            sads: 0,
            fires: 0,
            comments: Vec::new(),
            shares: 0,
            is_liked: false,
            is_bookmarked: false,
            privacy: draft.privacy,
            tags: draft.tags,
            media: draft.media,
        }
    }

    pub fn reactions(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Like => self.likes,
            ReactionKind::Love => self.loves,
            ReactionKind::Haha => self.hahas,
            ReactionKind::Wow => self.wows,
            ReactionKind::Sad => self.sads,
            ReactionKind::Fire => self.fires,
        }
    }

    pub fn total_reactions(&self) -> u64 {
        use strum::IntoEnumIterator;
        ReactionKind::iter()
            .map(|kind| u64::from(self.reactions(kind)))
            .sum()
    }

    /// Flip the viewer's like, moving the like counter by exactly one
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes = self.likes.saturating_add(1);
        }
        self.is_liked = !self.is_liked;
    }

    pub fn toggle_bookmark(&mut self) {
        self.is_bookmarked = !self.is_bookmarked;
    }
}

/// Older snapshots stored `media` as a single object or `null`
#[derive(Deserialize)]
#[serde(untagged)]
enum MediaField {
    Many(Vec<Media>),
    One(Media),
}

fn deserialize_media<'de, D>(deserializer: D) -> Result<Vec<Media>, D::Error>
where
    D: Deserializer<'de>,
{
    let field: Option<MediaField> = Option::deserialize(deserializer)?;
    Ok(match field {
        None => Vec::new(),
        Some(MediaField::Many(media)) => media,
        Some(MediaField::One(media)) => vec![media],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn post() -> Post {
        Post::new(
            "p1",
            User::new("1", "John Doe", "johndoe"),
            NewPost::new("hello"),
            Utc::now(),
        )
    }

    #[test]
    fn test_new_post_has_zero_counters() {
        let post = post();
        assert_eq!(post.total_reactions(), 0);
        assert!(post.comments.is_empty());
        assert!(!post.is_liked);
        assert!(!post.is_bookmarked);
        assert_eq!(post.privacy, Privacy::Public);
    }

    #[test]
    fn test_toggle_like_moves_one_unit() {
        let mut post = post();
        post.likes = 10;

        post.toggle_like();
        assert!(post.is_liked);
        assert_eq!(post.likes, 11);

        post.toggle_like();
        assert!(!post.is_liked);
        assert_eq!(post.likes, 10);
    }

    #[test]
    fn test_unlike_never_goes_negative() {
        let mut post = post();
        post.is_liked = true;
        post.likes = 0;

        post.toggle_like();
        assert_eq!(post.likes, 0);
        assert!(!post.is_liked);
    }

    #[test]
    fn test_reactions_by_kind() {
        let mut post = post();
        post.likes = 1;
        post.loves = 2;
        post.hahas = 3;
        post.wows = 4;
        post.sads = 5;
        post.fires = 6;
        assert_eq!(post.reactions(ReactionKind::Wow), 4);
        assert_eq!(post.total_reactions(), 21);
    }

    #[test]
    fn test_media_accepts_single_object_or_null() {
        let base = r#""id":"1","author":{"id":"1","name":"J","username":"j"},"content":"x","timestamp":"2024-05-01T10:00:00.000Z""#;

        let single: Post = serde_json::from_str(&format!(
            r#"{{{base},"media":{{"type":"video","url":"v.mp4","caption":"clip"}}}}"#
        ))
        .unwrap();
        assert_eq!(
            single.media,
            vec![Media::video("v.mp4").with_caption("clip")]
        );

        let null: Post = serde_json::from_str(&format!(r#"{{{base},"media":null}}"#)).unwrap();
        assert!(null.media.is_empty());

        let missing: Post = serde_json::from_str(&format!("{{{base}}}")).unwrap();
        assert!(missing.media.is_empty());
    }

    #[test]
    fn test_privacy_parsing() {
        assert_eq!(Privacy::from_str("friends").unwrap(), Privacy::Friends);
        assert_eq!(Privacy::Private.to_string(), "private");
        assert!(Privacy::from_str("everyone").is_err());
    }

    #[test]
    fn test_blank_draft() {
        assert!(NewPost::new("   ").is_blank());
        let mut draft = NewPost::new("");
        draft.media.push(Media::image("a.png"));
        assert!(!draft.is_blank());
    }
}
