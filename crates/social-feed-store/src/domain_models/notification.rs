//! Notification model

use serde::{Deserialize, Serialize};

use super::User;

/// Relative time label given to notifications created in this session
pub const JUST_NOW: &str = "Just now";

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Like,
    Comment,
    FriendRequest,
    Post,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    /// Avatar of the user who triggered it
    #[serde(default)]
    pub avatar: String,
    /// Relative time label, e.g. "15 min ago"
    pub time: String,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    pub fn post_created(id: impl Into<String>, actor: &User) -> Self {
        Self::unread(
            id,
            NotificationKind::Post,
            format!("{} created a new post", actor.name),
            actor,
        )
    }

    pub fn comment_added(id: impl Into<String>, actor: &User) -> Self {
        Self::unread(
            id,
            NotificationKind::Comment,
            format!("{} commented on your post", actor.name),
            actor,
        )
    }

    fn unread(
        id: impl Into<String>,
        kind: NotificationKind,
        message: String,
        actor: &User,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            message,
            avatar: actor.avatar.clone(),
            time: JUST_NOW.to_string(),
            read: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_created_message() {
        let actor = User::new("1", "John Doe", "johndoe");
        let notification = Notification::post_created("n1", &actor);
        assert_eq!(notification.kind, NotificationKind::Post);
        assert_eq!(notification.message, "John Doe created a new post");
        assert_eq!(notification.time, JUST_NOW);
        assert!(!notification.read);
    }

    #[test]
    fn test_kind_wire_names() {
        let json = serde_json::to_string(&NotificationKind::FriendRequest).unwrap();
        assert_eq!(json, r#""friend_request""#);

        let parsed: Notification = serde_json::from_str(
            r#"{"id":"3","type":"friend_request","message":"m","avatar":"a","time":"1 hour ago","read":true}"#,
        )
        .unwrap();
        assert_eq!(parsed.kind, NotificationKind::FriendRequest);
        assert!(parsed.read);
    }
}
