//! User model

use serde::{Deserialize, Serialize};

/// A member of the network, either the viewer or one of their contacts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Unique handle, shown as `@username`
    pub username: String,
    /// Avatar image URI
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub is_online: bool,
    /// Whether the viewer has befriended this user
    #[serde(default)]
    pub is_friend: bool,
    #[serde(default)]
    pub mutual_friends: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            username: username.into(),
            ..Self::default()
        }
    }

    /// Handle as displayed in the feed
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}
