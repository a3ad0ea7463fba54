//! Story model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MediaType, User};

/// Ephemeral media item attached to a user. Stories are read-only in the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    /// Owner of the story
    pub user_id: String,
    /// Embedded copy of the owner, when the writer included one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Media URI
    pub media: String,
    #[serde(default)]
    pub media_type: MediaType,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub seen: bool,
    #[serde(default)]
    pub views: u32,
}
