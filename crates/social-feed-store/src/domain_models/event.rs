use serde::{Deserialize, Serialize};

/// An upcoming event shown in the sidebar (display only)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Human readable date label, e.g. "Tomorrow, 6:00 PM"
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub attendees: u32,
    #[serde(default)]
    pub is_going: bool,
}
