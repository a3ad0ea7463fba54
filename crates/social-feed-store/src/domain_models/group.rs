use serde::{Deserialize, Serialize};

/// A community group shown in the sidebar (display only)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub members: u32,
    #[serde(default)]
    pub is_joined: bool,
}
