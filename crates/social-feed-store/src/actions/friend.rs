//! Friend actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendAction {
    /// Mark the user with this id as a friend
    Add(String),
}
