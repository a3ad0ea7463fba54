//! Actions module
//!
//! Actions represent all possible state changes. They are scoped by the part
//! of the state they affect. Ids and timestamps are generated before an
//! action is built, so reducing an action is deterministic.

mod friend;
mod notification;
mod post;
mod theme;

pub use friend::FriendAction;
pub use notification::NotificationAction;
pub use post::PostAction;
pub use theme::ThemeAction;

use crate::state::Category;

/// Root action type
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Post(PostAction),
    Friend(FriendAction),
    Notification(NotificationAction),
    Theme(ThemeAction),
}

/// Entity an id-keyed action must find to have any effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Post(String),
    Friend(String),
    Notification(String),
}

impl Action {
    /// The entity this action looks up, if it is id-keyed
    pub fn target(&self) -> Option<Target> {
        match self {
            Action::Post(PostAction::Like(id)) | Action::Post(PostAction::Bookmark(id)) => {
                Some(Target::Post(id.clone()))
            }
            Action::Post(PostAction::CommentAdded { post_id, .. }) => {
                Some(Target::Post(post_id.clone()))
            }
            Action::Post(PostAction::Created(_)) => None,
            Action::Friend(FriendAction::Add(user_id)) => Some(Target::Friend(user_id.clone())),
            Action::Notification(NotificationAction::MarkRead(id)) => {
                Some(Target::Notification(id.clone()))
            }
            Action::Notification(_) | Action::Theme(_) => None,
        }
    }

    /// Categories that have to be written back after this action is reduced
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Action::Post(_) => &[Category::Posts],
            Action::Friend(_) => &[Category::Friends],
            Action::Notification(_) => &[Category::Notifications],
            Action::Theme(_) => &[Category::Theme],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_keyed_actions_have_targets() {
        assert_eq!(
            Action::Post(PostAction::Like("p1".into())).target(),
            Some(Target::Post("p1".into()))
        );
        assert_eq!(
            Action::Friend(FriendAction::Add("3".into())).target(),
            Some(Target::Friend("3".into()))
        );
        assert_eq!(
            Action::Notification(NotificationAction::MarkAllRead).target(),
            None
        );
        assert_eq!(Action::Theme(ThemeAction::Toggle).target(), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            Action::Theme(ThemeAction::Toggle).categories(),
            &[Category::Theme]
        );
        assert_eq!(
            Action::Post(PostAction::Bookmark("p1".into())).categories(),
            &[Category::Posts]
        );
    }
}
