use strum::{Display, EnumIter};

/// Independently persisted slice of the application state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    CurrentUser,
    Posts,
    Friends,
    Notifications,
    Stories,
    Events,
    Groups,
    Theme,
}

impl Category {
    /// Storage key; fixed so previously persisted data stays readable
    pub fn key(self) -> &'static str {
        match self {
            Category::CurrentUser => "social_user",
            Category::Posts => "social_posts",
            Category::Friends => "social_friends",
            Category::Notifications => "social_notifications",
            Category::Stories => "social_stories",
            Category::Events => "social_events",
            Category::Groups => "social_groups",
            Category::Theme => "social_darkmode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_keys_are_distinct() {
        let keys: HashSet<_> = Category::iter().map(Category::key).collect();
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::CurrentUser.to_string(), "current_user");
        assert_eq!(Category::Theme.key(), "social_darkmode");
    }
}
