//! Application State

use serde::de::DeserializeOwned;

use super::{Category, FeedStats};
use crate::actions::Target;
use crate::domain_models::{Event, Group, Notification, Post, Story, User};
use crate::seed;
use crate::storage::KeyValueStorage;

/// Snapshot of every category the store holds
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub current_user: User,
    /// Most recent first
    pub posts: Vec<Post>,
    pub friends: Vec<User>,
    /// Most recent first
    pub notifications: Vec<Notification>,
    pub stories: Vec<Story>,
    pub events: Vec<Event>,
    pub groups: Vec<Group>,
    pub is_dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::seed()
    }
}

impl AppState {
    /// Full default dataset
    pub fn seed() -> Self {
        Self {
            current_user: seed::current_user(),
            posts: seed::posts(),
            friends: seed::friends(),
            notifications: seed::notifications(),
            stories: seed::stories(),
            events: seed::events(),
            groups: seed::groups(),
            is_dark_mode: seed::dark_mode(),
        }
    }

    /// Load every category from storage.
    ///
    /// A category that is absent or cannot be decoded falls back to its seed
    /// value; the others are unaffected.
    pub fn load(storage: &dyn KeyValueStorage) -> Self {
        Self {
            current_user: load_category(storage, Category::CurrentUser, seed::current_user),
            posts: load_category(storage, Category::Posts, seed::posts),
            friends: load_category(storage, Category::Friends, seed::friends),
            notifications: load_category(storage, Category::Notifications, seed::notifications),
            stories: load_category(storage, Category::Stories, seed::stories),
            events: load_category(storage, Category::Events, seed::events),
            groups: load_category(storage, Category::Groups, seed::groups),
            is_dark_mode: load_category(storage, Category::Theme, seed::dark_mode),
        }
    }

    /// Serialize one category in its persisted JSON form
    pub fn encode(&self, category: Category) -> Result<String, serde_json::Error> {
        match category {
            Category::CurrentUser => serde_json::to_string(&self.current_user),
            Category::Posts => serde_json::to_string(&self.posts),
            Category::Friends => serde_json::to_string(&self.friends),
            Category::Notifications => serde_json::to_string(&self.notifications),
            Category::Stories => serde_json::to_string(&self.stories),
            Category::Events => serde_json::to_string(&self.events),
            Category::Groups => serde_json::to_string(&self.groups),
            Category::Theme => serde_json::to_string(&self.is_dark_mode),
        }
    }

    /// Whether the entity an action looks up is present
    pub fn contains(&self, target: &Target) -> bool {
        match target {
            Target::Post(id) => self.posts.iter().any(|p| &p.id == id),
            Target::Friend(id) => self.friends.iter().any(|u| &u.id == id),
            Target::Notification(id) => self.notifications.iter().any(|n| &n.id == id),
        }
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn bookmarked_posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|p| p.is_bookmarked)
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn stats(&self) -> FeedStats {
        FeedStats {
            unread_notifications: self.unread_notifications(),
            total_posts: self.posts.len(),
            total_likes: self.posts.iter().map(|p| u64::from(p.likes)).sum(),
            total_comments: self.posts.iter().map(|p| p.comments.len()).sum(),
        }
    }

    pub fn online_friends(&self) -> impl Iterator<Item = &User> {
        self.friends.iter().filter(|u| u.is_online)
    }

    /// Users who are not friends yet, in list order, at most `limit`
    pub fn suggested_friends(&self, limit: usize) -> impl Iterator<Item = &User> {
        self.friends.iter().filter(|u| !u.is_friend).take(limit)
    }

    /// Stories posted by the viewer
    pub fn user_stories(&self) -> impl Iterator<Item = &Story> {
        let me = self.current_user.id.as_str();
        self.stories.iter().filter(move |s| s.user_id == me)
    }

    /// Stories posted by everyone else
    pub fn other_stories(&self) -> impl Iterator<Item = &Story> {
        let me = self.current_user.id.as_str();
        self.stories.iter().filter(move |s| s.user_id != me)
    }

    /// One user's stories in viewing order
    pub fn stories_of<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Story> {
        self.stories.iter().filter(move |s| s.user_id == user_id)
    }
}

fn load_category<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    category: Category,
    default: impl FnOnce() -> T,
) -> T {
    let Some(raw) = storage.get(category.key()) else {
        log::debug!("No persisted {}, using seed data", category);
        return default();
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Discarding unreadable {} ({}), using seed data", category, e);
            default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    fn persist_all(state: &AppState, storage: &mut MemoryStorage) {
        for category in Category::iter() {
            storage.set(category.key(), &state.encode(category).unwrap());
        }
    }

    #[test]
    fn test_load_from_empty_storage_uses_seed() {
        let state = AppState::load(&MemoryStorage::new());
        assert_eq!(state.current_user.username, "johndoe");
        assert_eq!(state.posts.len(), 2);
        assert_eq!(state.friends.len(), 3);
        assert!(!state.is_dark_mode);
    }

    #[test]
    fn test_persisted_state_reloads_identically() {
        let mut state = AppState::seed();
        state.is_dark_mode = true;
        state.posts[0].toggle_bookmark();

        let mut storage = MemoryStorage::new();
        persist_all(&state, &mut storage);

        assert_eq!(AppState::load(&storage), state);
    }

    #[test]
    fn test_corrupt_category_falls_back_alone() {
        let mut state = AppState::seed();
        state.is_dark_mode = true;

        let mut storage = MemoryStorage::new();
        persist_all(&state, &mut storage);
        storage.set(Category::Posts.key(), "{not json");

        let loaded = AppState::load(&storage);
        assert!(loaded.is_dark_mode);
        assert_eq!(loaded.posts.len(), seed::posts().len());
        assert_eq!(loaded.friends, state.friends);
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let mut storage = MemoryStorage::new();
        storage.set(Category::Theme.key(), r#""dark""#);
        storage.set(Category::CurrentUser.key(), "[]");

        let loaded = AppState::load(&storage);
        assert!(!loaded.is_dark_mode);
        assert_eq!(loaded.current_user, seed::current_user());
    }

    #[test]
    fn test_stats() {
        let state = AppState::seed();
        let stats = state.stats();
        assert_eq!(stats.unread_notifications, 2);
        assert_eq!(stats.total_posts, 2);
        assert_eq!(stats.total_likes, 245 + 189);
        assert_eq!(stats.total_comments, 3);
    }

    #[test]
    fn test_friend_selectors() {
        let state = AppState::seed();
        let online: Vec<_> = state.online_friends().map(|u| u.id.as_str()).collect();
        assert_eq!(online, vec!["1", "2"]);

        let suggested: Vec<_> = state.suggested_friends(5).map(|u| u.id.as_str()).collect();
        assert_eq!(suggested, vec!["3"]);
        assert_eq!(state.suggested_friends(0).count(), 0);
    }

    #[test]
    fn test_story_selectors() {
        let state = AppState::seed();
        assert_eq!(state.user_stories().count(), 1);
        assert_eq!(state.other_stories().count(), 1);
        assert_eq!(state.stories_of("2").next().map(|s| s.id.as_str()), Some("2"));
        assert_eq!(state.stories_of("3").count(), 0);
    }

    #[test]
    fn test_contains() {
        let state = AppState::seed();
        assert!(state.contains(&Target::Post("1".into())));
        assert!(!state.contains(&Target::Post("missing".into())));
        assert!(state.contains(&Target::Friend("3".into())));
        assert!(state.contains(&Target::Notification("2".into())));
    }
}
