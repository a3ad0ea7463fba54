//! Social feed state store
//!
//! Holds the feed's domain entities (current user, posts, friends,
//! notifications, stories, events, groups, theme flag) in memory, loads them
//! from a key-value storage on startup and writes each category back after
//! every change.
//!
//! # Example
//!
//! ```
//! use social_feed_store::{storage::MemoryStorage, NewPost, Outcome, Store};
//!
//! let mut store = Store::open(MemoryStorage::new());
//! store.create_post(NewPost::new("hello"));
//!
//! let id = store.state().posts[0].id.clone();
//! assert_eq!(store.like_post(&id), Outcome::Applied);
//! assert_eq!(store.like_post("unknown"), Outcome::NotFound);
//! ```

pub mod actions;
pub mod dispatcher;
pub mod domain_models;
pub mod middleware;
pub mod reducers;
pub mod seed;
pub mod state;
pub mod storage;
mod store;

pub use domain_models::{
    Comment, Event, Group, Media, MediaType, NewPost, Notification, NotificationKind, Post,
    Privacy, ReactionKind, Story, User,
};
pub use state::{AppState, Category, FeedStats};
pub use store::{Outcome, Store};
