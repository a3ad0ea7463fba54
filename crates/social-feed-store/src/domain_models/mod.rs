//! Domain models
//!
//! Plain records persisted by the store. Field names serialize in camelCase,
//! the layout of the persisted JSON.

mod event;
mod group;
mod notification;
mod post;
mod story;
mod user;

pub use event::Event;
pub use group::Group;
pub use notification::{Notification, NotificationKind, JUST_NOW};
pub use post::{Comment, Media, MediaType, NewPost, Post, Privacy, ReactionKind};
pub use story::Story;
pub use user::User;
