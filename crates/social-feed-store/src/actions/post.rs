//! Post actions

use crate::domain_models::{Comment, Post};

#[derive(Debug, Clone, PartialEq)]
pub enum PostAction {
    /// A fully built post to prepend to the feed
    Created(Post),
    /// Toggle the viewer's like on a post
    Like(String),
    /// Toggle the viewer's bookmark on a post
    Bookmark(String),
    /// Prepend a comment to a post
    CommentAdded { post_id: String, comment: Comment },
}
