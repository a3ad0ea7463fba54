//! Post Reducer
//!
//! Handles creation, likes, bookmarks and comments on the feed.

use crate::actions::PostAction;
use crate::domain_models::Post;

pub fn reduce_posts(mut posts: Vec<Post>, action: &PostAction) -> Vec<Post> {
    match action {
        PostAction::Created(post) => {
            posts.insert(0, post.clone());
        }
        PostAction::Like(post_id) => {
            if let Some(post) = posts.iter_mut().find(|p| &p.id == post_id) {
                post.toggle_like();
                log::debug!(
                    "Post {}: liked={} likes={}",
                    post.id,
                    post.is_liked,
                    post.likes
                );
            }
        }
        PostAction::Bookmark(post_id) => {
            if let Some(post) = posts.iter_mut().find(|p| &p.id == post_id) {
                post.toggle_bookmark();
            }
        }
        PostAction::CommentAdded { post_id, comment } => {
            if let Some(post) = posts.iter_mut().find(|p| &p.id == post_id) {
                post.comments.insert(0, comment.clone());
            }
        }
    }
    posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{Comment, NewPost, User};
    use crate::seed;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_created_is_prepended() {
        let post = Post::new("new", seed::current_user(), NewPost::new("hi"), Utc::now());
        let posts = reduce_posts(seed::posts(), &PostAction::Created(post));
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].id, "new");
    }

    #[test]
    fn test_like_toggles_only_target() {
        let before = seed::posts();
        let after = reduce_posts(before.clone(), &PostAction::Like("2".into()));

        assert!(after[1].is_liked);
        assert_eq!(after[1].likes, before[1].likes + 1);
        assert_eq!(after[0], before[0]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let before = seed::posts();
        let after = reduce_posts(before.clone(), &PostAction::Bookmark("nope".into()));
        assert_eq!(after, before);
    }

    #[test]
    fn test_comment_is_prepended() {
        let comment = Comment::new("c9", User::new("9", "Nina", "nina"), "nice", Utc::now());
        let after = reduce_posts(
            seed::posts(),
            &PostAction::CommentAdded {
                post_id: "1".into(),
                comment,
            },
        );
        assert_eq!(after[0].comments.len(), 3);
        assert_eq!(after[0].comments[0].id, "c9");
        assert_eq!(after[1].comments.len(), 1);
    }
}
