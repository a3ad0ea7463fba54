use serde::Serialize;

/// Counters shown in the header badge and the analytics summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedStats {
    pub unread_notifications: usize,
    pub total_posts: usize,
    /// Sum of the like counters only, other reactions are not included
    pub total_likes: u64,
    pub total_comments: usize,
}
