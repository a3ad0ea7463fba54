//! Plain-text views of the store snapshot
//!
//! Every renderer returns newline-terminated lines.

use chrono::{DateTime, Utc};
use social_feed_store::{AppState, FeedStats, Post, Story, User};

/// Short relative age, e.g. "5m" or "3d"
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("{}m", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{}h", elapsed.num_hours())
    } else {
        format!("{}d", elapsed.num_days())
    }
}

fn lines(rows: Vec<String>) -> String {
    rows.into_iter().map(|line| line + "\n").collect()
}

pub fn render_post(post: &Post, now: DateTime<Utc>) -> String {
    let liked = if post.is_liked { "♥" } else { "♡" };
    let bookmarked = if post.is_bookmarked { " [saved]" } else { "" };

    let mut out = vec![format!(
        "{} {} · {} · {}{}",
        post.author.name,
        post.author.handle(),
        time_ago(post.timestamp, now),
        post.privacy,
        bookmarked
    )];
    if !post.content.is_empty() {
        out.push(format!("  {}", post.content));
    }
    out.extend(post.media.iter().map(|media| match &media.caption {
        Some(caption) => format!("  [{}] {} ({})", media.media_type, media.url, caption),
        None => format!("  [{}] {}", media.media_type, media.url),
    }));
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{t}")).collect();
        out.push(format!("  {}", tags.join(" ")));
    }
    out.push(format!(
        "  {} {} · {} reactions · {} comments · {} shares   id: {}",
        liked,
        post.likes,
        post.total_reactions(),
        post.comments.len(),
        post.shares,
        post.id
    ));
    out.extend(post.comments.iter().map(|comment| {
        format!(
            "    └ {}: {} ({})",
            comment.author.name,
            comment.content,
            time_ago(comment.timestamp, now)
        )
    }));
    lines(out)
}

pub fn render_feed<'a>(
    state: &AppState,
    posts: impl Iterator<Item = &'a Post>,
    now: DateTime<Utc>,
) -> String {
    let theme = if state.is_dark_mode { "dark" } else { "light" };
    let mut out = format!(
        "{} ({}) · {} unread · {} theme\n\n",
        state.current_user.name,
        state.current_user.handle(),
        state.unread_notifications(),
        theme
    );

    let rendered: Vec<String> = posts.map(|post| render_post(post, now)).collect();
    if rendered.is_empty() {
        out.push_str("No posts yet.\n");
    } else {
        out.push_str(&rendered.join("\n"));
    }
    out
}

fn user_line(user: &User) -> String {
    let status = if user.is_online { "●" } else { "○" };
    format!(
        "  {} {} {} · {} mutual   id: {}",
        status,
        user.name,
        user.handle(),
        user.mutual_friends,
        user.id
    )
}

pub fn render_friends(state: &AppState, suggestion_limit: usize) -> String {
    let friends: Vec<&User> = state.friends.iter().filter(|u| u.is_friend).collect();
    let mut out = vec![format!("Friends ({})", friends.len())];
    out.extend(friends.into_iter().map(user_line));
    out.push(format!("Online ({})", state.online_friends().count()));

    let suggested: Vec<String> = state
        .suggested_friends(suggestion_limit)
        .map(user_line)
        .collect();
    if !suggested.is_empty() {
        out.push("People you may know".to_string());
        out.extend(suggested);
    }
    lines(out)
}

fn story_line(story: &Story, now: DateTime<Utc>) -> String {
    let owner = story
        .user
        .as_ref()
        .map(|u| u.name.as_str())
        .unwrap_or(story.user_id.as_str());
    format!(
        "  {} · {} · {} views · {}",
        owner,
        story.media_type,
        story.views,
        time_ago(story.timestamp, now)
    )
}

pub fn render_stories(state: &AppState, now: DateTime<Utc>) -> String {
    let mut out = vec!["Your story".to_string()];
    let mine: Vec<String> = state.user_stories().map(|s| story_line(s, now)).collect();
    if mine.is_empty() {
        out.push("  (none)".to_string());
    }
    out.extend(mine);

    out.push("Stories".to_string());
    out.extend(state.other_stories().map(|s| story_line(s, now)));
    lines(out)
}

pub fn render_notifications(state: &AppState) -> String {
    if state.notifications.is_empty() {
        return "No notifications.\n".to_string();
    }
    lines(
        state
            .notifications
            .iter()
            .map(|n| {
                let marker = if n.read { " " } else { "*" };
                format!("{} {} · {}   id: {}", marker, n.message, n.time, n.id)
            })
            .collect(),
    )
}

pub fn render_stats(stats: &FeedStats) -> String {
    format!(
        "Posts:    {}\nLikes:    {}\nComments: {}\nUnread:   {}\n",
        stats.total_posts, stats.total_likes, stats.total_comments, stats.unread_notifications
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_time_ago() {
        let now = Utc::now();
        assert_eq!(time_ago(now, now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5m");
        assert_eq!(time_ago(now - Duration::hours(2), now), "2h");
        assert_eq!(time_ago(now - Duration::days(3), now), "3d");
    }

    #[test]
    fn test_render_post_shows_engagement() {
        let state = AppState::seed();
        let post = state.post("1").unwrap();
        let rendered = render_post(post, Utc::now());

        assert!(rendered.starts_with("John Doe @johndoe · 1h · public"));
        assert!(rendered.contains("♥ 245"));
        assert!(rendered.contains("#webdesign #portfolio #launch"));
        assert!(rendered.contains("[image]"));
        assert!(rendered.contains("Sarah Wilson: Looks amazing!"));
    }

    #[test]
    fn test_render_friends_lists_suggestions() {
        let rendered = render_friends(&AppState::seed(), 5);
        assert!(rendered.contains("Friends (2)"));
        assert!(rendered.contains("Online (2)"));
        assert!(rendered.contains("People you may know\n  ○ Mike Johnson"));
    }

    #[test]
    fn test_render_notifications_marks_unread() {
        let rendered = render_notifications(&AppState::seed());
        let first = rendered.lines().next().unwrap();
        assert!(first.starts_with("* John Doe liked your post"));
    }

    #[test]
    fn test_render_stats() {
        let stats = AppState::seed().stats();
        assert_eq!(
            render_stats(&stats),
            "Posts:    2\nLikes:    434\nComments: 3\nUnread:   2\n"
        );
    }

    #[test]
    fn test_render_stories_without_own_story() {
        let mut state = AppState::seed();
        let viewer = state.current_user.id.clone();
        state.stories.retain(|s| s.user_id != viewer);

        let rendered = render_stories(&state, Utc::now());
        assert!(rendered.starts_with("Your story\n  (none)\nStories\n"));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_no_notifications() {
        let mut state = AppState::seed();
        state.notifications.clear();
        assert_eq!(render_notifications(&state), "No notifications.\n");
    }

    #[test]
    fn test_empty_feed() {
        let state = AppState::seed();
        let rendered = render_feed(&state, std::iter::empty(), Utc::now());
        assert!(rendered.ends_with("No posts yet.\n"));
    }
}
