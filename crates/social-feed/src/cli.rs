//! Command-line arguments

use clap::{Parser, Subcommand};
use social_feed_store::Privacy;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "social-feed", version, about = "A tiny local social feed")]
pub struct Cli {
    /// Directory holding the persisted feed (overrides the config file)
    #[arg(long, global = true, env = "SOCIAL_FEED_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is written to disk
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the feed, newest first
    Feed {
        /// Only bookmarked posts
        #[arg(long)]
        bookmarked: bool,
    },
    /// Publish a post as the current user
    Post {
        #[arg(default_value = "")]
        content: String,
        #[arg(long, default_value_t = Privacy::Public)]
        privacy: Privacy,
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Attach an image by URL (repeatable)
        #[arg(long = "image")]
        images: Vec<String>,
        /// Attach a video by URL (repeatable)
        #[arg(long = "video")]
        videos: Vec<String>,
    },
    /// Like a post, or take the like back
    Like { post_id: String },
    /// Bookmark a post, or remove the bookmark
    Bookmark { post_id: String },
    /// Comment on a post
    Comment { post_id: String, text: String },
    /// Befriend a user
    AddFriend { user_id: String },
    /// List friends, who is online and people you may know
    Friends,
    /// List stories
    Stories,
    /// List notifications
    Notifications,
    /// Mark one notification as read
    Read { notification_id: String },
    /// Mark every notification as read
    ReadAll,
    /// Switch between light and dark mode
    ToggleTheme,
    /// Show feed statistics
    Stats,
}

impl Default for Command {
    fn default() -> Self {
        Command::Feed { bookmarked: false }
    }
}
