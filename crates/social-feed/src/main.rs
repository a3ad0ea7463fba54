use anyhow::{bail, Result};
use clap::Parser;
use social_feed_config::{AppConfig, StorageBackend};
use social_feed_store::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use social_feed_store::{Media, NewPost, Outcome, Store};

mod cli;
mod logger;
mod views;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting social-feed (log file: {:?})", log_file);

    let config = AppConfig::load();
    let storage = open_storage(&cli, &config)?;
    let mut store = Store::open(storage);

    let result = run(cli.command.unwrap_or_default(), &mut store, &config);
    log::info!("Exiting social-feed");
    result
}

fn open_storage(cli: &Cli, config: &AppConfig) -> Result<Box<dyn KeyValueStorage>> {
    if cli.memory || config.storage == StorageBackend::Memory {
        log::info!("Using in-memory storage");
        return Ok(Box::new(MemoryStorage::new()));
    }

    let dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config.resolve_data_dir()?,
    };
    log::info!("Using file storage in {:?}", dir);
    Ok(Box::new(FileStorage::new(dir)))
}

/// Turn a lookup miss into an error the user sees
fn require(outcome: Outcome, what: &str, id: &str) -> Result<()> {
    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::NotFound => bail!("No {} with id {:?}", what, id),
        Outcome::Consumed => bail!("Request for {} {:?} was not applied", what, id),
    }
}

fn run(command: Command, store: &mut Store, config: &AppConfig) -> Result<()> {
    let now = chrono::Utc::now();

    match command {
        Command::Feed { bookmarked } => {
            let state = store.state();
            let rendered = if bookmarked {
                views::render_feed(state, state.bookmarked_posts(), now)
            } else {
                views::render_feed(state, state.posts.iter(), now)
            };
            print!("{rendered}");
        }
        Command::Post {
            content,
            privacy,
            tags,
            images,
            videos,
        } => {
            let media = images
                .into_iter()
                .map(Media::image)
                .chain(videos.into_iter().map(Media::video))
                .collect();
            let draft = NewPost {
                content,
                privacy,
                media,
                tags,
            };
            if draft.is_blank() {
                bail!("Nothing to post: add some text or media");
            }

            store.create_post(draft);
            if let Some(post) = store.state().posts.first() {
                println!("Posted {}", post.id);
            }
        }
        Command::Like { post_id } => {
            require(store.like_post(&post_id), "post", &post_id)?;
            if let Some(post) = store.state().post(&post_id) {
                let verb = if post.is_liked { "Liked" } else { "Unliked" };
                println!("{verb} {} ({} likes)", post.id, post.likes);
            }
        }
        Command::Bookmark { post_id } => {
            require(store.bookmark_post(&post_id), "post", &post_id)?;
            if let Some(post) = store.state().post(&post_id) {
                let verb = if post.is_bookmarked {
                    "Bookmarked"
                } else {
                    "Removed bookmark from"
                };
                println!("{verb} {}", post.id);
            }
        }
        Command::Comment { post_id, text } => {
            require(store.add_comment(&post_id, text), "post", &post_id)?;
            println!("Commented on {post_id}");
        }
        Command::AddFriend { user_id } => {
            require(store.add_friend(&user_id), "user", &user_id)?;
            println!("Friend request sent!");
        }
        Command::Friends => {
            print!(
                "{}",
                views::render_friends(store.state(), config.suggested_friends_limit)
            );
        }
        Command::Stories => print!("{}", views::render_stories(store.state(), now)),
        Command::Notifications => print!("{}", views::render_notifications(store.state())),
        Command::Read { notification_id } => {
            require(
                store.mark_notification_as_read(&notification_id),
                "notification",
                &notification_id,
            )?;
        }
        Command::ReadAll => {
            store.mark_all_notifications_as_read();
        }
        Command::ToggleTheme => {
            store.toggle_theme();
            let theme = if store.state().is_dark_mode {
                "dark"
            } else {
                "light"
            };
            println!("Switched to {theme} mode");
        }
        Command::Stats => print!("{}", views::render_stats(&store.state().stats())),
    }

    Ok(())
}
