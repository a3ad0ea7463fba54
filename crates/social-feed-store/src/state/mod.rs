//! Application State Module
//!
//! The snapshot the store owns, the categories it is persisted in, and the
//! read-side selectors consumers render from.

mod app;
mod category;
mod stats;

pub use app::AppState;
pub use category::Category;
pub use stats::FeedStats;
