//! Reducers
//!
//! Pure functions producing the next state from the current state and an
//! action. A reducer never fails: an id that matches nothing leaves its
//! slice untouched.

pub mod app_reducer;
pub mod friend_reducer;
pub mod notification_reducer;
pub mod post_reducer;
pub mod theme_reducer;

pub use app_reducer::reduce;
