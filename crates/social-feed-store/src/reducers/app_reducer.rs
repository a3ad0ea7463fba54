use crate::actions::Action;
use crate::state::AppState;

use super::{friend_reducer, notification_reducer, post_reducer, theme_reducer};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes each scope to its sub-reducer
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Post(action) => {
            state.posts = post_reducer::reduce_posts(state.posts, action);
        }
        Action::Friend(action) => {
            state.friends = friend_reducer::reduce_friends(state.friends, action);
        }
        Action::Notification(action) => {
            state.notifications =
                notification_reducer::reduce_notifications(state.notifications, action);
        }
        Action::Theme(action) => {
            state.is_dark_mode = theme_reducer::reduce_theme(state.is_dark_mode, action);
        }
    }
    state
}
