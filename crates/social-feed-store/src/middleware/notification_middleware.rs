//! Notification Middleware
//!
//! Follows feed activity of the viewer with a notification:
//! - a new post queues a "created a new post" notification
//! - a new comment queues a "commented on your post" notification
//!
//! The store only lets id-keyed actions through when their target exists,
//! so a comment on a missing post never produces a notification.

use uuid::Uuid;

use crate::actions::{Action, NotificationAction, PostAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::Notification;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct NotificationMiddleware;

impl NotificationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for NotificationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let notification = match action {
            Action::Post(PostAction::Created(_)) => {
                Notification::post_created(Uuid::new_v4().to_string(), &state.current_user)
            }
            Action::Post(PostAction::CommentAdded { .. }) => {
                Notification::comment_added(Uuid::new_v4().to_string(), &state.current_user)
            }
            _ => return true,
        };

        dispatcher.dispatch(Action::Notification(NotificationAction::Push(notification)));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::NotificationKind;
    use std::sync::mpsc;

    #[test]
    fn test_comment_queues_notification() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state = AppState::seed();
        let comment = crate::domain_models::Comment::new(
            "c9",
            state.current_user.clone(),
            "nice",
            chrono::Utc::now(),
        );

        let mut middleware = NotificationMiddleware::new();
        let pass = middleware.handle(
            &Action::Post(PostAction::CommentAdded {
                post_id: "1".into(),
                comment,
            }),
            &state,
            &dispatcher,
        );

        assert!(pass);
        match rx.try_recv() {
            Ok(Action::Notification(NotificationAction::Push(n))) => {
                assert_eq!(n.kind, NotificationKind::Comment);
                assert_eq!(n.message, "John Doe commented on your post");
            }
            other => panic!("unexpected follow-up: {:?}", other),
        }
    }

    #[test]
    fn test_other_actions_queue_nothing() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        let mut middleware = NotificationMiddleware::new();
        assert!(middleware.handle(
            &Action::Post(PostAction::Like("1".into())),
            &AppState::seed(),
            &dispatcher,
        ));
        assert!(rx.try_recv().is_err());
    }
}
