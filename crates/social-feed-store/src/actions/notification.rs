//! Notification actions

use crate::domain_models::Notification;

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationAction {
    /// Prepend a notification
    Push(Notification),
    MarkRead(String),
    MarkAllRead,
}
