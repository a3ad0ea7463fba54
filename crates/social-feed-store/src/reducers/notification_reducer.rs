//! Notification Reducer

use crate::actions::NotificationAction;
use crate::domain_models::Notification;

pub fn reduce_notifications(
    mut notifications: Vec<Notification>,
    action: &NotificationAction,
) -> Vec<Notification> {
    match action {
        NotificationAction::Push(notification) => {
            notifications.insert(0, notification.clone());
        }
        NotificationAction::MarkRead(id) => {
            if let Some(notification) = notifications.iter_mut().find(|n| &n.id == id) {
                notification.read = true;
            }
        }
        NotificationAction::MarkAllRead => {
            for notification in notifications.iter_mut() {
                notification.read = true;
            }
        }
    }
    notifications
}
