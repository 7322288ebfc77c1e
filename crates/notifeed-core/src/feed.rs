//! Feed read state.
//!
//! The feed owns the notification list as a shared snapshot. Mutations
//! swap in a new snapshot, so any snapshot handed out earlier keeps the
//! state it had.

use std::sync::Arc;

use crate::model::{Notification, NotificationId, ReadStatus};

/// The notification list and its read state.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    notifications: Arc<[Notification]>,
}

impl Feed {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: notifications.into(),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<[Notification]> {
        Arc::clone(&self.notifications)
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| &n.id == id)
    }

    /// Number of unread notifications in the current snapshot.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| n.is_unread()).count()
    }

    /// Mark the first notification with `id` as read.
    ///
    /// Returns whether a status changed. Unknown ids and already-read
    /// notifications leave the snapshot untouched.
    pub fn mark_one_read(&mut self, id: &NotificationId) -> bool {
        let Some(index) = self.notifications.iter().position(|n| &n.id == id) else {
            tracing::debug!("mark_one_read: no notification {}", id);
            return false;
        };
        if !self.notifications[index].is_unread() {
            return false;
        }

        self.notifications = self
            .notifications
            .iter()
            .enumerate()
            .map(|(i, n)| {
                if i == index {
                    mark_read(n)
                } else {
                    n.clone()
                }
            })
            .collect();

        tracing::info!("Marked notification {} as read", id);
        true
    }

    /// Mark every notification as read.
    ///
    /// Returns how many changed status.
    pub fn mark_all_read(&mut self) -> usize {
        let changed = self.unread_count();
        if changed == 0 {
            return 0;
        }

        self.notifications = self.notifications.iter().map(mark_read).collect();

        tracing::info!("Marked {} notifications as read", changed);
        changed
    }
}

fn mark_read(notification: &Notification) -> Notification {
    debug_assert!(notification.status.can_transition_to(&ReadStatus::Read));
    Notification {
        status: ReadStatus::Read,
        ..notification.clone()
    }
}

impl From<Vec<Notification>> for Feed {
    fn from(notifications: Vec<Notification>) -> Self {
        Self::new(notifications)
    }
}
