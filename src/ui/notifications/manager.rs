// SPDX-License-Identifier: MPL-2.0
//! Notification queue: at most [`MAX_VISIBLE`] toasts on screen, the rest
//! waiting their turn.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick(Instant),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now if there is room, otherwise queues it.
    /// Warnings and errors are also written to the log.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => {
                tracing::warn!(key = notification.message_key(), "notification");
            }
            Severity::Error => {
                tracing::error!(key = notification.message_key(), "notification");
            }
            Severity::Success | Severity::Info => {
                tracing::debug!(key = notification.message_key(), "notification");
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if a notification with `id` was removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops every visible notification that has expired at `now`.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired(now))
            .map(Notification::id)
            .collect();
        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn overflow_is_queued_and_promoted() {
        let mut manager = Manager::new();
        let first = Notification::success("contact-sent");
        let first_id = first.id();
        manager.push(first);
        for _ in 1..MAX_VISIBLE {
            manager.push(Notification::info("resume-download-simulated"));
        }
        manager.push(Notification::info("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let mut manager = Manager::new();
        let stray = Notification::success("x").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn tick_expires_only_timed_notifications() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::at(Severity::Success, "contact-sent", start));
        manager.push(Notification::at(Severity::Error, "error-io", start));

        manager.handle_message(&Message::Tick(start + Duration::from_secs(10)));
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(
            manager.visible().next().map(Notification::severity),
            Some(Severity::Error)
        );
    }
}
