// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Toasts report the outcome of contact submissions, simulated downloads and
//! configuration problems without blocking the page. Success and info toasts
//! disappear after three seconds, warnings after five; errors stay until
//! dismissed. At most three are visible, the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
