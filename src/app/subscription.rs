// SPDX-License-Identifier: MPL-2.0
//! Timers and native event routing.
//!
//! Every periodic timer is a subscription that is only returned while it
//! still has work to do. Dropping it from the batch is what stops it.

use super::{Message, Screen};
use crate::config::{BootTimings, ANIMATION_FRAME_MS};
use crate::domain::boot::BootSequencer;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Interval of the notification auto-dismiss check.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Completes after `delay`. Backs every one-shot timer task (boot dismissal,
/// simulated contact send).
pub async fn one_shot(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Pointer moves and window resizes, on every screen.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// The two boot counters' timers, each alive only while the boot screen is
/// shown and its counter is still advancing.
pub fn create_boot_subscription(
    screen: Screen,
    sequencer: &BootSequencer,
    timings: &BootTimings,
) -> Subscription<Message> {
    if screen != Screen::Boot {
        return Subscription::none();
    }

    let progress = if sequencer.progress_running() {
        time::every(timings.progress_interval).map(|_| Message::BootProgressTick)
    } else {
        Subscription::none()
    };
    let log = if sequencer.log_running() {
        time::every(timings.log_interval).map(|_| Message::BootLogTick)
    } else {
        Subscription::none()
    };

    Subscription::batch([progress, log])
}

/// Animation clock driving backdrops, transitions and the cursor trail.
pub fn create_frame_subscription() -> Subscription<Message> {
    time::every(Duration::from_millis(ANIMATION_FRAME_MS)).map(Message::Frame)
}

/// Tick for notification auto-dismiss, only while toasts exist.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(|now| {
            Message::Notification(crate::ui::notifications::NotificationMessage::Tick(now))
        })
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn one_shot_waits_the_full_delay() {
        let delay = Duration::from_millis(3000);
        let early = tokio::time::timeout(delay - Duration::from_millis(1), one_shot(delay)).await;
        assert!(early.is_err());

        let start = tokio::time::Instant::now();
        one_shot(delay).await;
        assert!(start.elapsed() >= delay);
    }
}
