// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] of mutable borrows into the
//! application state and return the follow-up [`Task`].

use super::subscription::one_shot;
use super::{Message, Screen};
use crate::config::BootTimings;
use crate::domain::boot::BootSequencer;
use crate::domain::section::{Pointer, Section, SectionViewModel};
use crate::i18n::fluent::I18n;
use crate::ui::effects::{CursorTrail, Parallax};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::{self, Event as SectionsEvent};
use iced::{Point, Size, Task};
use std::time::{Duration, Instant};

/// Longest frame step fed to the springs; longer gaps (window hidden,
/// debugger) are treated as one such step.
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Animation clock state.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    /// Time of the last frame.
    pub now: Instant,
    pub started_at: Instant,
    /// Section rendered at the last frame and when it was mounted.
    pub mounted: Section,
    pub mounted_since: Instant,
}

impl Clock {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            started_at: now,
            mounted: Section::Home,
            mounted_since: now,
        }
    }

    /// Seconds since the application started.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.now.saturating_duration_since(self.started_at).as_secs_f32()
    }

    /// Seconds since the rendered section was mounted.
    #[must_use]
    pub fn section_elapsed(&self) -> f32 {
        self.now.saturating_duration_since(self.mounted_since).as_secs_f32()
    }
}

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub boot: &'a mut BootSequencer,
    pub timings: &'a BootTimings,
    pub sections: &'a mut SectionViewModel,
    pub section_state: &'a mut sections::State,
    pub notifications: &'a mut notifications::Manager,
    pub trail: &'a mut CursorTrail,
    pub trail_enabled: bool,
    pub parallax: &'a mut Parallax,
    pub viewport: &'a mut Size,
    pub menu_open: &'a mut bool,
    pub clock: &'a mut Clock,
    pub contact_send_delay: Duration,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::BootProgressTick => {
            ctx.boot.tick_progress();
            Task::none()
        }
        Message::BootLogTick => {
            ctx.boot.tick_log();
            Task::none()
        }
        Message::BootDismissed => handle_boot_dismissed(ctx),
        Message::Frame(now) => {
            handle_frame(ctx, now);
            Task::none()
        }
        Message::PointerMoved(position) => {
            handle_pointer_moved(ctx, position, Instant::now());
            Task::none()
        }
        Message::WindowResized(size) => {
            *ctx.viewport = size;
            if !navbar::is_compact(size.width) {
                *ctx.menu_open = false;
            }
            Task::none()
        }
        Message::Navbar(message) => match navbar::update(message, ctx.menu_open) {
            NavbarEvent::None => Task::none(),
            NavbarEvent::Navigate(section) => {
                navigate(ctx, section, Instant::now());
                Task::none()
            }
        },
        Message::Sections(message) => {
            let event = sections::update(ctx.section_state, message);
            handle_sections_event(ctx, event)
        }
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::ContactSent => {
            ctx.section_state.contact.complete_send();
            tracing::info!("contact message sent");
            ctx.notifications.push(Notification::success("contact-sent"));
            Task::none()
        }
    }
}

/// Task that dismisses the boot screen after `delay`.
pub fn boot_dismissal(delay: Duration) -> Task<Message> {
    Task::perform(one_shot(delay), |()| Message::BootDismissed)
}

fn handle_boot_dismissed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.screen == Screen::Boot {
        tracing::info!(
            progress = ctx.boot.progress().value(),
            log_cursor = ctx.boot.log_cursor(),
            "boot screen dismissed"
        );
        *ctx.screen = Screen::Main;
        let now = Instant::now();
        ctx.clock.now = now;
        ctx.clock.mounted_since = now;
    }
    Task::none()
}

fn handle_frame(ctx: &mut UpdateContext<'_>, now: Instant) {
    let dt = now
        .saturating_duration_since(ctx.clock.now)
        .min(MAX_FRAME_STEP);
    ctx.clock.now = now;

    ctx.sections.settle(now);
    let mounted = ctx.sections.mounted(now);
    if mounted != ctx.clock.mounted {
        ctx.clock.mounted = mounted;
        ctx.clock.mounted_since = now;
    }

    ctx.trail.prune(now);
    ctx.parallax.tick(ctx.sections.pointer(), *ctx.viewport, dt);
}

fn handle_pointer_moved(ctx: &mut UpdateContext<'_>, position: Point, now: Instant) {
    ctx.sections
        .record_pointer(Pointer::new(position.x, position.y));
    if ctx.trail_enabled {
        ctx.trail.push(position, now);
    }
}

/// Switches section. Navigating to the active section changes nothing.
pub(crate) fn navigate(ctx: &mut UpdateContext<'_>, section: Section, now: Instant) {
    let from = ctx.sections.active();
    if ctx.sections.navigate(section, now) {
        tracing::info!(from = %from, to = %section, "navigate");
        ctx.section_state.hovered_card = None;
        ctx.section_state.vault_open = false;
    }
}

fn handle_sections_event(ctx: &mut UpdateContext<'_>, event: SectionsEvent) -> Task<Message> {
    match event {
        SectionsEvent::None => Task::none(),
        SectionsEvent::Navigate(section) => {
            navigate(ctx, section, Instant::now());
            Task::none()
        }
        SectionsEvent::ResumeRequested => {
            tracing::info!("simulated resume download");
            ctx.notifications
                .push(Notification::info("resume-download-simulated"));
            Task::none()
        }
        SectionsEvent::ContactSending => {
            tracing::info!(
                delay_ms = ctx.contact_send_delay.as_millis() as u64,
                "contact send started"
            );
            Task::perform(one_shot(ctx.contact_send_delay), |()| Message::ContactSent)
        }
        SectionsEvent::ContactRejected(field) => {
            tracing::info!(?field, "contact submission rejected");
            let label = ctx.i18n.tr(field.label_key());
            ctx.notifications.push(
                Notification::warning("contact-missing-field").with_arg("field", label),
            );
            Task::none()
        }
    }
}
