// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections;
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Sections(sections::Message),
    Notification(notifications::NotificationMessage),
    /// Boot progress timer fired.
    BootProgressTick,
    /// Boot log timer fired.
    BootLogTick,
    /// The boot dismissal delay has elapsed.
    BootDismissed,
    /// Animation frame clock.
    Frame(Instant),
    PointerMoved(Point),
    WindowResized(Size),
    /// The simulated contact send has finished.
    ContactSent,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `NEON_PORTFOLIO_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
