// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the boot screen and the
//! portfolio sections.
//!
//! The `App` struct owns every piece of state: the boot counters, the section
//! view model, decorative effect state and the toasts. Components only ever
//! receive borrowed snapshots and report back through messages.

mod message;
pub mod paths;
mod screen;
pub mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use update::Clock;

use crate::config::{self, BootTimings, Config};
use crate::domain::boot::BootSequencer;
use crate::domain::section::SectionViewModel;
use crate::i18n::fluent::I18n;
use crate::ui::boot_screen::BootScene;
use crate::ui::effects::{CursorTrail, Parallax, SectionBackdrops};
use crate::ui::notifications;
use crate::ui::sections;
use iced::{window, Element, Size, Subscription, Task, Theme};
use rand::Rng;
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    timings: BootTimings,
    boot: BootSequencer,
    boot_scene: BootScene,
    sections: SectionViewModel,
    section_state: sections::State,
    backdrops: SectionBackdrops,
    trail: CursorTrail,
    trail_enabled: bool,
    parallax: Parallax,
    viewport: Size,
    /// Whether the compact navbar menu is open.
    menu_open: bool,
    clock: Clock,
    contact_send_delay: Duration,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("active_section", &self.sections.active())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and localization, then starts the boot sequence.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let (mut app, task) = Self::with_config(i18n, &config, rand::rng().random());

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, task)
    }

    /// Builds the initial state from an already loaded configuration.
    /// `seed` fixes the decorative layouts.
    pub fn with_config(i18n: I18n, config: &Config, seed: u64) -> (Self, Task<Message>) {
        let timings = config.boot_timings();
        let now = Instant::now();
        tracing::info!(
            locale = %i18n.current_locale(),
            dismiss_ms = timings.dismiss_delay.as_millis() as u64,
            "starting portfolio"
        );

        let app = Self {
            i18n,
            screen: Screen::Boot,
            timings,
            boot: BootSequencer::new(timings.progress_step),
            boot_scene: BootScene::generate(seed),
            sections: SectionViewModel::new(config.transition_duration()),
            section_state: sections::State::default(),
            backdrops: SectionBackdrops::generate(seed.wrapping_add(1)),
            trail: CursorTrail::default(),
            trail_enabled: config.cursor_trail_enabled(),
            parallax: Parallax::default(),
            viewport: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            menu_open: false,
            clock: Clock::new(now),
            contact_send_delay: config.contact_send_delay(),
            notifications: notifications::Manager::new(),
        };

        let task = update::boot_dismissal(timings.dismiss_delay);
        (app, task)
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn boot(&self) -> &BootSequencer {
        &self.boot
    }

    #[must_use]
    pub fn sections(&self) -> &SectionViewModel {
        &self.sections
    }

    #[must_use]
    pub fn section_state(&self) -> &sections::State {
        &self.section_state
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Boot => app_name,
            Screen::Main => {
                let section = self.i18n.tr(self.sections.active().nav_key());
                format!("{section} - {app_name}")
            }
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(),
            subscription::create_boot_subscription(self.screen, &self.boot, &self.timings),
            subscription::create_notification_subscription(
                self.notifications.has_notifications(),
            ),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            boot: &mut self.boot,
            timings: &self.timings,
            sections: &mut self.sections,
            section_state: &mut self.section_state,
            notifications: &mut self.notifications,
            trail: &mut self.trail,
            trail_enabled: self.trail_enabled,
            parallax: &mut self.parallax,
            viewport: &mut self.viewport,
            menu_open: &mut self.menu_open,
            clock: &mut self.clock,
            contact_send_delay: self.contact_send_delay,
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            boot: &self.boot,
            boot_scene: &self.boot_scene,
            sections: &self.sections,
            section_state: &self.section_state,
            backdrops: &self.backdrops,
            trail: &self.trail,
            parallax: &self.parallax,
            notifications: &self.notifications,
            viewport: self.viewport,
            menu_open: self.menu_open,
            clock: self.clock,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::boot::LAST_LOG_INDEX;
    use crate::domain::contact::Field;
    use crate::domain::section::Section;
    use crate::ui::navbar;

    fn app() -> App {
        App::with_config(I18n::default(), &Config::default(), 42).0
    }

    #[test]
    fn starts_on_boot_screen_at_home() {
        let app = app();
        assert_eq!(app.screen(), Screen::Boot);
        assert_eq!(app.sections().active(), Section::Home);
    }

    #[test]
    fn dismissal_ignores_boot_counters() {
        let mut app = app();
        let _ = app.update(Message::BootProgressTick);
        let _ = app.update(Message::BootDismissed);
        assert_eq!(app.screen(), Screen::Main);
        assert!(app.boot().progress().value() < 100.0);
    }

    #[test]
    fn boot_ticks_stop_at_their_bounds() {
        let mut app = app();
        for _ in 0..200 {
            let _ = app.update(Message::BootProgressTick);
            let _ = app.update(Message::BootLogTick);
        }
        assert_eq!(app.boot().progress().value(), 100.0);
        assert_eq!(app.boot().log_cursor(), LAST_LOG_INDEX);
    }

    #[test]
    fn navbar_navigation_changes_section_once() {
        let mut app = app();
        let _ = app.update(Message::BootDismissed);
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Section::Contact)));
        assert_eq!(app.sections().active(), Section::Contact);
        let first = app.sections().transition().map(|t| t.started_at);

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Section::Contact)));
        assert_eq!(app.sections().transition().map(|t| t.started_at), first);
    }

    fn fill_contact_form(app: &mut App) {
        for (field, value) in [
            (Field::Name, "A"),
            (Field::Email, "a@a.com"),
            (Field::Message, "hi"),
        ] {
            let _ = app.update(Message::Sections(sections::Message::ContactInput(
                field,
                value.to_string(),
            )));
        }
    }

    #[test]
    fn boot_starts_the_dismissal_task() {
        let (_, task) = App::with_config(I18n::default(), &Config::default(), 42);
        assert_eq!(task.units(), 1);
        assert_eq!(update::boot_dismissal(Duration::from_millis(10)).units(), 1);
    }

    #[test]
    fn valid_submit_starts_one_send_task() {
        let mut app = app();
        fill_contact_form(&mut app);

        let task = app.update(Message::Sections(sections::Message::SubmitContact));
        assert_eq!(task.units(), 1);
        assert!(app.section_state().contact.is_sending());

        let again = app.update(Message::Sections(sections::Message::SubmitContact));
        assert_eq!(again.units(), 0);
    }

    #[test]
    fn contact_flow_clears_fields_after_send() {
        let mut app = app();
        fill_contact_form(&mut app);
        let _ = app.update(Message::Sections(sections::Message::SubmitContact));
        assert!(app.section_state().contact.is_sending());

        let task = app.update(Message::ContactSent);
        assert_eq!(task.units(), 0);
        let form = &app.section_state().contact;
        assert!(!form.is_sending());
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn rejected_contact_starts_no_timer() {
        let mut app = app();
        let task = app.update(Message::Sections(sections::Message::SubmitContact));
        assert_eq!(task.units(), 0);
        assert!(!app.section_state().contact.is_sending());
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn pointer_moves_are_recorded() {
        let mut app = app();
        let _ = app.update(Message::PointerMoved(iced::Point::new(10.0, 20.0)));
        assert_eq!(app.sections().pointer().x, 10.0);
        assert_eq!(app.sections().pointer().y, 20.0);
    }
}
