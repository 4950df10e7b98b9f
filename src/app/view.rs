// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The main screen is a stack, bottom to top: the section backdrop with the
//! leave flash, the mounted section, the fade veil of a running transition,
//! the foreground effects, the navbar and the toasts.

use super::update::Clock;
use super::{Message, Screen};
use crate::domain::boot::BootSequencer;
use crate::domain::section::{SectionViewModel, TransitionPhase};
use crate::i18n::fluent::I18n;
use crate::ui::boot_screen::{self, BootScene};
use crate::ui::design_tokens::palette;
use crate::ui::effects::{BackdropLayer, CursorTrail, ForegroundLayer, Parallax, SectionBackdrops};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::sections::{self, ViewContext as SectionsViewContext};
use crate::ui::styles;
use crate::ui::transition::{overlay_flash, overlay_tint, TransitionFrame};
use iced::widget::{stack, Column, Container};
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub boot: &'a BootSequencer,
    pub boot_scene: &'a BootScene,
    pub sections: &'a SectionViewModel,
    pub section_state: &'a sections::State,
    pub backdrops: &'a SectionBackdrops,
    pub trail: &'a CursorTrail,
    pub parallax: &'a Parallax,
    pub notifications: &'a notifications::Manager,
    pub viewport: Size,
    pub menu_open: bool,
    pub clock: Clock,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.screen {
        Screen::Boot => boot_screen::view(boot_screen::ViewContext {
            i18n: ctx.i18n,
            sequencer: ctx.boot,
            scene: ctx.boot_scene,
            elapsed: ctx.clock.elapsed(),
        }),
        Screen::Main => view_main(ctx),
    }
}

fn view_main(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let now = ctx.clock.now;
    let snapshot = ctx.sections.snapshot(now);
    let frame = TransitionFrame::for_phase(snapshot.phase);

    let flash = ctx.sections.transition().and_then(|t| overlay_flash(t, now));
    let backdrop = BackdropLayer::new(
        ctx.backdrops.for_section(snapshot.mounted),
        ctx.clock.elapsed(),
    )
    .with_flash(flash)
    .into_element();

    let section = sections::view(&SectionsViewContext {
        i18n: ctx.i18n,
        snapshot,
        viewport: ctx.viewport,
        elapsed: ctx.clock.section_elapsed(),
        parallax: ctx.parallax.offset(1.0),
        state: ctx.section_state,
    })
    .map(Message::Sections);

    let tint = match snapshot.phase {
        TransitionPhase::Exit { section, .. } => overlay_tint(section),
        _ => None,
    }
    .unwrap_or(palette::CYAN);

    let foreground = ForegroundLayer::new(ctx.trail.dots(now), ctx.trail.head())
        .with_transition(frame, tint)
        .into_element();

    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: snapshot.active,
        compact: navbar::is_compact(ctx.viewport.width),
        menu_open: ctx.menu_open,
    })
    .map(Message::Navbar);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    let mut layers = stack![backdrop, section];
    if !frame.is_idle() {
        layers = layers.push(
            Container::new(Column::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::veil(tint, 1.0 - frame.opacity)),
        );
    }

    layers
        .push(foreground)
        .push(Column::new().push(navbar))
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
