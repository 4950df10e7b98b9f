// SPDX-License-Identifier: MPL-2.0
//! Navigation bar pinned to the top of the main screen.
//!
//! Wide windows show one entry per section. Below
//! [`sizing::NAVBAR_COMPACT_BELOW`] the entries collapse into a hamburger
//! dropdown. The "S" logo always leads back home.

use crate::domain::section::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography, with_alpha};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Font, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Section,
    /// Window narrower than the full entry row.
    pub compact: bool,
    pub menu_open: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Section),
}

pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(section) => {
            *menu_open = false;
            Event::Navigate(section)
        }
    }
}

#[must_use]
pub fn is_compact(window_width: f32) -> bool {
    window_width < sizing::NAVBAR_COMPACT_BELOW
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx));

    if ctx.compact && ctx.menu_open {
        content = content.push(
            Container::new(build_dropdown(&ctx))
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding([0.0, spacing::MD]),
        );
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let logo = button(
        Container::new(
            Text::new("S")
                .size(typography::TITLE_MD)
                .font(Font::MONOSPACE),
        )
        .width(Length::Fixed(sizing::LOGO))
        .height(Length::Fixed(sizing::LOGO))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center),
    )
    .on_press(Message::Navigate(Section::Home))
    .padding(0.0)
    .style(styles::button::ghost(palette::CYAN, false));

    let entries: Element<'a, Message> = if ctx.compact {
        let glyph = if ctx.menu_open { "X" } else { "=" };
        button(Text::new(glyph).size(typography::TITLE_MD).font(Font::MONOSPACE))
            .on_press(Message::ToggleMenu)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::nav_item(ctx.menu_open))
            .into()
    } else {
        Section::ALL
            .iter()
            .fold(Row::new().spacing(spacing::XXS), |row, &section| {
                row.push(nav_button(ctx, section))
            })
            .into()
    };

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .push(logo)
        .push(Container::new(entries).width(Length::Fill).align_x(Horizontal::Right));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

fn nav_button<'a>(ctx: &ViewContext<'a>, section: Section) -> Element<'a, Message> {
    button(
        Text::new(ctx.i18n.tr(section.nav_key()))
            .size(typography::BODY_SM)
            .font(Font::MONOSPACE),
    )
    .on_press(Message::Navigate(section))
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::nav_item(section == ctx.active))
    .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = Section::ALL.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, &section| {
            column.push(
                button(
                    Text::new(ctx.i18n.tr(section.nav_key()))
                        .size(typography::BODY)
                        .font(Font::MONOSPACE),
                )
                .on_press(Message::Navigate(section))
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fill)
                .style(styles::button::nav_item(section == ctx.active)),
            )
        },
    );

    Container::new(items)
        .width(Length::Fixed(220.0))
        .padding(spacing::XS)
        .style(|_theme: &Theme| container::Style {
            background: Some(with_alpha(palette::BACKGROUND, opacity::OVERLAY_STRONG).into()),
            border: Border {
                radius: radius::MD.into(),
                width: 1.0,
                color: with_alpha(palette::CYAN, opacity::BORDER),
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders_wide_and_compact() {
        let i18n = I18n::default();
        for (compact, menu_open) in [(false, false), (true, false), (true, true)] {
            let _element = view(ViewContext {
                i18n: &i18n,
                active: Section::About,
                compact,
                menu_open,
            });
        }
    }

    #[test]
    fn navigate_closes_menu_and_emits_event() {
        let mut menu_open = true;
        let event = update(Message::Navigate(Section::Skills), &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::Navigate(Section::Skills));
    }

    #[test]
    fn toggle_menu_flips_state() {
        let mut menu_open = false;
        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(menu_open);
        update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
    }

    #[test]
    fn compact_threshold() {
        assert!(is_compact(800.0));
        assert!(!is_compact(1280.0));
    }
}
