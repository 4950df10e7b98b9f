// SPDX-License-Identifier: MPL-2.0
//! Toast cards stacked in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography, with_alpha,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.color();

        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let message = i18n.tr_with_args(notification.message_key(), &args);

        let glyph = Text::new(severity.glyph())
            .size(typography::BODY)
            .font(iced::Font::MONOSPACE)
            .color(accent);

        let dismiss = button(Text::new("x").size(typography::BODY_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(
                Container::new(Text::new(message).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(accent))
            .into()
    }

    /// All visible toasts, anchored bottom-right.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }
}

fn toast_container_style(accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(with_alpha(
            palette::BLACK,
            opacity::OVERLAY_STRONG,
        ))),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::glow(accent, 12.0),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(with_alpha(palette::GRAY_400, opacity::OVERLAY_SUBTLE)),
        button::Status::Pressed => Some(with_alpha(palette::GRAY_400, opacity::OVERLAY_MEDIUM)),
        button::Status::Active | button::Status::Disabled => None,
    };
    button::Style {
        background: background.map(iced::Background::Color),
        text_color: palette::GRAY_300,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_border_uses_accent() {
        let style = toast_container_style(palette::SUCCESS_500);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_highlights_on_hover() {
        let theme = Theme::Dark;
        assert!(dismiss_button_style(&theme, button::Status::Active).background.is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered).background.is_some());
    }
}
