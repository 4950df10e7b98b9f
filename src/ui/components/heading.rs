// SPDX-License-Identifier: MPL-2.0
//! Section titles and small labelled primitives.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment::Horizontal, Color, Element, Font, Length};

/// Bold monospace font used for neon titles.
pub const TITLE_FONT: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::MONOSPACE
};

/// Centered neon title with a gray subtitle underneath.
pub fn heading<'a, Message: 'a>(
    title: String,
    subtitle: Option<String>,
    accent: Color,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(title)
                .size(typography::TITLE_XL)
                .font(TITLE_FONT)
                .color(accent),
        );
    if let Some(subtitle) = subtitle {
        column = column.push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        );
    }
    Container::new(column)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::XL, 0.0])
        .into()
}

pub fn chip<'a, Message: 'a>(label: impl Into<String>, accent: Color) -> Element<'a, Message> {
    Container::new(
        Text::new(label.into())
            .size(typography::BODY_SM)
            .font(Font::MONOSPACE),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::chip(accent))
    .into()
}

/// Big number over a small caption.
pub fn stat_tile<'a, Message: 'a>(
    label: impl Into<String>,
    value: impl Into<String>,
    accent: Color,
) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(value.into())
                    .size(typography::TITLE_LG)
                    .font(TITLE_FONT)
                    .color(accent),
            )
            .push(
                Text::new(label.into())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            ),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH / 2.0))
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .style(styles::container::panel(accent))
    .into()
}
