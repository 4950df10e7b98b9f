// SPDX-License-Identifier: MPL-2.0
//! Trophy wall. Clicking a trophy expands its details; clicking the
//! expanded one collapses it again.

use super::{Message, ViewContext};
use crate::content::ACHIEVEMENTS;
use crate::ui::components::grid;
use crate::ui::components::heading::{heading, TITLE_FONT};
use crate::ui::design_tokens::{accent_color, palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Font, Length};

const TROPHY_WIDTH: f32 = 260.0;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let selected = ctx.state.selected_trophy;

    let trophies = ACHIEVEMENTS
        .iter()
        .enumerate()
        .map(|(index, achievement)| {
            let accent = accent_color(achievement.accent);
            let is_selected = selected == Some(index);

            let mut body = Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(Text::new(achievement.glyph).size(typography::DISPLAY / 2.0))
                .push(
                    Text::new(achievement.title)
                        .size(typography::TITLE_SM)
                        .font(TITLE_FONT)
                        .color(palette::WHITE),
                )
                .push(
                    Text::new(achievement.rank)
                        .size(typography::BODY)
                        .font(Font::MONOSPACE)
                        .color(accent),
                );
            if is_selected {
                body = body.push(
                    Text::new(achievement.description)
                        .size(typography::BODY)
                        .color(palette::GRAY_300),
                );
            }

            button(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .on_press(Message::TrophyPressed(index))
            .width(Length::Fixed(TROPHY_WIDTH))
            .padding(spacing::LG)
            .style(styles::button::ghost(accent, is_selected))
            .into()
        })
        .collect();
    let columns = grid::columns_for(ctx.content_width(), TROPHY_WIDTH, 4);

    Column::new()
        .spacing(spacing::XL)
        .push(heading(
            i18n.tr("achievements-title"),
            Some(i18n.tr("achievements-subtitle")),
            palette::GOLD,
        ))
        .push(
            Container::new(grid(trophies, columns))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(
            Container::new(
                Text::new(i18n.tr("achievements-hint"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_500),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        )
        .into()
}
