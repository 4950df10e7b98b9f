// SPDX-License-Identifier: MPL-2.0
use super::full_stack::project_grid;
use super::{Message, ViewContext};
use crate::content::{GAME_PROJECTS, GAME_TOOLS};
use crate::domain::section::Section;
use crate::ui::components::heading::{heading, TITLE_FONT};
use crate::ui::design_tokens::{palette, sizing, spacing, typography, with_alpha};
use crate::ui::effects::Pulse;
use crate::ui::styles;
use crate::ui::widgets::Meter;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment::Horizontal, alignment::Vertical, Element, Font, Length};
use std::time::Duration;

const TOOL_BAR_WIDTH: f32 = 320.0;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let press_start = Pulse::new(0.3, 1.0, Duration::from_millis(1500)).value_at(ctx.elapsed);

    let tools = GAME_TOOLS.iter().fold(
        Column::new().spacing(spacing::MD),
        |column, tool| {
            column.push(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(Vertical::Center)
                    .push(
                        Text::new(tool.name)
                            .size(typography::BODY)
                            .font(Font::MONOSPACE)
                            .width(Length::Fixed(100.0)),
                    )
                    .push(
                        Meter::new(
                            f32::from(tool.level) / 100.0,
                            TOOL_BAR_WIDTH,
                            sizing::SKILL_BAR_HEIGHT,
                        )
                        .colors(palette::PURPLE, palette::CYAN)
                        .into_element(),
                    )
                    .push(
                        Text::new(format!("{}%", tool.level))
                            .size(typography::CAPTION)
                            .font(Font::MONOSPACE)
                            .color(palette::CYAN),
                    ),
            )
        },
    );

    Column::new()
        .spacing(spacing::XL)
        .push(heading(
            i18n.tr("gamedev-title"),
            Some(i18n.tr("gamedev-subtitle")),
            palette::PURPLE,
        ))
        .push(
            Container::new(
                Text::new(i18n.tr("gamedev-press-start"))
                    .size(typography::TITLE_MD)
                    .font(TITLE_FONT)
                    .color(with_alpha(palette::CYAN, press_start)),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        )
        .push(project_grid(ctx, Section::GameDev, &GAME_PROJECTS))
        .push(
            Container::new(
                Column::new()
                    .spacing(spacing::LG)
                    .push(
                        Text::new(i18n.tr("gamedev-tools"))
                            .size(typography::TITLE_MD)
                            .font(Font::MONOSPACE)
                            .color(palette::PURPLE),
                    )
                    .push(tools),
            )
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::panel(palette::PURPLE)),
        )
        .push(
            Container::new(
                Text::new(i18n.tr("gamedev-tagline"))
                    .size(typography::BODY_LG)
                    .font(Font::MONOSPACE)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        )
        .into()
}
