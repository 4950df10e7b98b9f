// SPDX-License-Identifier: MPL-2.0
use super::{Message, ViewContext};
use crate::content::skills_by_category;
use crate::ui::components::{chip, heading};
use crate::ui::design_tokens::{accent_color, palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Font, Length};

const CHIPS_PER_ROW: usize = 6;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let categories = skills_by_category().into_iter().fold(
        Column::new().spacing(spacing::LG),
        |column, (category, skills)| {
            let accent = accent_color(category.accent());
            let chips = skills.chunks(CHIPS_PER_ROW).fold(
                Column::new().spacing(spacing::SM),
                |rows, chunk| {
                    rows.push(chunk.iter().fold(Row::new().spacing(spacing::SM), |row, skill| {
                        row.push(chip(skill.name, accent))
                    }))
                },
            );
            column.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::MD)
                        .push(
                            Text::new(category.label())
                                .size(typography::TITLE_MD)
                                .font(Font::MONOSPACE)
                                .color(accent),
                        )
                        .push(chips),
                )
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::panel(accent)),
            )
        },
    );

    Column::new()
        .spacing(spacing::XL)
        .push(heading(
            i18n.tr("skills-title"),
            Some(i18n.tr("skills-subtitle")),
            palette::BLUE,
        ))
        .push(categories)
        .into()
}
