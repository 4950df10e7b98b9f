// SPDX-License-Identifier: MPL-2.0
use super::{Message, ViewContext};
use crate::content::{Project, FULL_STACK_PROJECTS, STACK_ROWS, TERMINAL_LINES};
use crate::domain::section::Section;
use crate::ui::components::{grid, heading, CardId, ProjectCard};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Font, Length};

/// Seconds between two terminal lines appearing.
const TERMINAL_LINE_DELAY: f32 = 0.5;

/// Number of terminal lines printed after `elapsed` seconds.
#[must_use]
pub fn printed_lines(elapsed: f32) -> usize {
    ((elapsed.max(0.0) / TERMINAL_LINE_DELAY).floor() as usize + 1).min(TERMINAL_LINES.len())
}

/// Project cards of `section` laid out in a grid.
pub(super) fn project_grid<'a>(
    ctx: &ViewContext<'a>,
    section: Section,
    projects: &'static [Project],
) -> Element<'a, Message> {
    let cards = projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let id = CardId { section, index };
            ProjectCard::new(project)
                .hovered(ctx.is_hovered(id), ctx.parallax)
                .on_hover(
                    Message::CardHovered(Some(id)),
                    Message::CardHovered(None),
                )
                .view()
        })
        .collect();
    let columns = grid::columns_for(ctx.content_width(), sizing::CARD_WIDTH, 3);
    Container::new(grid(cards, columns))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let terminal = TERMINAL_LINES
        .iter()
        .take(printed_lines(ctx.elapsed))
        .fold(Column::new().spacing(spacing::XS), |column, line| {
            column.push(
                Text::new(*line)
                    .size(typography::BODY)
                    .font(Font::MONOSPACE)
                    .color(palette::SUCCESS_500),
            )
        });

    let table = STACK_ROWS.iter().fold(
        Column::new().spacing(spacing::SM),
        |column, (layer, techs)| {
            column.push(
                Row::new()
                    .spacing(spacing::LG)
                    .push(
                        Text::new(*layer)
                            .size(typography::BODY)
                            .font(Font::MONOSPACE)
                            .color(palette::BLUE)
                            .width(Length::Fixed(120.0)),
                    )
                    .push(
                        Text::new(*techs)
                            .size(typography::BODY)
                            .color(palette::GRAY_300),
                    ),
            )
        },
    );

    Column::new()
        .spacing(spacing::XL)
        .push(heading(
            i18n.tr("fullstack-title"),
            Some(i18n.tr("fullstack-subtitle")),
            palette::BLUE,
        ))
        .push(project_grid(ctx, Section::FullStack, &FULL_STACK_PROJECTS))
        .push(
            Container::new(terminal)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::panel(palette::SUCCESS_500)),
        )
        .push(
            Container::new(
                Column::new()
                    .spacing(spacing::MD)
                    .push(
                        Text::new(i18n.tr("fullstack-tech-stack"))
                            .size(typography::TITLE_MD)
                            .font(Font::MONOSPACE)
                            .color(palette::BLUE),
                    )
                    .push(table),
            )
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::panel(palette::BLUE)),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_prints_progressively() {
        assert_eq!(printed_lines(0.0), 1);
        assert_eq!(printed_lines(0.6), 2);
        assert_eq!(printed_lines(60.0), TERMINAL_LINES.len());
    }
}
