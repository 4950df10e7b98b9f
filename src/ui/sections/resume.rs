// SPDX-License-Identifier: MPL-2.0
//! Resume vault. The vault opens while the pointer rests on it; the download
//! action is simulated and only acknowledged with a toast.

use super::{Message, ViewContext};
use crate::content::RESUME_STATS;
use crate::ui::components::heading::{heading, TITLE_FONT};
use crate::ui::components::stat_tile;
use crate::ui::design_tokens::{accent_color, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Font, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let open = ctx.state.vault_open;
    let accent = if open { palette::CYAN } else { palette::PURPLE };

    let vault_body = if open {
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(
                Text::new(i18n.tr("resume-vault-name"))
                    .size(typography::TITLE_LG)
                    .font(TITLE_FONT)
                    .color(palette::WHITE),
            )
            .push(
                Text::new(i18n.tr("resume-vault-roles"))
                    .size(typography::BODY)
                    .color(palette::GRAY_300),
            )
    } else {
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new("[#]").size(typography::TITLE_XL).font(Font::MONOSPACE).color(accent))
            .push(
                Text::new(i18n.tr("resume-vault-locked"))
                    .size(typography::CAPTION)
                    .font(Font::MONOSPACE)
                    .color(palette::GRAY_400),
            )
    };

    let vault = mouse_area(
        Container::new(vault_body)
            .width(Length::Fixed(sizing::CARD_WIDTH * 1.5))
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .style(styles::container::glow_card(accent, if open { 1.0 } else { 0.2 })),
    )
    .on_enter(Message::VaultHovered(true))
    .on_exit(Message::VaultHovered(false));

    let stats = RESUME_STATS
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, (label, value, accent)| {
            row.push(stat_tile(*label, *value, accent_color(*accent)))
        });

    let download = button(
        Text::new(i18n.tr("resume-download"))
            .size(typography::BODY_LG)
            .font(Font::MONOSPACE),
    )
    .on_press(Message::DownloadResume)
    .padding([spacing::SM, spacing::XL])
    .style(styles::button::neon(palette::PURPLE));

    Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(heading(
            i18n.tr("resume-title"),
            Some(i18n.tr("resume-subtitle")),
            palette::PURPLE,
        ))
        .push(vault)
        .push(stats)
        .push(download)
        .push(
            Text::new(i18n.tr("resume-footer"))
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        )
        .into()
}
