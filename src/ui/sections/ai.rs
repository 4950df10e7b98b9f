// SPDX-License-Identifier: MPL-2.0
use super::{Message, ViewContext};
use crate::content::{AI_CAPABILITIES, AI_MODALITIES, AI_TECHNOLOGIES};
use crate::ui::components::heading::{heading, TITLE_FONT};
use crate::ui::design_tokens::{accent_color, palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::HoloRing;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment::Horizontal, alignment::Vertical, Color, Element, Font, Length};

fn bullet_panel<'a>(
    title: String,
    items: &'static [&'static str],
    accent: Color,
) -> Element<'a, Message> {
    let list = items.iter().fold(Column::new().spacing(spacing::XS), |column, item| {
        column.push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new(">").font(Font::MONOSPACE).color(accent))
                .push(Text::new(*item).size(typography::BODY).color(palette::GRAY_300)),
        )
    });
    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .font(TITLE_FONT)
                    .color(accent),
            )
            .push(list),
    )
    .width(Length::FillPortion(1))
    .padding(spacing::LG)
    .style(styles::container::panel(accent))
    .into()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let modalities = AI_MODALITIES.iter().fold(
        Row::new().spacing(spacing::MD),
        |row, modality| {
            let accent = accent_color(modality.accent);
            row.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XXS)
                        .align_x(Horizontal::Center)
                        .push(Text::new(modality.glyph).size(typography::TITLE_LG).color(accent))
                        .push(
                            Text::new(modality.name)
                                .size(typography::CAPTION)
                                .font(Font::MONOSPACE),
                        ),
                )
                .width(Length::Fixed(96.0))
                .padding(spacing::SM)
                .align_x(Horizontal::Center)
                .style(styles::container::panel(accent)),
            )
        },
    );

    let platform = Container::new(
        Row::new()
            .spacing(spacing::XL)
            .align_y(Vertical::Center)
            .push(HoloRing::new(ctx.elapsed).with_size(140.0).into_element())
            .push(
                Column::new()
                    .spacing(spacing::SM)
                    .push(
                        Text::new(i18n.tr("ai-platform"))
                            .size(typography::TITLE_LG)
                            .font(TITLE_FONT)
                            .color(palette::CYAN),
                    )
                    .push(
                        Text::new(i18n.tr("ai-platform-tagline"))
                            .size(typography::BODY_LG)
                            .color(palette::GRAY_300),
                    )
                    .push(modalities),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::glow_card(palette::CYAN, 0.5));

    Column::new()
        .spacing(spacing::XL)
        .push(heading(
            i18n.tr("ai-title"),
            Some(i18n.tr("ai-subtitle")),
            palette::CYAN,
        ))
        .push(platform)
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(bullet_panel(i18n.tr("ai-capabilities"), &AI_CAPABILITIES, palette::PURPLE))
                .push(bullet_panel(i18n.tr("ai-technologies"), &AI_TECHNOLOGIES, palette::BLUE)),
        )
        .push(
            Container::new(
                Text::new(i18n.tr("ai-footer"))
                    .size(typography::BODY)
                    .font(Font::MONOSPACE)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        )
        .into()
}
