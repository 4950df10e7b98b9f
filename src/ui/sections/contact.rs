// SPDX-License-Identifier: MPL-2.0
use super::{Message, ViewContext};
use crate::content::{AVAILABILITY, SOCIAL_LINKS};
use crate::domain::contact::Field;
use crate::ui::components::heading::{heading, TITLE_FONT};
use crate::ui::design_tokens::{accent_color, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Font, Length};

fn field_input<'a>(ctx: &ViewContext<'a>, field: Field, value: &str) -> Element<'a, Message> {
    let mut input = text_input(&ctx.i18n.tr(field.label_key()), value)
        .padding(spacing::SM)
        .size(typography::BODY_LG);
    if !ctx.state.contact.is_sending() {
        input = input
            .on_input(move |value| Message::ContactInput(field, value))
            .on_submit(Message::SubmitContact);
    }
    input.into()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let form = &ctx.state.contact;

    let submit_label = if form.is_sending() {
        i18n.tr("contact-sending")
    } else {
        i18n.tr("contact-submit")
    };
    let submit = button(
        Text::new(submit_label)
            .size(typography::BODY_LG)
            .font(Font::MONOSPACE),
    )
    .on_press_maybe((!form.is_sending()).then_some(Message::SubmitContact))
    .padding([spacing::SM, spacing::XL])
    .style(styles::button::neon(palette::CYAN));

    let form_panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(i18n.tr("contact-send-heading"))
                    .size(typography::TITLE_MD)
                    .font(TITLE_FONT)
                    .color(palette::CYAN),
            )
            .push(field_input(ctx, Field::Name, &form.name))
            .push(field_input(ctx, Field::Email, &form.email))
            .push(field_input(ctx, Field::Message, &form.message))
            .push(submit)
            .push(
                Text::new(i18n.tr("contact-response-time"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_500),
            ),
    )
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::panel(palette::CYAN));

    let links = SOCIAL_LINKS.iter().fold(
        Column::new().spacing(spacing::SM),
        |column, link| {
            let accent = accent_color(link.accent);
            column.push(
                Container::new(
                    Row::new()
                        .spacing(spacing::MD)
                        .align_y(Vertical::Center)
                        .push(
                            Text::new(link.glyph)
                                .size(typography::TITLE_MD)
                                .font(Font::MONOSPACE)
                                .color(accent)
                                .width(Length::Fixed(32.0)),
                        )
                        .push(
                            Column::new()
                                .push(Text::new(link.name).size(typography::BODY_LG))
                                .push(
                                    Text::new(link.handle)
                                        .size(typography::CAPTION)
                                        .color(palette::GRAY_400),
                                ),
                        ),
                )
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::panel(accent)),
            )
        },
    );

    let availability = AVAILABILITY.iter().fold(
        Column::new().spacing(spacing::XS),
        |column, item| {
            column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(Text::new("●").color(palette::SUCCESS_500))
                    .push(Text::new(*item).size(typography::BODY).color(palette::GRAY_300)),
            )
        },
    );

    let side = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(
            Text::new(i18n.tr("contact-connect"))
                .size(typography::TITLE_MD)
                .font(TITLE_FONT)
                .color(palette::PURPLE),
        )
        .push(links)
        .push(
            Container::new(
                Column::new()
                    .spacing(spacing::SM)
                    .push(
                        Text::new(i18n.tr("contact-availability"))
                            .size(typography::TITLE_SM)
                            .font(TITLE_FONT)
                            .color(palette::BLUE),
                    )
                    .push(availability)
                    .push(
                        Text::new(i18n.tr("contact-location"))
                            .size(typography::CAPTION)
                            .color(palette::GRAY_500),
                    ),
            )
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::panel(palette::BLUE)),
        );

    Column::new()
        .spacing(spacing::XL)
        .push(heading(i18n.tr("contact-title"), None, palette::CYAN))
        .push(Row::new().spacing(spacing::XL).push(form_panel).push(side))
        .into()
}
