// SPDX-License-Identifier: MPL-2.0
use super::{Message, ViewContext};
use crate::content::{Accent, ABOUT_TECH_STACK};
use crate::ui::components::{grid, heading};
use crate::ui::design_tokens::{accent_color, palette, spacing, typography};
use crate::ui::effects::Pulse;
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment::Horizontal, Element, Font, Length};
use std::time::Duration;

/// Stagger between two tech tiles' glow pulses.
const TILE_STAGGER: Duration = Duration::from_millis(150);
const TILE_WIDTH: f32 = 160.0;

/// Glow of tech tile `index` at `elapsed` seconds.
#[must_use]
pub fn tile_glow(index: usize, elapsed: f32) -> f32 {
    Pulse::new(0.0, 1.0, Duration::from_secs(2))
        .delayed(TILE_STAGGER * index as u32)
        .value_at(elapsed)
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let bio = ["about-bio-1", "about-bio-2", "about-bio-3"]
        .into_iter()
        .fold(Column::new().spacing(spacing::MD), |column, key| {
            column.push(
                Text::new(i18n.tr(key))
                    .size(typography::BODY_LG)
                    .color(palette::GRAY_300),
            )
        });

    let quote = Container::new(
        Text::new(i18n.tr("about-quote"))
            .size(typography::TITLE_SM)
            .font(Font::MONOSPACE)
            .color(palette::CYAN),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::panel(palette::CYAN));

    let tiles = ABOUT_TECH_STACK
        .iter()
        .enumerate()
        .map(|(i, tech)| {
            let accent = accent_color(Accent::cycle(i));
            Container::new(
                Text::new(*tech)
                    .size(typography::BODY)
                    .font(Font::MONOSPACE)
                    .color(accent),
            )
            .width(Length::Fixed(TILE_WIDTH))
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .style(styles::container::glow_card(accent, tile_glow(i, ctx.elapsed)))
            .into()
        })
        .collect();
    let columns = grid::columns_for(ctx.content_width(), TILE_WIDTH, 4);

    Column::new()
        .spacing(spacing::XL)
        .push(heading(i18n.tr("about-title"), None, palette::CYAN))
        .push(
            Container::new(bio)
                .padding(spacing::LG)
                .style(styles::container::panel(palette::PURPLE)),
        )
        .push(quote)
        .push(
            Text::new(i18n.tr("about-tech-stack"))
                .size(typography::TITLE_MD)
                .font(Font::MONOSPACE)
                .color(palette::PURPLE),
        )
        .push(
            Container::new(grid(tiles, columns))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_pulse_out_of_step() {
        let at = 0.5;
        assert!(tile_glow(0, at) > tile_glow(3, at));
    }
}
