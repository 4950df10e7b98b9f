// SPDX-License-Identifier: MPL-2.0
//! Landing section: name block, typewriter role line, gateways and the
//! skill marquee.

use super::{Message, ViewContext};
use crate::content::{HERO_ORBIT_CHIPS, HERO_ROLE_LINE, MARQUEE_SKILLS};
use crate::domain::section::Section;
use crate::ui::components::{chip, heading::TITLE_FONT};
use crate::ui::design_tokens::{palette, spacing, typography, with_alpha};
use crate::ui::effects::backdrop::radial_glow;
use crate::ui::effects::Pulse;
use crate::ui::styles;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry};
use iced::widget::{button, stack, Column, Container, Row, Text};
use iced::{
    alignment::Horizontal, mouse, Color, Element, Font, Length, Point, Rectangle, Renderer, Theme,
    Vector,
};
use std::time::Duration;

/// Delay between two typed characters.
pub const TYPEWRITER_STEP: Duration = Duration::from_millis(50);

/// Marquee speed in entries per second.
const MARQUEE_RATE: f32 = 1.5;
const MARQUEE_VISIBLE: usize = 8;

/// Parallax strength of the name block and the two orbs, in pixels.
const NAME_PARALLAX: f32 = 20.0;
const ORB_PARALLAX: [f32; 2] = [50.0, -30.0];

/// Prefix of `line` typed after `elapsed` seconds.
#[must_use]
pub fn typewriter(line: &str, elapsed: f32) -> &str {
    let typed = (elapsed.max(0.0) / TYPEWRITER_STEP.as_secs_f32()).floor() as usize;
    match line.char_indices().nth(typed) {
        Some((end, _)) => &line[..end],
        None => line,
    }
}

/// Marquee entries visible at `elapsed` seconds, scrolling left.
#[must_use]
pub fn marquee_window(elapsed: f32) -> Vec<&'static str> {
    let start = (elapsed.max(0.0) * MARQUEE_RATE).floor() as usize;
    (0..MARQUEE_VISIBLE)
        .map(|i| MARQUEE_SKILLS[(start + i) % MARQUEE_SKILLS.len()])
        .collect()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let name_offset = ctx.parallax * NAME_PARALLAX;

    let role = typewriter(HERO_ROLE_LINE, ctx.elapsed);
    let caret_on = (ctx.elapsed * 2.0).fract() < 0.5;
    let role_line = Text::new(format!("{role}{}", if caret_on { "_" } else { " " }))
        .size(typography::TITLE_MD)
        .font(Font::MONOSPACE)
        .color(palette::CYAN);

    let name = Text::new(i18n.tr("hero-name"))
        .size(typography::DISPLAY)
        .font(TITLE_FONT)
        .color(palette::WHITE);

    let name_block = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(
                Text::new(i18n.tr("hero-greeting"))
                    .size(typography::BODY_LG)
                    .font(Font::MONOSPACE)
                    .color(palette::GRAY_400),
            )
            .push(name)
            .push(role_line),
    )
    .padding(iced::Padding {
        top: spacing::LG + name_offset.y,
        bottom: spacing::LG - name_offset.y,
        left: spacing::LG + name_offset.x,
        right: spacing::LG - name_offset.x,
    });

    let orbit = HERO_ORBIT_CHIPS
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::MD), |row, (i, label)| {
            let accent = [palette::CYAN, palette::PURPLE, palette::BLUE][i % 3];
            let pulse = Pulse::new(0.4, 1.0, Duration::from_secs(3))
                .delayed(Duration::from_millis(400 * i as u64));
            row.push(chip(*label, with_alpha(accent, pulse.value_at(ctx.elapsed))))
        });

    let gateways = [
        ("hero-explore", Section::FullStack, palette::BLUE),
        ("hero-resume", Section::Resume, palette::PURPLE),
        ("hero-connect", Section::Contact, palette::CYAN),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::LG), |row, (key, section, accent)| {
        row.push(
            button(
                Text::new(i18n.tr(key))
                    .size(typography::BODY_LG)
                    .font(Font::MONOSPACE),
            )
            .on_press(Message::Navigate(section))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::neon(accent)),
        )
    });

    let marquee = marquee_window(ctx.elapsed).into_iter().enumerate().fold(
        Row::new().spacing(spacing::XL),
        |row, (i, skill)| {
            row.push(
                Text::new(skill)
                    .size(typography::BODY)
                    .font(Font::MONOSPACE)
                    .color(with_alpha(palette::CYAN, if i % 2 == 0 { 0.8 } else { 0.5 })),
            )
        },
    );

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(name_block)
        .push(orbit)
        .push(gateways)
        .push(Container::new(marquee).padding([spacing::XL, 0.0]));

    let orbs = Canvas::new(Orbs {
        cache: Cache::default(),
        offsets: [ctx.parallax * ORB_PARALLAX[0], ctx.parallax * ORB_PARALLAX[1]],
    })
    .width(Length::Fill)
    .height(Length::Fill);

    stack![orbs, content].into()
}

/// Two soft glow orbs drifting against the pointer.
struct Orbs {
    cache: Cache,
    offsets: [Vector; 2],
}

impl<Message> canvas::Program<Message> for Orbs {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let size = frame.size();
                let orbs: [(Point, Color); 2] = [
                    (Point::new(size.width * 0.25, size.height * 0.3), palette::PURPLE),
                    (Point::new(size.width * 0.75, size.height * 0.6), palette::CYAN),
                ];
                for ((center, color), offset) in orbs.into_iter().zip(self.offsets) {
                    radial_glow(frame, center + offset, 160.0, color, 0.25);
                }
            });
        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typewriter_types_one_char_per_step() {
        assert_eq!(typewriter("abc", 0.0), "");
        assert_eq!(typewriter("abc", 0.05), "a");
        assert_eq!(typewriter("abc", 0.12), "ab");
        assert_eq!(typewriter("abc", 10.0), "abc");
    }

    #[test]
    fn typewriter_respects_char_boundaries() {
        assert_eq!(typewriter("é•x", 0.1), "é•");
    }

    #[test]
    fn marquee_wraps_around() {
        assert_eq!(marquee_window(0.0)[0], MARQUEE_SKILLS[0]);
        let later = marquee_window(MARQUEE_SKILLS.len() as f32 / MARQUEE_RATE);
        assert_eq!(later[0], MARQUEE_SKILLS[0]);
        assert_eq!(later.len(), MARQUEE_VISIBLE);
    }
}
