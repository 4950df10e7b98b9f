// SPDX-License-Identifier: MPL-2.0
//! Boot screen shown before the portfolio.
//!
//! Purely presentational: the counters come from a
//! [`BootSequencer`](crate::domain::boot::BootSequencer) driven by the
//! application timers, and the screen never reports completion.

use crate::content::Accent;
use crate::domain::boot::{BootSequencer, LAST_LOG_INDEX};
use crate::i18n::fluent::I18n;
use crate::ui::components::heading::TITLE_FONT;
use crate::ui::design_tokens::{accent_color, palette, sizing, spacing, typography, with_alpha};
use crate::ui::effects::{Backdrop, BackdropLayer, BackdropMode, Pulse};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::widget::{stack, Column, Container, Text};
use iced::{
    alignment::Horizontal, mouse, Element, Font, Length, Point, Rectangle, Renderer, Theme,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

pub const PARTICLE_COUNT: usize = 30;

/// Half period of the log caret blink, in seconds.
const CARET_BLINK: f32 = 0.5;

#[derive(Debug, Clone, PartialEq)]
struct Particle {
    x: f32,
    phase: f32,
    /// Window heights per second.
    speed: f32,
    size: f32,
    accent: Accent,
}

/// Seeded decoration of the boot screen.
#[derive(Debug, Clone)]
pub struct BootScene {
    backdrop: Backdrop,
    particles: Vec<Particle>,
}

impl BootScene {
    #[must_use]
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..PARTICLE_COUNT)
            .map(|i| Particle {
                x: rng.random::<f32>(),
                phase: rng.random::<f32>(),
                speed: rng.random_range(0.05..0.15),
                size: rng.random_range(1.0..3.0),
                accent: Accent::cycle(i),
            })
            .collect();
        Self {
            backdrop: Backdrop::generate(BackdropMode::Grid, seed.wrapping_add(1)),
            particles,
        }
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Particle centers at `elapsed` seconds, as fractions of the window.
    #[must_use]
    pub fn particle_positions(&self, elapsed: f32) -> Vec<Point> {
        self.particles
            .iter()
            .map(|p| Point::new(p.x, 1.0 - (p.phase + elapsed * p.speed).fract()))
            .collect()
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub sequencer: &'a BootSequencer,
    pub scene: &'a BootScene,
    /// Seconds since the boot screen appeared.
    pub elapsed: f32,
}

/// Log line `index` as displayed, with the caret on the current line.
#[must_use]
pub fn log_line(text: &str, index: usize, cursor: usize, elapsed: f32) -> String {
    let caret_on = (elapsed / CARET_BLINK) as u32 % 2 == 0;
    if index == cursor && caret_on {
        format!("{text}_")
    } else {
        text.to_string()
    }
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let cursor = ctx.sequencer.log_cursor();
    let progress = ctx.sequencer.progress();

    let log = ctx.sequencer.visible_log_keys().iter().enumerate().fold(
        Column::new().spacing(spacing::XS),
        |column, (index, key)| {
            let color = if index == LAST_LOG_INDEX {
                palette::SUCCESS_500
            } else {
                palette::CYAN
            };
            column.push(
                Text::new(log_line(&i18n.tr(key), index, cursor, ctx.elapsed))
                    .size(typography::BODY)
                    .font(Font::MONOSPACE)
                    .color(color),
            )
        },
    );

    let readout = Text::new(i18n.tr_with_args(
        "boot-loading",
        &[("percent", &progress.whole_percent().to_string())],
    ))
    .size(typography::BODY_SM)
    .font(Font::MONOSPACE)
    .color(palette::CYAN);

    let ready = Pulse::new(0.3, 1.0, Duration::from_secs(1)).value_at(ctx.elapsed);

    let panel = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(crate::ui::widgets::HoloRing::new(ctx.elapsed).into_element())
        .push(
            Container::new(log)
                .width(Length::Fixed(sizing::PROGRESS_BAR_WIDTH))
                .padding(spacing::MD),
        )
        .push(
            crate::ui::widgets::Meter::new(
                progress.fraction(),
                sizing::PROGRESS_BAR_WIDTH,
                sizing::PROGRESS_BAR_HEIGHT,
            )
            .colors(palette::BLUE, palette::CYAN)
            .shimmer(ctx.elapsed)
            .into_element(),
        )
        .push(readout)
        .push(
            Text::new(i18n.tr("boot-ready"))
                .size(typography::TITLE_SM)
                .font(TITLE_FONT)
                .color(with_alpha(palette::SUCCESS_500, ready)),
        );

    let content = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    let particles = Canvas::new(Particles {
        cache: Cache::default(),
        scene: ctx.scene,
        elapsed: ctx.elapsed,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    stack![
        BackdropLayer::new(&ctx.scene.backdrop, ctx.elapsed).into_element(),
        particles,
        content,
    ]
    .into()
}

struct Particles<'a> {
    cache: Cache,
    scene: &'a BootScene,
    elapsed: f32,
}

impl<Message> canvas::Program<Message> for Particles<'_> {
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
                let positions = self.scene.particle_positions(self.elapsed);
                for (particle, at) in self.scene.particles.iter().zip(positions) {
                    let center = Point::new(at.x * size.width, at.y * size.height);
                    frame.fill(
                        &Path::circle(center, particle.size),
                        with_alpha(accent_color(particle.accent), 0.7),
                    );
                }
            });
        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_has_thirty_particles() {
        let scene = BootScene::generate(7);
        assert_eq!(scene.particle_count(), PARTICLE_COUNT);
    }

    #[test]
    fn particles_stay_inside_window() {
        let scene = BootScene::generate(11);
        for elapsed in [0.0, 1.3, 42.0] {
            for p in scene.particle_positions(elapsed) {
                assert!((0.0..=1.0).contains(&p.x));
                assert!((0.0..=1.0).contains(&p.y));
            }
        }
    }

    #[test]
    fn caret_blinks_on_current_line_only() {
        assert_eq!(log_line("> ok", 2, 2, 0.1), "> ok_");
        assert_eq!(log_line("> ok", 2, 2, 0.6), "> ok");
        assert_eq!(log_line("> ok", 1, 2, 0.1), "> ok");
    }

    #[test]
    fn view_builds_at_start() {
        let i18n = I18n::default();
        let sequencer = BootSequencer::default();
        let scene = BootScene::generate(1);
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            sequencer: &sequencer,
            scene: &scene,
            elapsed: 0.0,
        });
    }
}
