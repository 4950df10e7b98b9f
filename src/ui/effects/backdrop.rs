// SPDX-License-Identifier: MPL-2.0
//! Decorative section backdrops.
//!
//! A [`Backdrop`] is generated once from a seed, with positions stored as
//! fractions of the window so the layout survives resizes. Drawing is a pure
//! function of the elapsed time.

use super::pulse::Pulse;
use crate::domain::section::Section;
use crate::ui::design_tokens::{palette, with_alpha};
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Color, Font, Pixels, Point, Size, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Grid cell size in pixels.
const GRID_CELL: f32 = 50.0;

const TWINKLE_COUNT: usize = 30;
const MOTE_COUNT: usize = 50;
const GAMING_COLUMNS: usize = 20;
const GAMING_ROWS: usize = 10;
const GAMING_BARS: usize = 20;
const SYNAPSE_COUNT: usize = 15;
const RAIN_COLUMNS: usize = 30;
const RAIN_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackdropMode {
    Grid,
    Particles,
    Neural,
    Gaming,
    Matrix,
}

impl BackdropMode {
    /// Backdrop drawn behind `section`.
    #[must_use]
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Home | Section::Resume | Section::Skills => BackdropMode::Grid,
            Section::About => BackdropMode::Matrix,
            Section::FullStack | Section::Achievements => BackdropMode::Particles,
            Section::GameDev => BackdropMode::Gaming,
            Section::Ai | Section::Contact => BackdropMode::Neural,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Twinkle {
    at: Point,
    pulse: Pulse,
}

#[derive(Debug, Clone, PartialEq)]
struct Mote {
    at: Point,
    drift: f32,
    pulse: Pulse,
}

#[derive(Debug, Clone, PartialEq)]
struct Bar {
    x: f32,
    pulse: Pulse,
}

#[derive(Debug, Clone, PartialEq)]
struct Synapse {
    start: Point,
    end: Point,
    pulse: Pulse,
}

#[derive(Debug, Clone, PartialEq)]
struct Rain {
    x: f32,
    glyphs: Vec<char>,
    period: f32,
    delay: f32,
}

#[derive(Debug, Clone, PartialEq)]
enum Layout {
    Grid(Vec<Twinkle>),
    Particles(Vec<Mote>),
    Neural(Vec<Synapse>),
    Gaming(Vec<Bar>),
    Matrix(Vec<Rain>),
}

/// Seeded layout of one backdrop.
#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    mode: BackdropMode,
    layout: Layout,
}

fn secs(rng: &mut StdRng, low: f32, high: f32) -> Duration {
    Duration::from_secs_f32(rng.random_range(low..high))
}

fn fraction_point(rng: &mut StdRng) -> Point {
    Point::new(rng.random::<f32>(), rng.random::<f32>())
}

impl Backdrop {
    /// Generates a layout; equal seeds give equal layouts.
    #[must_use]
    pub fn generate(mode: BackdropMode, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let layout = match mode {
            BackdropMode::Grid => Layout::Grid(
                (0..TWINKLE_COUNT)
                    .map(|_| Twinkle {
                        at: fraction_point(&mut rng),
                        pulse: Pulse::new(0.0, 1.0, Duration::from_secs(3))
                            .delayed(secs(&mut rng, 0.0, 2.0)),
                    })
                    .collect(),
            ),
            BackdropMode::Particles => Layout::Particles(
                (0..MOTE_COUNT)
                    .map(|_| {
                        let at = fraction_point(&mut rng);
                        let drift = rng.random_range(-25.0..25.0);
                        let period = secs(&mut rng, 5.0, 8.0);
                        let delay = secs(&mut rng, 0.0, 2.0);
                        Mote {
                            at,
                            drift,
                            pulse: Pulse::new(0.0, 1.0, period).delayed(delay),
                        }
                    })
                    .collect(),
            ),
            BackdropMode::Neural => Layout::Neural(
                (0..SYNAPSE_COUNT)
                    .map(|i| Synapse {
                        start: fraction_point(&mut rng),
                        end: fraction_point(&mut rng),
                        pulse: Pulse::new(0.0, 1.0, Duration::from_secs(4))
                            .delayed(Duration::from_millis(200 * i as u64)),
                    })
                    .collect(),
            ),
            BackdropMode::Gaming => Layout::Gaming(
                (0..GAMING_BARS)
                    .map(|_| {
                        let x = rng.random::<f32>();
                        let period = secs(&mut rng, 2.0, 4.0);
                        let delay = secs(&mut rng, 0.0, 2.0);
                        Bar {
                            x,
                            pulse: Pulse::new(0.0, 1.0, period).delayed(delay),
                        }
                    })
                    .collect(),
            ),
            BackdropMode::Matrix => Layout::Matrix(
                (0..RAIN_COLUMNS)
                    .map(|i| Rain {
                        x: i as f32 / RAIN_COLUMNS as f32,
                        glyphs: (0..RAIN_LENGTH)
                            .map(|_| char::from(rng.random_range(33u8..127)))
                            .collect(),
                        period: rng.random_range(5.0..10.0),
                        delay: rng.random_range(0.0..3.0),
                    })
                    .collect(),
            ),
        };
        Self { mode, layout }
    }

    #[must_use]
    pub fn mode(&self) -> BackdropMode {
        self.mode
    }

    /// Number of animated elements in the layout.
    #[must_use]
    pub fn element_count(&self) -> usize {
        match &self.layout {
            Layout::Grid(items) => items.len(),
            Layout::Particles(items) => items.len(),
            Layout::Neural(items) => items.len(),
            Layout::Gaming(items) => items.len(),
            Layout::Matrix(items) => items.len(),
        }
    }

    /// Matrix glyph columns, empty for other modes.
    #[must_use]
    pub fn glyph_columns(&self) -> Vec<String> {
        match &self.layout {
            Layout::Matrix(columns) => columns
                .iter()
                .map(|rain| rain.glyphs.iter().collect())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Draws the backdrop into `frame` at `elapsed` seconds.
    pub fn draw(&self, frame: &mut Frame, elapsed: f32) {
        let size = frame.size();
        match &self.layout {
            Layout::Grid(twinkles) => draw_grid(frame, size, twinkles, elapsed),
            Layout::Particles(motes) => draw_particles(frame, size, motes, elapsed),
            Layout::Neural(synapses) => draw_neural(frame, size, synapses, elapsed),
            Layout::Gaming(bars) => draw_gaming(frame, size, bars, elapsed),
            Layout::Matrix(rain) => draw_matrix(frame, size, rain, elapsed),
        }
    }
}

fn scale(point: Point, size: Size) -> Point {
    Point::new(point.x * size.width, point.y * size.height)
}

/// Soft radial glow approximated by stacked translucent discs.
pub fn radial_glow(frame: &mut Frame, center: Point, radius: f32, color: Color, alpha: f32) {
    const RINGS: usize = 6;
    for ring in 0..RINGS {
        let k = 1.0 - ring as f32 / RINGS as f32;
        frame.fill(
            &Path::circle(center, radius * k),
            with_alpha(color, alpha / RINGS as f32),
        );
    }
}

fn draw_grid(frame: &mut Frame, size: Size, twinkles: &[Twinkle], elapsed: f32) {
    let line = || {
        Stroke::default()
            .with_width(0.5)
            .with_color(with_alpha(palette::CYAN, 0.2))
    };

    let mut x = 0.0;
    while x <= size.width {
        frame.stroke(&Path::line(Point::new(x, 0.0), Point::new(x, size.height)), line());
        x += GRID_CELL;
    }
    let mut y = 0.0;
    while y <= size.height {
        frame.stroke(&Path::line(Point::new(0.0, y), Point::new(size.width, y)), line());
        y += GRID_CELL;
    }

    let breathe = Pulse::new(0.0, 1.0, Duration::from_secs(4)).value_at(elapsed);
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    radial_glow(
        frame,
        center,
        size.width.max(size.height) * 0.5 * (1.0 + 0.2 * breathe),
        palette::BLUE,
        0.06 * (0.3 + 0.3 * breathe),
    );

    for twinkle in twinkles {
        let v = twinkle.pulse.value_at(elapsed);
        if v <= 0.0 {
            continue;
        }
        frame.fill(
            &Path::circle(scale(twinkle.at, size), 2.0 * 1.5 * v),
            with_alpha(palette::CYAN, v),
        );
    }
}

fn draw_particles(frame: &mut Frame, size: Size, motes: &[Mote], elapsed: f32) {
    for mote in motes {
        let v = mote.pulse.value_at(elapsed);
        if v <= 0.0 {
            continue;
        }
        let center = scale(mote.at, size) + Vector::new(mote.drift * v, -100.0 * v);
        frame.fill(&Path::circle(center, 4.0), with_alpha(palette::BLUE, 0.5 * v));
        frame.fill(&Path::circle(center, 2.0), with_alpha(palette::CYAN, 0.5 * v));
    }
}

fn draw_neural(frame: &mut Frame, size: Size, synapses: &[Synapse], elapsed: f32) {
    for synapse in synapses {
        let start = scale(synapse.start, size);
        let end = scale(synapse.end, size);
        let length = synapse.pulse.value_at(elapsed);
        if length > 0.0 {
            let tip = start + (end - start) * length;
            frame.stroke(
                &Path::line(start, tip),
                Stroke::default()
                    .with_width(1.0)
                    .with_color(with_alpha(palette::CYAN, 0.2)),
            );
        }
        frame.fill(&Path::circle(start, 3.0), with_alpha(palette::BLUE, 0.2));
        frame.fill(&Path::circle(end, 3.0), with_alpha(palette::PURPLE, 0.2));
    }

    let swell = Pulse::new(1.0, 1.5, Duration::from_secs(10)).value_at(elapsed);
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    radial_glow(frame, center, 80.0 * swell, palette::CYAN, 0.3);
}

fn draw_gaming(frame: &mut Frame, size: Size, bars: &[Bar], elapsed: f32) {
    frame.fill_rectangle(
        Point::ORIGIN,
        Size::new(size.width, size.height / 2.0),
        with_alpha(palette::PURPLE, 0.05),
    );

    let horizon = size.height / 2.0;
    for i in 0..GAMING_COLUMNS {
        let x = i as f32 / GAMING_COLUMNS as f32 * size.width;
        frame.stroke(
            &Path::line(Point::new(x, horizon), Point::new(x, size.height)),
            Stroke::default()
                .with_width(1.0)
                .with_color(with_alpha(palette::CYAN, 0.15)),
        );
    }
    for i in 0..GAMING_ROWS {
        let t = i as f32 / GAMING_ROWS as f32;
        let y = horizon + t * horizon;
        // Rows fade in towards the bottom edge.
        frame.stroke(
            &Path::line(Point::new(0.0, y), Point::new(size.width, y)),
            Stroke::default()
                .with_width(1.0)
                .with_color(with_alpha(palette::CYAN, 0.3 * t)),
        );
    }

    for bar in bars {
        let v = bar.pulse.value_at(elapsed);
        let height = 20.0 + 80.0 * v;
        frame.fill_rectangle(
            Point::new(bar.x * size.width, size.height - height),
            Size::new(4.0, height),
            with_alpha(palette::PURPLE, 0.3 + 0.7 * v),
        );
    }
}

fn draw_matrix(frame: &mut Frame, size: Size, rain: &[Rain], elapsed: f32) {
    const LINE_HEIGHT: f32 = 14.0;
    for column in rain {
        let local = elapsed - column.delay;
        if local < 0.0 {
            continue;
        }
        let y = (local / column.period).fract() * size.height;
        for (row, glyph) in column.glyphs.iter().enumerate() {
            frame.fill_text(canvas::Text {
                content: glyph.to_string(),
                position: Point::new(column.x * size.width, y + row as f32 * LINE_HEIGHT),
                color: with_alpha(palette::CYAN, 0.2),
                size: Pixels(12.0),
                font: Font::MONOSPACE,
                ..canvas::Text::default()
            });
        }
    }
}

/// One backdrop per section, generated up front from a base seed.
#[derive(Debug, Clone)]
pub struct SectionBackdrops {
    by_section: Vec<Backdrop>,
}

impl SectionBackdrops {
    #[must_use]
    pub fn generate(seed: u64) -> Self {
        let by_section = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, &section)| {
                Backdrop::generate(
                    BackdropMode::for_section(section),
                    seed.wrapping_add(i as u64),
                )
            })
            .collect();
        Self { by_section }
    }

    #[must_use]
    pub fn for_section(&self, section: Section) -> &Backdrop {
        &self.by_section[section as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        for mode in [
            BackdropMode::Grid,
            BackdropMode::Particles,
            BackdropMode::Neural,
            BackdropMode::Gaming,
            BackdropMode::Matrix,
        ] {
            assert_eq!(Backdrop::generate(mode, 7), Backdrop::generate(mode, 7));
        }
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(
            Backdrop::generate(BackdropMode::Particles, 1),
            Backdrop::generate(BackdropMode::Particles, 2)
        );
    }

    #[test]
    fn element_counts_per_mode() {
        assert_eq!(Backdrop::generate(BackdropMode::Grid, 0).element_count(), 30);
        assert_eq!(Backdrop::generate(BackdropMode::Particles, 0).element_count(), 50);
        assert_eq!(Backdrop::generate(BackdropMode::Neural, 0).element_count(), 15);
        assert_eq!(Backdrop::generate(BackdropMode::Gaming, 0).element_count(), 20);
        assert_eq!(Backdrop::generate(BackdropMode::Matrix, 0).element_count(), 30);
    }

    #[test]
    fn matrix_glyphs_are_printable_ascii() {
        let columns = Backdrop::generate(BackdropMode::Matrix, 42).glyph_columns();
        assert_eq!(columns.len(), RAIN_COLUMNS);
        for column in columns {
            assert_eq!(column.chars().count(), RAIN_LENGTH);
            assert!(column.chars().all(|c| ('!'..='~').contains(&c)));
        }
    }

    #[test]
    fn section_modes_follow_layout() {
        assert_eq!(BackdropMode::for_section(Section::Home), BackdropMode::Grid);
        assert_eq!(BackdropMode::for_section(Section::About), BackdropMode::Matrix);
        assert_eq!(BackdropMode::for_section(Section::GameDev), BackdropMode::Gaming);
        assert_eq!(BackdropMode::for_section(Section::Contact), BackdropMode::Neural);
    }

    #[test]
    fn every_section_gets_its_own_mode() {
        let backdrops = SectionBackdrops::generate(3);
        for section in Section::ALL {
            assert_eq!(
                backdrops.for_section(section).mode(),
                BackdropMode::for_section(section)
            );
        }
    }
}
