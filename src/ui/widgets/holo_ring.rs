// SPDX-License-Identifier: MPL-2.0
//! Holographic ring widget: two counter-rotating dashed arcs.

use crate::ui::design_tokens::{palette, sizing, with_alpha};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Number of dashes drawn on each ring.
const DASHES: usize = 8;

/// Rotation speed of the outer ring, in radians per second. The inner ring
/// turns the other way at one and a half times this speed.
const SPEED: f32 = TAU / 3.0;

pub struct HoloRing {
    cache: Cache,
    elapsed: f32,
    outer: Color,
    inner: Color,
    size: f32,
}

impl HoloRing {
    /// Creates a ring pair at `elapsed` seconds of animation.
    #[must_use]
    pub fn new(elapsed: f32) -> Self {
        Self {
            cache: Cache::default(),
            elapsed,
            outer: palette::CYAN,
            inner: palette::PURPLE,
            size: sizing::HOLO_RING,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, outer: Color, inner: Color) -> Self {
        self.outer = outer;
        self.inner = inner;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Rotation of the outer and inner ring at `elapsed` seconds.
#[must_use]
pub fn ring_angles(elapsed: f32) -> (f32, f32) {
    let outer = (elapsed * SPEED) % TAU;
    let inner = -(elapsed * SPEED * 1.5) % TAU;
    (outer, inner)
}

fn dashed_ring(frame: &mut Frame, center: Point, radius: f32, rotation: f32, color: Color) {
    let dash = TAU / DASHES as f32;
    for i in 0..DASHES {
        let start = rotation + i as f32 * dash;
        let end = start + dash * 0.6;

        let mut arc = canvas::path::Builder::new();
        let segments = 12;
        for s in 0..=segments {
            let angle = start + (end - start) * s as f32 / segments as f32;
            let point = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
            if s == 0 {
                arc.move_to(point);
            } else {
                arc.line_to(point);
            }
        }
        frame.stroke(
            &arc.build(),
            Stroke::default()
                .with_width(3.0)
                .with_color(color)
                .with_line_cap(canvas::LineCap::Round),
        );
    }
}

impl<Message> canvas::Program<Message> for HoloRing {
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
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;
                let (outer_angle, inner_angle) = ring_angles(self.elapsed);

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(with_alpha(self.outer, 0.25)),
                );
                dashed_ring(frame, center, radius, outer_angle - PI / 2.0, self.outer);
                dashed_ring(frame, center, radius * 0.75, inner_angle, self.inner);
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_turn_in_opposite_directions() {
        let (outer, inner) = ring_angles(0.5);
        assert!(outer > 0.0);
        assert!(inner < 0.0);
    }

    #[test]
    fn angles_stay_bounded() {
        let (outer, inner) = ring_angles(10_000.0);
        assert!(outer.abs() < TAU);
        assert!(inner.abs() < TAU);
    }
}
