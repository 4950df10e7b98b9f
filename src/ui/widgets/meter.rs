// SPDX-License-Identifier: MPL-2.0
//! Neon gradient bar used for boot progress and skill levels.

use crate::ui::design_tokens::{palette, with_alpha};
use iced::widget::canvas::{self, gradient, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Shimmer sweep period in seconds.
const SHIMMER_PERIOD: f32 = 1.5;

pub struct Meter {
    cache: Cache,
    fraction: f32,
    from: Color,
    to: Color,
    shimmer: Option<f32>,
    width: f32,
    height: f32,
}

impl Meter {
    /// Creates a bar filled to `fraction` (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn new(fraction: f32, width: f32, height: f32) -> Self {
        Self {
            cache: Cache::default(),
            fraction: fraction.clamp(0.0, 1.0),
            from: palette::BLUE,
            to: palette::CYAN,
            shimmer: None,
            width,
            height,
        }
    }

    #[must_use]
    pub fn colors(mut self, from: Color, to: Color) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Adds a moving highlight at `elapsed` seconds.
    #[must_use]
    pub fn shimmer(mut self, elapsed: f32) -> Self {
        self.shimmer = Some(elapsed);
        self
    }

    #[must_use]
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let (width, height) = (self.width, self.height);
        Canvas::new(self)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }
}

/// Left edge of the shimmer, as a fraction of the filled width.
#[must_use]
pub fn shimmer_offset(elapsed: f32) -> f32 {
    (elapsed / SHIMMER_PERIOD).fract() * 1.5 - 0.5
}

impl<Message> canvas::Program<Message> for Meter {
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
                let radius = size.height / 2.0;

                frame.fill(
                    &Path::rounded_rectangle(Point::ORIGIN, size, radius.into()),
                    with_alpha(palette::GRAY_800, 0.8),
                );

                let filled = Size::new(size.width * self.fraction, size.height);
                if filled.width <= 0.0 {
                    return;
                }
                let fill = gradient::Linear::new(Point::ORIGIN, Point::new(filled.width, 0.0))
                    .add_stop(0.0, self.from)
                    .add_stop(1.0, self.to);
                frame.fill(
                    &Path::rounded_rectangle(Point::ORIGIN, filled, radius.into()),
                    fill,
                );

                if let Some(elapsed) = self.shimmer {
                    let band = filled.width * 0.3;
                    let x = shimmer_offset(elapsed) * filled.width;
                    let start = x.max(0.0);
                    let end = (x + band).min(filled.width);
                    if end > start {
                        frame.fill_rectangle(
                            Point::new(start, 0.0),
                            Size::new(end - start, size.height),
                            with_alpha(palette::WHITE, 0.3),
                        );
                    }
                }
            });
        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(Meter::new(1.7, 100.0, 8.0).fraction(), 1.0);
        assert_eq!(Meter::new(-0.2, 100.0, 8.0).fraction(), 0.0);
    }

    #[test]
    fn shimmer_sweeps_across() {
        assert!((shimmer_offset(0.0) + 0.5).abs() < 1e-6);
        assert!(shimmer_offset(1.4) > 0.8);
    }
}
