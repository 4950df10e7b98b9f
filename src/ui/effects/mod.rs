// SPDX-License-Identifier: MPL-2.0
//! Decorative animation: backdrops, cursor trail, parallax and pulses.
//!
//! The drawing layers are canvas programs built fresh on every view, like
//! the other animated widgets. They never capture mouse input, so the
//! section content below or above them stays interactive.

pub mod backdrop;
pub mod cursor_trail;
pub mod easing;
pub mod parallax;
pub mod pulse;

pub use backdrop::{Backdrop, BackdropMode, SectionBackdrops};
pub use cursor_trail::{CursorTrail, TrailDot};
pub use parallax::Parallax;
pub use pulse::Pulse;

use crate::ui::design_tokens::{accent_color, palette, with_alpha};
use crate::ui::transition::TransitionFrame;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

// =============================================================================
// Backdrop layer
// =============================================================================

/// Full-window canvas drawing a section backdrop and the leave flash.
pub struct BackdropLayer<'a> {
    cache: Cache,
    backdrop: &'a Backdrop,
    elapsed: f32,
    flash: Option<(Color, f32)>,
}

impl<'a> BackdropLayer<'a> {
    #[must_use]
    pub fn new(backdrop: &'a Backdrop, elapsed: f32) -> Self {
        Self {
            cache: Cache::default(),
            backdrop,
            elapsed,
            flash: None,
        }
    }

    /// Adds the tinted flash drawn over the backdrop.
    #[must_use]
    pub fn with_flash(mut self, flash: Option<(Color, f32)>) -> Self {
        self.flash = flash;
        self
    }

    pub fn into_element<Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for BackdropLayer<'_> {
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
                frame.fill_rectangle(Point::ORIGIN, frame.size(), palette::BACKGROUND);
                self.backdrop.draw(frame, self.elapsed);
                if let Some((tint, alpha)) = self.flash {
                    let center = frame.center();
                    let radius = frame.width().max(frame.height()) * 0.7;
                    backdrop::radial_glow(frame, center, radius, tint, alpha);
                }
            });
        vec![geometry]
    }
}

// =============================================================================
// Foreground layer
// =============================================================================

/// Full-window canvas drawn above the content: the cursor trail with its
/// main glow, and the holographic frame of a running transition.
pub struct ForegroundLayer {
    cache: Cache,
    dots: Vec<TrailDot>,
    head: Option<Point>,
    transition: TransitionFrame,
    tint: Color,
}

impl ForegroundLayer {
    #[must_use]
    pub fn new(dots: Vec<TrailDot>, head: Option<Point>) -> Self {
        Self {
            cache: Cache::default(),
            dots,
            head,
            transition: TransitionFrame::IDLE,
            tint: palette::CYAN,
        }
    }

    #[must_use]
    pub fn with_transition(mut self, transition: TransitionFrame, tint: Color) -> Self {
        self.transition = transition;
        self.tint = tint;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Corners of the section plane under `transition`, projected onto the
/// window: scaled about the center, pushed by depth, and foreshortened at
/// the top or bottom by the tilt.
#[must_use]
pub fn projected_plane(size: Size, transition: TransitionFrame) -> [Point; 4] {
    const PERSPECTIVE: f32 = 1000.0;
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let depth_scale = PERSPECTIVE / (PERSPECTIVE - transition.depth);
    let scale = transition.scale * depth_scale;
    let half_w = size.width / 2.0 * scale;
    let half_h = size.height / 2.0 * scale;

    let tilt = transition.tilt_deg.to_radians();
    // Positive tilt leans the top edge away from the viewer.
    let top_w = half_w * (1.0 - tilt.sin() * 0.5);
    let bottom_w = half_w * (1.0 + tilt.sin() * 0.5);
    let squash = tilt.cos();

    [
        Point::new(center.x - top_w, center.y - half_h * squash),
        Point::new(center.x + top_w, center.y - half_h * squash),
        Point::new(center.x + bottom_w, center.y + half_h * squash),
        Point::new(center.x - bottom_w, center.y + half_h * squash),
    ]
}

impl<Message> canvas::Program<Message> for ForegroundLayer {
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
                if !self.transition.is_idle() {
                    let corners = projected_plane(frame.size(), self.transition);
                    let plane = Path::new(|builder| {
                        builder.move_to(corners[0]);
                        for corner in &corners[1..] {
                            builder.line_to(*corner);
                        }
                        builder.close();
                    });
                    let alpha = 1.0 - self.transition.opacity;
                    frame.stroke(
                        &plane,
                        Stroke::default()
                            .with_width(2.0)
                            .with_color(with_alpha(self.tint, alpha)),
                    );
                }

                for dot in &self.dots {
                    let color = accent_color(dot.accent);
                    frame.fill(
                        &Path::circle(dot.center, dot.diameter),
                        with_alpha(color, dot.opacity * 0.25),
                    );
                    frame.fill(
                        &Path::circle(dot.center, dot.diameter / 2.0),
                        with_alpha(color, dot.opacity),
                    );
                }

                if let Some(head) = self.head {
                    backdrop::radial_glow(frame, head, 20.0, palette::CYAN, 0.5);
                    frame.fill(&Path::circle(head, 4.0), palette::WHITE);
                }
            });
        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_plane_covers_window() {
        let size = Size::new(800.0, 600.0);
        let corners = projected_plane(size, TransitionFrame::IDLE);
        assert_eq!(corners[0], Point::new(0.0, 0.0));
        assert_eq!(corners[2], Point::new(800.0, 600.0));
    }

    #[test]
    fn receding_plane_is_smaller() {
        let size = Size::new(800.0, 600.0);
        let far = TransitionFrame {
            opacity: 0.0,
            scale: 0.9,
            tilt_deg: 0.0,
            depth: -100.0,
        };
        let corners = projected_plane(size, far);
        assert!(corners[0].x > 0.0 && corners[0].y > 0.0);
    }

    #[test]
    fn tilt_narrows_top_edge() {
        let size = Size::new(800.0, 600.0);
        let tilted = TransitionFrame {
            tilt_deg: 10.0,
            ..TransitionFrame::IDLE
        };
        let [tl, tr, br, bl] = projected_plane(size, tilted);
        assert!(tr.x - tl.x < br.x - bl.x);
    }
}
