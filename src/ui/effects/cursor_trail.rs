// SPDX-License-Identifier: MPL-2.0
//! Plasma cursor trail.
//!
//! Keeps the most recent pointer samples; each one fades and shrinks over
//! [`FADE_DURATION`] after it was recorded.

use crate::content::Accent;
use iced::Point;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of samples kept (the previous 20 plus the newest one).
pub const TRAIL_CAPACITY: usize = 21;

/// Time for a sample to fade out completely.
pub const FADE_DURATION: Duration = Duration::from_millis(600);

/// Diameter of the oldest dot; newer dots grow by up to [`DOT_GROWTH`].
const DOT_BASE: f32 = 4.0;
const DOT_GROWTH: f32 = 8.0;

/// One renderable dot of the trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDot {
    pub center: Point,
    pub diameter: f32,
    pub opacity: f32,
    pub accent: Accent,
}

fn dot_accent(index: usize) -> Accent {
    match index % 3 {
        0 => Accent::Cyan,
        1 => Accent::Purple,
        _ => Accent::Blue,
    }
}

#[derive(Debug, Clone, Default)]
pub struct CursorTrail {
    samples: VecDeque<(Point, Instant)>,
}

impl CursorTrail {
    pub fn push(&mut self, position: Point, now: Instant) {
        if self.samples.len() == TRAIL_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back((position, now));
    }

    /// Drops samples that have fully faded.
    pub fn prune(&mut self, now: Instant) {
        while let Some((_, at)) = self.samples.front() {
            if now.saturating_duration_since(*at) >= FADE_DURATION {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent pointer position, where the main glow is drawn.
    #[must_use]
    pub fn head(&self) -> Option<Point> {
        self.samples.back().map(|(point, _)| *point)
    }

    /// Visible dots at `now`, oldest first.
    #[must_use]
    pub fn dots(&self, now: Instant) -> Vec<TrailDot> {
        let len = self.samples.len();
        let fade = FADE_DURATION.as_secs_f32();
        self.samples
            .iter()
            .enumerate()
            .filter_map(|(i, (center, at))| {
                let age = now.saturating_duration_since(*at).as_secs_f32() / fade;
                if age >= 1.0 {
                    return None;
                }
                let base = DOT_BASE + i as f32 / len as f32 * DOT_GROWTH;
                // Scale goes 1 -> 0.5 while opacity goes 1 -> 0.
                Some(TrailDot {
                    center: *center,
                    diameter: base * (1.0 - 0.5 * age),
                    opacity: 1.0 - age,
                    accent: dot_accent(i),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_at_most_capacity_samples() {
        let mut trail = CursorTrail::default();
        let now = Instant::now();
        for i in 0..50 {
            trail.push(Point::new(i as f32, 0.0), now);
        }
        assert_eq!(trail.len(), TRAIL_CAPACITY);
        assert_eq!(trail.head(), Some(Point::new(49.0, 0.0)));
        assert_eq!(trail.dots(now)[0].center, Point::new(29.0, 0.0));
    }

    #[test]
    fn dot_sizes_grow_towards_head() {
        let mut trail = CursorTrail::default();
        let now = Instant::now();
        for i in 0..4 {
            trail.push(Point::new(i as f32, 0.0), now);
        }
        let dots = trail.dots(now);
        assert_eq!(dots[0].diameter, 4.0);
        assert_eq!(dots[2].diameter, 4.0 + 0.5 * 8.0);
        assert!(dots.windows(2).all(|w| w[0].diameter < w[1].diameter));
    }

    #[test]
    fn colors_cycle_cyan_purple_blue() {
        let mut trail = CursorTrail::default();
        let now = Instant::now();
        for _ in 0..4 {
            trail.push(Point::ORIGIN, now);
        }
        let accents: Vec<_> = trail.dots(now).iter().map(|d| d.accent).collect();
        assert_eq!(
            accents,
            [Accent::Cyan, Accent::Purple, Accent::Blue, Accent::Cyan]
        );
    }

    #[test]
    fn dots_fade_and_shrink_then_disappear() {
        let mut trail = CursorTrail::default();
        let start = Instant::now();
        trail.push(Point::ORIGIN, start);

        let half = trail.dots(start + Duration::from_millis(300));
        assert!((half[0].opacity - 0.5).abs() < 1e-3);
        assert!((half[0].diameter - 3.0).abs() < 1e-3);

        assert!(trail.dots(start + FADE_DURATION).is_empty());
        trail.prune(start + FADE_DURATION);
        assert!(trail.is_empty());
    }
}
