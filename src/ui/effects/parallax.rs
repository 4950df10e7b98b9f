// SPDX-License-Identifier: MPL-2.0
//! Pointer parallax with spring smoothing.

use crate::domain::section::Pointer;
use iced::{Size, Vector};
use std::time::Duration;

/// Spring constants of the parallax follow.
pub const STIFFNESS: f32 = 150.0;
pub const DAMPING: f32 = 20.0;

/// Largest integration step; longer frames are split.
const MAX_STEP: f32 = 1.0 / 120.0;

/// Unit-mass damped spring on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    stiffness: f32,
    damping: f32,
}

impl Spring {
    #[must_use]
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            stiffness,
            damping,
        }
    }

    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Advances the spring towards `target` by `dt` (semi-implicit Euler).
    pub fn step(&mut self, target: f32, dt: Duration) {
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let force = -self.stiffness * (self.position - target) - self.damping * self.velocity;
            self.velocity += force * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(STIFFNESS, DAMPING)
    }
}

/// Pointer position mapped to `[-1, 1]` on both axes, window center at 0.
///
/// An empty viewport yields `(0, 0)`.
#[must_use]
pub fn normalized(pointer: Pointer, viewport: Size) -> Vector {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Vector::ZERO;
    }
    Vector::new(
        (pointer.x / viewport.width - 0.5) * 2.0,
        (pointer.y / viewport.height - 0.5) * 2.0,
    )
}

/// Smoothed offset that follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Parallax {
    x: Spring,
    y: Spring,
}

impl Parallax {
    /// Moves the springs towards the current normalized pointer.
    pub fn tick(&mut self, pointer: Pointer, viewport: Size, dt: Duration) {
        let target = normalized(pointer, viewport);
        self.x.step(target.x, dt);
        self.y.step(target.y, dt);
    }

    /// Current offset scaled by `strength` pixels.
    #[must_use]
    pub fn offset(&self, strength: f32) -> Vector {
        Vector::new(self.x.position() * strength, self.y.position() * strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        let v = normalized(Pointer::new(400.0, 300.0), Size::new(800.0, 600.0));
        assert_eq!(v, Vector::ZERO);
    }

    #[test]
    fn corners_map_to_unit_square() {
        let size = Size::new(800.0, 600.0);
        assert_eq!(normalized(Pointer::new(0.0, 0.0), size), Vector::new(-1.0, -1.0));
        assert_eq!(normalized(Pointer::new(800.0, 600.0), size), Vector::new(1.0, 1.0));
    }

    #[test]
    fn empty_viewport_is_neutral() {
        assert_eq!(normalized(Pointer::new(5.0, 5.0), Size::ZERO), Vector::ZERO);
    }

    #[test]
    fn spring_settles_on_target() {
        let mut spring = Spring::default();
        for _ in 0..120 {
            spring.step(1.0, Duration::from_millis(16));
        }
        assert!((spring.position() - 1.0).abs() < 0.01);
    }

    #[test]
    fn spring_moves_gradually() {
        let mut spring = Spring::default();
        spring.step(1.0, Duration::from_millis(16));
        assert!(spring.position() > 0.0 && spring.position() < 0.5);
    }

    #[test]
    fn parallax_offset_scales_with_strength() {
        let mut parallax = Parallax::default();
        let size = Size::new(100.0, 100.0);
        for _ in 0..200 {
            parallax.tick(Pointer::new(100.0, 50.0), size, Duration::from_millis(16));
        }
        let offset = parallax.offset(20.0);
        assert!((offset.x - 20.0).abs() < 0.5);
        assert!(offset.y.abs() < 0.5);
    }
}
