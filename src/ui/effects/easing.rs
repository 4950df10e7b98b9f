// SPDX-License-Identifier: MPL-2.0
//! Easing curves.
//!
//! Curves map `t` in `[0, 1]` to an eased value in `[0, 1]`; inputs outside
//! that range are clamped first.

/// Linear interpolation between `from` and `to`.
#[inline]
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

// ---------------------------------------------------------------------------
// Cubic bezier
// ---------------------------------------------------------------------------

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
///
/// The endpoints are fixed at `(0, 0)` and `(1, 1)`. `x1` and `x2` must lie
/// in `[0, 1]` for the curve to be a function of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn coord(t: f32, p1: f32, p2: f32) -> f32 {
        // B(t) = 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn slope(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// Curve parameter whose x coordinate equals `x`.
    fn solve_t(&self, x: f32) -> f32 {
        // Newton first, bisection if the slope flattens out.
        let mut t = x;
        for _ in 0..8 {
            let error = Self::coord(t, self.x1, self.x2) - x;
            if error.abs() < 1e-6 {
                return t;
            }
            let slope = Self::slope(t, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let value = Self::coord(t, self.x1, self.x2);
            if (value - x).abs() < 1e-6 {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }

    /// Eased value at time fraction `x`.
    #[must_use]
    pub fn sample(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        Self::coord(self.solve_t(x), self.y1, self.y2)
    }
}

/// Curve of the section exit/enter animation.
pub const SECTION_EASE: CubicBezier = CubicBezier::new(0.43, 0.13, 0.23, 0.96);

/// [`SECTION_EASE`] as a plain easing function.
#[inline]
pub fn section_ease(t: f32) -> f32 {
    SECTION_EASE.sample(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(section_ease(0.0), 0.0);
        assert!((section_ease(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn inputs_are_clamped() {
        assert_eq!(section_ease(-1.0), 0.0);
        assert_eq!(section_ease(2.0), 1.0);
    }

    #[test]
    fn section_ease_is_monotonic() {
        let mut previous = 0.0;
        for i in 1..=100 {
            let value = section_ease(i as f32 / 100.0);
            assert!(value + 1e-5 >= previous, "dip at step {i}");
            previous = value;
        }
    }

    #[test]
    fn section_ease_starts_slow_and_ends_fast() {
        assert!(section_ease(0.1) < 0.1);
        assert!(section_ease(0.9) > 0.9);
    }

    #[test]
    fn linear_bezier_is_identity() {
        let curve = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert!((curve.sample(x) - x).abs() < 1e-3);
        }
    }

    #[test]
    fn lerp_interpolates() {
        assert!((lerp(0.9, 1.0, 0.5) - 0.95).abs() < 1e-6);
        assert_eq!(lerp(-10.0, 0.0, 1.0), 0.0);
    }
}
