// SPDX-License-Identifier: MPL-2.0
//! Looping `[min, max, min]` keyframe animation.

use std::f32::consts::TAU;
use std::time::Duration;

/// Oscillates between `min` and `max` with the given period.
///
/// The value starts at `min`, peaks at `max` halfway through the period and
/// returns to `min`. Before `delay` has elapsed the value stays at `min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    min: f32,
    max: f32,
    period: f32,
    delay: f32,
}

impl Pulse {
    /// Creates a pulse. A zero period is replaced by one millisecond.
    #[must_use]
    pub fn new(min: f32, max: f32, period: Duration) -> Self {
        Self {
            min,
            max,
            period: period.as_secs_f32().max(0.001),
            delay: 0.0,
        }
    }

    /// Delays the first cycle; used to stagger pulses in a list.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay.as_secs_f32();
        self
    }

    /// Fraction of the current cycle at `elapsed` seconds, or `None` during
    /// the initial delay.
    #[must_use]
    pub fn cycle_at(&self, elapsed: f32) -> Option<f32> {
        let local = elapsed - self.delay;
        if local < 0.0 {
            return None;
        }
        Some((local / self.period).fract())
    }

    /// Value at `elapsed` seconds since the pulse was mounted.
    #[must_use]
    pub fn value_at(&self, elapsed: f32) -> f32 {
        match self.cycle_at(elapsed) {
            None => self.min,
            Some(cycle) => {
                // Raised cosine: 0 at both ends, 1 in the middle.
                let weight = (1.0 - (cycle * TAU).cos()) / 2.0;
                self.min + (self.max - self.min) * weight
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn keyframes_min_max_min() {
        let pulse = Pulse::new(0.3, 0.6, Duration::from_secs(4));
        assert!((pulse.value_at(0.0) - 0.3).abs() < EPS);
        assert!((pulse.value_at(2.0) - 0.6).abs() < EPS);
        assert!((pulse.value_at(4.0) - 0.3).abs() < EPS);
    }

    #[test]
    fn value_stays_within_bounds() {
        let pulse = Pulse::new(1.0, 1.2, Duration::from_millis(1500));
        for i in 0..200 {
            let v = pulse.value_at(i as f32 * 0.037);
            assert!((1.0 - EPS..=1.2 + EPS).contains(&v));
        }
    }

    #[test]
    fn delay_holds_minimum() {
        let pulse = Pulse::new(0.0, 1.0, Duration::from_secs(2)).delayed(Duration::from_secs(1));
        assert_eq!(pulse.value_at(0.5), 0.0);
        assert!(pulse.cycle_at(0.5).is_none());
        assert!((pulse.value_at(2.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn zero_period_does_not_divide_by_zero() {
        let pulse = Pulse::new(0.0, 1.0, Duration::ZERO);
        assert!(pulse.value_at(10.0).is_finite());
    }
}
