// SPDX-License-Identifier: MPL-2.0
//! Boot sequence state.
//!
//! The boot screen advances two counters on independent timers: a progress
//! percentage and a cursor into a fixed list of log lines. Neither counter
//! decides when the screen goes away; the owner dismisses it after its own
//! delay.

/// Message keys of the boot log, in display order.
pub const BOOT_LOG_KEYS: [&str; 7] = [
    "boot-log-init",
    "boot-log-gamedev",
    "boot-log-fullstack",
    "boot-log-ai",
    "boot-log-neural",
    "boot-log-render",
    "boot-log-online",
];

/// Index of the last boot log line.
pub const LAST_LOG_INDEX: usize = BOOT_LOG_KEYS.len() - 1;

/// Upper bound of the boot progress.
pub const MAX_PROGRESS: f32 = 100.0;

// =============================================================================
// BootProgress
// =============================================================================

/// Boot progress percentage, guaranteed to be within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct BootProgress(f32);

impl BootProgress {
    /// Creates a progress value, clamping to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self(0.0);
        }
        Self(percent.clamp(0.0, MAX_PROGRESS))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whole percent shown to the user (rounded down).
    #[must_use]
    pub fn whole_percent(self) -> u32 {
        self.0.floor() as u32
    }

    /// Progress as a `0.0..=1.0` fraction.
    #[must_use]
    pub fn fraction(self) -> f32 {
        self.0 / MAX_PROGRESS
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= MAX_PROGRESS
    }

    #[must_use]
    fn advance(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }
}

// =============================================================================
// BootSequencer
// =============================================================================

/// Counters driven by the boot screen timers.
#[derive(Debug, Clone, PartialEq)]
pub struct BootSequencer {
    progress: BootProgress,
    step: f32,
    log_cursor: usize,
}

impl BootSequencer {
    /// Creates a sequencer that adds `step` percent on every progress tick.
    ///
    /// Non-positive or non-finite steps are replaced by `1.0` so the
    /// progress timer always terminates.
    #[must_use]
    pub fn new(step: f32) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            1.0
        };
        Self {
            progress: BootProgress::default(),
            step,
            log_cursor: 0,
        }
    }

    #[must_use]
    pub fn progress(&self) -> BootProgress {
        self.progress
    }

    #[must_use]
    pub fn log_cursor(&self) -> usize {
        self.log_cursor
    }

    /// Whether the progress timer still has work to do.
    #[must_use]
    pub fn progress_running(&self) -> bool {
        !self.progress.is_complete()
    }

    /// Whether the log timer still has work to do.
    #[must_use]
    pub fn log_running(&self) -> bool {
        self.log_cursor < LAST_LOG_INDEX
    }

    /// Advances the progress by one step. Returns `false` once complete.
    pub fn tick_progress(&mut self) -> bool {
        if !self.progress_running() {
            return false;
        }
        self.progress = self.progress.advance(self.step);
        true
    }

    /// Reveals the next log line. Returns `false` once the last line shows.
    pub fn tick_log(&mut self) -> bool {
        if !self.log_running() {
            return false;
        }
        self.log_cursor += 1;
        true
    }

    /// Keys of the log lines revealed so far, the current line last.
    #[must_use]
    pub fn visible_log_keys(&self) -> &'static [&'static str] {
        &BOOT_LOG_KEYS[..=self.log_cursor]
    }
}

impl Default for BootSequencer {
    fn default() -> Self {
        Self::new(1.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_with_first_line_visible() {
        let boot = BootSequencer::default();
        assert_eq!(boot.progress().value(), 0.0);
        assert_eq!(boot.log_cursor(), 0);
        assert_eq!(boot.visible_log_keys(), &["boot-log-init"]);
    }

    #[test]
    fn progress_is_monotonic_and_capped() {
        let mut boot = BootSequencer::new(1.5);
        let mut previous = boot.progress().value();
        let mut ticks = 0;
        while boot.tick_progress() {
            let current = boot.progress().value();
            assert!(current >= previous);
            assert!(current <= MAX_PROGRESS);
            previous = current;
            ticks += 1;
        }
        // 1.5 * 67 = 100.5, clamped.
        assert_eq!(ticks, 67);
        assert_eq!(boot.progress().value(), MAX_PROGRESS);
        assert_eq!(boot.progress().whole_percent(), 100);
    }

    #[test]
    fn tick_past_bound_is_noop() {
        let mut boot = BootSequencer::new(60.0);
        assert!(boot.tick_progress());
        assert!(boot.tick_progress());
        let done = boot.clone();
        assert!(!boot.tick_progress());
        assert_eq!(boot, done);
    }

    #[test]
    fn log_cursor_stops_at_last_index() {
        let mut boot = BootSequencer::default();
        for expected in 1..=LAST_LOG_INDEX {
            assert!(boot.tick_log());
            assert_eq!(boot.log_cursor(), expected);
        }
        assert!(!boot.log_running());
        assert!(!boot.tick_log());
        assert_eq!(boot.log_cursor(), LAST_LOG_INDEX);
        assert_eq!(boot.visible_log_keys().len(), BOOT_LOG_KEYS.len());
    }

    #[test]
    fn timers_are_independent() {
        let mut boot = BootSequencer::default();
        for _ in 0..10 {
            boot.tick_log();
        }
        assert_eq!(boot.progress().value(), 0.0);
        assert!(boot.progress_running());
    }

    #[test]
    fn invalid_step_still_terminates() {
        let mut boot = BootSequencer::new(-3.0);
        let mut ticks = 0;
        while boot.tick_progress() {
            ticks += 1;
        }
        assert_eq!(ticks, 100);
    }

    #[test]
    fn progress_newtype_clamps() {
        assert_eq!(BootProgress::new(140.0).value(), 100.0);
        assert_eq!(BootProgress::new(-1.0).value(), 0.0);
        assert_eq!(BootProgress::new(f32::NAN).value(), 0.0);
        assert_eq!(BootProgress::new(42.9).whole_percent(), 42);
        assert!((BootProgress::new(25.0).fraction() - 0.25).abs() < f32::EPSILON);
    }
}
