// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Boot**: Splash screen timers and dismissal delay
//! - **Animation**: Section transition timing
//! - **Contact**: Simulated send delay

// ==========================================================================
// Boot Defaults
// ==========================================================================

/// Wall-clock delay before the boot screen is replaced by the main view.
pub const DEFAULT_BOOT_DISMISS_DELAY_MS: u64 = 3000;

/// Minimum boot dismissal delay.
pub const MIN_BOOT_DISMISS_DELAY_MS: u64 = 0;

/// Maximum boot dismissal delay.
pub const MAX_BOOT_DISMISS_DELAY_MS: u64 = 30_000;

/// Interval between two progress increments.
pub const DEFAULT_BOOT_PROGRESS_INTERVAL_MS: u64 = 40;

/// Percentage added on every progress tick.
pub const DEFAULT_BOOT_PROGRESS_STEP: f32 = 1.5;

/// Smallest accepted progress step (a zero step would never finish).
pub const MIN_BOOT_PROGRESS_STEP: f32 = 0.1;

/// Largest accepted progress step.
pub const MAX_BOOT_PROGRESS_STEP: f32 = 100.0;

/// Interval between two boot log lines.
pub const DEFAULT_BOOT_LOG_INTERVAL_MS: u64 = 400;

/// Shortest accepted timer interval.
pub const MIN_TIMER_INTERVAL_MS: u64 = 10;

/// Longest accepted timer interval.
pub const MAX_TIMER_INTERVAL_MS: u64 = 5000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of each half (exit, then enter) of a section transition.
pub const DEFAULT_TRANSITION_MS: u64 = 800;

/// Shortest accepted transition phase.
pub const MIN_TRANSITION_MS: u64 = 0;

/// Longest accepted transition phase.
pub const MAX_TRANSITION_MS: u64 = 5000;

/// Frame interval of the animation clock (~60 fps).
pub const ANIMATION_FRAME_MS: u64 = 16;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Artificial delay of the simulated contact form send.
pub const DEFAULT_CONTACT_SEND_DELAY_MS: u64 = 2000;

/// Longest accepted simulated send delay.
pub const MAX_CONTACT_SEND_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // With the shipped defaults both boot timers run out before dismissal.
    let progress_ticks = (100.0 / DEFAULT_BOOT_PROGRESS_STEP) as u64 + 1;
    assert!(progress_ticks * DEFAULT_BOOT_PROGRESS_INTERVAL_MS <= DEFAULT_BOOT_DISMISS_DELAY_MS);
    assert!(6 * DEFAULT_BOOT_LOG_INTERVAL_MS <= DEFAULT_BOOT_DISMISS_DELAY_MS);

    assert!(MIN_TIMER_INTERVAL_MS < DEFAULT_BOOT_PROGRESS_INTERVAL_MS);
    assert!(DEFAULT_BOOT_LOG_INTERVAL_MS < MAX_TIMER_INTERVAL_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_CONTACT_SEND_DELAY_MS <= MAX_CONTACT_SEND_DELAY_MS);
};
