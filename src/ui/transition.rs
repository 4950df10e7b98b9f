// SPDX-License-Identifier: MPL-2.0
//! Visual parameters of the section exit/enter animation.

use crate::domain::section::{Section, Transition, TransitionPhase};
use crate::ui::design_tokens::palette;
use crate::ui::effects::easing::{lerp, section_ease};
use iced::Color;
use std::time::{Duration, Instant};

/// Length of the tinted flash shown when leaving a tinted section.
pub const OVERLAY_FLASH: Duration = Duration::from_millis(300);

/// Peak opacity of that flash.
pub const OVERLAY_PEAK: f32 = 0.3;

/// Transform applied to the mounted section at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub opacity: f32,
    pub scale: f32,
    /// Rotation around the horizontal axis, in degrees.
    pub tilt_deg: f32,
    /// Offset along the view axis; negative is further away.
    pub depth: f32,
}

impl TransitionFrame {
    /// Resting state: fully visible, untransformed.
    pub const IDLE: Self = Self {
        opacity: 1.0,
        scale: 1.0,
        tilt_deg: 0.0,
        depth: 0.0,
    };

    const ENTER_FROM: Self = Self {
        opacity: 0.0,
        scale: 0.9,
        tilt_deg: -10.0,
        depth: -100.0,
    };

    const EXIT_TO: Self = Self {
        opacity: 0.0,
        scale: 1.1,
        tilt_deg: 10.0,
        depth: 100.0,
    };

    fn between(from: Self, to: Self, t: f32) -> Self {
        Self {
            opacity: lerp(from.opacity, to.opacity, t),
            scale: lerp(from.scale, to.scale, t),
            tilt_deg: lerp(from.tilt_deg, to.tilt_deg, t),
            depth: lerp(from.depth, to.depth, t),
        }
    }

    /// Eased frame for a transition phase.
    #[must_use]
    pub fn for_phase(phase: TransitionPhase) -> Self {
        match phase {
            TransitionPhase::Exit { progress, .. } => {
                Self::between(Self::IDLE, Self::EXIT_TO, section_ease(progress))
            }
            TransitionPhase::Enter { progress, .. } => {
                Self::between(Self::ENTER_FROM, Self::IDLE, section_ease(progress))
            }
            TransitionPhase::Idle => Self::IDLE,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

/// Tint of the flash shown when leaving `section`, if it has one.
#[must_use]
pub fn overlay_tint(section: Section) -> Option<Color> {
    match section {
        Section::FullStack => Some(palette::BLUE),
        Section::GameDev => Some(palette::PURPLE),
        Section::Ai => Some(palette::CYAN),
        _ => None,
    }
}

/// Tint and opacity of the leave flash at `now`.
#[must_use]
pub fn overlay_flash(transition: &Transition, now: Instant) -> Option<(Color, f32)> {
    let tint = overlay_tint(transition.from?)?;
    let elapsed = now.saturating_duration_since(transition.started_at);
    if elapsed >= OVERLAY_FLASH {
        return None;
    }
    let t = elapsed.as_secs_f32() / OVERLAY_FLASH.as_secs_f32();
    Some((tint, OVERLAY_PEAK * t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_phase_is_identity() {
        assert!(TransitionFrame::for_phase(TransitionPhase::Idle).is_idle());
    }

    #[test]
    fn enter_starts_small_tilted_and_far() {
        let frame = TransitionFrame::for_phase(TransitionPhase::Enter {
            section: Section::About,
            progress: 0.0,
        });
        assert_eq!(frame.opacity, 0.0);
        assert_eq!(frame.scale, 0.9);
        assert_eq!(frame.tilt_deg, -10.0);
        assert_eq!(frame.depth, -100.0);
    }

    #[test]
    fn exit_ends_large_tilted_and_near() {
        let frame = TransitionFrame::for_phase(TransitionPhase::Exit {
            section: Section::Home,
            progress: 1.0,
        });
        assert_eq!(frame.opacity, 0.0);
        assert!((frame.scale - 1.1).abs() < 1e-6);
        assert_eq!(frame.tilt_deg, 10.0);
        assert_eq!(frame.depth, 100.0);
    }

    #[test]
    fn enter_finishes_at_rest() {
        let frame = TransitionFrame::for_phase(TransitionPhase::Enter {
            section: Section::About,
            progress: 1.0,
        });
        assert!((frame.opacity - 1.0).abs() < 1e-6);
        assert!((frame.scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn flash_only_for_tinted_sections() {
        let now = Instant::now();
        let plain = Transition {
            from: Some(Section::Home),
            to: Section::Ai,
            started_at: now,
        };
        assert!(overlay_flash(&plain, now).is_none());

        let tinted = Transition {
            from: Some(Section::GameDev),
            to: Section::Home,
            started_at: now,
        };
        let (color, alpha) = overlay_flash(&tinted, now + Duration::from_millis(150)).unwrap();
        assert_eq!(color, palette::PURPLE);
        assert!((alpha - 0.15).abs() < 1e-3);
        assert!(overlay_flash(&tinted, now + OVERLAY_FLASH).is_none());
    }
}
