// SPDX-License-Identifier: MPL-2.0
//! Section navigation state.
//!
//! [`SectionViewModel`] owns the active [`Section`], the last pointer
//! position, and the exit/enter transition played on every change. Views
//! only ever see a [`SectionSnapshot`].

use std::fmt;
use std::time::{Duration, Instant};

// =============================================================================
// Section
// =============================================================================

/// The closed set of portfolio sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    FullStack,
    GameDev,
    Ai,
    Achievements,
    Skills,
    Resume,
    Contact,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Home,
        Section::About,
        Section::FullStack,
        Section::GameDev,
        Section::Ai,
        Section::Achievements,
        Section::Skills,
        Section::Resume,
        Section::Contact,
    ];

    /// Stable identifier, also used in logs.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::FullStack => "fullstack",
            Section::GameDev => "gamedev",
            Section::Ai => "ai",
            Section::Achievements => "achievements",
            Section::Skills => "skills",
            Section::Resume => "resume",
            Section::Contact => "contact",
        }
    }

    /// Message key of the navigation label.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::FullStack => "nav-fullstack",
            Section::GameDev => "nav-gamedev",
            Section::Ai => "nav-ai",
            Section::Achievements => "nav-achievements",
            Section::Skills => "nav-skills",
            Section::Resume => "nav-resume",
            Section::Contact => "nav-contact",
        }
    }

    /// Looks a section up by its [`id`](Self::id).
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// =============================================================================
// Pointer
// =============================================================================

/// Last known pointer position in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Transition
// =============================================================================

/// Which half of a transition is playing, with its linear progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase {
    /// The outgoing section is animating out.
    Exit { section: Section, progress: f32 },
    /// The incoming section is animating in.
    Enter { section: Section, progress: f32 },
    /// No transition in flight.
    Idle,
}

/// A change of active section and when it started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Option<Section>,
    pub to: Section,
    pub started_at: Instant,
}

impl Transition {
    /// Phase at `now` given the length of one phase.
    ///
    /// The exit phase only exists when there is an outgoing section.
    #[must_use]
    pub fn phase_at(&self, now: Instant, phase_duration: Duration) -> TransitionPhase {
        if phase_duration.is_zero() {
            return TransitionPhase::Idle;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        let phase = phase_duration.as_secs_f32();

        let enter_elapsed = match self.from {
            Some(from) if elapsed < phase => {
                return TransitionPhase::Exit {
                    section: from,
                    progress: elapsed / phase,
                };
            }
            Some(_) => elapsed - phase,
            None => elapsed,
        };

        if enter_elapsed < phase {
            TransitionPhase::Enter {
                section: self.to,
                progress: enter_elapsed / phase,
            }
        } else {
            TransitionPhase::Idle
        }
    }
}

// =============================================================================
// SectionViewModel
// =============================================================================

/// Immutable view of the navigation state handed to views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSnapshot {
    /// The section navigation points at.
    pub active: Section,
    /// The single section currently rendered.
    pub mounted: Section,
    pub pointer: Pointer,
    pub phase: TransitionPhase,
}

/// Process-wide navigation state.
#[derive(Debug, Clone)]
pub struct SectionViewModel {
    active: Section,
    pointer: Pointer,
    transition: Option<Transition>,
    phase_duration: Duration,
}

impl SectionViewModel {
    /// Starts on [`Section::Home`] with no transition in flight.
    #[must_use]
    pub fn new(phase_duration: Duration) -> Self {
        Self {
            active: Section::Home,
            pointer: Pointer::default(),
            transition: None,
            phase_duration,
        }
    }

    #[must_use]
    pub fn active(&self) -> Section {
        self.active
    }

    #[must_use]
    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Makes `section` active and starts a transition towards it.
    ///
    /// Returns `false` (and changes nothing) if `section` is already active.
    /// Returning to the section still playing its exit cancels the transition
    /// instead of starting a new one, so it stays mounted.
    pub fn navigate(&mut self, section: Section, now: Instant) -> bool {
        if section == self.active {
            return false;
        }
        if let TransitionPhase::Exit { section: leaving, .. } = self.phase(now) {
            if leaving == section {
                self.active = section;
                self.transition = None;
                return true;
            }
        }
        let from = self.mounted(now);
        self.active = section;
        self.transition = Some(Transition {
            from: Some(from),
            to: section,
            started_at: now,
        });
        true
    }

    pub(crate) fn record_pointer(&mut self, pointer: Pointer) {
        self.pointer = pointer;
    }

    #[must_use]
    pub fn phase(&self, now: Instant) -> TransitionPhase {
        self.transition
            .map_or(TransitionPhase::Idle, |t| t.phase_at(now, self.phase_duration))
    }

    /// The one section rendered at `now`: the outgoing one during the exit
    /// phase, the active one otherwise.
    #[must_use]
    pub fn mounted(&self, now: Instant) -> Section {
        match self.phase(now) {
            TransitionPhase::Exit { section, .. } => section,
            TransitionPhase::Enter { section, .. } => section,
            TransitionPhase::Idle => self.active,
        }
    }

    #[must_use]
    pub fn is_transitioning(&self, now: Instant) -> bool {
        !matches!(self.phase(now), TransitionPhase::Idle)
    }

    /// Drops a finished transition. Returns `true` if one was dropped.
    pub fn settle(&mut self, now: Instant) -> bool {
        if self.transition.is_some() && !self.is_transitioning(now) {
            self.transition = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn snapshot(&self, now: Instant) -> SectionSnapshot {
        SectionSnapshot {
            active: self.active,
            mounted: self.mounted(now),
            pointer: self.pointer,
            phase: self.phase(now),
        }
    }
}

impl Default for SectionViewModel {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHASE: Duration = Duration::from_millis(800);

    #[test]
    fn starts_on_home() {
        let model = SectionViewModel::new(PHASE);
        assert_eq!(model.active(), Section::Home);
        assert!(model.transition().is_none());
        assert_eq!(model.mounted(Instant::now()), Section::Home);
    }

    #[test]
    fn navigate_to_same_section_is_noop() {
        let mut model = SectionViewModel::new(PHASE);
        let now = Instant::now();
        assert!(model.navigate(Section::Contact, now));
        let transition = *model.transition().unwrap();

        let later = now + Duration::from_millis(100);
        assert!(!model.navigate(Section::Contact, later));
        assert_eq!(model.transition(), Some(&transition));
    }

    #[test]
    fn exit_then_enter_then_idle() {
        let mut model = SectionViewModel::new(PHASE);
        let t0 = Instant::now();
        model.navigate(Section::About, t0);

        match model.phase(t0 + Duration::from_millis(400)) {
            TransitionPhase::Exit { section, progress } => {
                assert_eq!(section, Section::Home);
                assert!((progress - 0.5).abs() < 1e-3);
            }
            other => panic!("expected exit phase, got {other:?}"),
        }
        assert_eq!(model.mounted(t0 + Duration::from_millis(400)), Section::Home);

        match model.phase(t0 + Duration::from_millis(1200)) {
            TransitionPhase::Enter { section, progress } => {
                assert_eq!(section, Section::About);
                assert!((progress - 0.5).abs() < 1e-3);
            }
            other => panic!("expected enter phase, got {other:?}"),
        }

        let done = t0 + Duration::from_millis(1700);
        assert_eq!(model.phase(done), TransitionPhase::Idle);
        assert_eq!(model.mounted(done), Section::About);
        assert!(model.settle(done));
        assert!(model.transition().is_none());
    }

    #[test]
    fn exactly_one_section_mounted_for_every_target() {
        for target in Section::ALL {
            let mut model = SectionViewModel::new(PHASE);
            let t0 = Instant::now();
            model.navigate(target, t0);
            let settled = t0 + PHASE * 2;
            assert_eq!(model.snapshot(settled).mounted, target);
            assert_eq!(model.active(), target);
        }
    }

    #[test]
    fn zero_duration_switches_immediately() {
        let mut model = SectionViewModel::new(Duration::ZERO);
        let now = Instant::now();
        model.navigate(Section::Skills, now);
        assert_eq!(model.mounted(now), Section::Skills);
        assert!(!model.is_transitioning(now));
    }

    #[test]
    fn renavigating_mid_exit_leaves_from_current_mount() {
        let mut model = SectionViewModel::new(PHASE);
        let t0 = Instant::now();
        model.navigate(Section::About, t0);
        let t1 = t0 + Duration::from_millis(200);
        model.navigate(Section::Resume, t1);
        let transition = model.transition().unwrap();
        assert_eq!(transition.from, Some(Section::Home));
        assert_eq!(transition.to, Section::Resume);
    }

    #[test]
    fn returning_to_leaving_section_cancels_exit() {
        let mut model = SectionViewModel::new(PHASE);
        let t0 = Instant::now();
        model.navigate(Section::About, t0);

        let t1 = t0 + Duration::from_millis(300);
        assert!(model.navigate(Section::Home, t1));
        assert_eq!(model.active(), Section::Home);
        assert!(model.transition().is_none());
        assert_eq!(model.mounted(t1), Section::Home);
        assert!(!model.is_transitioning(t1));
    }

    #[test]
    fn returning_during_enter_plays_a_new_transition() {
        let mut model = SectionViewModel::new(PHASE);
        let t0 = Instant::now();
        model.navigate(Section::About, t0);

        let t1 = t0 + PHASE + Duration::from_millis(100);
        assert!(model.navigate(Section::Home, t1));
        let transition = model.transition().unwrap();
        assert_eq!(transition.from, Some(Section::About));
        assert_eq!(transition.to, Section::Home);
    }

    #[test]
    fn pointer_is_recorded() {
        let mut model = SectionViewModel::new(PHASE);
        model.record_pointer(Pointer::new(12.0, 34.0));
        assert_eq!(model.pointer(), Pointer::new(12.0, 34.0));
        assert_eq!(model.snapshot(Instant::now()).pointer.x, 12.0);
    }

    #[test]
    fn ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("blog"), None);
    }
}
