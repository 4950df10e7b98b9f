// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: every component
//! exposes a `view` over a borrowed context and, where it is interactive, a
//! `Message`/`Event` pair handled by the application.
//!
//! # Screens
//!
//! - [`boot_screen`] - Timed boot sequence shown at startup
//! - [`sections`] - The nine portfolio sections of the main screen
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Section navigation with a compact hamburger mode
//! - [`notifications`] - Toast notification system for user feedback
//! - [`effects`] - Backdrops, cursor trail, parallax and pulses
//! - [`transition`] - Section exit/enter animation parameters
//! - [`components`] - Reusable cards, headings and grids
//! - [`widgets`] - Canvas widgets (holographic ring, meter)
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod boot_screen;
pub mod components;
pub mod design_tokens;
pub mod effects;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod transition;
pub mod widgets;
