// SPDX-License-Identifier: MPL-2.0
//! `neon_portfolio` is an animated, neon-styled developer portfolio built
//! with the Iced GUI framework.
//!
//! It opens on a timed boot sequence, then presents nine sections reachable
//! from a navbar, with animated section transitions, a cursor trail, and
//! localized text through Fluent.

pub mod app;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
