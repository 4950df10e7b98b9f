// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across sections.
//!
//! - [`project_card`] - Accent-colored project card with hover glow and tilt
//! - [`heading`] - Section title block and small labelled primitives
//!   (chips, stat tiles)
//! - [`grid`] - Fixed-column layout for card collections

pub mod grid;
pub mod heading;
pub mod project_card;

pub use grid::grid;
pub use heading::{chip, heading, stat_tile};
pub use project_card::{CardId, ProjectCard};
