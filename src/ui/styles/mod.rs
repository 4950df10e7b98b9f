// SPDX-License-Identifier: MPL-2.0
//! Neon styles shared by every view.

pub mod button;
pub mod container;
