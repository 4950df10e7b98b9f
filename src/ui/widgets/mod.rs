// SPDX-License-Identifier: MPL-2.0
pub mod holo_ring;
pub mod meter;

pub use holo_ring::HoloRing;
pub use meter::Meter;
