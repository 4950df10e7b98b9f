// SPDX-License-Identifier: MPL-2.0
//! Domain layer - portfolio state with ZERO external dependencies.
//!
//! Everything here is plain `std` so it can be driven and tested without
//! a window.
//!
//! # Modules
//!
//! - [`boot`]: Boot screen counters ([`BootSequencer`](boot::BootSequencer),
//!   [`BootProgress`](boot::BootProgress))
//! - [`contact`]: Contact form ([`ContactForm`](contact::ContactForm))
//! - [`section`]: Navigation ([`Section`](section::Section),
//!   [`SectionViewModel`](section::SectionViewModel))

pub mod boot;
pub mod contact;
pub mod section;
