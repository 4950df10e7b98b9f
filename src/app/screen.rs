// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Top-level screens. The boot screen is shown once at startup and never
/// comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Boot,
    Main,
}
