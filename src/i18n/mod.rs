// SPDX-License-Identifier: MPL-2.0
//! Localized UI strings backed by Fluent.
//!
//! Catalogs live in `assets/i18n/<locale>.ftl` and are embedded at build
//! time. The locale is picked from the `--lang` flag, then the config file,
//! then the OS locale, and finally `en-US`. Unknown keys render as
//! `MISSING: <key>` so gaps are visible instead of silently blank.

pub mod fluent;

pub use fluent::I18n;
