// SPDX-License-Identifier: MPL-2.0
//! Localization support built on Fluent.
//!
//! Translations live in `assets/i18n/*.ftl` and are embedded into the
//! binary. Locale resolution order: CLI flag, config file, OS locale.

pub mod fluent;

pub use fluent::I18n;
