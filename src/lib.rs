// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a portfolio showcase viewer built with the Iced GUI
//! framework.
//!
//! It renders a deck of project panels, each carrying a nested media
//! gallery, and navigates them with buttons, indicators, keyboard
//! shortcuts, and touch swipes. The deck clamps at its ends while each
//! gallery wraps around; a gesture started on the gallery can never move
//! the deck.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod navigation;
pub mod portfolio;
pub mod ui;
