// SPDX-License-Identifier: MPL-2.0
use super::Screen;
use crate::ui::{about, navbar, showcase};
use std::path::PathBuf;

/// Launch options resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override, e.g. `--lang fr`.
    pub lang: Option<String>,
    /// Portfolio manifest path; defaults to `portfolio.toml`.
    pub manifest_path: Option<PathBuf>,
    /// Config directory override, used by tests.
    pub config_dir: Option<PathBuf>,
}

/// Top-level application messages.
#[derive(Debug, Clone)]
pub enum Message {
    Showcase(showcase::Message),
    Navbar(navbar::Message),
    About(about::Message),
    SwitchScreen(Screen),
}
