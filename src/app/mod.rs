// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the showcase and the
//! about screen.
//!
//! The `App` struct wires together localization, configuration, and the
//! showcase component, and translates top-level messages into screen
//! switches. The portfolio manifest is loaded once here; a missing or
//! invalid manifest disables the showcase instead of aborting startup.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::I18n;
use crate::portfolio::Portfolio;
use crate::ui::showcase;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 600;

/// Manifest file looked up in the working directory when no path is
/// given on the command line.
pub const DEFAULT_MANIFEST: &str = "portfolio.toml";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    showcase: showcase::State,
    menu_open: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("showcase_disabled", &self.showcase.is_disabled())
            .finish()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the application from launcher `Flags`: loads config,
    /// resolves the locale, and reads the portfolio manifest.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match config::load(flags.config_dir.as_deref()) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("warning: falling back to default config: {err}");
                Config::default()
            }
        };
        let i18n = I18n::new(flags.lang.clone(), &config);

        let manifest_path = flags
            .manifest_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));

        let showcase = match Portfolio::load_from_path(&manifest_path) {
            Ok(portfolio) => showcase::State::new(portfolio, &config),
            Err(err) => {
                eprintln!(
                    "error: cannot load portfolio manifest {}: {err}",
                    manifest_path.display()
                );
                let key = match &err {
                    Error::Manifest(manifest_err) => manifest_err.i18n_key(),
                    _ => "error-manifest-unreadable",
                };
                showcase::State::disabled(key)
            }
        };

        let task = showcase.refresh_layout().map(Message::Showcase);
        let app = App {
            i18n,
            screen: Screen::Showcase,
            showcase,
            menu_open: false,
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.screen)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            menu_open: &mut self.menu_open,
            showcase: &mut self.showcase,
        };

        match message {
            Message::Showcase(showcase_message) => {
                update::handle_showcase_message(&mut ctx, showcase_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::About(about_message) => update::handle_about_message(&mut ctx, about_message),
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            showcase: &self.showcase,
            menu_open: self.menu_open,
        })
    }
}
