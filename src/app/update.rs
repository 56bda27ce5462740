// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the top-level update loop.

use super::{Message, Screen};
use crate::ui::{about, navbar, showcase};
use iced::Task;

pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub menu_open: &'a mut bool,
    pub showcase: &'a mut showcase::State,
}

pub fn handle_showcase_message(
    ctx: &mut UpdateContext<'_>,
    message: showcase::Message,
) -> Task<Message> {
    ctx.showcase.update(message).map(Message::Showcase)
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        navbar::Event::None => Task::none(),
        navbar::Event::OpenShowcase => switch_screen(ctx, Screen::Showcase),
        navbar::Event::OpenAbout => switch_screen(ctx, Screen::About),
    }
}

pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: about::Message) -> Task<Message> {
    match message {
        about::Message::Back => switch_screen(ctx, Screen::Showcase),
    }
}

pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    switch_screen(ctx, target)
}

fn switch_screen(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }
    *ctx.screen = target;

    // Coming back to the showcase invalidates any stale gallery bounds.
    if target == Screen::Showcase {
        ctx.showcase.refresh_layout().map(Message::Showcase)
    } else {
        Task::none()
    }
}
