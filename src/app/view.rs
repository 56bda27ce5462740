// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition: navbar above the active screen.

use super::{Message, Screen};
use crate::i18n::I18n;
use crate::ui::{about, navbar, showcase};
use iced::{
    widget::{Column, Container},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub showcase: &'a showcase::State,
    pub menu_open: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
    })
    .map(Message::Navbar);

    let content: Element<'a, Message> = match ctx.screen {
        Screen::Showcase => ctx
            .showcase
            .view(showcase::ViewContext { i18n: ctx.i18n })
            .map(Message::Showcase),
        Screen::About => about::view(about::ViewContext { i18n: ctx.i18n }).map(Message::About),
    };

    Column::new()
        .push(navbar)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}
