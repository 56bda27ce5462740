// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level navigation.
//!
//! The menu button toggles a small dropdown giving access to the
//! showcase and the about screen. Choosing any entry closes the menu,
//! like a mobile menu closing when a link is tapped. The navbar owns no
//! slider state; it only reports events upward.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    OpenShowcase,
    OpenAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenShowcase,
    OpenAbout,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::OpenShowcase => {
            *menu_open = false;
            Event::OpenShowcase
        }
        Message::OpenAbout => {
            *menu_open = false;
            Event::OpenAbout
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD);

    let menu_button = button(Text::new("\u{2630}"))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::menu_entry);

    let top_bar = Row::new()
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(menu_button);

    let mut content = Column::new().width(Length::Fill).push(top_bar);

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let entry = |label: String, message: Message| {
        button(Text::new(label))
            .on_press(message)
            .padding([spacing::XXS, spacing::MD])
            .width(Length::Fill)
            .style(styles::button::menu_entry)
    };

    let menu = Column::new()
        .spacing(spacing::XXS)
        .push(entry(
            ctx.i18n.tr("navbar-menu-projects"),
            Message::OpenShowcase,
        ))
        .push(entry(ctx.i18n.tr("navbar-menu-about"), Message::OpenAbout));

    Container::new(menu)
        .padding(spacing::XS)
        .width(Length::Fixed(220.0))
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_flips_state() {
        let mut open = false;
        assert!(matches!(update(Message::ToggleMenu, &mut open), Event::None));
        assert!(open);
        update(Message::ToggleMenu, &mut open);
        assert!(!open);
    }

    #[test]
    fn choosing_an_entry_closes_the_menu() {
        let mut open = true;
        let event = update(Message::OpenAbout, &mut open);
        assert!(matches!(event, Event::OpenAbout));
        assert!(!open);

        let mut open = true;
        let event = update(Message::OpenShowcase, &mut open);
        assert!(matches!(event, Event::OpenShowcase));
        assert!(!open);
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            menu_open: true,
        });
    }
}
