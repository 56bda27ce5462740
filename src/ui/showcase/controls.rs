// SPDX-License-Identifier: MPL-2.0
//! Deck controls: previous/next buttons, the "current / total" counter,
//! and one indicator per project panel.
//!
//! Boundary policy is clamp, not wrap: at either end the corresponding
//! button loses its press handler and renders dimmed.

use super::Message;
use crate::i18n::I18n;
use crate::navigation::ProjectNavigator;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

pub fn view<'a>(i18n: &'a I18n, deck: &ProjectNavigator) -> Element<'a, Message> {
    let (position, total) = deck.position();

    let previous = button(Text::new(i18n.tr("showcase-prev-project")))
        .on_press_maybe(deck.has_previous().then_some(Message::DeckPrevious))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::nav);

    let next = button(Text::new(i18n.tr("showcase-next-project")))
        .on_press_maybe(deck.has_next().then_some(Message::DeckNext))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::nav);

    let counter = Text::new(format!("{position} / {total}"))
        .size(typography::BODY)
        .color(palette::GRAY_700);

    let mut indicators = Row::new().spacing(spacing::XS);
    for index in 0..deck.total() {
        indicators = indicators.push(
            button(Space::new().width(Length::Shrink).height(Length::Shrink))
                .on_press(Message::DeckIndicatorPressed(index))
                .width(Length::Fixed(sizing::INDICATOR))
                .height(Length::Fixed(sizing::INDICATOR))
                .style(styles::button::dot(index == deck.current_index())),
        );
    }

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(previous)
        .push(counter)
        .push(indicators)
        .push(next);

    Container::new(bar)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}
