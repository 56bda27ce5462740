// SPDX-License-Identifier: MPL-2.0
//! Degraded view shown when no valid portfolio manifest is available.
//!
//! The showcase is disabled wholesale in that case; this screen explains
//! why and how to fix it instead of rendering half-wired navigation.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::{
    alignment,
    widget::{Column, Container, Text},
    Element, Length,
};

pub fn view<'a>(i18n: &'a I18n, reason_key: &'static str) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("empty-state-title")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("empty-state-subtitle"))
                .size(typography::BODY)
                .color(palette::GRAY_700),
        )
        .push(
            Text::new(i18n.tr(reason_key))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .push(
            Text::new(i18n.tr("empty-state-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
