// SPDX-License-Identifier: MPL-2.0
//! About screen: application name, version, and a short description.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment,
    widget::{button, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);

    let version = Text::new(format!(
        "{} {}",
        ctx.i18n.tr("app-title"),
        env!("CARGO_PKG_VERSION")
    ))
    .size(typography::BODY)
    .color(palette::GRAY_400);

    let description = Text::new(ctx.i18n.tr("about-description")).size(typography::BODY);

    let back_button = button(Text::new(ctx.i18n.tr("about-back")))
        .on_press(Message::Back)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(version)
        .push(description)
        .push(back_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
