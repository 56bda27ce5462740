// SPDX-License-Identifier: MPL-2.0
//! Media gallery view: the active media item, wrap-around arrows, and
//! one dot per item.

use super::Message;
use crate::i18n::I18n;
use crate::navigation::GalleryNavigator;
use crate::portfolio::Project;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, image, Column, Container, Image, Row, Space, Text},
    Element, Length,
};

pub struct GalleryContext<'a> {
    pub i18n: &'a I18n,
    pub project: &'a Project,
    pub gallery: &'a GalleryNavigator,
    pub playing: Option<usize>,
}

pub fn view<'a>(ctx: GalleryContext<'a>) -> Element<'a, Message> {
    let current = ctx.gallery.current_index();
    let item = &ctx.project.media[current];

    // Videos render their poster; playback state is shown as a badge.
    let picture = Image::new(image::Handle::from_path(item.display_source()))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MEDIA_HEIGHT));

    let frame = Container::new(picture)
        .width(Length::Fill)
        .style(styles::container::media_frame);

    let arrow = |label: &'static str, message: Message| {
        button(Text::new(label).size(typography::TITLE_MD))
            .on_press(message)
            .width(Length::Fixed(sizing::NAV_BUTTON))
            .style(styles::button::nav)
    };

    let strip = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(arrow("\u{2039}", Message::GalleryPrevious))
        .push(frame)
        .push(arrow("\u{203A}", Message::GalleryNext));

    let mut column = Column::new().spacing(spacing::XS).push(strip);

    if let Some(badge) = playback_badge(&ctx, current) {
        column = column.push(badge);
    }
    if let Some(caption) = &item.caption {
        column = column.push(
            Text::new(caption.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    column.push(dots(ctx.gallery)).into()
}

fn playback_badge<'a>(ctx: &GalleryContext<'a>, current: usize) -> Option<Element<'a, Message>> {
    if !ctx.project.media[current].is_video() {
        return None;
    }
    let key = if ctx.playing == Some(current) {
        "showcase-video-playing"
    } else {
        "showcase-video-paused"
    };
    Some(
        Text::new(ctx.i18n.tr(key))
            .size(typography::CAPTION)
            .color(palette::PRIMARY_500)
            .into(),
    )
}

fn dots<'a>(gallery: &GalleryNavigator) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for index in 0..gallery.len() {
        row = row.push(
            button(Space::new().width(Length::Shrink).height(Length::Shrink))
                .on_press(Message::GalleryDotPressed(index))
                .width(Length::Fixed(sizing::DOT))
                .height(Length::Fixed(sizing::DOT))
                .style(styles::button::dot(index == gallery.current_index())),
        );
    }
    Container::new(row)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}
