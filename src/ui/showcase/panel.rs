// SPDX-License-Identifier: MPL-2.0
//! Project panel: textual content plus the nested media gallery.

use super::{gallery, Message};
use crate::i18n::I18n;
use crate::navigation::GalleryNavigator;
use crate::portfolio::Project;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{Column, Container, Id, Row, Text},
    Element, Length,
};

pub struct PanelContext<'a> {
    pub i18n: &'a I18n,
    pub project: &'a Project,
    pub gallery: &'a GalleryNavigator,
    /// Media index of the playing video in this panel, if any.
    pub playing: Option<usize>,
    /// Stable id of the gallery container, measured for swipe routing.
    pub gallery_region: Id,
}

pub fn view<'a>(ctx: PanelContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.project.title.as_str()).size(typography::TITLE_LG);

    let mut tags = Row::new().spacing(spacing::XS);
    for tag in &ctx.project.tags {
        tags = tags.push(
            Container::new(
                Text::new(tag.as_str())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_700),
            )
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::panel),
        );
    }

    let summary = Text::new(ctx.project.summary.as_str()).size(typography::BODY);

    let media: Element<'a, Message> = if ctx.gallery.is_empty() {
        Text::new(ctx.i18n.tr("showcase-no-media"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400)
            .into()
    } else {
        gallery::view(gallery::GalleryContext {
            i18n: ctx.i18n,
            project: ctx.project,
            gallery: ctx.gallery,
            playing: ctx.playing,
        })
    };

    // The measured rectangle of this container decides whether a gesture
    // belongs to the gallery or to the deck.
    let media_area = Container::new(media)
        .id(ctx.gallery_region)
        .width(Length::Fill);

    Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(tags)
        .push(summary)
        .push(media_area)
        .into()
}
