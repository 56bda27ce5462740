// SPDX-License-Identifier: MPL-2.0
//! The two-level showcase component: master project deck plus nested
//! media gallery.
//!
//! `State` owns the navigators whose indices are the single source of
//! truth; every active flag the views render is derived from them at
//! view time. Pointer presses and releases are fed in as raw events and
//! resolved by the [`SwipeTracker`], with the origin region decided by an
//! explicit bounds predicate on the measured gallery rectangle rather
//! than by event-capture precedence.

mod controls;
mod empty_state;
mod gallery;
mod panel;

use crate::config::Config;
use crate::i18n::I18n;
use crate::navigation::{
    GalleryNavigator, ProjectChange, ProjectNavigator, SwipeAction, SwipeRegion, SwipeThresholds,
    SwipeTracker,
};
use crate::portfolio::Portfolio;
use iced::widget::{selector, Id};
use iced::{Element, Point, Rectangle, Task};

/// Messages consumed by [`State::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Deck next button or swipe.
    DeckNext,
    /// Deck previous button or swipe.
    DeckPrevious,
    /// A project indicator was clicked.
    DeckIndicatorPressed(usize),
    /// Gallery next button or swipe.
    GalleryNext,
    /// Gallery previous button or swipe.
    GalleryPrevious,
    /// A gallery dot was clicked.
    GalleryDotPressed(usize),
    /// Mouse cursor moved (also fed by touch drags).
    PointerMoved(Point),
    /// Left mouse button pressed; position is the tracked cursor.
    PointerPressed,
    /// Left mouse button released.
    PointerReleased,
    /// A finger touched down at the given position.
    TouchStarted(Point),
    /// A finger lifted at the given position.
    TouchEnded(Point),
    /// Window layout changed; gallery bounds must be re-measured.
    LayoutChanged,
    /// Result of a gallery bounds measurement.
    GalleryBoundsMeasured(Option<Rectangle>),
}

/// Context required to render the showcase.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Showcase state: either an active deck over a validated portfolio, or a
/// disabled shell that renders the empty state and ignores all input.
pub struct State {
    portfolio: Option<Portfolio>,
    disabled_reason: Option<&'static str>,
    deck: ProjectNavigator,
    galleries: Vec<GalleryNavigator>,
    swipe: SwipeTracker,
    thresholds: SwipeThresholds,
    autoplay: bool,
    cursor: Point,
    gallery_bounds: Option<Rectangle>,
    gallery_region: Id,
    /// The (project, media) pair of the video currently playing, if any.
    playing: Option<(usize, usize)>,
}

impl State {
    /// Builds an active showcase over a validated portfolio.
    ///
    /// Callers must go through [`Portfolio::load_from_path`] first; an
    /// empty project list belongs in [`State::disabled`], never here.
    pub fn new(portfolio: Portfolio, config: &Config) -> Self {
        debug_assert!(
            !portfolio.is_empty(),
            "State::new requires a validated, non-empty portfolio"
        );
        let deck = ProjectNavigator::new(portfolio.len());
        let galleries = (0..portfolio.len())
            .map(|i| GalleryNavigator::new(portfolio.media_kinds(i)))
            .collect();

        Self {
            portfolio: Some(portfolio),
            disabled_reason: None,
            deck,
            galleries,
            swipe: SwipeTracker::new(),
            thresholds: SwipeThresholds {
                deck: config.deck_swipe_threshold(),
                gallery: config.gallery_swipe_threshold(),
            },
            autoplay: config.video_autoplay(),
            cursor: Point::ORIGIN,
            gallery_bounds: None,
            gallery_region: Id::unique(),
            playing: None,
        }
    }

    /// Builds a disabled showcase that degrades to the empty state.
    ///
    /// No partial operation: a missing or invalid manifest disables the
    /// whole component rather than leaving navigation half-wired.
    pub fn disabled(reason_key: &'static str) -> Self {
        Self {
            portfolio: None,
            disabled_reason: Some(reason_key),
            deck: ProjectNavigator::new(0),
            galleries: Vec::new(),
            swipe: SwipeTracker::new(),
            thresholds: SwipeThresholds::default(),
            autoplay: false,
            cursor: Point::ORIGIN,
            gallery_bounds: None,
            gallery_region: Id::unique(),
            playing: None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.portfolio.is_none()
    }

    /// Index of the currently active project panel.
    pub fn current_project(&self) -> usize {
        self.deck.current_index()
    }

    /// Current media index of one project's gallery.
    pub fn current_media(&self, project: usize) -> Option<usize> {
        self.galleries.get(project).map(|g| g.current_index())
    }

    /// The (project, media) pair of the playing video, if any.
    pub fn playing(&self) -> Option<(usize, usize)> {
        self.playing
    }

    /// Derived active flags for the project panels; the view renders
    /// exactly these.
    pub fn panel_flags(&self) -> Vec<bool> {
        (0..self.deck.total())
            .map(|i| i == self.deck.current_index())
            .collect()
    }

    /// Derived active flags for one gallery's media items.
    pub fn media_flags(&self, project: usize) -> Vec<bool> {
        match self.galleries.get(project) {
            Some(gallery) => (0..gallery.len())
                .map(|i| i == gallery.current_index())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Kicks off the initial gallery bounds measurement.
    pub fn refresh_layout(&self) -> Task<Message> {
        self.measure_gallery()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if self.portfolio.is_none() {
            // Disabled component: degrade to static content, ignore input.
            return Task::none();
        }

        match message {
            Message::DeckNext => {
                let change = self.deck.next();
                self.after_deck_change(change)
            }
            Message::DeckPrevious => {
                let change = self.deck.previous();
                self.after_deck_change(change)
            }
            Message::DeckIndicatorPressed(index) => {
                let change = self.deck.go_to(index);
                self.after_deck_change(change)
            }
            Message::GalleryNext => {
                let project = self.deck.current_index();
                let change = self.galleries[project].next();
                self.apply_gallery_change(project, change);
                Task::none()
            }
            Message::GalleryPrevious => {
                let project = self.deck.current_index();
                let change = self.galleries[project].previous();
                self.apply_gallery_change(project, change);
                Task::none()
            }
            Message::GalleryDotPressed(index) => {
                let project = self.deck.current_index();
                let change = self.galleries[project].go_to(index);
                self.apply_gallery_change(project, change);
                Task::none()
            }
            Message::PointerMoved(position) => {
                self.cursor = position;
                Task::none()
            }
            Message::PointerPressed => {
                self.begin_swipe(self.cursor);
                Task::none()
            }
            Message::PointerReleased => self.finish_swipe(self.cursor),
            Message::TouchStarted(position) => {
                self.cursor = position;
                self.begin_swipe(position);
                Task::none()
            }
            Message::TouchEnded(position) => {
                self.cursor = position;
                self.finish_swipe(position)
            }
            Message::LayoutChanged => self.measure_gallery(),
            Message::GalleryBoundsMeasured(bounds) => {
                self.gallery_bounds = bounds;
                Task::none()
            }
        }
    }

    fn after_deck_change(&mut self, change: Option<ProjectChange>) -> Task<Message> {
        let Some(change) = change else {
            return Task::none();
        };

        // Whatever was still playing belongs to the panel being left.
        self.playing = None;

        // Every panel starts its gallery at the first media when revisited.
        let reset = self.galleries[change.activated].reset();
        self.apply_gallery_change(change.activated, reset);

        // The new panel's media area can have a different footprint.
        self.measure_gallery()
    }

    fn apply_gallery_change(
        &mut self,
        project: usize,
        change: Option<crate::navigation::GalleryChange>,
    ) {
        let Some(change) = change else { return };

        if let Some(paused) = change.pause {
            if self.playing == Some((project, paused)) {
                self.playing = None;
            }
        }
        if let Some(media) = change.play {
            if self.autoplay {
                self.playing = Some((project, media));
            }
        }
    }

    fn begin_swipe(&mut self, point: Point) {
        let region = region_for(self.gallery_bounds, point);
        self.swipe.begin(region, point);
    }

    fn finish_swipe(&mut self, point: Point) -> Task<Message> {
        match self.swipe.finish(point, self.thresholds) {
            Some(SwipeAction::DeckNext) => {
                let change = self.deck.next();
                self.after_deck_change(change)
            }
            Some(SwipeAction::DeckPrevious) => {
                let change = self.deck.previous();
                self.after_deck_change(change)
            }
            Some(SwipeAction::GalleryNext) => {
                let project = self.deck.current_index();
                let change = self.galleries[project].next();
                self.apply_gallery_change(project, change);
                Task::none()
            }
            Some(SwipeAction::GalleryPrevious) => {
                let project = self.deck.current_index();
                let change = self.galleries[project].previous();
                self.apply_gallery_change(project, change);
                Task::none()
            }
            None => Task::none(),
        }
    }

    fn measure_gallery(&self) -> Task<Message> {
        selector::find(selector::id(self.gallery_region.clone()))
            .map(|target| Message::GalleryBoundsMeasured(target.and_then(|t| t.visible_bounds())))
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let Some(portfolio) = &self.portfolio else {
            return empty_state::view(
                ctx.i18n,
                self.disabled_reason.unwrap_or("error-manifest-invalid"),
            );
        };

        let project_index = self.deck.current_index();
        let project = &portfolio.projects[project_index];
        let gallery = &self.galleries[project_index];

        let panel = panel::view(panel::PanelContext {
            i18n: ctx.i18n,
            project,
            gallery,
            playing: self.playing.map(|(_, media)| media),
            gallery_region: self.gallery_region.clone(),
        });

        let controls = controls::view(ctx.i18n, &self.deck);

        iced::widget::Column::new()
            .spacing(crate::ui::design_tokens::spacing::MD)
            .padding(crate::ui::design_tokens::spacing::LG)
            .push(panel)
            .push(controls)
            .into()
    }
}

/// Explicit origin predicate: a gesture belongs to the gallery when it
/// starts inside the measured gallery rectangle.
fn region_for(bounds: Option<Rectangle>, point: Point) -> SwipeRegion {
    match bounds {
        Some(bounds) if bounds.contains(point) => SwipeRegion::Gallery,
        _ => SwipeRegion::Deck,
    }
}
