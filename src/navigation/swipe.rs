// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe tracking with origin-based disambiguation.
//!
//! Two independent gesture surfaces exist: the panel text area (deck) and
//! the media area nested inside it (gallery). Which slider a gesture
//! drives is decided by where the gesture *began*, recorded as an explicit
//! region when the press is fed in. A deck action can therefore never
//! fire from a gesture that originated inside the gallery, no matter how
//! far the finger travels.

use iced::Point;

use crate::config;

/// Region a gesture originated in, determined by the UI wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeRegion {
    Deck,
    Gallery,
}

/// Resolved gesture outcome, routed by the showcase update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    DeckNext,
    DeckPrevious,
    GalleryNext,
    GalleryPrevious,
}

/// Pixel thresholds for the two surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    /// Deck swipes must travel at least this far horizontally and the
    /// horizontal displacement must dominate the vertical one.
    pub deck: f32,
    /// Gallery swipes only test horizontal travel.
    pub gallery: f32,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            deck: config::DEFAULT_DECK_SWIPE_THRESHOLD_PX,
            gallery: config::DEFAULT_GALLERY_SWIPE_THRESHOLD_PX,
        }
    }
}

/// Tracks at most one in-flight gesture. Single pointer only; a second
/// press before a release simply restarts the gesture.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<(SwipeRegion, Point)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start of a gesture and the region it originated in.
    pub fn begin(&mut self, region: SwipeRegion, point: Point) {
        self.start = Some((region, point));
    }

    /// Whether a gesture is currently in flight.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Abandons the in-flight gesture, if any.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Completes the gesture at `point` and resolves it against the
    /// thresholds. Returns `None` for taps, short swipes, near-vertical
    /// deck gestures, and releases with no matching press.
    pub fn finish(&mut self, point: Point, thresholds: SwipeThresholds) -> Option<SwipeAction> {
        let (region, start) = self.start.take()?;
        let dx = start.x - point.x;
        let dy = (start.y - point.y).abs();

        match region {
            SwipeRegion::Deck => {
                if dx.abs() > thresholds.deck && dx.abs() > dy {
                    if dx > 0.0 {
                        Some(SwipeAction::DeckNext)
                    } else {
                        Some(SwipeAction::DeckPrevious)
                    }
                } else {
                    None
                }
            }
            SwipeRegion::Gallery => {
                if dx > thresholds.gallery {
                    Some(SwipeAction::GalleryNext)
                } else if dx < -thresholds.gallery {
                    Some(SwipeAction::GalleryPrevious)
                } else {
                    None
                }
            }
        }
    }
}
