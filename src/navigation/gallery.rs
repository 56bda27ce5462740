// SPDX-License-Identifier: MPL-2.0
//! Nested gallery navigation within one project panel.
//!
//! Each panel owns one `GalleryNavigator` regardless of which panel the
//! master deck currently shows. Boundary policy is wrap-around: `next`
//! from the last media lands on the first and vice versa. The navigator
//! also reports playback effects, since a video must be paused the
//! instant it stops being the active media and started when it becomes
//! active.

use crate::portfolio::MediaKind;

/// Describes one applied media transition, in application order:
/// pause the outgoing video (if any), swap the active flags, start the
/// incoming video (if any). Playback is fire-and-forget; nothing here is
/// awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryChange {
    /// Media index whose video playback must be paused.
    pub pause: Option<usize>,
    pub deactivated: usize,
    pub activated: usize,
    /// Media index whose video playback should start.
    pub play: Option<usize>,
}

/// Navigation state for one panel's media carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryNavigator {
    current: usize,
    kinds: Vec<MediaKind>,
}

impl GalleryNavigator {
    /// Creates a gallery over the given media kinds, starting at the
    /// first item. An empty gallery is inert: every operation is a no-op.
    pub fn new(kinds: Vec<MediaKind>) -> Self {
        Self { current: 0, kinds }
    }

    /// Index of the currently active media.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of media items in this gallery.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The active media index when it is a video, `None` otherwise.
    pub fn active_video(&self) -> Option<usize> {
        match self.kinds.get(self.current) {
            Some(MediaKind::Video) => Some(self.current),
            _ => None,
        }
    }

    /// Navigates to `index`.
    ///
    /// Returns `None` when the gallery is empty, the index is out of
    /// range, or already current — repeated calls with the same index
    /// produce no further mutations.
    pub fn go_to(&mut self, index: usize) -> Option<GalleryChange> {
        if index == self.current || index >= self.kinds.len() {
            return None;
        }
        let change = GalleryChange {
            pause: self.active_video(),
            deactivated: self.current,
            activated: index,
            play: match self.kinds[index] {
                MediaKind::Video => Some(index),
                MediaKind::Image => None,
            },
        };
        self.current = index;
        Some(change)
    }

    /// Advances cyclically: from the last media back to the first.
    pub fn next(&mut self) -> Option<GalleryChange> {
        if self.kinds.is_empty() {
            return None;
        }
        let target = (self.current + 1) % self.kinds.len();
        self.go_to(target)
    }

    /// Steps back cyclically: from the first media to the last.
    pub fn previous(&mut self) -> Option<GalleryChange> {
        if self.kinds.is_empty() {
            return None;
        }
        let target = (self.current + self.kinds.len() - 1) % self.kinds.len();
        self.go_to(target)
    }

    /// Reset hook invoked by the deck whenever this gallery's panel
    /// becomes active again: equivalent to `go_to(0)`.
    pub fn reset(&mut self) -> Option<GalleryChange> {
        if self.kinds.is_empty() {
            return None;
        }
        self.go_to(0)
    }
}
