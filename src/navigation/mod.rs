// SPDX-License-Identifier: MPL-2.0
//! Navigation state machines for the two-level showcase.
//!
//! These components own the indices that decide what is visible; the view
//! layer is a derived projection and is never queried back for logic.
//!
//! - [`project`] - master deck over project panels (clamped at boundaries)
//! - [`gallery`] - nested media carousel per panel (wraps cyclically)
//! - [`swipe`] - gesture tracker that disambiguates the two surfaces

pub mod gallery;
pub mod project;
pub mod swipe;

pub use gallery::{GalleryChange, GalleryNavigator};
pub use project::{ProjectChange, ProjectNavigator};
pub use swipe::{SwipeAction, SwipeRegion, SwipeThresholds, SwipeTracker};
