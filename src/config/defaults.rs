// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Swipe**: Pixel thresholds for the two gesture surfaces
//! - **Playback**: Video autoplay behavior

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Minimum horizontal travel (px) before a deck-level swipe fires.
///
/// The deck surface additionally requires the horizontal displacement to
/// dominate the vertical one, so page-scroll style gestures are rejected.
pub const DEFAULT_DECK_SWIPE_THRESHOLD_PX: f32 = 60.0;

/// Minimum horizontal travel (px) before a gallery-level swipe fires.
pub const DEFAULT_GALLERY_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum allowed swipe threshold override.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum allowed swipe threshold override.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 300.0;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Whether a video clip starts playing the moment it becomes the active
/// gallery media.
pub const DEFAULT_VIDEO_AUTOPLAY: bool = true;

/// Ensures swipe threshold overrides stay inside the supported range so
/// persisted configs cannot request nonsensical gestures.
pub fn clamp_swipe_threshold(value: f32) -> f32 {
    value.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX)
}

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(MAX_SWIPE_THRESHOLD_PX > MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_DECK_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_DECK_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_GALLERY_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_GALLERY_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_defaults_are_valid() {
        assert_eq!(DEFAULT_DECK_SWIPE_THRESHOLD_PX, 60.0);
        assert_eq!(DEFAULT_GALLERY_SWIPE_THRESHOLD_PX, 50.0);
        assert!(DEFAULT_DECK_SWIPE_THRESHOLD_PX > DEFAULT_GALLERY_SWIPE_THRESHOLD_PX);
    }

    #[test]
    fn clamp_swipe_threshold_limits_range() {
        assert_eq!(clamp_swipe_threshold(1.0), MIN_SWIPE_THRESHOLD_PX);
        assert_eq!(clamp_swipe_threshold(5000.0), MAX_SWIPE_THRESHOLD_PX);
        assert_eq!(clamp_swipe_threshold(75.0), 75.0);
    }
}
