// SPDX-License-Identifier: MPL-2.0
//! End-to-end navigation scenarios over a realistic portfolio manifest.

use iced_folio::config::{self, Config};
use iced_folio::i18n::fluent::I18n;
use iced_folio::navigation::{
    GalleryNavigator, ProjectNavigator, SwipeRegion, SwipeThresholds, SwipeTracker,
};
use iced_folio::portfolio::Portfolio;
use iced::Point;
use std::io::Write;
use tempfile::tempdir;

const MANIFEST: &str = r#"
title = "Showcase"

[[projects]]
title = "Compiler"
summary = "A toy compiler"
tags = ["rust"]

[[projects.media]]
kind = "image"
source = "media/compiler-1.png"

[[projects]]
title = "Tracker"

[[projects]]
title = "Synth"

[[projects.media]]
kind = "image"
source = "media/synth-1.png"

[[projects.media]]
kind = "video"
source = "media/synth-demo.mp4"
poster = "media/synth-demo.png"

[[projects.media]]
kind = "image"
source = "media/synth-2.png"

[[projects]]
title = "Site"
"#;

fn load_portfolio() -> Portfolio {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("portfolio.toml");
    std::fs::File::create(&path)
        .expect("create manifest")
        .write_all(MANIFEST.as_bytes())
        .expect("write manifest");
    Portfolio::load_from_path(&path).expect("manifest should load")
}

#[test]
fn manifest_drives_deck_and_gallery_shapes() {
    let portfolio = load_portfolio();
    assert_eq!(portfolio.len(), 4);
    assert_eq!(portfolio.media_kinds(0).len(), 1);
    assert!(portfolio.media_kinds(1).is_empty());
    assert_eq!(portfolio.media_kinds(2).len(), 3);
}

#[test]
fn full_navigation_scenario() {
    let portfolio = load_portfolio();
    let mut deck = ProjectNavigator::new(portfolio.len());
    let mut galleries: Vec<GalleryNavigator> = (0..portfolio.len())
        .map(|i| GalleryNavigator::new(portfolio.media_kinds(i)))
        .collect();

    // Jump to the third panel and walk its gallery all the way around.
    let change = deck.go_to(2).expect("panel switch");
    assert_eq!(change.deactivated, 0);
    galleries[change.activated].reset();

    assert_eq!(galleries[2].current_index(), 0);
    let change = galleries[2].next().expect("step");
    assert_eq!(change.play, Some(1)); // the video
    let change = galleries[2].next().expect("step");
    assert_eq!(change.pause, Some(1));
    galleries[2].next().expect("wrap");
    assert_eq!(galleries[2].current_index(), 0);

    // Leave the panel mid-gallery and come back: position resets.
    galleries[2].next().expect("step");
    let change = deck.go_to(3).expect("panel switch");
    galleries[change.activated].reset();
    let change = deck.go_to(2).expect("panel switch");
    galleries[change.activated].reset();
    assert_eq!(galleries[2].current_index(), 0);

    // Deck clamps at the last panel.
    deck.go_to(3).expect("panel switch");
    assert!(deck.next().is_none());
    assert_eq!(deck.current_index(), 3);
}

#[test]
fn swipe_thresholds_come_from_config() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    let saved = Config {
        deck_swipe_threshold: Some(100.0),
        gallery_swipe_threshold: Some(20.0),
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("save config");
    let loaded = config::load_from_path(&path).expect("load config");

    let thresholds = SwipeThresholds {
        deck: loaded.deck_swipe_threshold(),
        gallery: loaded.gallery_swipe_threshold(),
    };

    let mut tracker = SwipeTracker::new();

    // 80 px leftward travel: below the configured deck threshold.
    tracker.begin(SwipeRegion::Deck, Point::new(300.0, 50.0));
    assert!(tracker.finish(Point::new(220.0, 50.0), thresholds).is_none());

    // The same travel easily clears the gallery threshold.
    tracker.begin(SwipeRegion::Gallery, Point::new(300.0, 50.0));
    assert!(tracker.finish(Point::new(220.0, 50.0), thresholds).is_some());
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let english = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&english, &path).expect("save config");
    let loaded = config::load_from_path(&path).expect("load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");

    let french = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("save config");
    let loaded = config::load_from_path(&path).expect("load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}
