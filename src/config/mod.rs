// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.

mod defaults;

pub use defaults::{
    clamp_swipe_threshold, DEFAULT_DECK_SWIPE_THRESHOLD_PX, DEFAULT_GALLERY_SWIPE_THRESHOLD_PX,
    DEFAULT_VIDEO_AUTOPLAY, MAX_SWIPE_THRESHOLD_PX, MIN_SWIPE_THRESHOLD_PX,
};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFolio";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub video_autoplay: Option<bool>,
    #[serde(default)]
    pub deck_swipe_threshold: Option<f32>,
    #[serde(default)]
    pub gallery_swipe_threshold: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            video_autoplay: Some(DEFAULT_VIDEO_AUTOPLAY),
            deck_swipe_threshold: Some(DEFAULT_DECK_SWIPE_THRESHOLD_PX),
            gallery_swipe_threshold: Some(DEFAULT_GALLERY_SWIPE_THRESHOLD_PX),
        }
    }
}

impl Config {
    /// Effective autoplay flag, falling back to the default when unset.
    pub fn video_autoplay(&self) -> bool {
        self.video_autoplay.unwrap_or(DEFAULT_VIDEO_AUTOPLAY)
    }

    /// Effective deck swipe threshold, clamped to the supported range.
    pub fn deck_swipe_threshold(&self) -> f32 {
        clamp_swipe_threshold(
            self.deck_swipe_threshold
                .unwrap_or(DEFAULT_DECK_SWIPE_THRESHOLD_PX),
        )
    }

    /// Effective gallery swipe threshold, clamped to the supported range.
    pub fn gallery_swipe_threshold(&self) -> f32 {
        clamp_swipe_threshold(
            self.gallery_swipe_threshold
                .unwrap_or(DEFAULT_GALLERY_SWIPE_THRESHOLD_PX),
        )
    }
}

fn get_default_config_path(config_dir_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = config_dir_override {
        return Some(dir.join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load(config_dir_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = get_default_config_path(config_dir_override) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config, config_dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = get_default_config_path(config_dir_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            language: Some("fr".to_string()),
            video_autoplay: Some(false),
            deck_swipe_threshold: Some(80.0),
            gallery_swipe_threshold: Some(40.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.video_autoplay, config.video_autoplay);
        assert_eq!(loaded.deck_swipe_threshold, config.deck_swipe_threshold);
        assert_eq!(
            loaded.gallery_swipe_threshold,
            config.gallery_swipe_threshold
        );
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn load_with_dir_override_prefers_that_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        save(&config, Some(temp_dir.path())).expect("save should succeed");

        let loaded = load(Some(temp_dir.path())).expect("load should succeed");
        assert_eq!(loaded.language, Some("en-US".to_string()));
    }

    #[test]
    fn default_config_enables_autoplay_with_reference_thresholds() {
        let config = Config::default();
        assert!(config.video_autoplay());
        assert_eq!(config.deck_swipe_threshold(), 60.0);
        assert_eq!(config.gallery_swipe_threshold(), 50.0);
    }

    #[test]
    fn out_of_range_threshold_is_clamped() {
        let config = Config {
            deck_swipe_threshold: Some(2.0),
            ..Config::default()
        };
        assert_eq!(config.deck_swipe_threshold(), MIN_SWIPE_THRESHOLD_PX);
    }
}
