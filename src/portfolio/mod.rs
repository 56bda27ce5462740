// SPDX-License-Identifier: MPL-2.0
//! Portfolio manifest: the static description of projects and their media.
//!
//! The manifest (`portfolio.toml`) plays the role the static page markup
//! plays for a web portfolio: it is read once at startup, validated as a
//! whole, and never mutated afterwards. Every showcase component derives
//! its shape (project count, per-project media lists) from this model.

use crate::error::{ManifestError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of a gallery media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// One media item inside a project gallery.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    /// Path to the image file, or to the clip for videos.
    pub source: PathBuf,
    /// Optional still shown in place of a video clip.
    #[serde(default)]
    pub poster: Option<PathBuf>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl MediaItem {
    /// Whether this item is a playable clip.
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    /// Path to display for this item: the poster for videos that have one,
    /// the source otherwise.
    pub fn display_source(&self) -> &Path {
        match (&self.kind, &self.poster) {
            (MediaKind::Video, Some(poster)) => poster,
            _ => &self.source,
        }
    }
}

/// One project case-study: the unit the master deck navigates.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ordered gallery media. May be empty; the gallery is then inert.
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

/// The whole portfolio, loaded once from `portfolio.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub title: String,
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Loads and validates a manifest file.
    ///
    /// Validation happens once here; the navigation components assume a
    /// well-formed portfolio and never re-check element presence per call.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ManifestError::Unreadable(format!("{}: {}", path.display(), e)))?;
        let portfolio: Portfolio =
            toml::from_str(&content).map_err(|e| ManifestError::Invalid(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<()> {
        if self.projects.is_empty() {
            return Err(ManifestError::Empty.into());
        }
        for (i, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(
                    ManifestError::Invalid(format!("project {} has an empty title", i)).into(),
                );
            }
            for (j, item) in project.media.iter().enumerate() {
                if item.source.as_os_str().is_empty() {
                    return Err(ManifestError::Invalid(format!(
                        "project {} media {} has an empty source",
                        i, j
                    ))
                    .into());
                }
            }
        }
        Ok(())
    }

    /// Number of projects in the deck.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Media kinds of one project's gallery, in order.
    pub fn media_kinds(&self, project: usize) -> Vec<MediaKind> {
        self.projects
            .get(project)
            .map(|p| p.media.iter().map(|m| m.kind).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const SAMPLE_MANIFEST: &str = r#"
title = "Showcase"

[[projects]]
title = "Weather Station"
summary = "Solar powered weather station"
tags = ["hardware", "rust"]

[[projects.media]]
kind = "image"
source = "media/station.jpg"

[[projects.media]]
kind = "video"
source = "media/station-demo.mp4"
poster = "media/station-poster.jpg"
caption = "Live demo"

[[projects]]
title = "Trail Mapper"
"#;

    fn write_manifest(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("portfolio.toml");
        let mut file = fs::File::create(&path).expect("failed to create manifest");
        file.write_all(content.as_bytes())
            .expect("failed to write manifest");
        path
    }

    #[test]
    fn load_parses_projects_and_media() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(temp_dir.path(), SAMPLE_MANIFEST);

        let portfolio = Portfolio::load_from_path(&path).expect("load failed");
        assert_eq!(portfolio.title, "Showcase");
        assert_eq!(portfolio.len(), 2);
        assert_eq!(portfolio.projects[0].media.len(), 2);
        assert!(portfolio.projects[0].media[1].is_video());
        assert!(portfolio.projects[1].media.is_empty());
    }

    #[test]
    fn load_reports_unreadable_file() {
        let err = Portfolio::load_from_path(Path::new("/nonexistent/portfolio.toml"))
            .expect_err("expected failure");
        assert!(matches!(
            err,
            crate::error::Error::Manifest(ManifestError::Unreadable(_))
        ));
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(temp_dir.path(), "projects = 3");

        let err = Portfolio::load_from_path(&path).expect_err("expected failure");
        assert!(matches!(
            err,
            crate::error::Error::Manifest(ManifestError::Invalid(_))
        ));
    }

    #[test]
    fn load_rejects_empty_project_list() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(temp_dir.path(), "projects = []");

        let err = Portfolio::load_from_path(&path).expect_err("expected failure");
        assert!(matches!(
            err,
            crate::error::Error::Manifest(ManifestError::Empty)
        ));
    }

    #[test]
    fn load_rejects_blank_title() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(
            temp_dir.path(),
            "[[projects]]\ntitle = \"  \"\n",
        );

        let err = Portfolio::load_from_path(&path).expect_err("expected failure");
        assert!(matches!(
            err,
            crate::error::Error::Manifest(ManifestError::Invalid(_))
        ));
    }

    #[test]
    fn display_source_prefers_video_poster() {
        let item = MediaItem {
            kind: MediaKind::Video,
            source: PathBuf::from("clip.mp4"),
            poster: Some(PathBuf::from("poster.jpg")),
            caption: None,
        };
        assert_eq!(item.display_source(), Path::new("poster.jpg"));

        let image = MediaItem {
            kind: MediaKind::Image,
            source: PathBuf::from("shot.png"),
            poster: None,
            caption: None,
        };
        assert_eq!(image.display_source(), Path::new("shot.png"));
    }

    #[test]
    fn media_kinds_returns_gallery_shape() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(temp_dir.path(), SAMPLE_MANIFEST);
        let portfolio = Portfolio::load_from_path(&path).expect("load failed");

        assert_eq!(
            portfolio.media_kinds(0),
            vec![MediaKind::Image, MediaKind::Video]
        );
        assert!(portfolio.media_kinds(1).is_empty());
        assert!(portfolio.media_kinds(99).is_empty());
    }
}
