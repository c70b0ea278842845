//! Gallery-level driver: many sections, one manifest.
//!
//! The dimension probe (out of scope here) writes a `gallery.json` listing
//! sections in page order, each with its items in display order:
//!
//! ```json
//! {
//!   "sections": [
//!     {
//!       "key": "main",
//!       "title": "Display",
//!       "items": [
//!         { "src": "gallery/8-display/01.mp4", "width": 1920, "height": 1080 },
//!         { "src": "gallery/8-display/02.jpg", "width": 1200, "height": 800 }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! [`GalleryManifest::media_items`] turns entries into [`MediaItem`]s with a
//! gallery-wide `index` (continuing across sections, so a lightbox can walk
//! the whole page) and `is_video` inferred from the extension when omitted.
//!
//! Sections are laid out in parallel using [rayon](https://docs.rs/rayon).
//! Each section resolves its own policy and fails on its own: a broken
//! section is reported in its [`SectionOutcome`] and never stops the rest.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{ConfigError, LayoutConfig};
use crate::layout::build_section;
use crate::types::{MediaItem, Section};

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Extensions treated as video when an entry doesn't say.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov"];

/// Input manifest produced by the dimension probe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryManifest {
    pub sections: Vec<SectionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionEntry {
    /// Looks up `[sections.<key>]` in the layout config.
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemEntry {
    pub src: String,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_video: Option<bool>,
}

impl SectionEntry {
    /// Display title: explicit title, or the key with any `N-` prefix
    /// stripped and dashes turned into spaces (`4-leaky-people` → "leaky people").
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        let name = match self.key.split_once('-') {
            Some((prefix, rest)) if prefix.parse::<u32>().is_ok() => rest,
            _ => self.key.as_str(),
        };
        name.replace('-', " ")
    }
}

/// Whether a source path names a video, judged by extension (case-insensitive).
pub fn is_video_source(src: &str) -> bool {
    Path::new(src)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|v| ext.eq_ignore_ascii_case(v))
        })
}

impl GalleryManifest {
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Convert every section's entries to [`MediaItem`]s, numbering items
    /// across the whole gallery in manifest order.
    pub fn media_items(&self) -> Vec<Vec<MediaItem>> {
        let mut next_index = 0;
        self.sections
            .iter()
            .map(|section| {
                section
                    .items
                    .iter()
                    .map(|entry| {
                        let item = MediaItem {
                            index: next_index,
                            width: entry.width,
                            height: entry.height,
                            is_video: entry.is_video.unwrap_or_else(|| is_video_source(&entry.src)),
                            source: entry.src.clone(),
                        };
                        next_index += 1;
                        item
                    })
                    .collect()
            })
            .collect()
    }
}

/// Layout result for one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionOutcome {
    Laid(Section),
    Failed { error: String },
}

impl SectionOutcome {
    pub fn section(&self) -> Option<&Section> {
        match self {
            SectionOutcome::Laid(section) => Some(section),
            SectionOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SectionOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionLayout {
    pub key: String,
    pub title: String,
    #[serde(flatten)]
    pub outcome: SectionOutcome,
}

/// Output handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GalleryLayout {
    pub sections: Vec<SectionLayout>,
}

impl GalleryLayout {
    pub fn failed_count(&self) -> usize {
        self.sections.iter().filter(|s| s.outcome.is_failed()).count()
    }
}

/// Lay out every section of a gallery.
///
/// Output order matches manifest order regardless of how rayon schedules
/// the work.
pub fn layout_gallery(manifest: &GalleryManifest, config: &LayoutConfig) -> GalleryLayout {
    let items = manifest.media_items();

    let sections = manifest
        .sections
        .par_iter()
        .zip(items.par_iter())
        .map(|(entry, items)| SectionLayout {
            key: entry.key.clone(),
            title: entry.display_title(),
            outcome: layout_one(entry, items, config),
        })
        .collect();

    GalleryLayout { sections }
}

/// Load the layout config and the manifest, then lay out the gallery.
///
/// Only unreadable or malformed inputs are errors here; per-section layout
/// failures are reported inside the returned [`GalleryLayout`].
pub fn layout_from_files(
    manifest_path: &Path,
    config_path: &Path,
) -> Result<GalleryLayout, GalleryError> {
    let config = crate::config::load_config(config_path)?;
    let manifest = GalleryManifest::load(manifest_path)?;
    Ok(layout_gallery(&manifest, &config))
}

fn layout_one(entry: &SectionEntry, items: &[MediaItem], config: &LayoutConfig) -> SectionOutcome {
    let result = config
        .resolve_policy(&entry.key)
        .map_err(|e| e.to_string())
        .and_then(|policy| build_section(items, &policy).map_err(|e| e.to_string()));

    match result {
        Ok(section) => {
            debug!(
                section = %entry.key,
                rows = section.rows.len(),
                visible = section.visible_row_count,
                "section done"
            );
            SectionOutcome::Laid(section)
        }
        Err(error) => {
            warn!(section = %entry.key, %error, "section layout failed");
            SectionOutcome::Failed { error }
        }
    }
}
