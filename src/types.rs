//! Shared types flowing into and out of the layout engine.
//!
//! [`MediaItem`] is what the dimension probe hands us; [`Section`] is what the
//! renderer receives. Everything here is serialized to JSON by the `layout`
//! command, so field names double as the output contract.

use serde::{Deserialize, Serialize};

/// One image or video to be laid out.
///
/// Immutable input: the engine never mutates an item, it produces a
/// [`LaidOutItem`] per placement instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Position in the overall gallery (lightbox navigation order).
    pub index: usize,
    /// Intrinsic pixel width.
    pub width: f64,
    /// Intrinsic pixel height. Must be positive.
    pub height: f64,
    #[serde(default)]
    pub is_video: bool,
    /// Opaque path or identifier, passed through untouched.
    pub source: String,
}

impl MediaItem {
    pub fn new(index: usize, width: f64, height: f64, source: impl Into<String>) -> Self {
        Self {
            index,
            width,
            height,
            is_video: false,
            source: source.into(),
        }
    }

    /// Builder-style toggle for video items.
    pub fn video(mut self) -> Self {
        self.is_video = true;
        self
    }

    /// Intrinsic width divided by intrinsic height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// A [`MediaItem`] placed in a row, uniformly scaled from its intrinsic size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutItem {
    #[serde(flatten)]
    pub item: MediaItem,
    pub final_width: f64,
    pub final_height: f64,
    /// Mirrors the owning row's visibility.
    pub hidden: bool,
}

/// One justified row. Items keep input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub items: Vec<LaidOutItem>,
    pub hidden: bool,
}

impl Row {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Shared height of every item in the row (rows are uniformly scaled).
    pub fn height(&self) -> f64 {
        self.items.first().map(|i| i.final_height).unwrap_or(0.0)
    }

    /// Set the row's visibility, keeping item flags in sync.
    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
        for item in &mut self.items {
            item.hidden = hidden;
        }
    }
}

/// A fully laid-out gallery section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    pub rows: Vec<Row>,
    /// Number of rows not hidden.
    pub visible_row_count: usize,
    /// True when at least one row is hidden and the renderer should offer
    /// a "see more" control.
    pub has_overflow: bool,
}

impl Section {
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    pub fn hidden_row_count(&self) -> usize {
        self.rows.len().saturating_sub(self.visible_row_count)
    }

    /// All placed items, in gallery order.
    pub fn items(&self) -> impl Iterator<Item = &LaidOutItem> {
        self.rows.iter().flat_map(|r| r.items.iter())
    }
}
