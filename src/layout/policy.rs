//! Per-section layout policy.
//!
//! [`SectionPolicy`] is the configuration record (what `layout.toml` resolves
//! to for one section). [`LayoutMode`] is the branch the builder takes,
//! decided once from the policy's optional fields:
//!
//! | Policy fields present | Mode |
//! |---|---|
//! | non-empty `custom_rows` | [`LayoutMode::CustomRows`] |
//! | `first_row_image_count > 0` | [`LayoutMode::FirstRowOverride`] |
//! | neither | [`LayoutMode::Default`] |
//!
//! `custom_rows` wins when both are set.

use serde::{Deserialize, Serialize};

use super::error::LayoutError;

/// One hand-shaped row in a custom layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RowSpec {
    /// Items to take for this row.
    #[serde(default = "default_row_count")]
    pub count: usize,
    /// Informational: a one-item row already spans the full width.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub full_width: bool,
}

fn default_row_count() -> usize {
    1
}

impl RowSpec {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            full_width: false,
        }
    }

    pub fn full_width() -> Self {
        Self {
            count: 1,
            full_width: true,
        }
    }
}

/// Layout parameters for one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionPolicy {
    /// Row width in pixels every row is stretched to.
    pub container_width: f64,
    /// Height items are scaled to before packing.
    pub target_row_height: f64,
    /// Horizontal space between adjacent items.
    pub gap: f64,
    /// Row floor. Values below 1 are treated as 1.
    pub min_images_per_row: i64,
    /// Disable row truncation entirely.
    pub show_all_rows: bool,
    /// Rows shown before the rest are hidden behind an overflow control.
    pub visible_row_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_rows: Option<Vec<RowSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_row_image_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_image_large: Option<bool>,
}

impl Default for SectionPolicy {
    fn default() -> Self {
        Self {
            container_width: 1000.0,
            target_row_height: 300.0,
            gap: 10.0,
            min_images_per_row: 3,
            show_all_rows: false,
            visible_row_count: 3,
            custom_rows: None,
            first_row_image_count: None,
            first_image_large: None,
        }
    }
}

/// The branch the section builder follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode<'a> {
    Default,
    FirstRowOverride { count: usize, first_image_large: bool },
    CustomRows(&'a [RowSpec]),
}

impl LayoutMode<'_> {
    /// Short label used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::Default => "default",
            LayoutMode::FirstRowOverride { .. } => "first-row",
            LayoutMode::CustomRows(_) => "custom",
        }
    }
}

/// Parameters the greedy packer needs, with the floor already coerced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackParams {
    pub container_width: f64,
    pub target_row_height: f64,
    pub gap: f64,
    pub min_images_per_row: usize,
}

impl SectionPolicy {
    /// Reject geometry that cannot produce positive, finite rows.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.container_width.is_finite() && self.container_width > 0.0) {
            return Err(LayoutError::PolicyOutOfRange(format!(
                "container_width must be positive, got {}",
                self.container_width
            )));
        }
        if !(self.target_row_height.is_finite() && self.target_row_height > 0.0) {
            return Err(LayoutError::PolicyOutOfRange(format!(
                "target_row_height must be positive, got {}",
                self.target_row_height
            )));
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            return Err(LayoutError::PolicyOutOfRange(format!(
                "gap must be non-negative, got {}",
                self.gap
            )));
        }
        Ok(())
    }

    /// Row floor, coerced to at least 1.
    pub fn effective_min_images_per_row(&self) -> usize {
        self.min_images_per_row.max(1) as usize
    }

    pub fn pack_params(&self) -> PackParams {
        PackParams {
            container_width: self.container_width,
            target_row_height: self.target_row_height,
            gap: self.gap,
            min_images_per_row: self.effective_min_images_per_row(),
        }
    }

    /// Resolve which builder branch applies.
    ///
    /// An empty `custom_rows` list and a zero `first_row_image_count` count as
    /// absent.
    pub fn mode(&self) -> LayoutMode<'_> {
        match (&self.custom_rows, self.first_row_image_count) {
            (Some(rows), _) if !rows.is_empty() => LayoutMode::CustomRows(rows),
            (_, Some(count)) if count > 0 => LayoutMode::FirstRowOverride {
                count,
                first_image_large: self.first_image_large.unwrap_or(false),
            },
            _ => LayoutMode::Default,
        }
    }
}
