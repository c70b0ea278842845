//! Layout configuration module.
//!
//! Handles loading, validating, and merging `layout.toml`. Configuration is
//! layered: stock defaults are overridden by the file's `[defaults]` table,
//! which is in turn overridden per section by `[sections.<key>]`.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [defaults]
//! container_width = 1000.0   # Row width every row is stretched to (px)
//! target_row_height = 300.0  # Height items are scaled to before packing (px)
//! gap = 10.0                 # Space between items in a row (px)
//! min_images_per_row = 3     # Row floor; values below 1 behave as 1
//! show_all_rows = false      # Disable "see more" truncation
//! visible_row_count = 3      # Rows shown before truncation
//!
//! [sections."4-leaky-people"]
//! custom_rows = [{ count = 1, full_width = true }, { count = 4 }, { count = 5 }]
//!
//! [sections.main]
//! show_all_rows = true
//! first_row_image_count = 2
//! first_image_large = true
//! ```
//!
//! ## Partial Configuration
//!
//! Section tables are sparse: they name only the keys that differ from
//! `[defaults]`. Each section's policy is resolved once, before layout, and
//! handed to the engine by reference.
//!
//! Unknown keys are rejected to catch typos early, in `[defaults]` and in
//! every section table. Bad geometry in `[defaults]` is a config error since
//! it would fail every section; bad geometry in one section table only fails
//! that section at layout time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::layout::SectionPolicy;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Layout configuration loaded from `layout.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Policy applied to every section.
    pub defaults: SectionPolicy,
    /// Sparse per-section overrides keyed by section key.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub sections: BTreeMap<String, toml::Table>,
}

impl LayoutConfig {
    /// Validate the defaults and the shape of every section override.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.defaults
            .validate()
            .map_err(|e| ConfigError::Validation(format!("defaults: {e}")))?;
        for key in self.sections.keys() {
            self.resolve_policy(key)?;
        }
        Ok(())
    }

    /// Resolve the effective policy for a section.
    ///
    /// Sections without an override table get the defaults unchanged. The
    /// result is not geometry-checked here; the layout engine does that so a
    /// bad override only fails its own section.
    pub fn resolve_policy(&self, key: &str) -> Result<SectionPolicy, ConfigError> {
        let Some(overlay) = self.sections.get(key) else {
            return Ok(self.defaults.clone());
        };
        let base = toml::Value::try_from(&self.defaults)?;
        let merged = merge_toml(base, toml::Value::Table(overlay.clone()));
        merged.try_into().map_err(|e: toml::de::Error| {
            ConfigError::Validation(format!("sections.{key}: {}", e.message()))
        })
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(LayoutConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an overlay
///   `custom_rows` list replaces rather than extends.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<LayoutConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: LayoutConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a `layout.toml` path.
///
/// A missing file yields the stock defaults. User values are merged on top
/// of the defaults, unknown keys are rejected, and the result is validated.
pub fn load_config(path: &Path) -> Result<LayoutConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `layout.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Justified Rows Layout Configuration
# ===================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Defaults for every section
# ---------------------------------------------------------------------------
[defaults]
# Width in pixels every row is stretched to exactly.
container_width = 1000.0

# Height items are scaled to before packing. Rows end up taller or shorter
# than this once stretched to the container width.
target_row_height = 300.0

# Horizontal space between adjacent items in a row, in pixels.
gap = 10.0

# Minimum items per row before width is checked. The last row of a section
# may have fewer. Values below 1 behave as 1.
min_images_per_row = 3

# Show every row instead of hiding rows past visible_row_count.
show_all_rows = false

# Rows shown before the rest are hidden behind a "see more" control.
visible_row_count = 3

# ---------------------------------------------------------------------------
# Per-section overrides
# ---------------------------------------------------------------------------
# Each [sections.<key>] table overrides only the keys it names. Keys match
# the section keys in the gallery manifest.
#
# Hand-shaped rows: the listed counts are taken in order, anything left over
# is packed normally. A one-item row always spans the full width.
# [sections."4-leaky-people"]
# custom_rows = [
#     { count = 1, full_width = true },
#     { count = 4 },
#     { count = 5 },
# ]
#
# Distinguished first row: the first N items share one row. With
# first_image_large, leading videos each get their own full-width row first.
# [sections.main]
# show_all_rows = true
# first_row_image_count = 2
# first_image_large = true
#
# Dense small thumbnails:
# [sections.food]
# min_images_per_row = 8
# target_row_height = 120.0
"##
}
