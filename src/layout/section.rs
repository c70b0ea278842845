//! Section layout: policy handling on top of the packer.
//!
//! A section is laid out in three steps:
//!
//! 1. **Validate** the policy geometry and every item's dimensions. A bad
//!    input fails the whole section before any row is built.
//! 2. **Build rows** according to the resolved [`LayoutMode`]. Custom rows and
//!    the first-row override consume a prefix of the items; whatever is left
//!    goes through the greedy packer.
//! 3. **Apply visibility** to the finished row list.

use tracing::debug;

use super::calculations::{Scaled, normalize_row};
use super::error::LayoutError;
use super::packer::pack_rows;
use super::policy::{LayoutMode, PackParams, SectionPolicy};
use super::visibility::apply_visibility;
use crate::types::{MediaItem, Row, Section};

/// Lay out one section.
///
/// Pure and deterministic: the same items and policy always produce the
/// same section, so callers may lay out sections on any thread.
pub fn build_section(items: &[MediaItem], policy: &SectionPolicy) -> Result<Section, LayoutError> {
    policy.validate()?;
    validate_items(items)?;

    let scaled: Vec<Scaled<'_>> = items
        .iter()
        .map(|item| Scaled::new(item, policy.target_row_height))
        .collect();
    let mode = policy.mode();
    let rows = build_rows(&scaled, mode, &policy.pack_params())?;

    debug!(
        mode = mode.name(),
        items = items.len(),
        rows = rows.len(),
        "laid out section"
    );

    Ok(apply_visibility(
        rows,
        policy.show_all_rows,
        policy.visible_row_count,
    ))
}

/// Reject items whose dimensions cannot yield a finite, positive scale.
///
/// Both width and height must be finite and strictly positive, so every
/// laid-out item ends up with a positive final width.
pub fn validate_items(items: &[MediaItem]) -> Result<(), LayoutError> {
    for item in items {
        let height_ok = item.height.is_finite() && item.height > 0.0;
        let width_ok = item.width.is_finite() && item.width > 0.0;
        if !(height_ok && width_ok) {
            return Err(LayoutError::InvalidDimension {
                index: item.index,
                width: item.width,
                height: item.height,
            });
        }
    }
    Ok(())
}

fn build_rows(
    scaled: &[Scaled<'_>],
    mode: LayoutMode<'_>,
    params: &PackParams,
) -> Result<Vec<Row>, LayoutError> {
    let mut rows = Vec::new();
    let mut cursor = 0;

    match mode {
        LayoutMode::Default => {}
        LayoutMode::CustomRows(specs) => {
            for spec in specs {
                if cursor >= scaled.len() {
                    break;
                }
                let end = cursor.saturating_add(spec.count).min(scaled.len());
                if end > cursor {
                    rows.push(close(&scaled[cursor..end], params)?);
                }
                cursor = end;
            }
        }
        LayoutMode::FirstRowOverride {
            count,
            first_image_large,
        } if scaled.len() >= count => {
            if first_image_large {
                while cursor < scaled.len() && scaled[cursor].item.is_video {
                    rows.push(close(&scaled[cursor..=cursor], params)?);
                    cursor += 1;
                }
            }
            let end = cursor.saturating_add(count).min(scaled.len());
            if end > cursor {
                rows.push(close(&scaled[cursor..end], params)?);
            }
            cursor = end;
        }
        // Too few items for the override: lay out as default.
        LayoutMode::FirstRowOverride { .. } => {}
    }

    rows.extend(pack_rows(&scaled[cursor..], params)?);
    Ok(rows)
}

fn close(row: &[Scaled<'_>], params: &PackParams) -> Result<Row, LayoutError> {
    normalize_row(
        row,
        params.target_row_height,
        params.container_width,
        params.gap,
    )
}
