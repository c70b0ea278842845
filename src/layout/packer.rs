//! Greedy row packing.
//!
//! Items are taken left to right. A row always accepts items until it reaches
//! the floor (`min_images_per_row`); after that an item joins only if
//!
//! ```text
//! accumulated + item.scaled_width + current_len * gap <= container_width
//! ```
//!
//! where `current_len` is the row length *before* the item joins. The test is
//! deliberately loose: [`normalize_row`] re-stretches every closed row to the
//! exact width anyway, so the admission rule only decides which items share a
//! row. Ties admit.

use super::calculations::{Scaled, normalize_row};
use super::error::LayoutError;
use super::policy::PackParams;
use crate::types::Row;

/// Partition `candidates` into justified rows, in order.
///
/// Nothing is dropped or duplicated, and the final row is normalized like
/// every other row. An empty slice yields no rows.
pub fn pack_rows(candidates: &[Scaled<'_>], params: &PackParams) -> Result<Vec<Row>, LayoutError> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut accumulated = 0.0;

    for (i, candidate) in candidates.iter().enumerate() {
        let current_len = i - start;
        let admit = current_len < params.min_images_per_row
            || accumulated + candidate.scaled_width + current_len as f64 * params.gap
                <= params.container_width;

        if admit {
            accumulated += candidate.scaled_width;
        } else {
            rows.push(close(&candidates[start..i], params)?);
            start = i;
            accumulated = candidate.scaled_width;
        }
    }

    if start < candidates.len() {
        rows.push(close(&candidates[start..], params)?);
    }

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
