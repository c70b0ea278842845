//! Pure geometry for justified rows.
//!
//! All functions here are pure and testable without a policy or a section.

use super::error::LayoutError;
use crate::types::{LaidOutItem, MediaItem, Row};

/// An item paired with its width at the target row height.
///
/// Computed once per section so the packer and the normalizer agree on the
/// same floating-point value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaled<'a> {
    pub item: &'a MediaItem,
    pub scaled_width: f64,
}

impl<'a> Scaled<'a> {
    pub fn new(item: &'a MediaItem, target_row_height: f64) -> Self {
        Self {
            item,
            scaled_width: scaled_width(item, target_row_height),
        }
    }
}

/// Width of an item when scaled to `target_row_height`, aspect preserved.
///
/// ```
/// # use justified_rows::layout::scaled_width;
/// # use justified_rows::types::MediaItem;
/// let landscape = MediaItem::new(0, 1200.0, 800.0, "a.jpg");
/// assert_eq!(scaled_width(&landscape, 300.0), 450.0);
/// ```
pub fn scaled_width(item: &MediaItem, target_row_height: f64) -> f64 {
    target_row_height * item.aspect_ratio()
}

/// Horizontal space left for items once `count - 1` gaps are taken out.
pub fn available_width(container_width: f64, gap: f64, count: usize) -> f64 {
    container_width - count.saturating_sub(1) as f64 * gap
}

/// Stretch (or shrink) a candidate row so it exactly fills the container.
///
/// Every item is scaled by the same factor, so aspect ratios survive and the
/// row shares one height. A single item is stretched to the full width.
///
/// # Errors
/// - [`LayoutError::DegenerateRow`] if the scaled widths sum to zero (or the
///   sum is not finite), since the scale factor would be NaN or infinite.
/// - [`LayoutError::RowTooNarrow`] if the gaps alone consume the container.
pub fn normalize_row(
    candidates: &[Scaled<'_>],
    target_row_height: f64,
    container_width: f64,
    gap: f64,
) -> Result<Row, LayoutError> {
    let len = candidates.len();
    let first_index = candidates.first().map(|c| c.item.index).unwrap_or(0);

    let total: f64 = candidates.iter().map(|c| c.scaled_width).sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(LayoutError::DegenerateRow { first_index, len });
    }

    let available = available_width(container_width, gap, len);
    if available <= 0.0 {
        return Err(LayoutError::RowTooNarrow {
            first_index,
            len,
            available,
        });
    }

    let scale = available / total;
    let items = candidates
        .iter()
        .map(|c| LaidOutItem {
            item: c.item.clone(),
            final_width: c.scaled_width * scale,
            final_height: target_row_height * scale,
            hidden: false,
        })
        .collect();

    Ok(Row {
        items,
        hidden: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    // =========================================================================
    // scaled_width / available_width
    // =========================================================================

    #[test]
    fn scaled_width_landscape() {
        let item = MediaItem::new(0, 1600.0, 900.0, "wide.jpg");
        assert_close(scaled_width(&item, 300.0), 533.333_333);
    }

    #[test]
    fn scaled_width_portrait() {
        let item = MediaItem::new(0, 800.0, 1000.0, "tall.jpg");
        assert_eq!(scaled_width(&item, 300.0), 240.0);
    }

    #[test]
    fn available_width_subtracts_inner_gaps_only() {
        assert_eq!(available_width(1000.0, 10.0, 1), 1000.0);
        assert_eq!(available_width(1000.0, 10.0, 3), 980.0);
    }

    #[test]
    fn available_width_of_empty_row_is_full_width() {
        assert_eq!(available_width(1000.0, 10.0, 0), 1000.0);
    }

    // =========================================================================
    // normalize_row
    // =========================================================================

    #[test]
    fn three_squares_fill_the_row() {
        let items = squares(3);
        let scaled = scale_all(&items, 300.0);
        let row = normalize_row(&scaled, 300.0, 1000.0, 10.0).unwrap();

        assert_eq!(row.len(), 3);
        for placed in &row.items {
            assert_close(placed.final_width, 980.0 / 3.0);
            assert_close(placed.final_height, 980.0 / 3.0);
        }
        assert_row_fills(&row, 1000.0, 10.0);
    }

    #[test]
    fn single_item_is_stretched_to_full_width() {
        let item = MediaItem::new(0, 2000.0, 1000.0, "pano.jpg");
        let scaled = [Scaled::new(&item, 300.0)];
        let row = normalize_row(&scaled, 300.0, 1000.0, 10.0).unwrap();

        assert_close(row.items[0].final_width, 1000.0);
        assert_close(row.items[0].final_height, 500.0);
    }

    #[test]
    fn mixed_aspects_share_one_height() {
        let items = vec![
            MediaItem::new(0, 1200.0, 800.0, "a.jpg"),
            MediaItem::new(1, 800.0, 1200.0, "b.jpg"),
            MediaItem::new(2, 1000.0, 1000.0, "c.jpg"),
        ];
        let scaled = scale_all(&items, 300.0);
        let row = normalize_row(&scaled, 300.0, 1000.0, 10.0).unwrap();

        let h = row.height();
        assert!(row.items.iter().all(|i| (i.final_height - h).abs() < EPS));
        assert_row_fills(&row, 1000.0, 10.0);
        assert_aspects_preserved(&row);
    }

    #[test]
    fn row_wider_than_container_is_shrunk() {
        let items = vec![
            MediaItem::new(0, 3000.0, 1000.0, "a.jpg"),
            MediaItem::new(1, 3000.0, 1000.0, "b.jpg"),
        ];
        let scaled = scale_all(&items, 300.0);
        let row = normalize_row(&scaled, 300.0, 1000.0, 10.0).unwrap();

        assert_close(row.items[0].final_width, 495.0);
        assert_close(row.height(), 165.0);
    }

    #[test]
    fn items_are_not_hidden_by_default() {
        let items = squares(2);
        let scaled = scale_all(&items, 300.0);
        let row = normalize_row(&scaled, 300.0, 1000.0, 10.0).unwrap();
        assert!(!row.hidden);
        assert!(row.items.iter().all(|i| !i.hidden));
    }

    #[test]
    fn zero_total_width_is_degenerate() {
        let items = vec![MediaItem::new(7, 0.0, 100.0, "line.png")];
        let scaled = scale_all(&items, 300.0);
        let err = normalize_row(&scaled, 300.0, 1000.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            LayoutError::DegenerateRow {
                first_index: 7,
                len: 1
            }
        );
    }

    #[test]
    fn gaps_consuming_container_are_rejected() {
        let items = squares(11);
        let scaled = scale_all(&items, 300.0);
        let err = normalize_row(&scaled, 300.0, 100.0, 10.0).unwrap_err();
        assert!(matches!(err, LayoutError::RowTooNarrow { len: 11, .. }));
    }
}
