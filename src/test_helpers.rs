//! Shared test utilities for the justified-rows test suite.
//!
//! Provides item builders, row-shape extractors, and geometric assertions
//! that work with engine types (`MediaItem`, `Row`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let items = squares(5);
//! let section = build_section(&items, &SectionPolicy::default()).unwrap();
//!
//! assert_eq!(row_indices(&section.rows), vec![vec![0, 1, 2], vec![3, 4]]);
//! for row in &section.rows {
//!     assert_row_fills(row, 1000.0, 10.0);
//! }
//! ```

use crate::layout::Scaled;
use crate::types::{LaidOutItem, MediaItem, Row};

/// Tolerance for floating-point comparisons on pixel values.
pub const EPS: f64 = 1e-6;

// =========================================================================
// Item builders
// =========================================================================

/// `n` square 1000x1000 images with indices `0..n`.
pub fn squares(n: usize) -> Vec<MediaItem> {
    squares_from(0, n)
}

/// `n` square images with indices starting at `start`.
pub fn squares_from(start: usize, n: usize) -> Vec<MediaItem> {
    (start..start + n)
        .map(|i| MediaItem::new(i, 1000.0, 1000.0, format!("{i:03}.jpg")))
        .collect()
}

/// `n` images with a deterministic spread of portrait, square and
/// landscape aspect ratios.
pub fn varied_items(n: usize) -> Vec<MediaItem> {
    const SHAPES: [(f64, f64); 7] = [
        (1200.0, 800.0),
        (800.0, 1200.0),
        (1000.0, 1000.0),
        (1920.0, 1080.0),
        (1080.0, 1350.0),
        (3000.0, 1000.0),
        (900.0, 1600.0),
    ];
    (0..n)
        .map(|i| {
            let (w, h) = SHAPES[(i * 5 + i / 3) % SHAPES.len()];
            MediaItem::new(i, w, h, format!("{i:03}.jpg"))
        })
        .collect()
}

/// Pair each item with its scaled width at `target_row_height`.
pub fn scale_all(items: &[MediaItem], target_row_height: f64) -> Vec<Scaled<'_>> {
    items
        .iter()
        .map(|item| Scaled::new(item, target_row_height))
        .collect()
}

/// `n` rows of one full-width square each, for visibility tests.
pub fn single_item_rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| Row {
            items: vec![LaidOutItem {
                item: MediaItem::new(i, 1000.0, 1000.0, format!("{i:03}.jpg")),
                final_width: 1000.0,
                final_height: 1000.0,
                hidden: false,
            }],
            hidden: false,
        })
        .collect()
}

// =========================================================================
// Extractors
// =========================================================================

/// Item indices grouped by row.
pub fn row_indices(rows: &[Row]) -> Vec<Vec<usize>> {
    rows.iter()
        .map(|r| r.items.iter().map(|i| i.item.index).collect())
        .collect()
}

/// Item indices across all rows, in order.
pub fn flatten_indices(rows: &[Row]) -> Vec<usize> {
    rows.iter()
        .flat_map(|r| r.items.iter().map(|i| i.item.index))
        .collect()
}

// =========================================================================
// Assertions: panic with a clear message on failure
// =========================================================================

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

/// Row widths plus inner gaps equal the container width.
pub fn assert_row_fills(row: &Row, container_width: f64, gap: f64) {
    let total: f64 = row.items.iter().map(|i| i.final_width).sum();
    let filled = total + row.len().saturating_sub(1) as f64 * gap;
    assert!(
        (filled - container_width).abs() < EPS,
        "row of {} items fills {filled}, expected {container_width}",
        row.len()
    );
}

/// Every placed item keeps its intrinsic aspect ratio.
pub fn assert_aspects_preserved(row: &Row) {
    for placed in &row.items {
        let actual = placed.final_width / placed.final_height;
        let expected = placed.item.aspect_ratio();
        assert!(
            (actual - expected).abs() < EPS,
            "item #{} aspect {actual}, expected {expected}",
            placed.item.index
        );
    }
}
