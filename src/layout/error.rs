use thiserror::Error;

/// Why a section could not be laid out.
///
/// Every variant is local to one section: the gallery driver records it and
/// carries on with the remaining sections.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("item #{index} has invalid dimensions {width}x{height}")]
    InvalidDimension { index: usize, width: f64, height: f64 },
    #[error("row starting at item #{first_index} ({len} items) has zero total width")]
    DegenerateRow { first_index: usize, len: usize },
    #[error(
        "row starting at item #{first_index} ({len} items) leaves {available}px after gaps"
    )]
    RowTooNarrow {
        first_index: usize,
        len: usize,
        available: f64,
    },
    #[error("policy out of range: {0}")]
    PolicyOutOfRange(String),
}
