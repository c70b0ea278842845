//! Justified-row layout engine.
//!
//! | Stage | Function |
//! |---|---|
//! | **Scale** | [`scaled_width`]: each item at the target row height |
//! | **Normalize** | [`normalize_row`]: stretch a row to the exact container width |
//! | **Pack** | [`pack_rows`]: greedy partition with a per-row floor |
//! | **Build** | [`build_section`]: custom rows / first-row override, then pack |
//! | **Truncate** | [`apply_visibility`]: hide trailing rows behind "see more" |
//!
//! The module is split into:
//! - **Calculations**: pure row geometry (unit testable)
//! - **Policy**: [`SectionPolicy`] and the [`LayoutMode`] resolved from it
//! - **Packer** and **Section**: control flow over the calculations
//! - **Visibility**: row truncation
//!
//! No I/O happens here. Every entry point is a pure function of its inputs.

mod calculations;
mod error;
mod packer;
mod policy;
mod section;
mod visibility;

pub use calculations::{Scaled, available_width, normalize_row, scaled_width};
pub use error::LayoutError;
pub use packer::pack_rows;
pub use policy::{LayoutMode, PackParams, RowSpec, SectionPolicy};
pub use section::{build_section, validate_items};
pub use visibility::apply_visibility;
