//! # Justified Rows
//!
//! A layout engine for portfolio gallery pages. Given media items with known
//! pixel dimensions, it packs them into rows that exactly fill a fixed
//! container width, preserving every item's aspect ratio.
//!
//! # Architecture: Probe → Layout → Render
//!
//! ```text
//! 1. Probe    images/      →  gallery.json   (external: pixel dimensions)
//! 2. Layout   gallery.json →  layout.json    (this crate)
//! 3. Render   layout.json  →  HTML           (external: markup, thumbnails)
//! ```
//!
//! The engine owns only stage 2. It does no I/O of its own: the library entry
//! points are pure functions from items and policy to rows, so everything
//! down to exact pixel widths is unit testable.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | The engine: row normalization, greedy packing, section policies, visibility |
//! | [`types`] | Input and output values (`MediaItem`, `LaidOutItem`, `Row`, `Section`) |
//! | [`config`] | `layout.toml` loading, per-section override merging, validation |
//! | [`gallery`] | Manifest input, gallery-wide indexing, parallel per-section layout |
//! | [`output`] | CLI output formatting: tree display of a laid-out gallery |
//!
//! # Design Decisions
//!
//! ## Every Row Fills the Width
//!
//! Rows are always stretched to the exact container width, including a
//! one-item row and the last row of a section. A renderer can place rows
//! with plain block layout and never has to handle a ragged edge.
//!
//! ## Loose Packing, Exact Rows
//!
//! The greedy packer admits items with an approximate width test and lets
//! the normalizer fix the row up afterwards. The admission test only decides
//! which items share a row; it can never produce a row that overflows.
//!
//! ## Policies Are Values
//!
//! Each section's policy is resolved once from `layout.toml` into a
//! [`layout::SectionPolicy`], and the branch it selects (custom rows, a
//! distinguished first row, or plain packing) into a [`layout::LayoutMode`].
//! Nothing is looked up from global state during layout, so sections can be
//! laid out on any thread in any order.
//!
//! ## Failures Stay Local
//!
//! A section with an unusable item or policy fails alone. The gallery driver
//! records the error for that section and lays out the rest.

pub mod config;
pub mod gallery;
pub mod layout;
pub mod output;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
