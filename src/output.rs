//! CLI output formatting for gallery layouts.
//!
//! # Information-First Display
//!
//! Each section leads with its positional index and title, followed by one
//! indented line per row. A row line shows the row's shared size and the
//! gallery indices it holds, so the output reads as a map of the page:
//!
//! ```text
//! 001 Brands (2 rows, 5 items)
//!     row 1: 326.7 x 326.7  [#0 #1 #2]
//!     row 2: 495.0 x 495.0  [#3 #4]
//! 002 leaky people (5 rows, 15 items)
//!     row 1: 1000.0 x 562.5  [#5 (video)]
//!     ...
//!     row 4: 326.7 x 326.7  [#15 #16 #17] hidden
//!     row 5: 495.0 x 495.0  [#18 #19] hidden
//!     2 hidden rows behind "see more"
//! 003 Broken
//!     error: item #20 has invalid dimensions 800x0
//!
//! Laid out 2 sections, 1 failed
//! ```
//!
//! Items in a row share one height but not one width, so the line shows the
//! first item's width. `check` output condenses each section to one line.
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::gallery::{GalleryLayout, SectionLayout, SectionOutcome};
use crate::types::{LaidOutItem, Row, Section};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Section header: positional index + title, with counts when laid out.
fn section_header(position: usize, layout: &SectionLayout) -> String {
    match &layout.outcome {
        SectionOutcome::Laid(section) => format!(
            "{} {} ({}, {})",
            format_index(position),
            layout.title,
            plural(section.rows.len(), "row"),
            plural(section.item_count(), "item"),
        ),
        SectionOutcome::Failed { .. } => format!("{} {}", format_index(position), layout.title),
    }
}

fn item_label(placed: &LaidOutItem) -> String {
    if placed.item.is_video {
        format!("#{} (video)", placed.item.index)
    } else {
        format!("#{}", placed.item.index)
    }
}

/// One row: `row N: W x H  [#a #b]`, suffixed `hidden` when truncated.
fn row_line(position: usize, row: &Row) -> String {
    let width = row.items.first().map(|i| i.final_width).unwrap_or(0.0);
    let labels: Vec<String> = row.items.iter().map(item_label).collect();
    let mut line = format!(
        "row {}: {:.1} x {:.1}  [{}]",
        position,
        width,
        row.height(),
        labels.join(" ")
    );
    if row.hidden {
        line.push_str(" hidden");
    }
    line
}

// ============================================================================
// Layout view
// ============================================================================

/// Format a single laid-out section's rows, indented one level.
pub fn format_section_rows(section: &Section) -> Vec<String> {
    let mut lines: Vec<String> = section
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| format!("    {}", row_line(i + 1, row)))
        .collect();
    if section.has_overflow {
        lines.push(format!(
            "    {} behind \"see more\"",
            plural(section.hidden_row_count(), "hidden row")
        ));
    }
    lines
}

/// Format the full layout: every section with its rows, then a summary.
pub fn format_gallery_layout(layout: &GalleryLayout) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, section_layout) in layout.sections.iter().enumerate() {
        lines.push(section_header(i + 1, section_layout));
        match &section_layout.outcome {
            SectionOutcome::Laid(section) => lines.extend(format_section_rows(section)),
            SectionOutcome::Failed { error } => lines.push(format!("    error: {error}")),
        }
    }

    lines.push(String::new());
    lines.push(summary_line(layout));
    lines
}

/// Print the full layout to stdout.
pub fn print_gallery_layout(layout: &GalleryLayout) {
    for line in format_gallery_layout(layout) {
        println!("{}", line);
    }
}

// ============================================================================
// Check view
// ============================================================================

/// Format one line per section: `ok` or `FAILED` with the reason.
pub fn format_check_output(layout: &GalleryLayout) -> Vec<String> {
    let mut lines: Vec<String> = layout
        .sections
        .iter()
        .enumerate()
        .map(|(i, s)| match &s.outcome {
            SectionOutcome::Laid(section) => format!(
                "{} {}: ok ({}, {} visible)",
                format_index(i + 1),
                s.key,
                plural(section.rows.len(), "row"),
                section.visible_row_count
            ),
            SectionOutcome::Failed { error } => {
                format!("{} {}: FAILED {}", format_index(i + 1), s.key, error)
            }
        })
        .collect();
    lines.push(summary_line(layout));
    lines
}

pub fn print_check_output(layout: &GalleryLayout) {
    for line in format_check_output(layout) {
        println!("{}", line);
    }
}

fn summary_line(layout: &GalleryLayout) -> String {
    let laid = layout.sections.len() - layout.failed_count();
    match layout.failed_count() {
        0 => format!("Laid out {}", plural(laid, "section")),
        failed => format!("Laid out {}, {} failed", plural(laid, "section"), failed),
    }
}
