//! Row truncation behind an overflow ("see more") control.

use crate::types::{Row, Section};

/// Wrap finished rows into a [`Section`], hiding trailing rows past
/// `visible_row_count` unless `show_all_rows` is set.
///
/// Rows are never re-laid out here; only the `hidden` flags change.
pub fn apply_visibility(mut rows: Vec<Row>, show_all_rows: bool, visible_row_count: usize) -> Section {
    let truncate = !show_all_rows && rows.len() > visible_row_count;

    for (i, row) in rows.iter_mut().enumerate() {
        row.set_hidden(truncate && i >= visible_row_count);
    }

    let visible_row_count = if truncate {
        visible_row_count
    } else {
        rows.len()
    };

    Section {
        has_overflow: truncate,
        visible_row_count,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn hidden_flags(section: &Section) -> Vec<bool> {
        section.rows.iter().map(|r| r.hidden).collect()
    }

    #[test]
    fn five_rows_three_visible() {
        let section = apply_visibility(single_item_rows(5), false, 3);

        assert_eq!(hidden_flags(&section), vec![false, false, false, true, true]);
        assert!(section.has_overflow);
        assert_eq!(section.visible_row_count, 3);
        assert_eq!(section.hidden_row_count(), 2);
    }

    #[test]
    fn item_flags_follow_row() {
        let section = apply_visibility(single_item_rows(4), false, 3);
        assert!(section.rows[3].items.iter().all(|i| i.hidden));
        assert!(section.rows[0].items.iter().all(|i| !i.hidden));
    }

    #[test]
    fn show_all_rows_hides_nothing() {
        let section = apply_visibility(single_item_rows(5), true, 3);
        assert!(hidden_flags(&section).iter().all(|h| !h));
        assert!(!section.has_overflow);
        assert_eq!(section.visible_row_count, 5);
    }

    #[test]
    fn exactly_threshold_rows_has_no_overflow() {
        let section = apply_visibility(single_item_rows(3), false, 3);
        assert!(!section.has_overflow);
        assert_eq!(section.visible_row_count, 3);
    }

    #[test]
    fn zero_visible_rows_hides_everything() {
        let section = apply_visibility(single_item_rows(2), false, 0);
        assert_eq!(hidden_flags(&section), vec![true, true]);
        assert!(section.has_overflow);
        assert_eq!(section.visible_row_count, 0);
    }

    #[test]
    fn empty_rows_have_no_overflow() {
        let section = apply_visibility(Vec::new(), false, 3);
        assert!(section.rows.is_empty());
        assert!(!section.has_overflow);
        assert_eq!(section.visible_row_count, 0);
    }
}
