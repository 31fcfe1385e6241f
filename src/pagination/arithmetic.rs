//! Pure page arithmetic.
//!
//! Everything in this module is side-effect free: page counts, page windows,
//! the "showing X-Y of N" summary and the compact label sequence shown in
//! the navigation controls. The paginator state machine is the only caller
//! that is expected to pass already-clamped pages, but every function here
//! stays total for any input.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Pages shown on either side of the current page in the compact label list.
pub const DEFAULT_WINDOW_DELTA: usize = 2;

/// Compute the number of pages for `visible_count` items.
///
/// An empty collection still has one (empty) page, so callers never need
/// to special-case "no pages". A page size of zero is treated as one.
pub fn total_pages(visible_count: usize, page_size: usize) -> usize {
    visible_count.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of `page` (1-based) within a sequence of `len` items.
///
/// The range is clamped to the sequence bounds; pages past the end yield an
/// empty range at `len`.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Items of `visible` that belong to `page`.
pub fn page_slice<T>(visible: &[T], page: usize, page_size: usize) -> &[T] {
    &visible[page_range(visible.len(), page, page_size)]
}

/// One entry in the compact page-label sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLabel {
    /// A page number (1-based).
    Page(usize),
    /// A collapsed run of page numbers.
    Ellipsis,
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLabel::Page(page) => write!(f, "{page}"),
            PageLabel::Ellipsis => f.write_str("..."),
        }
    }
}

/// Build the abbreviated page-number sequence for the navigation controls.
///
/// Pages `current - delta ..= current + delta` are always listed. Page 1 is
/// prepended once `current > delta + 2`, the last page is appended once
/// `current < total - delta - 1`, and an ellipsis marks each boundary gap
/// wider than one page. The output length is bounded by `2 * delta + 5`
/// regardless of `total`.
pub fn compact_page_labels(current: usize, total: usize, delta: usize) -> Vec<PageLabel> {
    let total = total.max(1);
    let current = clamp_page(current, total);
    let window_start = current.saturating_sub(delta).max(1);
    let window_end = current.saturating_add(delta).min(total);

    let mut labels = Vec::with_capacity(2 * delta + 5);

    if current > delta + 2 {
        labels.push(PageLabel::Page(1));
        if current > delta + 3 {
            labels.push(PageLabel::Ellipsis);
        }
    }

    labels.extend((window_start..=window_end).map(PageLabel::Page));

    // `current + delta + 1 < total` is `current < total - delta - 1` without underflow.
    if current + delta + 1 < total {
        if current + delta + 2 < total {
            labels.push(PageLabel::Ellipsis);
        }
        labels.push(PageLabel::Page(total));
    }

    labels
}

/// The "showing X-Y of N" summary for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    /// 1-based position of the first item on the page, 0 when empty.
    pub first: usize,
    /// 1-based position of the last item on the page, 0 when empty.
    pub last: usize,
    /// Number of visible items across all pages.
    pub total: usize,
}

impl fmt::Display for ItemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} of {}", self.first, self.last, self.total)
    }
}

/// Summarize which items `page` covers.
pub fn item_summary(visible_count: usize, page: usize, page_size: usize) -> ItemSummary {
    let range = page_range(visible_count, page, page_size);
    if range.is_empty() {
        return ItemSummary {
            first: 0,
            last: 0,
            total: visible_count,
        };
    }

    ItemSummary {
        first: range.start + 1,
        last: range.end,
        total: visible_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLabel::{Ellipsis, Page};

    #[test]
    fn test_total_pages_empty_is_one() {
        assert_eq!(total_pages(0, 20), 1);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(47, 20), 3);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(41, 20), 3);
    }

    #[test]
    fn test_total_pages_zero_page_size() {
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(9, 0), 1);
    }

    #[test]
    fn test_page_slice_middle_page() {
        let items: Vec<usize> = (1..=47).collect();
        let slice = page_slice(&items, 2, 20);
        assert_eq!(slice.first(), Some(&21));
        assert_eq!(slice.last(), Some(&40));
    }

    #[test]
    fn test_page_slice_last_page_is_short() {
        let items: Vec<usize> = (1..=47).collect();
        assert_eq!(page_slice(&items, 3, 20), &[41, 42, 43, 44, 45, 46, 47]);
    }

    #[test]
    fn test_page_slice_out_of_range_is_empty() {
        let items: Vec<usize> = (1..=5).collect();
        assert!(page_slice(&items, 4, 5).is_empty());
        assert_eq!(page_slice(&items, 0, 5), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_labels_single_page() {
        assert_eq!(compact_page_labels(1, 1, 2), vec![Page(1)]);
    }

    #[test]
    fn test_labels_middle_of_long_range() {
        assert_eq!(
            compact_page_labels(10, 20, 2),
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn test_labels_start_of_long_range() {
        assert_eq!(
            compact_page_labels(1, 20, 2),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_labels_end_of_long_range() {
        assert_eq!(
            compact_page_labels(20, 20, 2),
            vec![Page(1), Ellipsis, Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_labels_short_range_has_no_ellipsis() {
        let labels = compact_page_labels(3, 5, 2);
        assert_eq!(labels, vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn test_labels_small_total_follows_window_rules() {
        assert_eq!(
            compact_page_labels(1, 7, 2),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(7)]
        );
        assert_eq!(
            compact_page_labels(4, 7, 2),
            vec![Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
        assert_eq!(
            compact_page_labels(7, 7, 2),
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn test_labels_one_page_gap_is_not_collapsed() {
        // Window 3..=7 with page 1 prepended; a single missing page gets no marker.
        assert_eq!(
            compact_page_labels(5, 20, 2),
            vec![
                Page(1),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn test_labels_clamp_current() {
        assert_eq!(compact_page_labels(9, 3, 2), compact_page_labels(3, 3, 2));
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Page(7).to_string(), "7");
        assert_eq!(Ellipsis.to_string(), "...");
    }

    #[test]
    fn test_item_summary_middle_page() {
        assert_eq!(item_summary(47, 2, 20).to_string(), "21-40 of 47");
    }

    #[test]
    fn test_item_summary_last_page() {
        assert_eq!(item_summary(47, 3, 20).to_string(), "41-47 of 47");
    }

    #[test]
    fn test_item_summary_empty() {
        assert_eq!(item_summary(0, 1, 20).to_string(), "0-0 of 0");
    }
}
