//! Current page and page size.
//!
//! Pure state container with no I/O. The paginator owns one of these and is
//! the only code that mutates it; fields are private so the
//! `1 <= current_page <= total_pages` invariant can only be broken by a
//! visible-set change, which `clamp` repairs.

use super::arithmetic::{clamp_page, total_pages};

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Page sizes offered by the page-size selector unless configured otherwise.
pub const DEFAULT_PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationState {
    /// Create state on page one.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Get current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Get page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `visible_count` items at the current size.
    pub fn total_pages(&self, visible_count: usize) -> usize {
        total_pages(visible_count, self.page_size)
    }

    /// Move to `page` if it exists for `visible_count` items.
    ///
    /// Returns `false` and leaves the state untouched otherwise.
    pub(crate) fn go_to(&mut self, page: usize, visible_count: usize) -> bool {
        if page < 1 || page > self.total_pages(visible_count) {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Change the page size and return to page one.
    pub(crate) fn resize(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    /// Return to page one.
    pub(crate) fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pull `current_page` back into range after the visible set changed.
    pub(crate) fn clamp(&mut self, visible_count: usize) {
        self.current_page = clamp_page(self.current_page, self.total_pages(visible_count));
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists for `visible_count` items.
    pub fn has_next(&self, visible_count: usize) -> bool {
        self.current_page < self.total_pages(visible_count)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: after any go_to followed by clamp, the page is valid.
        #[test]
        fn page_always_valid_after_clamp(
            page_size in 1usize..100,
            before in 0usize..1_000,
            after in 0usize..1_000,
            target in 0usize..200
        ) {
            let mut state = PaginationState::new(page_size);
            state.go_to(target, before);
            state.clamp(after);
            let total = state.total_pages(after);
            prop_assert!(state.current_page() >= 1);
            prop_assert!(state.current_page() <= total);
        }

        /// Property: resize always lands on page one.
        #[test]
        fn resize_always_resets(
            page_size in 1usize..100,
            target in 1usize..50,
            new_size in 1usize..100
        ) {
            let mut state = PaginationState::new(page_size);
            state.go_to(target, 5_000);
            state.resize(new_size);
            prop_assert_eq!(state.current_page(), 1);
            prop_assert_eq!(state.page_size(), new_size);
        }
    }
}
