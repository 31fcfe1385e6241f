//! Fuzzy row search.
//!
//! This is the external filter the paginator is kept in sync with: it
//! decides which rows are eligible, and the caller hands the result to
//! `Paginator::refresh`. Matching rows keep their original order.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::rows::Row;

/// Search query being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character; returns whether the query changed.
    pub fn pop_char(&mut self) -> bool {
        self.query.pop().is_some()
    }

    /// Clear the query; returns whether it was non-empty.
    pub fn clear(&mut self) -> bool {
        let had_query = !self.query.is_empty();
        self.query.clear();
        had_query
    }
}

/// Rows whose text fuzzy-matches `query`, in their original order.
///
/// An empty (or all-whitespace) query matches every row.
pub fn filter_rows(rows: &[Row], query: &str) -> Vec<Row> {
    let query = query.trim();
    if query.is_empty() {
        return rows.to_vec();
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    rows.iter()
        .filter(|row| matcher.fuzzy_match(&row.text, query).is_some())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        Row::from_lines("apple pie\nbanana split\ncherry tart\napricot jam\n")
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert_eq!(filter_rows(&rows(), "  ").len(), 4);
    }

    #[test]
    fn test_filter_keeps_original_order() {
        let matched: Vec<usize> = filter_rows(&rows(), "rt")
            .iter()
            .map(|row| row.number)
            .collect();
        assert_eq!(matched, vec![3, 4]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let matched = filter_rows(&rows(), "CHERRY");
        assert_eq!(matched, vec![Row::new(3, "cherry tart")]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_rows(&rows(), "zzz").is_empty());
    }

    #[test]
    fn test_search_state_editing() {
        let mut search = SearchState::new();
        search.push_char('a');
        search.push_char('b');
        assert_eq!(search.query(), "ab");
        assert!(search.pop_char());
        assert_eq!(search.query(), "a");
        assert!(search.clear());
        assert!(!search.clear());
        assert!(!search.pop_char());
    }
}
