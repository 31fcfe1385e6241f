//! Error types for paginator construction and configuration.
//!
//! Navigation never fails: out-of-range page requests are no-ops and a
//! stranded current page is clamped. The only errors are configuration
//! errors, raised before a paginator exists.

use thiserror::Error;

/// Errors raised while building a paginator or loading its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginatorError {
    /// The item source identifier does not name a row collection.
    #[error("item source `{source_id}` does not resolve to a row collection")]
    UnresolvedItemSource { source_id: String },

    /// The initial page size is not one of the allowed sizes.
    #[error("page size {size} is not one of the allowed sizes {allowed:?}")]
    InvalidPageSize { size: usize, allowed: Vec<usize> },

    /// The configuration parsed but is unusable.
    #[error("invalid paginator configuration: {0}")]
    InvalidConfig(String),
}

impl PaginatorError {
    /// Create an unresolved-source error.
    pub fn unresolved(source_id: impl Into<String>) -> Self {
        Self::UnresolvedItemSource {
            source_id: source_id.into(),
        }
    }

    /// Create an invalid-configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result alias for paginator operations that can fail.
pub type Result<T> = std::result::Result<T, PaginatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_message() {
        let err = PaginatorError::unresolved("rows.txt");
        assert_eq!(
            err.to_string(),
            "item source `rows.txt` does not resolve to a row collection"
        );
    }

    #[test]
    fn test_invalid_page_size_message() {
        let err = PaginatorError::InvalidPageSize {
            size: 15,
            allowed: vec![10, 20],
        };
        assert_eq!(
            err.to_string(),
            "page size 15 is not one of the allowed sizes [10, 20]"
        );
    }
}
