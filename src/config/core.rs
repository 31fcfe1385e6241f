use serde::{Deserialize, Serialize};

use crate::errors::{PaginatorError, Result};
use crate::pagination::arithmetic::DEFAULT_WINDOW_DELTA;
use crate::pagination::state::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES};

/// Root configuration structure for pagewise (`.pagewise.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorConfig {
    /// Page size used when none is given on the command line
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Sizes offered by the page-size selector, in display order
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<usize>,

    /// Pages listed on either side of the current one in the page strip
    #[serde(default = "default_window_delta")]
    pub window_delta: usize,
}

pub fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

pub fn default_page_sizes() -> Vec<usize> {
    DEFAULT_PAGE_SIZES.to_vec()
}

pub fn default_window_delta() -> usize {
    DEFAULT_WINDOW_DELTA
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_sizes: default_page_sizes(),
            window_delta: default_window_delta(),
        }
    }
}

impl PaginatorConfig {
    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.page_sizes.is_empty() {
            return Err(PaginatorError::invalid_config("page_sizes must not be empty"));
        }
        if self.page_sizes.contains(&0) {
            return Err(PaginatorError::invalid_config(
                "page_sizes must only contain positive sizes",
            ));
        }
        if !self.allows(self.page_size) {
            return Err(PaginatorError::InvalidPageSize {
                size: self.page_size,
                allowed: self.page_sizes.clone(),
            });
        }
        Ok(())
    }

    /// Whether `size` is one of the configured page sizes.
    pub fn allows(&self, size: usize) -> bool {
        size > 0 && self.page_sizes.contains(&size)
    }

    /// The configured size after `size`, wrapping around.
    pub fn next_page_size(&self, size: usize) -> usize {
        self.step_page_size(size, 1)
    }

    /// The configured size before `size`, wrapping around.
    pub fn previous_page_size(&self, size: usize) -> usize {
        self.step_page_size(size, self.page_sizes.len().saturating_sub(1))
    }

    fn step_page_size(&self, size: usize, step: usize) -> usize {
        let len = self.page_sizes.len();
        if len == 0 {
            return size;
        }
        let index = self
            .page_sizes
            .iter()
            .position(|&candidate| candidate == size)
            .map_or(0, |index| (index + step) % len);
        self.page_sizes[index]
    }
}
