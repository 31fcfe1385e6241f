//! Testing infrastructure for pagewise.
//!
//! In-memory stand-ins for the paginator's collaborators, so paginator
//! behaviour can be exercised without a terminal:
//!
//! - **[`MemorySource`]**: an [`ItemSource`](crate::pagination::ItemSource)
//!   backed by a map of named collections
//! - **[`RecordingSurface`]**: a [`RenderSurface`](crate::pagination::RenderSurface)
//!   that records what the last projection showed and drew
//!
//! # Quick Start
//!
//! ```rust
//! use pagewise::config::PaginatorConfig;
//! use pagewise::pagination::{Paginator, PaginatorOptions};
//! use pagewise::testkit::{MemorySource, RecordingSurface};
//!
//! let source = MemorySource::new().with_collection("rows", (1..=47).collect());
//! let mut pager = Paginator::attach(
//!     &source,
//!     PaginatorOptions::new("rows"),
//!     PaginatorConfig::default(),
//!     RecordingSurface::new(),
//! )?;
//!
//! pager.go_to_page(2);
//! assert_eq!(pager.surface().shown().first(), Some(&21));
//! # Ok::<(), pagewise::errors::PaginatorError>(())
//! ```

mod source;
mod surface;

pub use source::MemorySource;
pub use surface::{Projection, RecordingSurface};
