// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod pagination;
pub mod rows;
pub mod search;
pub mod testkit;
pub mod tui;

// Re-export commonly used types
pub use crate::config::PaginatorConfig;
pub use crate::errors::PaginatorError;
pub use crate::pagination::{
    ControlAction, Focus, ItemSource, NavControls, PageLabel, Paginator, PaginatorOptions,
    RenderSurface, VisibilityQuery,
};
pub use crate::rows::{Row, RowSource};
