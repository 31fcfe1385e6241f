//! CLI command implementations.
//!
//! - **view**: browse a file in the interactive explorer
//! - **print**: print one page as text or JSON
//! - **init**: write a default `.pagewise.toml`

pub mod init;
pub mod print;
pub mod view;

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{load_config, load_config_file, PaginatorConfig};
use crate::pagination::{Paginator, PaginatorOptions};
use crate::rows::{Row, RowSource};
use crate::tui::TerminalSurface;

pub use init::handle_init;
pub use print::{handle_print, PageReport, PrintConfig};
pub use view::{handle_view, ViewConfig};

/// Load the named config file, or discover the nearest one.
pub fn resolve_config(explicit: Option<&Path>) -> Result<PaginatorConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => Ok(load_config()),
    }
}

/// Attach a paginator over the lines of `file`.
pub fn attach_file(
    file: &Path,
    page_size: Option<usize>,
    config: PaginatorConfig,
) -> Result<Paginator<Row, TerminalSurface>> {
    let mut options = PaginatorOptions::new(file.to_string_lossy());
    if let Some(size) = page_size {
        options = options.page_size(size);
    }

    Paginator::attach(&RowSource::new(), options, config, TerminalSurface::new())
        .with_context(|| format!("Failed to paginate {}", file.display()))
}
