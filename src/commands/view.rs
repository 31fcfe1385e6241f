use anyhow::Result;
use std::path::PathBuf;

use super::{attach_file, resolve_config};
use crate::tui::PagerExplorer;

/// Options for the `view` command
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub file: PathBuf,
    pub page_size: Option<usize>,
    pub config: Option<PathBuf>,
}

pub fn handle_view(config: ViewConfig) -> Result<()> {
    let paginator_config = resolve_config(config.config.as_deref())?;
    let pager = attach_file(&config.file, config.page_size, paginator_config)?;

    let title = config.file.display().to_string();
    let mut explorer = PagerExplorer::new(title, pager)?;
    explorer.run()
}
