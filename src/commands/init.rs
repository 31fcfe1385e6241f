use anyhow::Result;
use std::path::Path;

use crate::config::init_config;

pub fn handle_init(force: bool) -> Result<()> {
    let path = init_config(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}
