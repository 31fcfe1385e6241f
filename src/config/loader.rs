use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::core::PaginatorConfig;

/// Settings file searched for in the working directory and its parents.
pub const CONFIG_FILE_NAME: &str = ".pagewise.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse `.pagewise.toml` contents and reject unusable page-size settings.
pub fn parse_and_validate_config(contents: &str) -> Result<PaginatorConfig, String> {
    let config = toml::from_str::<PaginatorConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// `start`, then its parents, stopping after `max_depth` directories.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| dir.parent().map(Path::to_path_buf)).take(max_depth)
}

/// Path of the `.pagewise.toml` closest to `start`, if any.
pub fn find_config_file(start: PathBuf) -> Option<PathBuf> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Paginator settings from a discovered file; an unreadable or invalid
/// file yields the defaults with a warning.
fn load_discovered(path: &Path) -> PaginatorConfig {
    let parsed = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))
        .and_then(|contents| parse_and_validate_config(&contents));

    match parsed {
        Ok(config) => {
            log::debug!("Paginator settings loaded from {}", path.display());
            config
        }
        Err(message) => {
            log::warn!("{}. Falling back to default page sizes.", message);
            PaginatorConfig::default()
        }
    }
}

/// Settings from the `.pagewise.toml` closest to `start`, or the defaults.
pub fn load_config_from(start: PathBuf) -> PaginatorConfig {
    match find_config_file(start) {
        Some(path) => load_discovered(&path),
        None => {
            log::debug!(
                "No {} within {} directories; using default page sizes",
                CONFIG_FILE_NAME,
                MAX_TRAVERSAL_DEPTH
            );
            PaginatorConfig::default()
        }
    }
}

/// Find the nearest usable config above the current directory.
pub fn load_config() -> PaginatorConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            PaginatorConfig::default()
        }
    }
}

/// Load an explicitly named config file; unlike discovery, errors are fatal.
pub fn load_config_file(path: &Path) -> anyhow::Result<PaginatorConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_and_validate_config(&contents).map_err(anyhow::Error::msg)
}

/// Write the default config to `dir`, refusing to clobber unless `force`.
pub fn init_config(dir: &Path, force: bool) -> anyhow::Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let contents = toml::to_string_pretty(&PaginatorConfig::default())
        .context("Failed to serialize default config")?;
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote default config to {}", path.display());
    Ok(path)
}
