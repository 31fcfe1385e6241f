//! Paginator configuration and `.pagewise.toml` discovery.

mod core;
mod loader;

pub use self::core::{
    default_page_size, default_page_sizes, default_window_delta, PaginatorConfig,
};
pub use loader::{
    directory_ancestors, find_config_file, init_config, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
