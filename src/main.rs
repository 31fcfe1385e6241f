use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use pagewise::cli::{Cli, Commands};
use pagewise::commands::{self, PrintConfig, ViewConfig};
use std::fs::File;
use std::path::Path;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::View {
            file,
            page_size,
            config,
            log_file,
        } => {
            init_tui_logging(log_file.as_deref())?;
            commands::handle_view(ViewConfig {
                file,
                page_size,
                config,
            })
        }
        Commands::Print {
            file,
            page,
            page_size,
            filter,
            format,
            config,
        } => {
            init_logging();
            commands::handle_print(PrintConfig {
                file,
                page,
                page_size,
                filter,
                format,
                config,
            })
        }
        Commands::Init { force } => {
            init_logging();
            commands::handle_init(force)
        }
    }
}

/// Log to stderr, honouring `RUST_LOG` (default `warn`).
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// The explorer owns the terminal: log to a file when asked, otherwise not at all.
fn init_tui_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
