use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rows followed by the summary and page labels
    Text,
    /// Serialized page report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "pagewise")]
#[command(about = "Page through the lines of a text file", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse a file page by page in an interactive explorer
    View {
        /// File to page through
        file: PathBuf,

        /// Rows per page (must be one of the configured page sizes)
        #[arg(long = "page-size", env = "PAGEWISE_PAGE_SIZE")]
        page_size: Option<usize>,

        /// Configuration file (defaults to the nearest .pagewise.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write logs to this file while the explorer owns the terminal
        #[arg(long = "log-file")]
        log_file: Option<PathBuf>,
    },

    /// Print a single page to stdout
    Print {
        /// File to page through
        file: PathBuf,

        /// 1-based page to print (out-of-range pages print page 1)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Rows per page (must be one of the configured page sizes)
        #[arg(long = "page-size", env = "PAGEWISE_PAGE_SIZE")]
        page_size: Option<usize>,

        /// Only paginate rows that fuzzy-match this query
        #[arg(long)]
        filter: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Configuration file (defaults to the nearest .pagewise.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a .pagewise.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
