//! CLI Adapter.

mod check;
mod sync;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "intro-sync")]
#[command(version)]
#[command(
    about = "Mirror self-introduction discussion comments into record files via pull requests",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the comment event described by the environment and reply under it
    #[clap(visible_alias = "s")]
    Sync {
        /// Local checkout of the records repository
        #[arg(short, long, default_value = ".")]
        workdir: PathBuf,
        /// Config file (defaults to .intro-sync.toml in the workdir, if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Check comment content against the formatting rules
    #[clap(visible_alias = "c")]
    Check {
        /// Read content from a file instead of COMMENT_CONTENT or stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Sync { workdir, config } => sync::run_sync(workdir, config),
        Commands::Check { file } => check::run_check(file),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
