//! CLI Adapter.

mod update_prs;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, DEFAULT_REPO_FILE};

#[derive(Parser)]
#[command(name = "campaign-prs")]
#[command(version)]
#[command(
    about = "Apply bulk actions to the pull requests raised by a multi-repository campaign",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Update all PRs that have been generated by the campaign
    #[clap(visible_alias = "u")]
    UpdatePrs {
        /// Close all generated PRs
        #[arg(long)]
        close: bool,
        /// Update PR titles and descriptions
        #[arg(long)]
        description: bool,
        /// Skips the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
        /// A file containing a list of repositories
        #[arg(long, value_name = "FILE", default_value = DEFAULT_REPO_FILE)]
        repos: PathBuf,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::UpdatePrs { close, description, yes, repos } => {
            update_prs::run_update_prs(close, description, yes, repos)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
