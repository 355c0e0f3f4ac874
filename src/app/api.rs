//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{
    ConsoleActivityLog, DialoguerPrompt, FilesystemCampaignSource, GitHubCommandAdapter,
};
use crate::app::{AppContext, commands::update_prs};

pub use crate::app::commands::update_prs::{UpdatePrsOptions, UpdatePrsOutcome};
pub use crate::domain::{ActionKind, AppError, RunStatus, RunSummary};

type CommandContext =
    AppContext<FilesystemCampaignSource, DialoguerPrompt, GitHubCommandAdapter, ConsoleActivityLog>;

/// Create an `AppContext` wired to the real terminal and `gh` CLI for a campaign path.
fn create_context(path: PathBuf) -> CommandContext {
    let campaigns = FilesystemCampaignSource::new(path.clone());
    AppContext::new(
        path,
        campaigns,
        DialoguerPrompt::new(),
        GitHubCommandAdapter::new(),
        ConsoleActivityLog::new(),
    )
}

/// Apply one bulk action to every PR of the campaign in the current directory.
pub fn update_prs(options: &UpdatePrsOptions) -> Result<UpdatePrsOutcome, AppError> {
    update_prs_at(std::env::current_dir()?, options)
}

/// Apply one bulk action to every PR of the campaign rooted at `path`.
pub fn update_prs_at(
    path: impl Into<PathBuf>,
    options: &UpdatePrsOptions,
) -> Result<UpdatePrsOutcome, AppError> {
    let ctx = create_context(path.into());
    update_prs::execute(&ctx, options)
}
