//! Update-prs command implementation.

use std::path::PathBuf;

use crate::app::api::{self, UpdatePrsOptions, UpdatePrsOutcome};
use crate::domain::AppError;

pub fn run_update_prs(
    close: bool,
    description: bool,
    yes: bool,
    repo_file: PathBuf,
) -> Result<(), AppError> {
    let options = UpdatePrsOptions { close, description, yes, repo_file };

    // A completed run has already printed its summary; a declined prompt prints nothing.
    if api::update_prs(&options)? == UpdatePrsOutcome::Aborted {
        tracing::debug!("update-prs aborted at confirmation");
    }
    Ok(())
}
