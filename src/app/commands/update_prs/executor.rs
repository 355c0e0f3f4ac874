//! Per-repository check → invoke → classify sequence.

use std::path::Path;

use crate::domain::{ActionKind, CampaignDirectory, Outcome, PrError, RepoRef};
use crate::ports::{Activity, ActivityLog, GitHub};

/// Apply `action` to one repository and report its single terminal status.
///
/// Only a working copy that is known to be absent is skipped; any other stat failure
/// falls through to the remote call.
pub fn apply_to_repo<G: GitHub, L: ActivityLog>(
    github: &G,
    log: &L,
    root: &Path,
    action: ActionKind,
    campaign: &CampaignDirectory,
    repo: &RepoRef,
) -> Outcome {
    let mut activity = log.start_activity(&action.activity_title(&repo.full_repo_name));

    let relative_path = repo.full_repo_path();
    let repo_path = root.join(&relative_path);
    if matches!(repo_path.try_exists(), Ok(false)) {
        activity.end_with_warning(&format!(
            "Directory {} does not exist - has it been cloned?",
            relative_path.display()
        ));
        return Outcome::SkippedNotCloned;
    }

    let result = match action {
        ActionKind::Close => {
            github.close_pull_request(activity.writer(), &repo_path, &campaign.name)
        }
        ActionKind::UpdateDescription => github.update_pr_description(
            activity.writer(),
            &repo_path,
            &campaign.pr_title,
            &campaign.pr_body,
        ),
    };

    match result {
        Ok(()) => {
            activity.end_with_success();
            Outcome::Succeeded
        }
        Err(err @ PrError::NoPrFound { .. }) => {
            activity.end_with_warning(&err.to_string());
            Outcome::SkippedNoPr
        }
        Err(err) => {
            activity.end_with_failure(&err);
            Outcome::Failed(err)
        }
    }
}
