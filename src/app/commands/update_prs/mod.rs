//! `update-prs` command implementation.
//!
//! Applies one bulk action to the pull request of every repository in a campaign,
//! one repository at a time and in manifest order. Per-repository failures are
//! contained and counted; only flag validation and campaign loading can fail
//! the run, and a declined or unanswerable prompt ends it without touching anything.

mod confirmation;
mod executor;

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{
    ActionKind, AppError, CampaignOptions, DEFAULT_REPO_FILE, RunStatus, RunSummary, select_action,
};
use crate::ports::{ActivityLog, CampaignSource, ConfirmPrompt, GitHub};

/// Name used as the prefix of the summary line.
pub const COMMAND_NAME: &str = "campaign-prs update-prs";

/// Options for `update-prs`.
#[derive(Debug, Clone)]
pub struct UpdatePrsOptions {
    /// Close every campaign PR.
    pub close: bool,
    /// Rewrite every campaign PR title and body.
    pub description: bool,
    /// Skip the confirmation prompt.
    pub yes: bool,
    /// Manifest listing the campaign repositories.
    pub repo_file: PathBuf,
}

impl Default for UpdatePrsOptions {
    fn default() -> Self {
        Self {
            close: false,
            description: false,
            yes: false,
            repo_file: PathBuf::from(DEFAULT_REPO_FILE),
        }
    }
}

impl UpdatePrsOptions {
    /// Flag table consumed by the action selector.
    fn action_flags(&self) -> [(bool, ActionKind); 2] {
        [(self.close, ActionKind::Close), (self.description, ActionKind::UpdateDescription)]
    }
}

/// Result of `update-prs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdatePrsOutcome {
    /// The operator declined the confirmation prompt; nothing was touched.
    Aborted,
    Completed { action: ActionKind, summary: RunSummary },
}

/// Execute `update-prs`.
pub fn execute<C, P, G, L>(
    ctx: &AppContext<C, P, G, L>,
    options: &UpdatePrsOptions,
) -> Result<UpdatePrsOutcome, AppError>
where
    C: CampaignSource,
    P: ConfirmPrompt,
    G: GitHub,
    L: ActivityLog,
{
    let action = select_action(&options.action_flags())?;

    let campaign_options = CampaignOptions::with_repo_file(&options.repo_file)
        .requiring_pr_description(action == ActionKind::UpdateDescription);
    let campaign = ctx.campaigns().open_campaign(&campaign_options)?;

    if !confirmation::confirm(ctx.prompt(), action, &campaign.name, options.yes) {
        tracing::info!(campaign = %campaign.name, "operator declined, nothing to do");
        return Ok(UpdatePrsOutcome::Aborted);
    }

    let mut summary = RunSummary::default();
    for repo in &campaign.repos {
        let outcome =
            executor::apply_to_repo(ctx.github(), ctx.log(), ctx.root(), action, &campaign, repo);
        tracing::debug!(repo = %repo.full_repo_name, ?outcome, skipped = outcome.is_skipped());
        summary.record(&outcome);
    }

    report_summary(ctx.log(), &summary);
    Ok(UpdatePrsOutcome::Completed { action, summary })
}

fn report_summary(log: &impl ActivityLog, summary: &RunSummary) {
    let line = summary.render(COMMAND_NAME);
    match summary.status() {
        RunStatus::AllOk => log.success(&line),
        RunStatus::CompletedWithErrors => log.warning(&line),
    }
}
