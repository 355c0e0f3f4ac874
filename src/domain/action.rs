//! Bulk actions that can be applied to a campaign's pull requests.

use std::fmt;

use crate::domain::AppError;

/// The single action selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Close,
    UpdateDescription,
}

impl ActionKind {
    /// Question shown before mutating any repository.
    pub fn confirmation_message(self, campaign_name: &str) -> String {
        match self {
            ActionKind::Close => format!("Close all PRs from the {} campaign?", campaign_name),
            ActionKind::UpdateDescription => format!(
                "Update all PR titles and descriptions from the {} campaign?",
                campaign_name
            ),
        }
    }

    /// Title of the per-repository activity.
    pub fn activity_title(self, full_repo_name: &str) -> String {
        match self {
            ActionKind::Close => format!("Closing PR in {}", full_repo_name),
            ActionKind::UpdateDescription => {
                format!("Updating PR description in {}", full_repo_name)
            }
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Close => write!(f, "close"),
            ActionKind::UpdateDescription => write!(f, "description"),
        }
    }
}

/// Resolve the requested action from `(flag, action)` pairs.
///
/// Exactly one flag must be set.
pub fn select_action(flags: &[(bool, ActionKind)]) -> Result<ActionKind, AppError> {
    let mut selected = flags.iter().filter(|(enabled, _)| *enabled).map(|(_, kind)| *kind);

    match (selected.next(), selected.next()) {
        (Some(kind), None) => Ok(kind),
        _ => Err(AppError::config_error("update-prs needs one and only one action flag")),
    }
}
