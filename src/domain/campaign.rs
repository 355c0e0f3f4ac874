//! Campaign working set model.

use std::path::PathBuf;

use crate::domain::AppError;

/// Directory under the campaign root that holds every cloned working copy.
pub const WORK_DIR: &str = "work";

/// Default manifest file listing the campaign repositories.
pub const DEFAULT_REPO_FILE: &str = "repos.txt";

/// File whose first line is the PR title and whose remainder is the PR body.
pub const DEFAULT_PR_DESCRIPTION_FILE: &str = "README.md";

/// Options controlling how a campaign is opened.
#[derive(Debug, Clone)]
pub struct CampaignOptions {
    pub repo_filename: PathBuf,
    pub pr_description_filename: PathBuf,
    /// Fail the load when the PR description file is missing or has no title.
    pub pr_description_required: bool,
}

impl Default for CampaignOptions {
    fn default() -> Self {
        Self {
            repo_filename: PathBuf::from(DEFAULT_REPO_FILE),
            pr_description_filename: PathBuf::from(DEFAULT_PR_DESCRIPTION_FILE),
            pr_description_required: false,
        }
    }
}

impl CampaignOptions {
    pub fn with_repo_file(repo_filename: impl Into<PathBuf>) -> Self {
        Self { repo_filename: repo_filename.into(), ..Self::default() }
    }

    pub fn requiring_pr_description(mut self, required: bool) -> Self {
        self.pr_description_required = required;
        self
    }
}

/// A repository belonging to a campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub org_name: String,
    pub repo_name: String,
    pub full_repo_name: String,
}

impl RepoRef {
    /// Parse a manifest entry of the form `owner/repo` or `host/owner/repo`.
    pub fn parse(entry: &str) -> Result<Self, AppError> {
        let parts: Vec<&str> = entry.split('/').collect();
        let valid = |s: &&str| !s.is_empty() && !s.chars().any(char::is_whitespace);
        if !parts.iter().all(valid) {
            return Err(AppError::campaign_error(format!("invalid repository name '{}'", entry)));
        }

        // The host, when present, only selects the remote; `gh` resolves it from the clone.
        let (org_name, repo_name) = match parts.as_slice() {
            [org, repo] | [_, org, repo] => (*org, *repo),
            _ => {
                return Err(AppError::campaign_error(format!(
                    "invalid repository name '{}': expected owner/repo or host/owner/repo",
                    entry
                )));
            }
        };

        Ok(Self {
            org_name: org_name.to_string(),
            repo_name: repo_name.to_string(),
            full_repo_name: entry.to_string(),
        })
    }

    /// Local path where the working copy is expected to be cloned.
    pub fn full_repo_path(&self) -> PathBuf {
        PathBuf::from(WORK_DIR).join(&self.org_name).join(&self.repo_name)
    }
}

/// A campaign resolved from its manifest, read-only to the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct CampaignDirectory {
    pub name: String,
    pub pr_title: String,
    pub pr_body: String,
    pub repos: Vec<RepoRef>,
}
