use std::io::Write;
use std::path::Path;
use std::process::Command;

use serde::Deserialize;

use crate::domain::PrError;
use crate::ports::GitHub;

/// Environment variable overriding the `gh` executable.
pub const GH_BINARY_ENV: &str = "CAMPAIGN_PRS_GH";

/// Marker `gh pr view` prints when a branch has no pull request.
const NO_PR_MARKER: &str = "no pull requests found";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrView {
    number: u64,
    state: String,
    head_ref_name: String,
}

/// `GitHub` implementation that shells out to the `gh` CLI inside each working copy.
#[derive(Debug, Clone)]
pub struct GitHubCommandAdapter {
    binary: String,
}

impl Default for GitHubCommandAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubCommandAdapter {
    pub fn new() -> Self {
        let binary = std::env::var(GH_BINARY_ENV).unwrap_or_else(|_| "gh".to_string());
        Self { binary }
    }

    /// Run `gh` in `cwd`, copying its output to `out`.
    fn run_gh(&self, out: &mut dyn Write, cwd: &Path, args: &[&str]) -> Result<String, GhFailure> {
        tracing::debug!(cwd = %cwd.display(), ?args, "running gh");

        let output = Command::new(&self.binary).args(args).current_dir(cwd).output().map_err(
            |e| GhFailure::Spawn(format!("Failed to execute {} CLI: {}", self.binary, e)),
        )?;

        if let Err(e) = out.write_all(&output.stdout).and_then(|_| out.write_all(&output.stderr)) {
            tracing::debug!(error = %e, "failed to capture gh output");
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GhFailure::Exit(stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Find the open pull request for `selector` (a branch name, or the current branch).
    fn find_open_pr(
        &self,
        out: &mut dyn Write,
        repo_path: &Path,
        selector: Option<&str>,
    ) -> Result<PrView, PrError> {
        let mut args = vec!["pr", "view"];
        if let Some(branch) = selector {
            args.push(branch);
        }
        args.extend(["--json", "number,state,headRefName"]);

        let branch = selector.unwrap_or("(current)");
        let not_found = || PrError::NoPrFound {
            path: repo_path.display().to_string(),
            branch: branch.to_string(),
        };

        let stdout = match self.run_gh(out, repo_path, &args) {
            Ok(stdout) => stdout,
            Err(GhFailure::Exit(stderr)) if stderr.to_lowercase().contains(NO_PR_MARKER) => {
                return Err(not_found());
            }
            Err(failure) => return Err(failure.into_pr_error("gh pr view")),
        };

        let pr: PrView = serde_json::from_str(&stdout).map_err(|e| {
            PrError::operation(format!("Failed to parse gh pr view output: {}", e))
        })?;

        if !pr.state.eq_ignore_ascii_case("OPEN") {
            tracing::debug!(number = pr.number, state = %pr.state, "pull request is not open");
            return Err(not_found());
        }
        if selector.is_some_and(|expected| pr.head_ref_name != expected) {
            return Err(not_found());
        }

        Ok(pr)
    }
}

enum GhFailure {
    Spawn(String),
    Exit(String),
}

impl GhFailure {
    fn into_pr_error(self, command: &str) -> PrError {
        match self {
            GhFailure::Spawn(message) => PrError::operation(message),
            GhFailure::Exit(stderr) => PrError::operation(format!("{} failed: {}", command, stderr)),
        }
    }
}

impl GitHub for GitHubCommandAdapter {
    fn close_pull_request(
        &self,
        out: &mut dyn Write,
        repo_path: &Path,
        campaign_name: &str,
    ) -> Result<(), PrError> {
        let pr = self.find_open_pr(out, repo_path, Some(campaign_name))?;
        let number = pr.number.to_string();
        self.run_gh(out, repo_path, &["pr", "close", &number])
            .map_err(|f| f.into_pr_error("gh pr close"))?;
        Ok(())
    }

    fn update_pr_description(
        &self,
        out: &mut dyn Write,
        repo_path: &Path,
        title: &str,
        body: &str,
    ) -> Result<(), PrError> {
        let pr = self.find_open_pr(out, repo_path, None)?;
        let number = pr.number.to_string();
        self.run_gh(out, repo_path, &["pr", "edit", &number, "--title", title, "--body", body])
            .map_err(|f| f.into_pr_error("gh pr edit"))?;
        Ok(())
    }
}
