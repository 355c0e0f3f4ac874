//! `CampaignSource` implementation backed by the campaign directory on disk.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, CampaignDirectory, CampaignOptions, RepoRef};
use crate::ports::CampaignSource;

/// Reads a campaign from a root directory: its name, `repos.txt`, and `README.md`.
#[derive(Debug, Clone)]
pub struct FilesystemCampaignSource {
    root: PathBuf,
}

impl FilesystemCampaignSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn campaign_name(&self) -> Result<String, AppError> {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                AppError::campaign_error(format!(
                    "cannot derive campaign name from {}",
                    self.root.display()
                ))
            })
    }

    fn read_repos(&self, repo_file: &Path) -> Result<Vec<RepoRef>, AppError> {
        let path = self.root.join(repo_file);
        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                AppError::campaign_error(format!("{} not found", repo_file.display()))
            }
            _ => AppError::Io(e),
        })?;
        parse_repo_list(&content, repo_file)
    }

    fn read_pr_description(
        &self,
        description_file: &Path,
        required: bool,
    ) -> Result<(String, String), AppError> {
        let path = self.root.join(description_file);
        let (title, body) = match fs::read_to_string(&path) {
            Ok(content) => split_pr_description(&content),
            Err(e) if e.kind() == ErrorKind::NotFound && required => {
                return Err(AppError::campaign_error(format!(
                    "{} not found",
                    description_file.display()
                )));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(file = %path.display(), "no PR description file");
                (String::new(), String::new())
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        if required && title.is_empty() {
            return Err(AppError::campaign_error(format!(
                "{} has no PR title on its first line",
                description_file.display()
            )));
        }
        Ok((title, body))
    }
}

impl CampaignSource for FilesystemCampaignSource {
    fn open_campaign(&self, options: &CampaignOptions) -> Result<CampaignDirectory, AppError> {
        let name = self.campaign_name()?;
        let repos = self.read_repos(&options.repo_filename)?;
        let (pr_title, pr_body) = self
            .read_pr_description(&options.pr_description_filename, options.pr_description_required)?;

        tracing::info!(campaign = %name, repos = repos.len(), "opened campaign");
        Ok(CampaignDirectory { name, pr_title, pr_body, repos })
    }
}

/// Parse manifest lines into repositories, keeping the first occurrence of duplicates.
fn parse_repo_list(content: &str, source: &Path) -> Result<Vec<RepoRef>, AppError> {
    let mut seen = HashSet::new();
    let mut repos = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let entry = raw.split('#').next().unwrap_or_default().trim();
        if entry.is_empty() {
            continue;
        }

        let repo = RepoRef::parse(entry).map_err(|e| {
            AppError::campaign_error(format!("{}:{}: {}", source.display(), index + 1, inner(&e)))
        })?;

        if !seen.insert(repo.full_repo_name.clone()) {
            tracing::warn!(repo = %repo.full_repo_name, "duplicate repository in manifest, skipping");
            continue;
        }
        repos.push(repo);
    }

    Ok(repos)
}

fn inner(err: &AppError) -> String {
    match err {
        AppError::CampaignLoad(message) => message.clone(),
        other => other.to_string(),
    }
}

/// First line (without heading markers) is the title; the trimmed rest is the body.
fn split_pr_description(content: &str) -> (String, String) {
    let (first, rest) = content.split_once('\n').unwrap_or((content, ""));
    let title = first.trim().trim_start_matches('#').trim().to_string();
    (title, rest.trim().to_string())
}
