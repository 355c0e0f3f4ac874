use std::cell::Cell;

use crate::domain::{AppError, CampaignDirectory, CampaignOptions, RepoRef};
use crate::ports::CampaignSource;

/// `CampaignSource` returning a fixed directory, or a load failure when none is set.
#[derive(Default)]
pub struct StubCampaignSource {
    directory: Option<CampaignDirectory>,
    pub opened: Cell<usize>,
}

impl StubCampaignSource {
    pub fn new(name: &str, repos: &[&str]) -> Self {
        let repos = repos.iter().map(|r| RepoRef::parse(r).unwrap()).collect();
        Self {
            directory: Some(CampaignDirectory {
                name: name.to_string(),
                pr_title: "Bump dependencies".to_string(),
                pr_body: "Automated upgrade.".to_string(),
                repos,
            }),
            opened: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    /// Same campaign, but as if the PR description file were absent.
    pub fn without_description(mut self) -> Self {
        if let Some(directory) = self.directory.as_mut() {
            directory.pr_title.clear();
            directory.pr_body.clear();
        }
        self
    }
}

impl CampaignSource for StubCampaignSource {
    fn open_campaign(&self, options: &CampaignOptions) -> Result<CampaignDirectory, AppError> {
        self.opened.set(self.opened.get() + 1);
        let directory = self.directory.clone().ok_or_else(|| {
            AppError::campaign_error(format!("{} not found", options.repo_filename.display()))
        })?;
        if options.pr_description_required && directory.pr_title.is_empty() {
            return Err(AppError::campaign_error(format!(
                "{} not found",
                options.pr_description_filename.display()
            )));
        }
        Ok(directory)
    }
}
