use std::io::Write;
use std::path::Path;

use crate::domain::PrError;

/// Port for mutating the pull request a campaign raised in one working copy.
///
/// Implementations must report a missing pull request as [`PrError::NoPrFound`].
pub trait GitHub {
    /// Close the pull request whose head branch is named after the campaign.
    fn close_pull_request(
        &self,
        out: &mut dyn Write,
        repo_path: &Path,
        campaign_name: &str,
    ) -> Result<(), PrError>;

    /// Rewrite the title and body of the pull request for the checked-out branch.
    fn update_pr_description(
        &self,
        out: &mut dyn Write,
        repo_path: &Path,
        title: &str,
        body: &str,
    ) -> Result<(), PrError>;
}
