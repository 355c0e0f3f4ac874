use std::io;

use thiserror::Error;

/// Library-wide error type for campaign-prs operations.
///
/// Every variant here is fatal to a run. Per-repository failures are carried by
/// [`PrError`] and never escape the repository loop.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Invalid or ambiguous command configuration.
    #[error("{0}")]
    Configuration(String),

    /// The campaign manifest is missing or malformed.
    #[error("Failed to load campaign: {0}")]
    CampaignLoad(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn campaign_error<S: Into<String>>(message: S) -> Self {
        AppError::CampaignLoad(message.into())
    }
}

/// Failure reported by a pull-request collaborator for a single repository.
#[derive(Debug, Error)]
pub enum PrError {
    /// No open pull request matches the campaign in this working copy.
    #[error("no PR found for {path} and branch {branch}")]
    NoPrFound { path: String, branch: String },

    /// Any other failure talking to the remote.
    #[error("{0}")]
    Operation(String),
}

impl PrError {
    pub fn operation<S: Into<String>>(message: S) -> Self {
        PrError::Operation(message.into())
    }
}

impl From<io::Error> for PrError {
    fn from(err: io::Error) -> Self {
        PrError::Operation(err.to_string())
    }
}
