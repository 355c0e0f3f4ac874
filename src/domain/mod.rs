pub mod action;
pub mod campaign;
pub mod error;
pub mod outcome;

pub use action::{ActionKind, select_action};
pub use campaign::{
    CampaignDirectory, CampaignOptions, DEFAULT_PR_DESCRIPTION_FILE, DEFAULT_REPO_FILE, RepoRef,
    WORK_DIR,
};
pub use error::{AppError, PrError};
pub use outcome::{Outcome, RunStatus, RunSummary};
