mod activity_log;
mod campaign_source;
mod confirm_prompt;
mod github;

pub use activity_log::{Activity, ActivityLog};
pub use campaign_source::CampaignSource;
pub use confirm_prompt::ConfirmPrompt;
pub use github::GitHub;
