pub mod campaign_filesystem;
pub mod console_activity;
pub mod dialoguer_prompt;
pub mod github_command;

pub use campaign_filesystem::FilesystemCampaignSource;
pub use console_activity::{ConsoleActivity, ConsoleActivityLog};
pub use dialoguer_prompt::DialoguerPrompt;
pub use github_command::{GH_BINARY_ENV, GitHubCommandAdapter};
