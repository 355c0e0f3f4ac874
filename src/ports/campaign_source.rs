use crate::domain::{AppError, CampaignDirectory, CampaignOptions};

/// Port for resolving a campaign manifest.
pub trait CampaignSource {
    fn open_campaign(&self, options: &CampaignOptions) -> Result<CampaignDirectory, AppError>;
}
