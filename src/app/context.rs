use std::path::{Path, PathBuf};

use crate::ports::{ActivityLog, CampaignSource, ConfirmPrompt, GitHub};

/// Application context holding dependencies for command execution.
pub struct AppContext<C, P, G, L>
where
    C: CampaignSource,
    P: ConfirmPrompt,
    G: GitHub,
    L: ActivityLog,
{
    root: PathBuf,
    campaigns: C,
    prompt: P,
    github: G,
    log: L,
}

impl<C, P, G, L> AppContext<C, P, G, L>
where
    C: CampaignSource,
    P: ConfirmPrompt,
    G: GitHub,
    L: ActivityLog,
{
    /// Create a new application context rooted at a campaign directory.
    pub fn new(root: impl Into<PathBuf>, campaigns: C, prompt: P, github: G, log: L) -> Self {
        Self { root: root.into(), campaigns, prompt, github, log }
    }

    /// Campaign directory that working-copy paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn campaigns(&self) -> &C {
        &self.campaigns
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn github(&self) -> &G {
        &self.github
    }

    pub fn log(&self) -> &L {
        &self.log
    }
}
