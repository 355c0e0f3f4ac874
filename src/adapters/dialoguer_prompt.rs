use std::io;

use dialoguer::Confirm;

use crate::domain::AppError;
use crate::ports::ConfirmPrompt;

/// Interactive yes/no prompt on the controlling terminal.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl ConfirmPrompt for DialoguerPrompt {
    fn ask_confirm(&self, message: &str) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| AppError::Io(io::Error::other(e)))
    }
}
