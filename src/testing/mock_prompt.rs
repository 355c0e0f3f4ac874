use std::cell::RefCell;
use std::io;

use crate::domain::AppError;
use crate::ports::ConfirmPrompt;

/// Prompt that answers every question the same way and records what was asked.
#[derive(Default)]
pub struct MockPrompt {
    answer: bool,
    fail: bool,
    pub asked: RefCell<Vec<String>>,
}

impl MockPrompt {
    pub fn answering(answer: bool) -> Self {
        Self { answer, ..Self::default() }
    }

    /// Prompt whose terminal is unusable, like `dialoguer` without a TTY.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn questions(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl ConfirmPrompt for MockPrompt {
    fn ask_confirm(&self, message: &str) -> Result<bool, AppError> {
        self.asked.borrow_mut().push(message.to_string());
        if self.fail {
            return Err(AppError::Io(io::Error::new(io::ErrorKind::NotConnected, "not a terminal")));
        }
        Ok(self.answer)
    }
}
