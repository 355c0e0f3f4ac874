use crate::domain::AppError;

/// Port for asking the operator a yes/no question.
pub trait ConfirmPrompt {
    /// Returns `true` only when the operator affirms.
    fn ask_confirm(&self, message: &str) -> Result<bool, AppError>;
}
