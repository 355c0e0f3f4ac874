use crate::domain::ActionKind;
use crate::ports::ConfirmPrompt;

/// Ask the operator before mutating anything, unless `skip_prompt` is set.
///
/// Returns `false` when the operator declines or the prompt cannot be answered
/// (for example without a terminal); either way nothing is touched.
pub fn confirm(
    prompt: &impl ConfirmPrompt,
    action: ActionKind,
    campaign_name: &str,
    skip_prompt: bool,
) -> bool {
    if skip_prompt {
        return true;
    }
    match prompt.ask_confirm(&action.confirmation_message(campaign_name)) {
        Ok(answer) => answer,
        Err(err) => {
            tracing::warn!(error = %err, "confirmation prompt failed, treating as declined");
            false
        }
    }
}
