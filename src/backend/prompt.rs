//! Terminal confirmation prompt

use inquire::Confirm;

use super::UserPrompt;
use crate::error::{PlatmanError, Result};

/// Asks yes/no questions on the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompt;

impl UserPrompt for InquirePrompt {
    fn confirm(&self, message: &str) -> Result<bool> {
        Confirm::new(message)
            .with_default(false)
            .with_help_message("Press 'y' to confirm, Enter or 'n' to cancel")
            .prompt()
            .map_err(|e| PlatmanError::PromptFailed {
                message: format!("Failed to read confirmation: {e}"),
            })
    }
}
