//! Error types for theme prompts.

/// Errors that can occur while asking the user for a theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    /// There is no interactive terminal to ask on.
    #[error("No interactive terminal available to choose a theme.")]
    NotInteractive,

    /// User cancelled the prompt.
    #[error("Prompt cancelled by user.")]
    Cancelled,

    /// The answer did not name one of the offered themes.
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Failed(String),
}

impl PromptError {
    /// Create a failure from any displayable cause.
    pub fn failed(cause: impl std::fmt::Display) -> Self {
        Self::Failed(cause.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            PromptError::NotInteractive.to_string(),
            "No interactive terminal available to choose a theme."
        );
        assert_eq!(
            PromptError::failed("broken pipe").to_string(),
            "Prompt failed: broken pipe"
        );
        assert_eq!(
            PromptError::InvalidChoice("7".into()).to_string(),
            "Invalid choice: 7"
        );
    }
}
