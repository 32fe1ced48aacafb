//! Inquire-based theme prompt.
//!
//! Rich TUI selection using the [inquire](https://crates.io/crates/inquire)
//! crate: arrow keys to move, Enter to pick, Esc to cancel.

use std::io::IsTerminal;

use beautifier_render::Theme;
use inquire::{InquireError, Select};

use crate::prompt::ThemePrompt;
use crate::PromptError;

/// Convert inquire errors to PromptError.
fn map_inquire_error(e: InquireError) -> PromptError {
    match e {
        InquireError::NotTTY => PromptError::NotInteractive,
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            PromptError::Cancelled
        }
        other => PromptError::failed(other),
    }
}

/// Single-select theme prompt using inquire.
///
/// The cursor starts on the default theme.
///
/// # Example
///
/// ```ignore
/// use beautifier_input::{InquireThemePrompt, ThemePrompt, PROMPT_MESSAGE};
/// use beautifier_render::{available_themes, Theme};
///
/// let theme = InquireThemePrompt::new()
///     .help("↑↓ to move, enter to select")
///     .choose(PROMPT_MESSAGE, &available_themes(), Theme::Minimal)?;
/// ```
#[derive(Debug, Clone)]
pub struct InquireThemePrompt {
    help_message: Option<String>,
    page_size: usize,
}

impl InquireThemePrompt {
    /// Create a new selection prompt.
    pub fn new() -> Self {
        Self {
            help_message: None,
            page_size: 10,
        }
    }

    /// Set a help message.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help_message = Some(help.into());
        self
    }

    /// Set the page size for scrolling.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }
}

impl Default for InquireThemePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemePrompt for InquireThemePrompt {
    fn name(&self) -> &'static str {
        "inquire"
    }

    fn choose(
        &self,
        message: &str,
        choices: &[Theme],
        default: Theme,
    ) -> Result<Theme, PromptError> {
        if !std::io::stdin().is_terminal() {
            return Err(PromptError::NotInteractive);
        }
        if choices.is_empty() {
            return Err(PromptError::InvalidChoice("no themes to choose from".into()));
        }

        let cursor = choices.iter().position(|theme| *theme == default).unwrap_or(0);
        let mut prompt = Select::new(message, choices.to_vec())
            .with_starting_cursor(cursor)
            .with_page_size(self.page_size);

        if let Some(help) = &self.help_message {
            prompt = prompt.with_help_message(help);
        }

        prompt.prompt().map_err(map_inquire_error)
    }
}
