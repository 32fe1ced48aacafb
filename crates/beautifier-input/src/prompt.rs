//! The theme prompt seam.
//!
//! A [`ThemePrompt`] presents a list of themes with one pre-selected and
//! returns the user's pick. Implementations block the calling thread until
//! the user answers.

use std::sync::Mutex;

use beautifier_render::Theme;

use crate::PromptError;

/// The question asked when a console is initialized.
pub const PROMPT_MESSAGE: &str = "Choose your console theme:";

/// Something that can ask the user to pick a theme.
///
/// # Implementation Guidelines
///
/// - Present `choices` in the order given, with `default` pre-selected.
/// - Return [`PromptError::NotInteractive`] when there is no terminal to ask
///   on, rather than silently answering `default`.
/// - Map user cancellation (Esc, Ctrl+C, EOF) to [`PromptError::Cancelled`].
pub trait ThemePrompt {
    /// Human-readable name for this prompt, used in diagnostics.
    fn name(&self) -> &'static str {
        "prompt"
    }

    /// Ask the user to pick one of `choices`.
    fn choose(
        &self,
        message: &str,
        choices: &[Theme],
        default: Theme,
    ) -> Result<Theme, PromptError>;
}

impl<P: ThemePrompt + ?Sized> ThemePrompt for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn choose(
        &self,
        message: &str,
        choices: &[Theme],
        default: Theme,
    ) -> Result<Theme, PromptError> {
        (**self).choose(message, choices, default)
    }
}

/// A question as it was put to a [`ScriptedPrompt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub message: String,
    pub choices: Vec<Theme>,
    pub default: Theme,
}

#[derive(Debug, Clone)]
enum Script {
    Answer(Theme),
    AcceptDefault,
    Fail(PromptError),
}

/// A prompt with a predetermined outcome, for tests.
///
/// Records every request it receives so tests can check what would have
/// been shown to the user.
#[derive(Debug)]
pub struct ScriptedPrompt {
    script: Script,
    requests: Mutex<Vec<PromptRequest>>,
}

impl ScriptedPrompt {
    /// Always pick `theme`.
    pub fn answer(theme: Theme) -> Self {
        Self::with_script(Script::Answer(theme))
    }

    /// Always pick whatever is pre-selected.
    pub fn accept_default() -> Self {
        Self::with_script(Script::AcceptDefault)
    }

    /// Always fail with `error`.
    pub fn fail(error: PromptError) -> Self {
        Self::with_script(Script::Fail(error))
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<PromptRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl ThemePrompt for ScriptedPrompt {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn choose(
        &self,
        message: &str,
        choices: &[Theme],
        default: Theme,
    ) -> Result<Theme, PromptError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(PromptRequest {
                message: message.to_string(),
                choices: choices.to_vec(),
                default,
            });
        }

        match &self.script {
            Script::Answer(theme) if choices.contains(theme) => Ok(*theme),
            Script::Answer(theme) => Err(PromptError::InvalidChoice(theme.to_string())),
            Script::AcceptDefault => Ok(default),
            Script::Fail(error) => Err(error.clone()),
        }
    }
}
