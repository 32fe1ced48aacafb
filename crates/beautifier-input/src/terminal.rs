//! Simple terminal prompts.
//!
//! A numbered menu over plain stdin/stdout that works without external
//! dependencies. For arrow-key selection, use the `inquire` feature instead.

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use beautifier_render::Theme;

use crate::prompt::ThemePrompt;
use crate::PromptError;

/// Abstraction over terminal I/O for testability.
pub trait TerminalIO: Send + Sync {
    /// Check if stdin is a terminal.
    fn is_terminal(&self) -> bool;

    /// Write a prompt to stdout.
    fn write_prompt(&self, prompt: &str) -> io::Result<()>;

    /// Read a line from stdin.
    fn read_line(&self) -> io::Result<String>;
}

/// Real terminal I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn is_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        print!("{}", prompt);
        io::stdout().flush()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Numbered-menu theme prompt.
///
/// ```text
/// Choose your console theme:
///   1) minimal
///   2) emoji
///   3) table
/// Select [1-3] (default: minimal):
/// ```
///
/// Accepts a number or a theme name. An empty answer picks the default.
///
/// # Example
///
/// ```
/// use beautifier_input::{LinePrompt, MockTerminal, ThemePrompt};
/// use beautifier_render::{available_themes, Theme};
///
/// let prompt = LinePrompt::with_terminal(MockTerminal::with_response("2"));
/// let theme = prompt.choose("Pick:", &available_themes(), Theme::Minimal).unwrap();
/// assert_eq!(theme, Theme::Emoji);
/// ```
#[derive(Clone)]
pub struct LinePrompt<T: TerminalIO = RealTerminal> {
    terminal: Arc<T>,
}

impl LinePrompt<RealTerminal> {
    /// Create a prompt on the real terminal.
    pub fn new() -> Self {
        Self {
            terminal: Arc::new(RealTerminal),
        }
    }
}

impl Default for LinePrompt<RealTerminal> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TerminalIO> LinePrompt<T> {
    /// Create a prompt with a custom terminal for testing.
    pub fn with_terminal(terminal: T) -> Self {
        Self {
            terminal: Arc::new(terminal),
        }
    }

    fn menu(message: &str, choices: &[Theme], default: Theme) -> String {
        let mut menu = format!("{}\n", message);
        for (i, theme) in choices.iter().enumerate() {
            menu.push_str(&format!("  {}) {}\n", i + 1, theme));
        }
        menu.push_str(&format!(
            "Select [1-{}] (default: {}): ",
            choices.len(),
            default
        ));
        menu
    }

    fn interpret(answer: &str, choices: &[Theme], default: Theme) -> Result<Theme, PromptError> {
        if answer.is_empty() {
            return Ok(default);
        }

        if let Ok(number) = answer.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|index| choices.get(index).copied())
                .ok_or_else(|| PromptError::InvalidChoice(answer.to_string()));
        }

        match answer.parse::<Theme>() {
            Ok(theme) if choices.contains(&theme) => Ok(theme),
            _ => Err(PromptError::InvalidChoice(answer.to_string())),
        }
    }
}

impl<T: TerminalIO> ThemePrompt for LinePrompt<T> {
    fn name(&self) -> &'static str {
        "line"
    }

    fn choose(
        &self,
        message: &str,
        choices: &[Theme],
        default: Theme,
    ) -> Result<Theme, PromptError> {
        if !self.terminal.is_terminal() {
            return Err(PromptError::NotInteractive);
        }
        if choices.is_empty() {
            return Err(PromptError::InvalidChoice("no themes to choose from".into()));
        }

        self.terminal
            .write_prompt(&Self::menu(message, choices, default))
            .map_err(PromptError::failed)?;

        let line = self.terminal.read_line().map_err(PromptError::failed)?;

        // Check for EOF (user pressed Ctrl+D)
        if line.is_empty() {
            return Err(PromptError::Cancelled);
        }

        Self::interpret(line.trim(), choices, default)
    }
}

/// Mock terminal for testing prompts.
///
/// Returns canned responses in order and remembers every prompt written.
#[derive(Debug)]
pub struct MockTerminal {
    is_terminal: bool,
    responses: Vec<String>,
    /// Index of the next response to return.
    response_index: AtomicUsize,
    written: Mutex<Vec<String>>,
}

impl MockTerminal {
    /// Create a mock that simulates a non-terminal.
    pub fn non_terminal() -> Self {
        Self::build(false, Vec::new())
    }

    /// Create a mock terminal that returns the given response.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::build(true, vec![response.into()])
    }

    /// Create a mock terminal that returns multiple responses in sequence.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::build(true, responses.into_iter().map(Into::into).collect())
    }

    /// Create a mock that simulates EOF (Ctrl+D).
    pub fn eof() -> Self {
        Self::build(true, Vec::new())
    }

    fn build(is_terminal: bool, responses: Vec<String>) -> Self {
        Self {
            is_terminal,
            responses,
            response_index: AtomicUsize::new(0),
            written: Mutex::new(Vec::new()),
        }
    }

    /// Everything written through [`TerminalIO::write_prompt`], in order.
    pub fn written(&self) -> Vec<String> {
        self.written
            .lock()
            .map(|written| written.clone())
            .unwrap_or_default()
    }
}

impl TerminalIO for MockTerminal {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        if let Ok(mut written) = self.written.lock() {
            written.push(prompt.to_string());
        }
        Ok(())
    }

    fn read_line(&self) -> io::Result<String> {
        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            // Add newline like real read_line does
            Some(response) => Ok(format!("{}\n", response)),
            None => Ok(String::new()),
        }
    }
}

impl<T: TerminalIO> TerminalIO for Arc<T> {
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }

    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        (**self).write_prompt(prompt)
    }

    fn read_line(&self) -> io::Result<String> {
        (**self).read_line()
    }
}
