//! Interactive theme selection for the console beautifier.
//!
//! `beautifier-input` asks the user which [`Theme`] to use. The question is
//! behind the [`ThemePrompt`] trait so the caller decides how it is asked:
//!
//! - [`InquireThemePrompt`]: arrow-key single select via the inquire crate
//!   (requires the `inquire` feature, on by default)
//! - [`LinePrompt`]: numbered menu over plain stdin/stdout (requires the
//!   `simple-prompts` feature, on by default)
//! - [`ScriptedPrompt`]: a canned answer or failure, for tests
//!
//! # Quick Start
//!
//! ```ignore
//! use beautifier_input::{InquireThemePrompt, ThemePrompt, PROMPT_MESSAGE};
//! use beautifier_render::{available_themes, Theme};
//!
//! let theme = InquireThemePrompt::new()
//!     .choose(PROMPT_MESSAGE, &available_themes(), Theme::Minimal)?;
//! ```
//!
//! # Failure
//!
//! A prompt that cannot be shown (no TTY, user pressed Esc or Ctrl+C) returns
//! a [`PromptError`]. No prompt substitutes a default theme on failure.
//!
//! # Testing
//!
//! ```
//! use beautifier_input::{PromptError, ScriptedPrompt, ThemePrompt};
//! use beautifier_render::{available_themes, Theme};
//!
//! let prompt = ScriptedPrompt::answer(Theme::Table);
//! assert_eq!(prompt.choose("Pick:", &available_themes(), Theme::Minimal), Ok(Theme::Table));
//!
//! let prompt = ScriptedPrompt::fail(PromptError::NotInteractive);
//! assert!(prompt.choose("Pick:", &available_themes(), Theme::Minimal).is_err());
//! ```

mod error;
mod prompt;

#[cfg(feature = "simple-prompts")]
mod terminal;

#[cfg(feature = "inquire")]
mod inquire_adapter;

pub use error::PromptError;
pub use prompt::{PromptRequest, ScriptedPrompt, ThemePrompt, PROMPT_MESSAGE};

#[cfg(feature = "simple-prompts")]
pub use terminal::{LinePrompt, MockTerminal, RealTerminal, TerminalIO};

#[cfg(feature = "inquire")]
pub use inquire_adapter::InquireThemePrompt;

pub use beautifier_render::Theme;
