//! # Beautifier - Themed Console Output
//!
//! Beautifier wraps the four console entry points (`log`, `info`, `warn`,
//! `error`) so every message is rendered through a user-selectable theme:
//!
//! - `minimal`: `[12:00:00] INFO server started`
//! - `emoji`: `[12:00:00] ℹ️ INFO server started`
//! - `table`: a boxed table with `Time`, `Type` and `Message` columns
//!
//! Formatting lives in [`beautifier_render`]; theme prompts live in
//! [`beautifier_input`]. This crate ties them to an output target.
//!
//! ## Core Concepts
//!
//! - [`LogTarget`]: Where finished text goes ([`StdTarget`], [`MemoryTarget`])
//! - [`Console`]: A target wrapped by a formatter
//! - [`initialize`]: Ask the user for a theme and announce it
//! - [`BeautifierLogger`]: Route the `log` facade through a [`Console`]
//! - [`BeautifierConfig`]: Build all of the above from one description
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use beautifier::{args, initialize, Console, InquireThemePrompt, StdTarget};
//! use beautifier_render::{MessageFormatter, ThemeRegistry};
//!
//! let registry = Arc::new(ThemeRegistry::new());
//! initialize(&registry, &InquireThemePrompt::new(), &StdTarget)?;
//!
//! let console = Console::patch(MessageFormatter::new(registry), StdTarget);
//! console.info(&args!["listening on", 8080]);
//! console.error(&args!["config", serde_json::json!({"port": 8080})]);
//! # Ok::<(), beautifier::InitError>(())
//! ```
//!
//! ## Arguments
//!
//! Each call takes a slice of [`LogArg`]. Strings and numbers are scalars;
//! anything `Serialize + Debug` can be passed with [`LogArg::composite`] and is
//! shown as pretty JSON, or as its `Debug` form when it cannot be serialized.
//! The [`args!`] macro converts a mixed list in one go.

mod config;
mod console;
mod logger;
mod setup;
mod target;

pub use config::BeautifierConfig;
pub use console::Console;
pub use logger::BeautifierLogger;
pub use setup::{apply_theme, confirmation_message, initialize, InitError};
pub use target::{LogTarget, MemoryTarget, StdTarget};

pub use beautifier_input::{LinePrompt, PromptError, ScriptedPrompt, ThemePrompt, PROMPT_MESSAGE};
#[cfg(feature = "input-inquire")]
pub use beautifier_input::InquireThemePrompt;
pub use beautifier_render::{available_themes, LogArg, LogKind, Theme, ThemeRegistry};

// Re-export crates for macro use and direct access
#[doc(hidden)]
pub use beautifier_render;
#[doc(hidden)]
pub use beautifier_input;

/// Build a `Vec<LogArg>` from a list of values.
///
/// Each value goes through `LogArg::from`, so strings, numbers, `bool`,
/// `char` and `serde_json::Value` mix freely. Wrap other serializable
/// values in [`LogArg::composite`].
///
/// ```
/// use beautifier::{args, LogArg};
///
/// let args = args!["port", 8080, true, serde_json::json!({"tls": false})];
/// assert_eq!(args.len(), 4);
/// assert!(args[3].is_composite());
///
/// let none: Vec<LogArg> = args![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::LogArg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::LogArg::from($arg)),+]
    };
}
