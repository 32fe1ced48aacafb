//! # Beautifier Render - Themed Formatting for Console Log Messages
//!
//! `beautifier-render` turns a logging call (a [`LogKind`] plus a sequence of
//! [`LogArg`] values) into a display string, according to the [`Theme`] that is
//! active in a shared [`ThemeRegistry`].
//!
//! This crate is the formatting core of the `beautifier` crate, but it has no
//! opinion about where output goes: it only builds strings.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: Closed set of rendering strategies (`minimal`, `emoji`, `table`)
//! - [`ThemeRegistry`]: Holds the active theme; shared by everything that formats
//! - [`LogKind`]: The category of a logging call (`LOG`, `INFO`, `WARN`, `ERROR`)
//! - [`EmojiMap`]: Decorative prefix per kind for the emoji and table themes
//! - [`LogArg`]: One logged value, either a scalar or a structured composite
//! - [`MessageFormatter`]: Dispatches on the active theme and renders the message
//! - [`Clock`]: Supplies the timestamp shown in every message
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use beautifier_render::{FixedClock, LogArg, LogKind, MessageFormatter, Theme, ThemeRegistry};
//!
//! let registry = Arc::new(ThemeRegistry::new());
//! let formatter = MessageFormatter::new(registry.clone())
//!     .with_clock(FixedClock::new("12:00:00"))
//!     .with_styling(Some(false));
//!
//! let line = formatter.format(LogKind::Log, &LogKind::Log.style(), &[LogArg::from("Hello")]);
//! assert_eq!(line, "[12:00:00] LOG Hello");
//!
//! registry.set_theme(Theme::Emoji);
//! let line = formatter.format(LogKind::Error, &LogKind::Error.style(), &[LogArg::from("bad")]);
//! assert_eq!(line, "[12:00:00] ❌ ERROR bad");
//! ```
//!
//! ## Styling
//!
//! All decoration goes through [`console::Style`]. Decoration never changes the
//! text content: [`console::strip_ansi_codes`] on any output yields the plain
//! rendering.

mod arg;
mod clock;
mod error;
mod formatter;
mod kind;
pub mod tabular;
pub mod theme;

pub use arg::{join_args, Composite, LogArg};
pub use clock::{Clock, FixedClock, LocalClock, DEFAULT_TIME_FORMAT};
pub use error::ThemeParseError;
pub use formatter::{MessageFormatter, TableLayout};
pub use kind::{EmojiMap, LogKind};
pub use theme::{available_themes, Theme, ThemeRegistry};
