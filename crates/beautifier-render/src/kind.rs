//! Log kinds and their decorations.

use std::collections::HashMap;
use std::fmt;

use console::Style;

/// The category of a logging call.
///
/// Maps one-to-one onto the four console entry points (`log`, `info`,
/// `warn`, `error`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogKind {
    Log,
    Info,
    Warn,
    Error,
}

impl LogKind {
    /// Every kind, in entry point order.
    pub const ALL: [LogKind; 4] = [LogKind::Log, LogKind::Info, LogKind::Warn, LogKind::Error];

    /// The label printed in front of a message.
    pub fn label(&self) -> &'static str {
        match self {
            LogKind::Log => "LOG",
            LogKind::Info => "INFO",
            LogKind::Warn => "WARN",
            LogKind::Error => "ERROR",
        }
    }

    /// The fixed style for this kind's label.
    ///
    /// LOG is bold green, INFO bold blue, WARN bold yellow, ERROR bold red.
    pub fn style(&self) -> Style {
        match self {
            LogKind::Log => Style::new().green().bold(),
            LogKind::Info => Style::new().blue().bold(),
            LogKind::Warn => Style::new().yellow().bold(),
            LogKind::Error => Style::new().red().bold(),
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `log` levels below INFO have no console counterpart and render as LOG.
impl From<log::Level> for LogKind {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogKind::Error,
            log::Level::Warn => LogKind::Warn,
            log::Level::Info => LogKind::Info,
            log::Level::Debug | log::Level::Trace => LogKind::Log,
        }
    }
}

/// Decorative prefix per [`LogKind`].
///
/// Kinds without an entry decorate as the empty string; lookups never fail.
///
/// # Example
///
/// ```rust
/// use beautifier_render::{EmojiMap, LogKind};
///
/// let map = EmojiMap::default();
/// assert_eq!(map.get(LogKind::Error), "❌");
/// assert_eq!(map.decorate(LogKind::Error), "❌ ERROR");
///
/// let sparse = EmojiMap::empty().with(LogKind::Warn, "!");
/// assert_eq!(sparse.get(LogKind::Log), "");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojiMap {
    entries: HashMap<LogKind, String>,
}

impl EmojiMap {
    /// A map with no entries.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Set (or replace) the decoration for a kind.
    pub fn with(mut self, kind: LogKind, emoji: impl Into<String>) -> Self {
        self.entries.insert(kind, emoji.into());
        self
    }

    /// Remove the decoration for a kind.
    pub fn without(mut self, kind: LogKind) -> Self {
        self.entries.remove(&kind);
        self
    }

    /// The decoration for a kind, or `""`.
    pub fn get(&self, kind: LogKind) -> &str {
        self.entries.get(&kind).map(String::as_str).unwrap_or("")
    }

    /// `"<emoji> <KIND>"`, the kind label as shown by the emoji and table themes.
    pub fn decorate(&self, kind: LogKind) -> String {
        format!("{} {}", self.get(kind), kind.label())
    }
}

impl Default for EmojiMap {
    fn default() -> Self {
        EmojiMap::empty()
            .with(LogKind::Log, "✨")
            .with(LogKind::Info, "ℹ️")
            .with(LogKind::Warn, "⚠️")
            .with(LogKind::Error, "❌")
    }
}
