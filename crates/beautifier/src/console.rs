//! The patched console.
//!
//! [`Console::patch`] captures an existing [`LogTarget`] and returns a new one
//! whose four entry points format their arguments before forwarding. The
//! captured target is never touched except to receive finished text.

use std::fmt;
use std::sync::Arc;

use beautifier_render::{LogArg, LogKind, MessageFormatter, Theme, ThemeRegistry};

use crate::target::LogTarget;

/// A console whose output goes through a [`MessageFormatter`].
///
/// Each call produces exactly one block of text and hands it to the matching
/// entry point of the original target: `log` to `log`, `warn` to `warn`, and
/// so on.
///
/// ```
/// use std::sync::Arc;
/// use beautifier::{args, Console, MemoryTarget, Theme};
/// use beautifier_render::{FixedClock, MessageFormatter, ThemeRegistry};
///
/// let registry = Arc::new(ThemeRegistry::with_theme(Theme::Minimal));
/// let formatter = MessageFormatter::new(registry)
///     .with_clock(FixedClock::new("09:30:00"))
///     .with_styling(Some(false));
/// let target = MemoryTarget::new();
///
/// let console = Console::patch(formatter, target.clone());
/// console.info(&args!["ready", 3]);
///
/// assert_eq!(target.texts(), vec!["[09:30:00] INFO ready 3"]);
/// ```
///
/// `Console` is itself a [`LogTarget`], so patching a patched console wraps
/// it a second time and every line is formatted twice. There is no guard
/// against this and no way to unpatch; keep the original target around if
/// you need plain output.
#[derive(Clone)]
pub struct Console {
    formatter: Arc<MessageFormatter>,
    original: Arc<dyn LogTarget>,
}

impl Console {
    /// Wrap `original` so every call is formatted by `formatter` first.
    pub fn patch(
        formatter: impl Into<Arc<MessageFormatter>>,
        original: impl LogTarget + 'static,
    ) -> Self {
        Self {
            formatter: formatter.into(),
            original: Arc::new(original),
        }
    }

    pub fn log(&self, args: &[LogArg]) {
        self.emit(LogKind::Log, args);
    }

    pub fn info(&self, args: &[LogArg]) {
        self.emit(LogKind::Info, args);
    }

    pub fn warn(&self, args: &[LogArg]) {
        self.emit(LogKind::Warn, args);
    }

    pub fn error(&self, args: &[LogArg]) {
        self.emit(LogKind::Error, args);
    }

    /// Format `args` as `kind` and forward the result to the original target.
    pub fn emit(&self, kind: LogKind, args: &[LogArg]) {
        let text = self.formatter.format(kind, &kind.style(), args);
        self.original.write(kind, &text);
    }

    pub fn formatter(&self) -> &Arc<MessageFormatter> {
        &self.formatter
    }

    /// The registry that decides how this console renders.
    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        self.formatter.registry()
    }

    /// Switch the theme used by this console (and anything sharing its registry).
    pub fn set_theme(&self, theme: Theme) {
        self.registry().set_theme(theme);
    }

    pub fn current_theme(&self) -> Theme {
        self.registry().current_theme()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("theme", &self.current_theme())
            .finish_non_exhaustive()
    }
}

impl LogTarget for Console {
    fn log(&self, text: &str) {
        Console::log(self, &[LogArg::from(text)]);
    }

    fn info(&self, text: &str) {
        Console::info(self, &[LogArg::from(text)]);
    }

    fn warn(&self, text: &str) {
        Console::warn(self, &[LogArg::from(text)]);
    }

    fn error(&self, text: &str) {
        Console::error(self, &[LogArg::from(text)]);
    }
}
