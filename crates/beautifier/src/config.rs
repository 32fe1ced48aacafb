//! Programmatic configuration.
//!
//! [`BeautifierConfig`] gathers everything needed to build a [`Console`] or a
//! [`BeautifierLogger`] in one place.
//!
//! ```
//! use beautifier::{BeautifierConfig, MemoryTarget, Theme};
//! use beautifier_render::LogKind;
//!
//! let target = MemoryTarget::new();
//! let console = BeautifierConfig::new()
//!     .theme(Theme::Emoji)
//!     .emoji(LogKind::Info, "💡")
//!     .fixed_time("10:00:00")
//!     .styling(false)
//!     .build(target.clone());
//!
//! console.info(&beautifier::args!["hi"]);
//! assert_eq!(target.texts(), vec!["[10:00:00] 💡 INFO hi"]);
//! ```

use std::sync::Arc;

use beautifier_render::tabular::BorderStyle;
use beautifier_render::{
    Clock, EmojiMap, FixedClock, LocalClock, LogKind, MessageFormatter, TableLayout, Theme,
    ThemeRegistry, DEFAULT_TIME_FORMAT,
};
use log::LevelFilter;

use crate::console::Console;
use crate::logger::BeautifierLogger;
use crate::target::LogTarget;

/// Builder for a configured [`Console`].
#[derive(Clone)]
pub struct BeautifierConfig {
    theme: Theme,
    registry: Option<Arc<ThemeRegistry>>,
    emoji: EmojiMap,
    layout: TableLayout,
    time_format: String,
    clock: Option<Arc<dyn Clock>>,
    styling: Option<bool>,
    level: LevelFilter,
}

impl Default for BeautifierConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BeautifierConfig {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            registry: None,
            emoji: EmojiMap::default(),
            layout: TableLayout::default(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            clock: None,
            styling: None,
            level: LevelFilter::Trace,
        }
    }

    /// Initial theme of a freshly created registry.
    ///
    /// Ignored when [`registry`](Self::registry) supplies one.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Share an existing registry instead of creating one.
    pub fn registry(mut self, registry: Arc<ThemeRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Replace the whole emoji map.
    pub fn emoji_map(mut self, emoji: EmojiMap) -> Self {
        self.emoji = emoji;
        self
    }

    /// Override the emoji for one kind.
    pub fn emoji(mut self, kind: LogKind, emoji: impl Into<String>) -> Self {
        self.emoji = self.emoji.with(kind, emoji);
        self
    }

    pub fn table_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the three table column widths, padding included.
    pub fn column_widths(mut self, time: usize, kind: usize, message: usize) -> Self {
        self.layout.time_width = time;
        self.layout.type_width = kind;
        self.layout.message_width = message;
        self
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.layout.border = border;
        self
    }

    /// chrono `strftime` layout for timestamps.
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    /// Use a custom clock. Takes precedence over [`time_format`](Self::time_format).
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Stamp every message with the same time.
    pub fn fixed_time(self, time: impl Into<String>) -> Self {
        self.clock(FixedClock::new(time))
    }

    /// Force decoration on or off.
    pub fn styling(mut self, enabled: bool) -> Self {
        self.styling = Some(enabled);
        self
    }

    /// Minimum level passed by the logger built with [`build_logger`](Self::build_logger).
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Build the formatter described by this configuration.
    pub fn formatter(&self) -> MessageFormatter {
        let registry = self
            .registry
            .clone()
            .unwrap_or_else(|| Arc::new(ThemeRegistry::with_theme(self.theme)));

        let formatter = MessageFormatter::new(registry)
            .with_emoji_map(self.emoji.clone())
            .with_table_layout(self.layout)
            .with_styling(self.styling);

        match &self.clock {
            Some(clock) => {
                let clock = Arc::clone(clock);
                formatter.with_clock(move || clock.now())
            }
            None => formatter.with_clock(LocalClock::with_format(self.time_format.clone())),
        }
    }

    /// Patch `target` with the configured formatter.
    pub fn build(&self, target: impl LogTarget + 'static) -> Console {
        Console::patch(self.formatter(), target)
    }

    /// Build a `log` bridge writing to `target`. Call
    /// [`install`](BeautifierLogger::install) to make it global.
    pub fn build_logger(&self, target: impl LogTarget + 'static) -> BeautifierLogger {
        BeautifierLogger::new(self.build(target), self.level)
    }
}
