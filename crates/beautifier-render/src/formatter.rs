//! Theme dispatch: turns one logging call into display text.

use std::sync::Arc;

use console::Style;

use crate::arg::{join_args, LogArg};
use crate::clock::{Clock, LocalClock};
use crate::kind::{EmojiMap, LogKind};
use crate::tabular::{BorderStyle, Cell, Table};
use crate::theme::{Theme, ThemeRegistry};

/// Column widths and border for the `table` theme.
///
/// Widths include one column of padding on each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLayout {
    pub time_width: usize,
    pub type_width: usize,
    pub message_width: usize,
    pub border: BorderStyle,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            time_width: 12,
            type_width: 10,
            message_width: 60,
            border: BorderStyle::Light,
        }
    }
}

/// Renders log messages according to the active theme of a [`ThemeRegistry`].
///
/// The theme is read on every call, so switching themes takes effect on the
/// next message. The clock is also asked on every call.
///
/// | Theme     | Output                                             |
/// |-----------|----------------------------------------------------|
/// | `minimal` | `[12:00:00] LOG Hello`                             |
/// | `emoji`   | `[12:00:00] ✨ LOG Hello`                          |
/// | `table`   | Boxed table with `Time`, `Type`, `Message` columns |
pub struct MessageFormatter {
    registry: Arc<ThemeRegistry>,
    clock: Arc<dyn Clock>,
    emoji: EmojiMap,
    layout: TableLayout,
    styling: Option<bool>,
}

impl MessageFormatter {
    /// Create a formatter reading its theme from `registry`, with a local
    /// `HH:MM:SS` clock and the default emoji map and table layout.
    pub fn new(registry: Arc<ThemeRegistry>) -> Self {
        Self {
            registry,
            clock: Arc::new(LocalClock::new()),
            emoji: EmojiMap::default(),
            layout: TableLayout::default(),
            styling: None,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_emoji_map(mut self, emoji: EmojiMap) -> Self {
        self.emoji = emoji;
        self
    }

    pub fn with_table_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Force decoration on (`Some(true)`) or off (`Some(false)`).
    ///
    /// `None` leaves the decision to the `console` crate's terminal detection.
    pub fn with_styling(mut self, styling: Option<bool>) -> Self {
        self.styling = styling;
        self
    }

    /// The registry this formatter reads its theme from.
    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        &self.registry
    }

    pub fn emoji_map(&self) -> &EmojiMap {
        &self.emoji
    }

    /// Render a message under the active theme.
    pub fn format(&self, kind: LogKind, style: &Style, args: &[LogArg]) -> String {
        self.format_as(self.registry.current_theme(), kind, style, args)
    }

    /// Render a message under an explicit theme, ignoring the registry.
    pub fn format_as(&self, theme: Theme, kind: LogKind, style: &Style, args: &[LogArg]) -> String {
        match theme {
            Theme::Minimal => self.inline(kind.label().to_string(), style, args),
            Theme::Emoji => self.inline(self.emoji.decorate(kind), style, args),
            Theme::Table => self.table(kind, style, args),
        }
    }

    fn inline(&self, label: String, style: &Style, args: &[LogArg]) -> String {
        let gray = self.paint(&Style::new().black().bright());
        let dim = self.paint(&Style::new().dim());
        let white = self.paint(&Style::new().white());

        let message = args
            .iter()
            .map(|arg| white.apply_to(arg.render()).to_string())
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "{}{}{} {} {}",
            gray.apply_to("["),
            dim.apply_to(self.clock.now()),
            gray.apply_to("]"),
            self.paint(style).apply_to(label),
            message
        )
    }

    fn table(&self, kind: LogKind, style: &Style, args: &[LogArg]) -> String {
        let bold = self.paint(&Style::new().bold());
        let layout = &self.layout;

        Table::new([layout.time_width, layout.type_width, layout.message_width])
            .border(layout.border)
            .border_style(self.paint(&Style::new().black().bright()))
            .header([
                Cell::styled("Time", bold.clone()),
                Cell::styled("Type", bold.clone()),
                Cell::styled("Message", bold),
            ])
            .row([
                Cell::styled(self.clock.now(), self.paint(&Style::new().dim())),
                Cell::styled(self.emoji.decorate(kind), self.paint(style)),
                Cell::styled(join_args(args), self.paint(&Style::new().white())),
            ])
            .render()
    }

    fn paint(&self, style: &Style) -> Style {
        match self.styling {
            Some(enabled) => style.clone().force_styling(enabled),
            None => style.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    fn formatter(theme: Theme) -> MessageFormatter {
        MessageFormatter::new(Arc::new(ThemeRegistry::with_theme(theme)))
            .with_clock(crate::FixedClock::new("12:00:00"))
            .with_styling(Some(false))
    }

    fn args(values: &[&str]) -> Vec<LogArg> {
        values.iter().copied().map(LogArg::from).collect()
    }

    #[derive(Debug, Serialize)]
    struct Job {
        id: u32,
        state: &'static str,
    }

    #[test]
    fn test_minimal_line() {
        let out = formatter(Theme::Minimal).format(
            LogKind::Log,
            &LogKind::Log.style(),
            &args(&["Hello"]),
        );
        assert_eq!(out, "[12:00:00] LOG Hello");
    }

    #[test]
    fn test_minimal_joins_with_single_spaces() {
        let out = formatter(Theme::Minimal).format(
            LogKind::Info,
            &LogKind::Info.style(),
            &[LogArg::from("count:"), LogArg::from(3), LogArg::from(false)],
        );
        assert_eq!(out, "[12:00:00] INFO count: 3 false");
    }

    #[test]
    fn test_minimal_without_arguments_keeps_trailing_separator() {
        let out = formatter(Theme::Minimal).format(LogKind::Warn, &LogKind::Warn.style(), &[]);
        assert_eq!(out, "[12:00:00] WARN ");
    }

    #[test]
    fn test_emoji_line() {
        let out = formatter(Theme::Emoji).format(
            LogKind::Error,
            &LogKind::Error.style(),
            &args(&["bad"]),
        );
        assert_eq!(out, "[12:00:00] ❌ ERROR bad");
    }

    #[test]
    fn test_emoji_missing_entry_is_not_an_error() {
        let out = formatter(Theme::Emoji)
            .with_emoji_map(EmojiMap::empty())
            .format(LogKind::Log, &LogKind::Log.style(), &args(&["x"]));
        assert_eq!(out, "[12:00:00]  LOG x");
    }

    #[test]
    fn test_table_block() {
        let out =
            formatter(Theme::Table).format(LogKind::Log, &LogKind::Log.style(), &args(&["Hello"]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("Time"));
        assert!(lines[1].contains("Type"));
        assert!(lines[1].contains("Message"));
        assert!(lines[3].contains("12:00:00"));
        assert!(lines[3].contains("✨ LOG"));
        assert!(lines[3].contains("Hello"));
        assert!(lines[4].starts_with('└'));
    }

    #[test]
    fn test_table_wraps_composites_into_extra_lines() {
        let job = LogArg::composite(&Job { id: 1, state: "done" });
        let out = formatter(Theme::Table).format(LogKind::Info, &LogKind::Info.style(), &[job]);
        assert!(out.lines().count() > 5);
        assert!(out.contains("\"state\": \"done\""));
    }

    #[test]
    fn test_table_layout_is_configurable() {
        let layout = TableLayout {
            time_width: 10,
            type_width: 10,
            message_width: 20,
            border: BorderStyle::Ascii,
        };
        let out = formatter(Theme::Table)
            .with_table_layout(layout)
            .format(LogKind::Warn, &LogKind::Warn.style(), &args(&["careful"]));
        let first = out.lines().next().unwrap();
        assert_eq!(first, "+----------+----------+--------------------+");
    }

    #[test]
    fn test_every_theme_and_kind_mentions_label_and_arguments_in_order() {
        let values = args(&["first", "second", "third"]);
        for theme in Theme::ALL {
            for kind in LogKind::ALL {
                let out = formatter(theme).format(kind, &kind.style(), &values);
                assert!(!out.is_empty());

                let label = match theme {
                    Theme::Minimal => kind.label().to_string(),
                    _ => EmojiMap::default().decorate(kind),
                };
                assert!(out.contains(&label), "{theme}/{kind}: {out}");

                let first = out.find("first").unwrap();
                let second = out.find("second").unwrap();
                let third = out.find("third").unwrap();
                assert!(first < second && second < third, "{theme}/{kind}: {out}");
            }
        }
    }

    #[test]
    fn test_styling_never_changes_content() {
        for theme in Theme::ALL {
            let plain =
                formatter(theme).format(LogKind::Error, &LogKind::Error.style(), &args(&["boom"]));
            let styled = formatter(theme)
                .with_styling(Some(true))
                .format(LogKind::Error, &LogKind::Error.style(), &args(&["boom"]));
            assert_ne!(plain, styled);
            assert_eq!(console::strip_ansi_codes(&styled), plain);
        }
    }

    #[test]
    fn test_theme_switch_applies_to_next_call() {
        let formatter = formatter(Theme::Minimal);
        let before = formatter.format(LogKind::Warn, &LogKind::Warn.style(), &args(&["w"]));
        formatter.registry().set_theme(Theme::Emoji);
        let after = formatter.format(LogKind::Info, &LogKind::Info.style(), &args(&["i"]));

        assert_eq!(before, "[12:00:00] WARN w");
        assert_eq!(after, "[12:00:00] ℹ️ INFO i");
    }

    #[test]
    fn test_clock_is_read_on_every_call() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        let formatter = formatter(Theme::Minimal)
            .with_clock(move || format!("t{}", calls.fetch_add(1, Ordering::SeqCst)));
        let first = formatter.format(LogKind::Log, &LogKind::Log.style(), &[]);
        let second = formatter.format(LogKind::Log, &LogKind::Log.style(), &[]);
        assert!(first.starts_with("[t0]"));
        assert!(second.starts_with("[t1]"));
    }

    #[test]
    fn test_format_as_ignores_registry() {
        let formatter = formatter(Theme::Minimal);
        let out =
            formatter.format_as(Theme::Emoji, LogKind::Log, &LogKind::Log.style(), &args(&["x"]));
        assert_eq!(out, "[12:00:00] ✨ LOG x");
        assert_eq!(formatter.registry().current_theme(), Theme::Minimal);
    }
}
