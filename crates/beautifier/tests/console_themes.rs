//! Patched console output across themes, checked through a memory target.

use std::sync::Arc;

use beautifier::{
    args, BeautifierConfig, Console, LogArg, LogKind, MemoryTarget, Theme, ThemeRegistry,
};
use beautifier_render::tabular::display_width;
use beautifier_render::MessageFormatter;
use console::strip_ansi_codes;
use proptest::prelude::*;
use serde::Serialize;

fn patched(theme: Theme) -> (Console, MemoryTarget) {
    let target = MemoryTarget::new();
    let console = BeautifierConfig::new()
        .theme(theme)
        .fixed_time("12:00:00")
        .build(target.clone());
    (console, target)
}

fn plain(target: &MemoryTarget) -> Vec<(LogKind, String)> {
    target
        .entries()
        .into_iter()
        .map(|(kind, text)| (kind, strip_ansi_codes(&text).into_owned()))
        .collect()
}

#[test]
fn minimal_theme_lines() {
    let (console, target) = patched(Theme::Minimal);
    console.log(&args!["Hello"]);
    console.info(&args!["port", 8080]);
    console.warn(&args!["retrying", 3, "times"]);
    console.error(&args!["failed:", false]);

    assert_eq!(
        plain(&target),
        vec![
            (LogKind::Log, "[12:00:00] LOG Hello".to_string()),
            (LogKind::Info, "[12:00:00] INFO port 8080".to_string()),
            (LogKind::Warn, "[12:00:00] WARN retrying 3 times".to_string()),
            (LogKind::Error, "[12:00:00] ERROR failed: false".to_string()),
        ]
    );
}

#[test]
fn emoji_theme_lines() {
    let (console, target) = patched(Theme::Emoji);
    console.log(&args!["a"]);
    console.info(&args!["b"]);
    console.warn(&args!["c"]);
    console.error(&args!["d"]);

    let texts: Vec<String> = plain(&target).into_iter().map(|(_, text)| text).collect();
    assert_eq!(
        texts,
        vec![
            "[12:00:00] ✨ LOG a",
            "[12:00:00] ℹ️ INFO b",
            "[12:00:00] ⚠️ WARN c",
            "[12:00:00] ❌ ERROR d",
        ]
    );
}

#[test]
fn table_theme_block() {
    let (console, target) = patched(Theme::Table);
    console.info(&args!["service", "ready"]);

    let entries = plain(&target);
    assert_eq!(entries.len(), 1);
    let (kind, block) = &entries[0];
    assert_eq!(*kind, LogKind::Info);

    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines[0], format!("┌{}┬{}┬{}┐", "─".repeat(12), "─".repeat(10), "─".repeat(60)));
    assert!(lines[1].contains("Time") && lines[1].contains("Type") && lines[1].contains("Message"));
    assert!(lines[3].contains("ℹ️ INFO"));
    assert!(lines[3].contains("service ready"));
    assert!(lines.last().unwrap().starts_with('└'));
}

#[test]
fn table_wraps_long_messages() {
    let (console, target) = patched(Theme::Table);
    let long = "word ".repeat(30);
    console.warn(&[LogArg::from(long.trim_end())]);

    let (_, block) = plain(&target).remove(0);
    // 5 lines for a one-line row, more when the message wraps
    assert!(block.lines().count() > 5);
    let widths: Vec<usize> = block.lines().map(display_width).collect();
    assert!(widths.windows(2).all(|pair| pair[0] == pair[1]), "{block}");
}

#[derive(Debug, Serialize)]
struct Job {
    id: u32,
    done: bool,
}

#[test]
fn composite_args_render_as_json() {
    let (console, target) = patched(Theme::Minimal);
    console.log(&[LogArg::from("job"), LogArg::composite(&Job { id: 7, done: true })]);

    let (_, text) = plain(&target).remove(0);
    assert_eq!(text, "[12:00:00] LOG job {\n  \"id\": 7,\n  \"done\": true\n}");
}

#[test]
fn consoles_sharing_a_registry_switch_together() {
    let registry = Arc::new(ThemeRegistry::new());
    let out = MemoryTarget::new();
    let err = MemoryTarget::new();

    let stdout = BeautifierConfig::new()
        .registry(registry.clone())
        .fixed_time("12:00:00")
        .styling(false)
        .build(out.clone());
    let stderr = Console::patch(
        MessageFormatter::new(registry.clone())
            .with_clock(beautifier_render::FixedClock::new("12:00:00"))
            .with_styling(Some(false)),
        err.clone(),
    );

    registry.set_theme(Theme::Emoji);
    stdout.info(&args!["up"]);
    stderr.error(&args!["down"]);

    assert_eq!(out.texts(), vec!["[12:00:00] ℹ️ INFO up"]);
    assert_eq!(err.texts(), vec!["[12:00:00] ❌ ERROR down"]);
}

proptest! {
    #[test]
    fn every_scalar_arg_survives(words in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let (console, target) = patched(Theme::Emoji);
        let args: Vec<LogArg> = words.iter().map(LogArg::from).collect();
        console.info(&args);

        let (_, text) = plain(&target).remove(0);
        prop_assert!(text.ends_with(&words.join(" ")));
    }
}
