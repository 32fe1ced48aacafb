//! Initialization followed by patched output, the way an application starts up.

use std::sync::Arc;

use beautifier::{
    args, initialize, BeautifierConfig, InitError, LinePrompt, LogKind, MemoryTarget, PromptError,
    ScriptedPrompt, Theme, ThemeRegistry,
};
use beautifier_input::MockTerminal;
use console::strip_ansi_codes;

#[test]
fn startup_sequence() {
    let registry = Arc::new(ThemeRegistry::new());
    let original = MemoryTarget::new();

    let theme = initialize(&registry, &ScriptedPrompt::answer(Theme::Emoji), &original).unwrap();
    assert_eq!(theme, Theme::Emoji);

    let console = BeautifierConfig::new()
        .registry(registry.clone())
        .fixed_time("07:45:00")
        .styling(false)
        .build(original.clone());
    console.warn(&args!["low disk"]);

    let entries = original.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].0, LogKind::Log);
    assert_eq!(
        strip_ansi_codes(&entries[0].1),
        "Console Beautifier initialized with \"emoji\" theme."
    );
    assert_eq!(entries[1], (LogKind::Warn, "[07:45:00] ⚠️ WARN low disk".to_string()));
}

#[test]
fn confirmation_is_not_themed_by_a_patched_console() {
    let registry = Arc::new(ThemeRegistry::with_theme(Theme::Table));
    let original = MemoryTarget::new();
    let _console = BeautifierConfig::new()
        .registry(registry.clone())
        .build(original.clone());

    initialize(&registry, &ScriptedPrompt::answer(Theme::Minimal), &original).unwrap();

    let text = strip_ansi_codes(&original.texts()[0]).into_owned();
    assert_eq!(text, "Console Beautifier initialized with \"minimal\" theme.");
}

#[test]
fn numbered_menu_drives_initialization() {
    let registry = ThemeRegistry::new();
    let original = MemoryTarget::new();
    let terminal = Arc::new(MockTerminal::with_response("3"));

    let prompt = LinePrompt::with_terminal(terminal.clone());
    let theme = initialize(&registry, &prompt, &original).unwrap();

    assert_eq!(theme, Theme::Table);
    assert!(terminal.written()[0].starts_with("Choose your console theme:\n"));
}

#[test]
fn failed_prompt_reports_and_changes_nothing() {
    let registry = ThemeRegistry::new();
    let original = MemoryTarget::new();

    let prompt = LinePrompt::with_terminal(MockTerminal::non_terminal());
    let result = initialize(&registry, &prompt, &original);

    match result {
        Err(InitError::Prompt(PromptError::NotInteractive)) => {}
        other => panic!("expected NotInteractive, got {other:?}"),
    }
    assert_eq!(registry.current_theme(), Theme::Minimal);
    assert!(original.entries().is_empty());
}

#[test]
fn cancelled_prompt_propagates() {
    let registry = ThemeRegistry::with_theme(Theme::Emoji);
    let original = MemoryTarget::new();

    let prompt = ScriptedPrompt::fail(PromptError::Cancelled);
    let err = initialize(&registry, &prompt, &original).unwrap_err();

    assert_eq!(err.to_string(), "theme selection failed: Prompt cancelled by user.");
    assert_eq!(registry.current_theme(), Theme::Emoji);
}
