//! One-shot console initialization.
//!
//! [`initialize`] asks the user to pick a theme, stores it in the registry and
//! announces the choice on the original (unpatched) target. It does not patch
//! anything; pair it with [`Console::patch`](crate::Console::patch).

use beautifier_input::{PromptError, ThemePrompt, PROMPT_MESSAGE};
use beautifier_render::{Theme, ThemeRegistry};
use console::Style;

use crate::target::LogTarget;

/// Error type for initialization.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The theme prompt failed or was cancelled. The registry is untouched.
    #[error("theme selection failed: {0}")]
    Prompt(#[from] PromptError),
}

/// The confirmation line written after a theme is chosen, undecorated.
pub fn confirmation_message(theme: Theme) -> String {
    format!("Console Beautifier initialized with \"{}\" theme.", theme)
}

/// Ask for a theme, apply it, and confirm on `original`.
///
/// The prompt offers the registry's themes in order with `minimal`
/// pre-selected and blocks until the user answers. A failed prompt is
/// returned unchanged: no theme is set and nothing is written.
///
/// ```
/// use beautifier::{initialize, MemoryTarget, ScriptedPrompt, Theme};
/// use beautifier_render::ThemeRegistry;
///
/// let registry = ThemeRegistry::new();
/// let original = MemoryTarget::new();
///
/// let theme = initialize(&registry, &ScriptedPrompt::answer(Theme::Table), &original)?;
///
/// assert_eq!(theme, Theme::Table);
/// assert_eq!(registry.current_theme(), Theme::Table);
/// assert_eq!(
///     console::strip_ansi_codes(&original.texts()[0]),
///     "Console Beautifier initialized with \"table\" theme."
/// );
/// # Ok::<(), beautifier::InitError>(())
/// ```
pub fn initialize<P>(
    registry: &ThemeRegistry,
    prompt: &P,
    original: &dyn LogTarget,
) -> Result<Theme, InitError>
where
    P: ThemePrompt + ?Sized,
{
    log::debug!("asking for a console theme via {} prompt", prompt.name());

    let theme = prompt.choose(PROMPT_MESSAGE, &registry.available_themes(), Theme::default())?;
    apply_theme(registry, theme, original);
    Ok(theme)
}

/// Set `theme` without asking and confirm it on `original`.
///
/// This is what [`initialize`] does once the user has answered; use it when
/// the theme is already known, e.g. from a command-line flag.
pub fn apply_theme(registry: &ThemeRegistry, theme: Theme, original: &dyn LogTarget) {
    registry.set_theme(theme);

    let green = Style::new().green();
    original.log(&green.apply_to(confirmation_message(theme)).to_string());

    log::debug!("console initialized with {} theme", theme);
}
