//! The closed set of rendering themes.

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeParseError;

/// A named rendering strategy for log output.
///
/// # Example
///
/// ```rust
/// use beautifier_render::Theme;
///
/// let theme: Theme = "emoji".parse().unwrap();
/// assert_eq!(theme, Theme::Emoji);
/// assert_eq!(theme.to_string(), "emoji");
/// assert!("neon".parse::<Theme>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// `[time] KIND message`
    #[default]
    Minimal,
    /// `[time] <emoji> KIND message`
    Emoji,
    /// One-row boxed table with Time, Type and Message columns.
    Table,
}

impl Theme {
    /// Every theme, in the order they are offered to the user.
    pub const ALL: [Theme; 3] = [Theme::Minimal, Theme::Emoji, Theme::Table];

    /// The theme's canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Minimal => "minimal",
            Theme::Emoji => "emoji",
            Theme::Table => "table",
        }
    }

    /// Whether output under this theme spans several lines.
    pub fn is_multiline(&self) -> bool {
        matches!(self, Theme::Table)
    }
}

/// The themes a user may choose from, in presentation order.
///
/// Independent of whichever theme is currently active.
pub fn available_themes() -> [Theme; 3] {
    Theme::ALL
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ThemeParseError::new(s))
    }
}
