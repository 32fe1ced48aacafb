//! Error types for the formatting core.
//!
//! Formatting itself never fails. The only fallible conversion is turning a
//! user-supplied string into a [`Theme`](crate::Theme), which happens at the
//! edges (command-line flags, prompt answers).

/// A string did not name one of the available themes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{input}' (expected one of: minimal, emoji, table)")]
pub struct ThemeParseError {
    input: String,
}

impl ThemeParseError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected input, as given.
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ThemeParseError::new("neon");
        assert!(err.to_string().contains("unknown theme 'neon'"));
        assert!(err.to_string().contains("minimal, emoji, table"));
        assert_eq!(err.input(), "neon");
    }
}
