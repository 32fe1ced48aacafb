//! Shared holder for the active theme.

use std::sync::{PoisonError, RwLock};

use super::theme::{available_themes, Theme};

/// Holds the currently active [`Theme`].
///
/// Starts at [`Theme::Minimal`] unless constructed with
/// [`with_theme`](Self::with_theme). Changes are visible to the very next
/// format call of every formatter sharing this registry.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    active: RwLock<Theme>,
}

impl ThemeRegistry {
    /// Create a registry with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with a specific starting theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            active: RwLock::new(theme),
        }
    }

    /// Replace the active theme unconditionally.
    pub fn set_theme(&self, theme: Theme) {
        // A panic elsewhere cannot leave a Theme half-written, so poisoning is ignored.
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = theme;
        log::debug!("console theme set to {}", theme);
    }

    /// The active theme.
    pub fn current_theme(&self) -> Theme {
        *self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// The themes a user may choose from, in presentation order.
    pub fn available_themes(&self) -> [Theme; 3] {
        available_themes()
    }
}
