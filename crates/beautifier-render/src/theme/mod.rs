//! Themes and the registry that holds the active one.
//!
//! A [`Theme`] is a rendering strategy for log output. The set is closed: a
//! value outside `minimal`, `emoji` and `table` cannot be constructed, so the
//! only validation point is parsing user input with [`str::parse`].
//!
//! ## Design Decision: Injected Registry
//!
//! The active theme lives in a [`ThemeRegistry`] that is shared by reference
//! (`Arc<ThemeRegistry>`) with every formatter and console built on it, rather
//! than in a process-wide static. Two consoles with two registries never see
//! each other's theme, which keeps tests free of cross-talk:
//!
//! ```rust
//! use beautifier_render::{Theme, ThemeRegistry};
//!
//! let a = ThemeRegistry::new();
//! let b = ThemeRegistry::new();
//! a.set_theme(Theme::Table);
//!
//! assert_eq!(a.current_theme(), Theme::Table);
//! assert_eq!(b.current_theme(), Theme::Minimal);
//! ```

mod registry;
#[allow(clippy::module_inception)]
mod theme;

pub use registry::ThemeRegistry;
pub use theme::{available_themes, Theme};
