//! Time sources for message timestamps.
//!
//! Every formatted message carries the current time. The formatter asks its
//! [`Clock`] on each call and never caches the answer.

use std::fmt::Write;

use chrono::Local;

/// Default timestamp layout: `HH:MM:SS` in local time.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Supplies the formatted current time.
///
/// Closures returning a `String` implement this trait, which is handy in tests
/// that need the time to change between calls.
pub trait Clock: Send + Sync {
    /// The current time, already formatted for display.
    fn now(&self) -> String;
}

impl<F> Clock for F
where
    F: Fn() -> String + Send + Sync,
{
    fn now(&self) -> String {
        self()
    }
}

/// Wall clock in the local timezone, formatted with a chrono strftime pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalClock {
    format: String,
}

impl LocalClock {
    /// Create a clock using [`DEFAULT_TIME_FORMAT`].
    pub fn new() -> Self {
        Self::with_format(DEFAULT_TIME_FORMAT)
    }

    /// Create a clock with a custom strftime pattern.
    ///
    /// Patterns chrono cannot render fall back to [`DEFAULT_TIME_FORMAT`] at
    /// format time.
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// The strftime pattern in use.
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Default for LocalClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for LocalClock {
    fn now(&self) -> String {
        let now = Local::now();
        let mut out = String::new();
        if write!(out, "{}", now.format(&self.format)).is_err() {
            out.clear();
            let _ = write!(out, "{}", now.format(DEFAULT_TIME_FORMAT));
        }
        out
    }
}

/// A clock frozen at a given display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(time: impl Into<String>) -> Self {
        Self(time.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
