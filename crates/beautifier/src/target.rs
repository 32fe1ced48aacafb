//! Output targets: where rendered lines end up.
//!
//! A [`LogTarget`] is the capability set `{log, info, warn, error}`, each
//! taking one already-rendered block of text. The process's plain console is
//! [`StdTarget`]; tests capture output with [`MemoryTarget`].

use std::sync::{Arc, Mutex, PoisonError};

use beautifier_render::LogKind;

/// The four console entry points, taking rendered text.
pub trait LogTarget: Send + Sync {
    fn log(&self, text: &str);
    fn info(&self, text: &str);
    fn warn(&self, text: &str);
    fn error(&self, text: &str);

    /// Route `text` to the entry point for `kind`.
    fn write(&self, kind: LogKind, text: &str) {
        match kind {
            LogKind::Log => self.log(text),
            LogKind::Info => self.info(text),
            LogKind::Warn => self.warn(text),
            LogKind::Error => self.error(text),
        }
    }
}

impl<T: LogTarget + ?Sized> LogTarget for Arc<T> {
    fn log(&self, text: &str) {
        (**self).log(text)
    }

    fn info(&self, text: &str) {
        (**self).info(text)
    }

    fn warn(&self, text: &str) {
        (**self).warn(text)
    }

    fn error(&self, text: &str) {
        (**self).error(text)
    }
}

/// The unpatched console: LOG and INFO go to stdout, WARN and ERROR to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdTarget;

impl LogTarget for StdTarget {
    fn log(&self, text: &str) {
        println!("{}", text);
    }

    fn info(&self, text: &str) {
        println!("{}", text);
    }

    fn warn(&self, text: &str) {
        eprintln!("{}", text);
    }

    fn error(&self, text: &str) {
        eprintln!("{}", text);
    }
}

/// Captures every write in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a console
/// and inspect another.
///
/// ```
/// use beautifier::{LogTarget, MemoryTarget};
/// use beautifier_render::LogKind;
///
/// let target = MemoryTarget::new();
/// target.clone().warn("careful");
/// assert_eq!(target.entries(), vec![(LogKind::Warn, "careful".to_string())]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryTarget {
    entries: Arc<Mutex<Vec<(LogKind, String)>>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write so far, oldest first.
    pub fn entries(&self) -> Vec<(LogKind, String)> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The text of every write so far, oldest first.
    pub fn texts(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, text)| text).collect()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn push(&self, kind: LogKind, text: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((kind, text.to_string()));
    }
}

impl LogTarget for MemoryTarget {
    fn log(&self, text: &str) {
        self.push(LogKind::Log, text);
    }

    fn info(&self, text: &str) {
        self.push(LogKind::Info, text);
    }

    fn warn(&self, text: &str) {
        self.push(LogKind::Warn, text);
    }

    fn error(&self, text: &str) {
        self.push(LogKind::Error, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_routes_by_kind() {
        let target = MemoryTarget::new();
        for kind in LogKind::ALL {
            target.write(kind, kind.label());
        }
        assert_eq!(
            target.entries(),
            vec![
                (LogKind::Log, "LOG".to_string()),
                (LogKind::Info, "INFO".to_string()),
                (LogKind::Warn, "WARN".to_string()),
                (LogKind::Error, "ERROR".to_string()),
            ]
        );
    }

    #[test]
    fn clones_share_a_buffer() {
        let target = MemoryTarget::new();
        let handle = target.clone();
        target.info("one");
        handle.error("two");
        assert_eq!(target.texts(), vec!["one", "two"]);

        handle.clear();
        assert!(target.entries().is_empty());
    }

    #[test]
    fn arc_targets_forward() {
        let target = MemoryTarget::new();
        let shared: Arc<dyn LogTarget> = Arc::new(target.clone());
        shared.log("via arc");
        assert_eq!(target.entries(), vec![(LogKind::Log, "via arc".to_string())]);
    }
}
