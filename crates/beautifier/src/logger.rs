//! Bridge from the `log` facade to a [`Console`].
//!
//! With [`BeautifierLogger::install`], every `log::error!`, `log::info!` and
//! friends in the process renders through the active theme.
//!
//! | `log::Level` | Console entry point |
//! |--------------|---------------------|
//! | `Error`      | `error`             |
//! | `Warn`       | `warn`              |
//! | `Info`       | `info`              |
//! | `Debug`      | `log`               |
//! | `Trace`      | `log`               |

use log::{LevelFilter, Log, Metadata, Record};

use beautifier_render::{LogArg, LogKind};

use crate::console::Console;

/// Targets of the beautifier crates' own diagnostics. Records from these are
/// dropped so rendering never logs into itself.
const INTERNAL_TARGETS: [&str; 3] = ["beautifier", "beautifier_render", "beautifier_input"];

fn is_internal(target: &str) -> bool {
    INTERNAL_TARGETS.iter().any(|internal| {
        target == *internal
            || target
                .strip_prefix(internal)
                .is_some_and(|rest| rest.starts_with("::"))
    })
}

/// A `log::Log` implementation that writes through a [`Console`].
///
/// ```no_run
/// use beautifier::{BeautifierLogger, Console, StdTarget};
/// use beautifier_render::{MessageFormatter, ThemeRegistry};
/// use log::LevelFilter;
/// use std::sync::Arc;
///
/// let formatter = MessageFormatter::new(Arc::new(ThemeRegistry::new()));
/// let console = Console::patch(formatter, StdTarget);
/// BeautifierLogger::new(console, LevelFilter::Info).install()?;
///
/// log::info!("server started on port {}", 8080);
/// # Ok::<(), log::SetLoggerError>(())
/// ```
#[derive(Debug)]
pub struct BeautifierLogger {
    console: Console,
    level: LevelFilter,
}

impl BeautifierLogger {
    /// Create a logger passing records at `level` or more severe.
    pub fn new(console: Console, level: LevelFilter) -> Self {
        Self { console, level }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Register as the process-wide logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for BeautifierLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && !is_internal(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let kind = LogKind::from(record.level());
        self.console.emit(kind, &[LogArg::from(*record.args())]);
    }

    fn flush(&self) {}
}
