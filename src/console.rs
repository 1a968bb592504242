//! User-facing console output.
//!
//! The workspace core never prints directly. It reports through a
//! [`Console`] so the CLI can render styled lines while tests capture
//! them with [`MemoryConsole`].

use std::cell::RefCell;
use std::rc::Rc;

/// Sink for diagnostic and user-facing messages.
pub trait Console {
    /// Developer-level detail, hidden unless logging is turned up.
    fn debug(&self, message: &str);
    /// A fatal problem the user has to fix.
    fn error(&self, message: &str);
    /// A remediation hint shown after an error.
    fn help(&self, message: &str);
}

/// Console that writes styled lines to stderr.
///
/// Debug output goes through `tracing`, so it only appears when the
/// subscriber installed by the binary enables the `debug` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn error(&self, message: &str) {
        use colored::Colorize;
        eprintln!("  {} {}", "✖".red().bold(), message.red());
    }

    fn help(&self, message: &str) {
        use colored::Colorize;
        eprintln!("  {} {}", "ℹ".cyan(), message.dimmed());
    }
}

/// Severity of a captured console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Error,
    Help,
}

/// Console that records every line in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// workspace and inspect the other afterwards.
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    lines: Rc<RefCell<Vec<(Level, String)>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines in emission order.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    /// Captured messages at a single level.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}

impl Console for MemoryConsole {
    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn help(&self, message: &str) {
        self.push(Level::Help, message);
    }
}
