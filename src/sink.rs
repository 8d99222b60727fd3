//! Log sinks that `BufferLogger` writes into.
//!
//! `LogFacade` forwards to whatever global logger the `log` crate has installed
//! (see `logger::setup_logger`). `MemorySink` keeps every line in memory.
//!
//! Notice and critical go out at `Info` and `Error` on the `buflog::notice`
//! and `buflog::critical` targets; the default pattern prints the target.

use std::fmt;
use std::sync::{Arc, Mutex};

pub const LOG_TARGET: &str = "buflog";
const NOTICE_TARGET: &str = "buflog::notice";
const CRITICAL_TARGET: &str = "buflog::critical";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Notice => "NOTICE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// `log` has no notice or critical level.
    pub fn to_level(&self) -> log::Level {
        match self {
            Severity::Debug => log::Level::Debug,
            Severity::Info | Severity::Notice => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error | Severity::Critical => log::Level::Error,
        }
    }

    fn target(&self) -> &'static str {
        match self {
            Severity::Notice => NOTICE_TARGET,
            Severity::Critical => CRITICAL_TARGET,
            _ => LOG_TARGET,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that accepts finished log lines at a severity.
pub trait LogSink {
    fn emit(&self, severity: Severity, message: &str);

    fn debug(&self, message: &str) {
        self.emit(Severity::Debug, message);
    }

    fn info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    fn notice(&self, message: &str) {
        self.emit(Severity::Notice, message);
    }

    fn warning(&self, message: &str) {
        self.emit(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }

    fn critical(&self, message: &str) {
        self.emit(Severity::Critical, message);
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }
}

/// Process-wide sink backed by the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl LogSink for LogFacade {
    fn emit(&self, severity: Severity, message: &str) {
        log::log!(target: severity.target(), severity.to_level(), "{}", message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub severity: Severity,
    pub message: String,
}

/// Capturing sink. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Record>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Record>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn emit(&self, severity: Severity, message: &str) {
        self.lock().push(Record {
            severity,
            message: message.to_string(),
        });
    }
}
