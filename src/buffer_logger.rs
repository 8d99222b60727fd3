//! Request-scoped buffered logger.
//!
//! A `BufferLogger` collects fragments and timer readings for one unit of work
//! and writes them as a single line on `flush`:
//!
//! ```text
//! logId=<id> cost=<ms>ms <fragments>
//! ```
//!
//! Usage:
//! ```
//! use buflog::{BufferLogger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let mut logger = BufferLogger::with_sink(sink.clone(), ("user_id", 42));
//! logger.start_timer("db");
//! logger.stop_timer("db");
//! logger.append(("path", "/x"));
//! logger.flush();
//!
//! assert_eq!(sink.len(), 1);
//! ```

use std::collections::HashMap;
use std::fmt::{self, Display, Write};
use std::time::Instant;

use crate::fields::Field;
use crate::log_id::next_log_id;
use crate::sink::{LogFacade, LogSink, Severity};

pub const LOG_ID_KEY: &str = "logId";

pub struct BufferLogger<S: LogSink = LogFacade> {
    log_id: String,
    started_at: Instant,
    buf: String,
    timers: HashMap<String, Instant>,
    sink: S,
}

impl BufferLogger<LogFacade> {
    /// Create a logger writing to the global `log` facade, seeded with `seed`.
    pub fn new(seed: impl Into<Field>) -> Self {
        Self::with_sink(LogFacade, seed)
    }
}

impl Default for BufferLogger<LogFacade> {
    fn default() -> Self {
        Self::new(())
    }
}

impl<S: LogSink> BufferLogger<S> {
    pub fn with_sink(sink: S, seed: impl Into<Field>) -> Self {
        Self {
            log_id: next_log_id(),
            started_at: Instant::now(),
            buf: seed.into().to_string(),
            timers: HashMap::new(),
            sink,
        }
    }

    pub fn log_id(&self) -> &str {
        &self.log_id
    }

    /// Everything buffered so far, seed included.
    pub fn buffer(&self) -> &str {
        &self.buf
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Milliseconds since construction.
    pub fn elapsed_ms(&self) -> f64 {
        elapsed_ms(self.started_at)
    }

    /// Start (or restart) the timer `name`.
    pub fn start_timer(&mut self, name: &str) {
        self.timers.insert(name.to_string(), Instant::now());
    }

    /// Append ` name=<ms>ms` measured from the timer's start.
    ///
    /// Unknown names are ignored. The timer stays registered, so stopping it
    /// again appends a second, longer reading.
    pub fn stop_timer(&mut self, name: &str) {
        if let Some(started) = self.timers.get(name) {
            let cost = elapsed_ms(*started);
            let _ = write!(self.buf, " {}={}ms", name, cost);
        }
    }

    pub fn append(&mut self, field: impl Into<Field>) {
        let _ = write!(self.buf, " {}", field.into());
    }

    /// Append every value as its own fragment.
    pub fn append_all(&mut self, values: &[&dyn Display]) {
        for value in values {
            let _ = write!(self.buf, " {}", value);
        }
    }

    /// Emit the buffered line at info severity.
    ///
    /// Neither the buffer nor the start time is reset; a second flush reports
    /// the same fragments with a larger cost.
    pub fn flush(&self) {
        let line = format!(
            "{}={} cost={}ms {} ",
            LOG_ID_KEY,
            self.log_id,
            self.elapsed_ms(),
            self.buf
        );
        self.sink.info(&line);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    pub fn notice(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Notice, args);
    }

    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    pub fn critical(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Critical, args);
    }

    /// Write `logId=<id> <message>` straight to the sink, bypassing the buffer.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        let line = format!("{}={} {}", LOG_ID_KEY, self.log_id, args);
        self.sink.emit(severity, &line);
    }
}

impl<S: LogSink> fmt::Debug for BufferLogger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferLogger")
            .field("log_id", &self.log_id)
            .field("buf", &self.buf)
            .field("timers", &self.timers.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_nanos() as f64 / 1e6
}
