use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

use buflog::{BufferLogger, Field, LogFacade, LogSink, Severity};

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    target: String,
    message: String,
}

struct CaptureLogger {
    records: Mutex<Vec<Captured>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push(Captured {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn install() {
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

// Tests in this file share one global logger, so lookups go by unique message.
fn find(message: &str) -> Captured {
    CAPTURE
        .records
        .lock()
        .unwrap()
        .iter()
        .find(|r| r.message == message)
        .cloned()
        .unwrap_or_else(|| panic!("no record with message {:?}", message))
}

#[test]
fn test_facade_levels_and_targets() {
    install();
    for severity in Severity::ALL {
        LogFacade.emit(severity, &format!("facade {}", severity));
    }

    let expected = [
        (Severity::Debug, Level::Debug, "buflog"),
        (Severity::Info, Level::Info, "buflog"),
        (Severity::Notice, Level::Info, "buflog::notice"),
        (Severity::Warning, Level::Warn, "buflog"),
        (Severity::Error, Level::Error, "buflog"),
        (Severity::Critical, Level::Error, "buflog::critical"),
    ];
    for (severity, level, target) in expected {
        let record = find(&format!("facade {}", severity));
        assert_eq!(record.level, level, "{}", severity);
        assert_eq!(record.target, target, "{}", severity);
    }
}

#[test]
fn test_default_logger_flush_reaches_log() {
    install();
    let mut logger = BufferLogger::new(("user_id", 42));
    logger.append(Field::pair("path", "/x"));
    logger.flush();
    buflog::buf_critical!(logger, "payment {} failed", 9);

    let prefix = format!("logId={} cost=", logger.log_id());
    let flushed = CAPTURE
        .records
        .lock()
        .unwrap()
        .iter()
        .find(|r| r.message.starts_with(&prefix))
        .cloned()
        .expect("flush line not captured");
    assert_eq!(flushed.level, Level::Info);
    assert_eq!(flushed.target, "buflog");
    assert!(flushed.message.ends_with("ms user_id=42 path=/x "));

    let critical = find(&format!("logId={} payment 9 failed", logger.log_id()));
    assert_eq!(critical.level, Level::Error);
    assert_eq!(critical.target, "buflog::critical");
}
