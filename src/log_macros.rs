/// Leveled macros for `BufferLogger`.
///
/// They take the logger first and a format string after it, like `log::info!`
/// with a target:
///
/// ```
/// use buflog::{buf_info, BufferLogger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = BufferLogger::with_sink(sink.clone(), ());
/// buf_info!(logger, "user {} logged in", 42);
/// assert!(sink.messages()[0].ends_with(" user 42 logged in"));
/// ```

#[macro_export]
macro_rules! buf_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! buf_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! buf_notice {
    ($logger:expr, $($arg:tt)*) => {
        $logger.notice(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! buf_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! buf_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! buf_critical {
    ($logger:expr, $($arg:tt)*) => {
        $logger.critical(format_args!($($arg)*))
    };
}
