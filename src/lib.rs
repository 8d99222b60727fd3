pub mod buffer_logger;
pub mod configure;
pub mod fields;
pub mod log_id;
pub mod log_macros;
pub mod logger;
pub mod sink;

pub use buffer_logger::BufferLogger;
pub use fields::{append_string, Field};
pub use log_id::{next_log_id, LogIdGen};
pub use sink::{LogFacade, LogSink, MemorySink, Record, Severity};
