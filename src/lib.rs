//! Small structured, leveled logger.
//!
//! Callers hand a map of field names to scalar values to one of five level
//! methods. The logger renders the fields as `key: value` pairs, prepends the
//! level prefix, a timestamp, and the call site, and writes one line to the
//! level's stream: stdout for DEBUG, INFO, and TRACE, stderr for ERROR and
//! FATAL. FATAL exits the process after writing.
//!
//! ```no_run
//! use fieldlog::{fields, Logger};
//!
//! let logger = Logger::new();
//! logger.info(&fields! { "request state" => "received", "attempt" => 1 })?;
//!
//! if let Err(err) = std::fs::read("config.toml") {
//!     logger.fatal(&fields! { "startup failed" => err.to_string() })?;
//! }
//! # Ok::<(), eyre::Report>(())
//! ```
//!
//! Any level's output can be redirected by swapping its sink through the
//! builder, which is also how tests capture lines:
//!
//! ```
//! use std::sync::Arc;
//! use fieldlog::{fields, BufferSink, Logger};
//!
//! let sink = Arc::new(BufferSink::new());
//! let logger = Logger::builder()
//!     .info_sink(Box::new(Arc::clone(&sink)))
//!     .build();
//!
//! logger.info(&fields! { "k" => "v" })?;
//! assert_eq!(sink.lines().len(), 1);
//! # Ok::<(), eyre::Report>(())
//! ```

mod fields;
mod format;
mod logger;
mod sinks;

pub use fields::{fields_from_json, FieldError, Fields, Value};
pub use format::{render_fields, LineStyle};
pub use logger::{Builder, LevelWriter, Logger};
pub use sinks::{BufferSink, StderrSink, StdoutSink};

/// The capability a level's output destination has to provide. Real sinks
/// write to a stream; tests substitute an in-memory recorder.
pub trait LogSink: Sync + Send {
    /// Write one line and flush it.
    fn write_line(&self, line: &str) -> eyre::Result<()>;

    /// Write one line, flush it, then terminate the process with a non-zero
    /// status. Stream-backed sinks never return from this; recording sinks
    /// return so the call can be asserted on.
    fn write_line_fatal(&self, line: &str) -> eyre::Result<()>;
}

impl<T: LogSink> LogSink for std::sync::Arc<T> {
    fn write_line(&self, line: &str) -> eyre::Result<()> {
        (**self).write_line(line)
    }

    fn write_line_fatal(&self, line: &str) -> eyre::Result<()> {
        (**self).write_line_fatal(line)
    }
}
