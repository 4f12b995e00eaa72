use std::panic::Location;

use eyre::Context;

use crate::{
    fields::Fields,
    format::{format_line, render_fields, LineStyle},
    sinks::{StderrSink, StdoutSink},
    LogSink,
};

const DATED_LONG_PATH: LineStyle = LineStyle {
    date: true,
    long_path: true,
};

const TIMED_SHORT_PATH: LineStyle = LineStyle {
    date: false,
    long_path: false,
};

/// One level's writer: prefix label, metadata detail, and output sink, fixed
/// at construction. Also the building block for composed loggers that add
/// their own levels on top of [`Logger`].
pub struct LevelWriter {
    prefix: &'static str,
    style: LineStyle,
    sink: Box<dyn LogSink>,
}

impl LevelWriter {
    pub fn new(prefix: &'static str, style: LineStyle, sink: Box<dyn LogSink>) -> Self {
        Self {
            prefix,
            style,
            sink,
        }
    }

    pub fn emit(&self, location: &Location<'_>, payload: &str) -> eyre::Result<()> {
        self.sink
            .write_line(&format_line(self.prefix, self.style, location, payload))
    }

    pub fn emit_fatal(&self, location: &Location<'_>, payload: &str) -> eyre::Result<()> {
        self.sink
            .write_line_fatal(&format_line(self.prefix, self.style, location, payload))
    }
}

/// The five-level logger. Stateless per call; independent instances may
/// coexist. See the crate docs for the per-level stream and metadata wiring.
pub struct Logger {
    debug: LevelWriter,
    info: LevelWriter,
    error: LevelWriter,
    trace: LevelWriter,
    fatal: LevelWriter,
}

impl Logger {
    /// Ready-to-use logger wired to stdout and stderr.
    pub fn new() -> Self {
        Builder::new().build()
    }

    pub fn builder() -> Builder {
        Builder::new()
    }

    /// DEBUG: stdout, calendar date, microsecond time, full path and line.
    #[track_caller]
    pub fn debug(&self, fields: &Fields) -> eyre::Result<()> {
        let location = Location::caller();
        let payload = render_fields(fields).context("DEBUG log failed")?;
        self.debug.emit(location, &payload)
    }

    /// INFO: stdout, microsecond time, short path and line.
    #[track_caller]
    pub fn info(&self, fields: &Fields) -> eyre::Result<()> {
        let location = Location::caller();
        let payload = render_fields(fields).context("INFO log failed")?;
        self.info.emit(location, &payload)
    }

    /// ERROR: stderr, calendar date, microsecond time, full path and line.
    #[track_caller]
    pub fn error(&self, fields: &Fields) -> eyre::Result<()> {
        let location = Location::caller();
        let payload = render_fields(fields).context("ERROR log failed")?;
        self.error.emit(location, &payload)
    }

    /// TRACE: stdout, microsecond time, short path and line.
    #[track_caller]
    pub fn trace(&self, fields: &Fields) -> eyre::Result<()> {
        let location = Location::caller();
        let payload = render_fields(fields).context("TRACE log failed")?;
        self.trace.emit(location, &payload)
    }

    /// FATAL: stderr, calendar date, microsecond time, full path and line.
    /// After a successful write the process exits with status 1, so this only
    /// returns on a formatting or write failure (or with a substituted sink
    /// that records instead of exiting).
    #[track_caller]
    pub fn fatal(&self, fields: &Fields) -> eyre::Result<()> {
        let location = Location::caller();
        let payload = render_fields(fields).context("FATAL log failed")?;
        self.fatal.emit_fatal(location, &payload)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a [`Logger`], starting from the standard stream wiring and letting
/// any level's sink be swapped out independently.
pub struct Builder {
    debug: Box<dyn LogSink>,
    info: Box<dyn LogSink>,
    error: Box<dyn LogSink>,
    trace: Box<dyn LogSink>,
    fatal: Box<dyn LogSink>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            debug: Box::new(StdoutSink::new()),
            info: Box::new(StdoutSink::new()),
            error: Box::new(StderrSink::new()),
            trace: Box::new(StdoutSink::new()),
            fatal: Box::new(StderrSink::new()),
        }
    }

    pub fn debug_sink(self, sink: Box<dyn LogSink>) -> Self {
        Self {
            debug: sink,
            ..self
        }
    }

    pub fn info_sink(self, sink: Box<dyn LogSink>) -> Self {
        Self { info: sink, ..self }
    }

    pub fn error_sink(self, sink: Box<dyn LogSink>) -> Self {
        Self {
            error: sink,
            ..self
        }
    }

    pub fn trace_sink(self, sink: Box<dyn LogSink>) -> Self {
        Self {
            trace: sink,
            ..self
        }
    }

    pub fn fatal_sink(self, sink: Box<dyn LogSink>) -> Self {
        Self {
            fatal: sink,
            ..self
        }
    }

    pub fn build(self) -> Logger {
        Logger {
            debug: LevelWriter::new("DEBUG: ", DATED_LONG_PATH, self.debug),
            info: LevelWriter::new("INFO: ", TIMED_SHORT_PATH, self.info),
            error: LevelWriter::new("ERROR: ", DATED_LONG_PATH, self.error),
            trace: LevelWriter::new("TRACE: ", TIMED_SHORT_PATH, self.trace),
            fatal: LevelWriter::new("FATAL: ", DATED_LONG_PATH, self.fatal),
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
