use std::{io::Write, process, sync::Mutex};

use eyre::Context;

use crate::LogSink;

pub struct StdoutSink {
    handle: std::io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            handle: std::io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) -> eyre::Result<()> {
        // Taking the stream lock keeps each line whole under concurrent calls.
        let mut writer = self.handle.lock();

        writeln!(writer, "{}", line)?;
        writer.flush().context("Can't flush stdout")
    }

    fn write_line_fatal(&self, line: &str) -> eyre::Result<()> {
        self.write_line(line)?;
        process::exit(1);
    }
}

pub struct StderrSink {
    handle: std::io::Stderr,
}

impl StderrSink {
    pub fn new() -> Self {
        Self {
            handle: std::io::stderr(),
        }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for StderrSink {
    fn write_line(&self, line: &str) -> eyre::Result<()> {
        let mut writer = self.handle.lock();

        writeln!(writer, "{}", line)?;
        writer.flush().context("Can't flush stderr")
    }

    fn write_line_fatal(&self, line: &str) -> eyre::Result<()> {
        self.write_line(line)?;
        process::exit(1);
    }
}

/// In-memory sink. Records regular and fatal lines in separate buffers and
/// does not exit the process, so FATAL behavior can be asserted on. Share one
/// behind an `Arc` to read lines back after handing it to a logger.
#[derive(Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
    fatal_lines: Mutex<Vec<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn fatal_lines(&self) -> Vec<String> {
        self.fatal_lines.lock().unwrap().clone()
    }
}

impl LogSink for BufferSink {
    fn write_line(&self, line: &str) -> eyre::Result<()> {
        let mut lines = self.lines.lock().map_err(|e| eyre::eyre!(e.to_string()))?;
        lines.push(line.to_string());
        Ok(())
    }

    fn write_line_fatal(&self, line: &str) -> eyre::Result<()> {
        let mut lines = self
            .fatal_lines
            .lock()
            .map_err(|e| eyre::eyre!(e.to_string()))?;
        lines.push(line.to_string());
        Ok(())
    }
}
