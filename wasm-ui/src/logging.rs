//! Route `tracing` output to the browser console.
//!
//! Each event is formatted by `tracing-subscriber` into a buffer and sent to
//! `console.error`, `console.warn` or `console.log` according to its level
//! when the writer is dropped.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Which console method an event goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Log,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            _ => ConsoleMethod::Log,
        }
    }
}

/// Buffers one formatted event.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buf: Vec::new(),
        }
    }

    fn message(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let message = self.message();
        if message.is_empty() {
            return;
        }
        match self.method {
            ConsoleMethod::Error => gloo::console::error!(message),
            ConsoleMethod::Warn => gloo::console::warn!(message),
            ConsoleMethod::Log => gloo::console::log!(message),
        }
    }
}

pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::from(*meta.level()))
    }
}

/// Install the console subscriber. Safe to call more than once.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(Level::DEBUG)
        .without_time()
        .try_init();
}
