//! Debug sinks
//!
//! A sink receives one line per outgoing request and one line per raw
//! response body. Sinks only observe: they cannot fail a call and their
//! output never feeds back into dispatching.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

/// Write-only observer of requests and raw responses
pub trait DebugSink: Send + Sync + fmt::Debug {
    /// Record one line
    fn record(&self, line: &str);
}

/// Forwards lines to `tracing` at debug level under the `messagebird::debug`
/// target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DebugSink for TracingSink {
    fn record(&self, line: &str) {
        tracing::debug!(target: "messagebird::debug", "{}", line);
    }
}

/// Writes each line, newline terminated, to a [`Write`] implementation
///
/// Write errors are dropped.
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink").finish_non_exhaustive()
    }
}

impl<W: Write + Send> WriterSink<W> {
    /// Create a new [`WriterSink`]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Give back the wrapped writer
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> DebugSink for WriterSink<W> {
    fn record(&self, line: &str) {
        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }
}
