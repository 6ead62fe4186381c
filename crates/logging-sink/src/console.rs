//! crates/logging-sink/src/console.rs
//! Console destinations for rendered records.

use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::line_mode::LineMode;
use crate::record::{ConsoleRecord, Stream};
use crate::sink::MessageSink;

/// Destination for console records.
///
/// Implementations must not panic and must not report failures: a logger
/// call is never allowed to become a failure point for its host. Write
/// errors are dropped.
pub trait Console: Send + Sync {
    /// Writes a single record.
    fn emit(&self, record: &ConsoleRecord);
}

/// Process console: [`Stream::Log`] goes to stdout, [`Stream::Warn`] and
/// [`Stream::Error`] go to stderr.
///
/// Each record is written while holding the stream's lock, so concurrent
/// loggers never interleave within a line.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdConsole {
    line_mode: LineMode,
}

impl StdConsole {
    /// Creates a console that terminates each record with a newline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line_mode: LineMode::WithNewline,
        }
    }

    /// Creates a console with an explicit [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(line_mode: LineMode) -> Self {
        Self { line_mode }
    }
}

impl Console for StdConsole {
    fn emit(&self, record: &ConsoleRecord) {
        let _ = match record.stream {
            Stream::Log => {
                MessageSink::with_line_mode(io::stdout().lock(), self.line_mode).write(record)
            }
            Stream::Warn | Stream::Error => {
                MessageSink::with_line_mode(io::stderr().lock(), self.line_mode).write(record)
            }
        };
    }
}

/// In-memory console that keeps every record it receives.
///
/// Useful for embedding hosts that forward records elsewhere and for tests
/// asserting on what a logger wrote.
///
/// ```
/// use logging_sink::{CaptureConsole, Console, ConsoleRecord, Stream};
///
/// let console = CaptureConsole::new();
/// console.emit(&ConsoleRecord::new(Stream::Warn, "[db]", vec!["slow".into()]));
///
/// assert_eq!(console.count(Stream::Warn), 1);
/// assert_eq!(console.drain().len(), 1);
/// assert!(console.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CaptureConsole {
    records: Mutex<Vec<ConsoleRecord>>,
}

impl CaptureConsole {
    /// Creates an empty capture console.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ConsoleRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of every captured record, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<ConsoleRecord> {
        self.lock().clone()
    }

    /// Removes and returns every captured record.
    pub fn drain(&self) -> Vec<ConsoleRecord> {
        self.lock().drain(..).collect()
    }

    /// Number of captured records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of captured records written to `stream`.
    #[must_use]
    pub fn count(&self, stream: Stream) -> usize {
        self.lock()
            .iter()
            .filter(|record| record.stream == stream)
            .count()
    }

    /// Text renderings of every captured record.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(ConsoleRecord::render_text).collect()
    }
}

impl Console for CaptureConsole {
    fn emit(&self, record: &ConsoleRecord) {
        self.lock().push(record.clone());
    }
}
