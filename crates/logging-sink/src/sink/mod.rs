//! crates/logging-sink/src/sink/mod.rs
//! Writer-backed sink that renders [`ConsoleRecord`](crate::ConsoleRecord)s as text lines.

mod writing;

use std::fmt;

use crate::line_mode::LineMode;

/// Streaming sink that renders console records into an [`std::io::Write`]
/// target.
///
/// The sink owns the underlying writer and a [`LineMode`]. Each call to
/// [`write`](Self::write) renders the record's text form and, by default,
/// terminates it with a newline.
///
/// # Examples
///
/// ```
/// use logging_sink::{ConsoleRecord, LineMode, MessageSink, Stream};
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.write(&ConsoleRecord::new(Stream::Log, "[net]", vec!["ready".into()]))?;
/// assert_eq!(sink.into_inner(), b"[net] ready\n".to_vec());
///
/// let mut sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.write(&ConsoleRecord::new(Stream::Log, "[net]", Vec::new()))?;
/// assert_eq!(sink.into_inner(), b"[net]".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink<W> {
    writer: W,
    line_mode: LineMode,
}

impl<W> MessageSink<W> {
    /// Creates a new sink that appends a newline after each rendered record.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self { writer, line_mode }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for MessageSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}
