//! crates/logging-sink/src/record.rs
//! The unit of output handed from a logger to a console.

use std::fmt;

/// Console stream a record is written to.
///
/// Terminals map [`Stream::Log`] to stdout and both [`Stream::Warn`] and
/// [`Stream::Error`] to stderr. Browser consoles dispatch to `console.log`,
/// `console.warn` and `console.error` respectively.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Stream {
    /// Standard output.
    Log,
    /// Warning stream.
    Warn,
    /// Error stream.
    Error,
}

impl Stream {
    /// Returns the console method name associated with the stream.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual weight of a record.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Emphasis {
    /// Rendered as a single line.
    #[default]
    Normal,
    /// Surrounded by blank lines.
    Severe,
}

/// A single console write.
///
/// `format` carries the rendered tag. In terminal mode it already contains
/// any ANSI escape sequences and `css` is `None`; in browser mode it holds a
/// `%c` token followed by the tag, and `css` carries the declarations the
/// console applies to it. `args` are the already-stringified message parts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsoleRecord {
    /// Destination stream.
    pub stream: Stream,
    /// Whether the record is padded with blank lines.
    pub emphasis: Emphasis,
    /// Rendered tag, possibly starting with `%c`.
    pub format: String,
    /// CSS declarations for the `%c` token, browser mode only.
    pub css: Option<String>,
    /// Message parts following the tag.
    pub args: Vec<String>,
}

impl ConsoleRecord {
    /// Creates a normal-emphasis record without CSS.
    pub fn new(stream: Stream, format: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            stream,
            emphasis: Emphasis::Normal,
            format: format.into(),
            css: None,
            args,
        }
    }

    /// Attaches CSS declarations.
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    /// Sets the record's emphasis.
    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    /// Renders the record as a text line: the tag followed by each argument,
    /// separated by single spaces.
    ///
    /// Severe records gain a leading and trailing newline so that, once the
    /// sink appends its own line terminator, the entry sits between blank
    /// lines. CSS is not part of the text rendering.
    ///
    /// ```
    /// use logging_sink::{ConsoleRecord, Emphasis, Stream};
    ///
    /// let record = ConsoleRecord::new(Stream::Log, "[mod]", vec!["a".into(), "b".into()]);
    /// assert_eq!(record.render_text(), "[mod] a b");
    ///
    /// let severe = record.with_emphasis(Emphasis::Severe);
    /// assert_eq!(severe.render_text(), "\n[mod] a b\n");
    /// ```
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut line = String::with_capacity(
            self.format.len() + self.args.iter().map(|a| a.len() + 1).sum::<usize>() + 2,
        );
        if self.emphasis == Emphasis::Severe {
            line.push('\n');
        }
        line.push_str(&self.format);
        for arg in &self.args {
            if !line.is_empty() && !line.ends_with('\n') {
                line.push(' ');
            }
            line.push_str(arg);
        }
        if self.emphasis == Emphasis::Severe {
            line.push('\n');
        }
        line
    }

    /// Renders the record as the console call a browser would receive, e.g.
    /// `console.warn("%c[mod]", "color: red", "late")`.
    #[must_use]
    pub fn render_console_call(&self) -> String {
        let mut call = format!("console.{}({:?}", self.stream, self.format);
        if let Some(css) = &self.css {
            call.push_str(&format!(", {css:?}"));
        }
        for arg in &self.args {
            call.push_str(&format!(", {arg:?}"));
        }
        call.push(')');
        call
    }

    /// Reports whether the rendered text contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.format.contains(needle) || self.args.iter().any(|arg| arg.contains(needle))
    }
}
