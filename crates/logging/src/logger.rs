//! crates/logging/src/logger.rs
//! Tagged logger instances and their per-level methods.

use std::fmt::{self, Display, Write as _};
use std::sync::Arc;

use logging_sink::{Console, ConsoleRecord, Emphasis};
use serde::Serialize;
use style::RenderedTag;

use crate::inspect::{Inspect, inspect_value};
use crate::levels::Level;

/// Marker placed before the tag of every `wtf` record.
pub const SEVERE_MARKER: &str = "!!! WTF !!!";

/// Placeholder written for an argument whose `Display` impl reports an error.
const UNFORMATTABLE: &str = "[unformattable]";

/// State shared by every method of one logger.
pub(crate) struct Shared {
    pub(crate) tag: String,
    pub(crate) threshold: Level,
    pub(crate) rendered: RenderedTag,
    pub(crate) console: Arc<dyn Console>,
    pub(crate) inspector: Arc<dyn Inspect>,
}

/// One severity level of a [`Logger`].
///
/// Every operation is infallible: gated calls do nothing, console write
/// failures are dropped, and values that cannot be inspected render as a
/// placeholder.
#[derive(Clone)]
pub struct LevelMethod {
    level: Level,
    shared: Arc<Shared>,
}

impl LevelMethod {
    /// Level this method logs at.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Whether calls on this method produce output.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.level.passes(self.shared.threshold)
    }

    /// Writes the arguments, separated by single spaces, after the tag.
    ///
    /// Returns the last argument whether or not anything was written, so a
    /// call can wrap the value it reports on.
    pub fn call<'a>(&self, args: &[&'a dyn Display]) -> Option<&'a dyn Display> {
        if self.enabled() {
            self.write(args.iter().map(|arg| format_arg(*arg)).collect());
        }
        args.last().copied()
    }

    /// Writes `context` (when non-empty) and hands `value` back untouched.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use logging::{LogConfig, LoggerFactory};
    /// use logging_sink::CaptureConsole;
    ///
    /// let console = Arc::new(CaptureConsole::new());
    /// let factory = LoggerFactory::new(LogConfig::default()).with_console(console.clone());
    /// let log = factory.logger("calc");
    ///
    /// let total = log.info.thru(&[&"total is"], 2 + 2);
    /// assert_eq!(total, 4);
    /// assert_eq!(console.len(), 1);
    /// ```
    pub fn thru<T>(&self, context: &[&dyn Display], value: T) -> T {
        if !context.is_empty() && self.enabled() {
            self.write(context.iter().map(|arg| format_arg(*arg)).collect());
        }
        value
    }

    /// Renders `value` with the depth of the logger's threshold and writes
    /// it after `label`.
    ///
    /// `None` stands for a missing value and renders as `undefined`. The
    /// rendering is returned whether or not it was written.
    pub fn inspect<T>(&self, label: Option<&str>, value: Option<&T>) -> String
    where
        T: Serialize + ?Sized,
    {
        let depth = self.shared.threshold.inspect_depth();
        let text = inspect_value(self.shared.inspector.as_ref(), value, depth);
        if self.enabled() {
            let mut args = Vec::with_capacity(2);
            if let Some(label) = label {
                args.push(label.to_owned());
            }
            args.push(text.clone());
            self.write(args);
        }
        text
    }

    fn write(&self, args: Vec<String>) {
        let rendered = &self.shared.rendered;
        let mut record = if self.level == Level::Wtf {
            ConsoleRecord::new(
                self.level.stream(),
                format!("{SEVERE_MARKER} {}", rendered.format),
                args,
            )
            .with_emphasis(Emphasis::Severe)
        } else {
            ConsoleRecord::new(self.level.stream(), rendered.format.clone(), args)
        };
        if let Some(css) = &rendered.css {
            record = record.with_css(css.clone());
        }
        self.shared.console.emit(&record);
    }
}

impl fmt::Debug for LevelMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelMethod")
            .field("level", &self.level)
            .field("tag", &self.shared.tag)
            .field("enabled", &self.enabled())
            .finish()
    }
}

fn format_arg(arg: &dyn Display) -> String {
    let mut text = String::new();
    if write!(text, "{arg}").is_err() {
        return UNFORMATTABLE.to_owned();
    }
    text
}

/// A tagged logger with one method per severity level.
///
/// Created by [`LoggerFactory`](crate::LoggerFactory). Cloning is cheap and
/// clones share the rendered tag and the console.
///
/// ```
/// use std::sync::Arc;
/// use logging::{LogConfig, LoggerFactory, emit};
/// use logging_sink::{CaptureConsole, Stream};
///
/// let console = Arc::new(CaptureConsole::new());
/// let factory = LoggerFactory::new(LogConfig::new("warn").expect("known level"))
///     .with_console(console.clone());
/// let log = factory.logger("mod");
///
/// emit!(log.info, "hidden");
/// emit!(log.warn, "disk", 93, "% full");
///
/// assert_eq!(console.len(), 1);
/// assert_eq!(console.count(Stream::Warn), 1);
/// ```
#[derive(Clone)]
pub struct Logger {
    /// Level 1.
    pub silly: LevelMethod,
    /// Level 2.
    pub verbose: LevelMethod,
    /// Level 3.
    pub debug: LevelMethod,
    /// Level 4.
    pub info: LevelMethod,
    /// Level 5, written to the warning stream.
    pub warn: LevelMethod,
    /// Level 6, written to the error stream.
    pub error: LevelMethod,
    /// Level 7, written to the error stream with the severe marker.
    pub wtf: LevelMethod,
    shared: Arc<Shared>,
}

impl Logger {
    pub(crate) fn from_shared(shared: Shared) -> Self {
        let shared = Arc::new(shared);
        let method = |level| LevelMethod {
            level,
            shared: Arc::clone(&shared),
        };
        Self {
            silly: method(Level::Silly),
            verbose: method(Level::Verbose),
            debug: method(Level::Debug),
            info: method(Level::Info),
            warn: method(Level::Warn),
            error: method(Level::Error),
            wtf: method(Level::Wtf),
            shared,
        }
    }

    /// Bare tag label, before decoration.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.shared.tag
    }

    /// Tag as it appears at the start of every record.
    #[must_use]
    pub fn rendered_tag(&self) -> &RenderedTag {
        &self.shared.rendered
    }

    /// Threshold the logger was created with.
    #[must_use]
    pub fn threshold(&self) -> Level {
        self.shared.threshold
    }

    /// Whether calls at `level` produce output.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.shared.threshold)
    }

    /// Method for `level`.
    #[must_use]
    pub const fn at(&self, level: Level) -> &LevelMethod {
        match level {
            Level::Silly => &self.silly,
            Level::Verbose => &self.verbose,
            Level::Debug => &self.debug,
            Level::Info => &self.info,
            Level::Warn => &self.warn,
            Level::Error => &self.error,
            Level::Wtf => &self.wtf,
        }
    }

    /// [`LevelMethod::inspect`] at `info`.
    pub fn inspect<T>(&self, label: Option<&str>, value: Option<&T>) -> String
    where
        T: Serialize + ?Sized,
    {
        self.info.inspect(label, value)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("tag", &self.shared.tag)
            .field("threshold", &self.shared.threshold)
            .field("rendered", &self.shared.rendered)
            .finish_non_exhaustive()
    }
}

/// Calls a [`LevelMethod`] with any number of `Display` arguments.
///
/// Expands to `method.call(&[&a, &b, ...])` and evaluates to the last
/// argument as an `Option<&dyn Display>`.
///
/// ```
/// use logging::{LogConfig, LoggerFactory, emit};
/// use logging_sink::CaptureConsole;
/// use std::sync::Arc;
///
/// let console = Arc::new(CaptureConsole::new());
/// let log = LoggerFactory::new(LogConfig::default())
///     .with_console(console.clone())
///     .logger("io");
///
/// let last = emit!(log.info, "read", 512, "bytes").map(ToString::to_string);
/// assert_eq!(last.as_deref(), Some("bytes"));
/// assert!(console.lines()[0].ends_with("read 512 bytes"));
/// ```
#[macro_export]
macro_rules! emit {
    ($method:expr $(,)?) => {
        $method.call(&[])
    };
    ($method:expr, $($arg:expr),+ $(,)?) => {
        $method.call(&[$(&$arg as &dyn ::core::fmt::Display),+])
    };
}
