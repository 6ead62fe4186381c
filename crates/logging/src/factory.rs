//! crates/logging/src/factory.rs
//! Builds tagged loggers that share one configuration.

use std::fmt;
use std::sync::Arc;

use logging_sink::Console;
use style::{DEFAULT_PAD_WIDTH, Styler, TagDescriptor, catalog};

use crate::config::LogConfig;
use crate::error::ConfigError;
use crate::inspect::{Inspect, Inspector};
use crate::logger::{Logger, Shared};

/// Produces [`Logger`]s for a fixed [`LogConfig`].
///
/// The environment and color decision are resolved once, when the factory
/// is built; loggers never look at the process environment again.
///
/// ```
/// use std::sync::Arc;
/// use logging::{ColorMode, LogConfig, LoggerFactory};
/// use logging_sink::CaptureConsole;
///
/// let console = Arc::new(CaptureConsole::new());
/// let factory = LoggerFactory::new(LogConfig::default().with_color(ColorMode::Never))
///     .with_console(console.clone())
///     .with_pad_width(8);
///
/// factory.logger("db").info.call(&[&"connected"]);
/// assert_eq!(console.lines(), vec!["[db]     connected"]);
/// ```
#[derive(Clone)]
pub struct LoggerFactory {
    config: LogConfig,
    styler: Arc<dyn Styler>,
    console: Arc<dyn Console>,
    inspector: Arc<dyn Inspect>,
    descriptor: TagDescriptor,
    pad_width: usize,
}

impl LoggerFactory {
    /// Factory writing to the platform console with the default inspector
    /// and bracketed tags.
    #[must_use]
    pub fn new(config: LogConfig) -> Self {
        let styler: Arc<dyn Styler> = Arc::from(config.environment().styler(config.colors_enabled()));
        Self {
            config,
            styler,
            console: platform_console(),
            inspector: Arc::new(Inspector::new()),
            descriptor: catalog::brackets(),
            pad_width: DEFAULT_PAD_WIDTH,
        }
    }

    /// Factory whose threshold is the level called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLevel`] for an unrecognised name.
    pub fn from_level_name(name: &str) -> Result<Self, ConfigError> {
        LogConfig::new(name).map(Self::new)
    }

    /// Factory configured from `LOG_LEVEL` and `NO_COLOR`.
    ///
    /// # Errors
    ///
    /// See [`LogConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        LogConfig::from_env().map(Self::new)
    }

    /// Replaces the console records are written to.
    #[must_use]
    pub fn with_console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = console;
        self
    }

    /// Replaces the value renderer used by `inspect`.
    #[must_use]
    pub fn with_inspector(mut self, inspector: Arc<dyn Inspect>) -> Self {
        self.inspector = inspector;
        self
    }

    /// Replaces the tag styler chosen from the configured environment.
    #[must_use]
    pub fn with_styler(mut self, styler: Arc<dyn Styler>) -> Self {
        self.styler = styler;
        self
    }

    /// Replaces the descriptor applied by [`logger`](Self::logger).
    #[must_use]
    pub fn with_descriptor(mut self, descriptor: TagDescriptor) -> Self {
        self.descriptor = descriptor;
        self
    }

    /// Replaces the visible width tags are padded to.
    #[must_use]
    pub const fn with_pad_width(mut self, pad_width: usize) -> Self {
        self.pad_width = pad_width;
        self
    }

    /// Configuration the factory was built from.
    #[must_use]
    pub const fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Default tag descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &TagDescriptor {
        &self.descriptor
    }

    /// Logger for `tag` using the factory's descriptor.
    #[must_use]
    pub fn logger(&self, tag: &str) -> Logger {
        self.logger_with(tag, &self.descriptor)
    }

    /// Logger for `tag` using `descriptor`.
    #[must_use]
    pub fn logger_with(&self, tag: &str, descriptor: &TagDescriptor) -> Logger {
        let rendered = self.styler.render_tag(descriptor, tag, self.pad_width);
        Logger::from_shared(Shared {
            tag: tag.to_owned(),
            threshold: self.config.threshold(),
            rendered,
            console: Arc::clone(&self.console),
            inspector: Arc::clone(&self.inspector),
        })
    }
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

impl fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerFactory")
            .field("config", &self.config)
            .field("styler", &self.styler)
            .field("descriptor", &self.descriptor)
            .field("pad_width", &self.pad_width)
            .finish_non_exhaustive()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_console() -> Arc<dyn Console> {
    Arc::new(logging_sink::StdConsole::new())
}

#[cfg(target_arch = "wasm32")]
fn platform_console() -> Arc<dyn Console> {
    Arc::new(logging_sink::WebConsole)
}
