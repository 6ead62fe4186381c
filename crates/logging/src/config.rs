//! crates/logging/src/config.rs
//! Threshold, environment and color settings shared by a logger factory.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::io;
use std::str::FromStr;

use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use style::Environment;

use crate::error::ConfigError;
use crate::levels::Level;

/// Whether terminal output carries escape sequences.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout and stderr are both terminals.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }

    /// Resolves the mode to a yes/no answer. Records go to stdout or
    /// stderr by level, so `Auto` colors only when both are terminals.
    #[must_use]
    pub fn enabled(self) -> bool {
        self.resolve(io::stdout().is_terminal(), io::stderr().is_terminal())
    }

    /// Resolves the mode given whether stdout and stderr are terminals.
    #[must_use]
    pub const fn resolve(self, stdout_tty: bool, stderr_tty: bool) -> bool {
        match self {
            Self::Auto => stdout_tty && stderr_tty,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(ConfigError::unknown_color_mode(s)),
        }
    }
}

/// Settings fixed for the lifetime of a logger factory.
///
/// ```
/// use logging::{ColorMode, Level, LogConfig};
///
/// let config = LogConfig::new("warn").expect("known level").with_color(ColorMode::Never);
/// assert_eq!(config.threshold(), Level::Warn);
/// assert!(!config.colors_enabled());
/// assert!(LogConfig::new("loud").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    threshold: Level,
    #[serde(default)]
    environment: Environment,
    #[serde(default)]
    color: ColorMode,
}

impl LogConfig {
    /// Variable holding the threshold name.
    pub const LEVEL_VAR: &'static str = "LOG_LEVEL";
    /// Variable that disables automatic coloring when set to anything non-empty.
    pub const NO_COLOR_VAR: &'static str = "NO_COLOR";

    /// Configuration with the named threshold and default environment and color.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLevel`] for an unrecognised name.
    pub fn new(level_name: &str) -> Result<Self, ConfigError> {
        level_name.parse().map(Self::from_level)
    }

    /// Configuration with the given threshold.
    #[must_use]
    pub fn from_level(threshold: Level) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Reads [`LEVEL_VAR`](Self::LEVEL_VAR) and [`NO_COLOR_VAR`](Self::NO_COLOR_VAR)
    /// from the process environment.
    ///
    /// An unset or empty level means `info`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLevel`] when the level variable names no
    /// level.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Like [`from_env`](Self::from_env) with a caller-supplied lookup.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = match lookup(Self::LEVEL_VAR) {
            Some(raw) if !raw.is_empty() => Self::new(&raw.to_string_lossy())?,
            _ => Self::default(),
        };

        if lookup(Self::NO_COLOR_VAR).is_some_and(|value| !value.is_empty())
            && config.color == ColorMode::Auto
        {
            config.color = ColorMode::Never;
        }

        Ok(config)
    }

    /// Replaces the threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replaces the rendering environment.
    #[must_use]
    pub const fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Replaces the color mode.
    #[must_use]
    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Minimum level that is emitted.
    #[must_use]
    pub const fn threshold(&self) -> Level {
        self.threshold
    }

    /// Rendering environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Color mode as configured.
    #[must_use]
    pub const fn color(&self) -> ColorMode {
        self.color
    }

    /// Color mode resolved against the current stdout.
    #[must_use]
    pub fn colors_enabled(&self) -> bool {
        self.color.enabled()
    }
}
