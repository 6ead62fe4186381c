//! crates/logging/src/error.rs
//! Errors raised while building a logging configuration.

use thiserror::Error;

/// Comma-separated list of accepted level names, lowest rank first.
pub const VALID_LEVELS: &str = "silly, verbose, debug, info, warn, error, wtf";

/// Comma-separated list of accepted color modes.
pub const VALID_COLOR_MODES: &str = "auto, always, never";

/// Configuration could not be resolved.
///
/// These are only ever returned while a configuration or factory is being
/// built. Once a logger exists, none of its operations fail.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// A level name outside the known set.
    #[error("unknown log level `{name}`; expected one of: {valid}")]
    UnknownLevel {
        /// The rejected name, as given.
        name: String,
        /// Names that would have been accepted.
        valid: &'static str,
    },
    /// A color mode outside `auto`, `always`, `never`.
    #[error("unknown color mode `{name}`; expected one of: {valid}")]
    UnknownColorMode {
        /// The rejected name, as given.
        name: String,
        /// Names that would have been accepted.
        valid: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn unknown_level(name: impl Into<String>) -> Self {
        Self::UnknownLevel {
            name: name.into(),
            valid: VALID_LEVELS,
        }
    }

    pub(crate) fn unknown_color_mode(name: impl Into<String>) -> Self {
        Self::UnknownColorMode {
            name: name.into(),
            valid: VALID_COLOR_MODES,
        }
    }
}
