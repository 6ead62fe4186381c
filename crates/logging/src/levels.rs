//! crates/logging/src/levels.rs
//! Ordered severity levels and the threshold gate.

use std::fmt;
use std::str::FromStr;

use logging_sink::Stream;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Severity of a log call, lowest first.
///
/// Ranks are contiguous from 1 (`Silly`) to 7 (`Wtf`); the derived ordering
/// follows the rank.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// Exhaustive tracing noise.
    Silly = 1,
    /// Chatty progress detail.
    Verbose = 2,
    /// Developer diagnostics.
    Debug = 3,
    /// Normal operational messages.
    #[default]
    Info = 4,
    /// Something unexpected but recoverable.
    Warn = 5,
    /// A failure.
    Error = 6,
    /// A failure that should not be possible.
    Wtf = 7,
}

impl Level {
    /// Every level in rank order.
    pub const ALL: [Self; 7] = [
        Self::Silly,
        Self::Verbose,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Wtf,
    ];

    /// Numeric rank, 1 through 7.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Level with the given rank.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::Silly),
            2 => Some(Self::Verbose),
            3 => Some(Self::Debug),
            4 => Some(Self::Info),
            5 => Some(Self::Warn),
            6 => Some(Self::Error),
            7 => Some(Self::Wtf),
            _ => None,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Silly => "silly",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Wtf => "wtf",
        }
    }

    /// Whether a call at this level passes `threshold`.
    #[must_use]
    pub const fn passes(self, threshold: Self) -> bool {
        self.rank() >= threshold.rank()
    }

    /// Console stream records at this level are written to.
    #[must_use]
    pub const fn stream(self) -> Stream {
        match self {
            Self::Warn => Stream::Warn,
            Self::Error | Self::Wtf => Stream::Error,
            Self::Silly | Self::Verbose | Self::Debug | Self::Info => Stream::Log,
        }
    }

    /// Nesting depth used when inspecting values under this threshold.
    ///
    /// The noisier the threshold, the deeper values are expanded; `None`
    /// means unlimited.
    #[must_use]
    pub const fn inspect_depth(self) -> Option<usize> {
        match self {
            Self::Silly => None,
            Self::Verbose => Some(6),
            Self::Debug => Some(4),
            Self::Info => Some(3),
            Self::Warn => Some(2),
            Self::Error | Self::Wtf => Some(1),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::unknown_level(s))
    }
}

/// Rank of the level called `name`.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownLevel`] when `name` is not one of the seven
/// level names.
///
/// ```
/// assert_eq!(logging::rank_of("warn"), Ok(5));
/// assert!(logging::rank_of("loud").is_err());
/// ```
pub fn rank_of(name: &str) -> Result<u8, ConfigError> {
    name.parse::<Level>().map(Level::rank)
}

/// Whether a call at `call` is emitted under `threshold`.
#[must_use]
pub const fn should_log(call: Level, threshold: Level) -> bool {
    call.passes(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_contiguous() {
        for (index, level) in Level::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(level.rank()), index + 1);
            assert_eq!(Level::from_rank(level.rank()), Some(level));
        }
        assert_eq!(Level::from_rank(0), None);
        assert_eq!(Level::from_rank(8), None);
    }

    #[test]
    fn ordering_follows_rank() {
        assert!(Level::Silly < Level::Verbose);
        assert!(Level::Error < Level::Wtf);
        assert_eq!(Level::ALL.iter().max(), Some(&Level::Wtf));
    }

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!("WARN".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("  Debug\n".parse::<Level>(), Ok(Level::Debug));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let error = "trace".parse::<Level>().expect_err("not a level");
        assert!(matches!(error, ConfigError::UnknownLevel { ref name, .. } if name == "trace"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn streams_split_by_severity() {
        assert_eq!(Level::Info.stream(), Stream::Log);
        assert_eq!(Level::Silly.stream(), Stream::Log);
        assert_eq!(Level::Warn.stream(), Stream::Warn);
        assert_eq!(Level::Error.stream(), Stream::Error);
        assert_eq!(Level::Wtf.stream(), Stream::Error);
    }

    #[test]
    fn inspect_depth_shrinks_with_severity() {
        assert_eq!(Level::Silly.inspect_depth(), None);
        assert_eq!(Level::Verbose.inspect_depth(), Some(6));
        assert_eq!(Level::Debug.inspect_depth(), Some(4));
        assert_eq!(Level::Info.inspect_depth(), Some(3));
        assert_eq!(Level::Warn.inspect_depth(), Some(2));
        assert_eq!(Level::Error.inspect_depth(), Some(1));
        assert_eq!(Level::Wtf.inspect_depth(), Some(1));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Level::Verbose).expect("serializes"), "\"verbose\"");
        let level: Level = serde_json::from_str("\"wtf\"").expect("deserializes");
        assert_eq!(level, Level::Wtf);
    }
}
